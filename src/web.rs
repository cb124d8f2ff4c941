//! Browser glue: the `web-sys` [`Host`], DOM listeners, and wasm entry points.
//!
//! SYSTEM CONTEXT
//! ==============
//! `boot` runs when the wasm module is instantiated. Once the document is
//! parsed it reads the optional inline config, installs the console logger,
//! starts a [`PageController`] against a [`BrowserHost`], attaches listeners
//! for whatever the controller bound, and publishes the debug functions on
//! `window.CRL`. `teardown` reverses all of it.
//!
//! Controller and host share one `Runtime` behind `Rc`; every callback holds
//! only a `Weak` to it, so dropping the page frees everything. DOM failures
//! are logged and otherwise ignored.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo_timers::callback::{Interval, Timeout};
use js_sys::{Date, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, EventTarget, HtmlElement, MouseEvent, NodeList, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Storage, Window,
};

use crate::clock::LocalTime;
use crate::config::{CONFIG_ELEMENT_ID, PageConfig};
use crate::consts::{ANCHOR_SELECTOR, INTERACTIVE_SELECTOR};
use crate::controller::{Bindings, PageController};
use crate::error::PageError;
use crate::event::{Event, Propagation};
use crate::host::{Host, Node};
use crate::theme::Theme;
use crate::timer::{TimerId, TimerKind};

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Module start: initialize now, or on `DOMContentLoaded` while still parsing.
#[wasm_bindgen(start)]
pub fn boot() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let document = web_sys::window().and_then(|w| w.document()).ok_or_else(|| to_js(&PageError::NoDocument))?;

    if !is_loading(&document) {
        return start().map_err(|err| to_js(&err));
    }
    let ready = Closure::once_into_js(move || {
        if let Err(err) = start() {
            web_sys::console::error_1(&to_js(&err));
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", ready.unchecked_ref())
}

/// Cancel timers, detach listeners, and remove the debug namespace.
#[wasm_bindgen]
pub fn teardown() {
    match PAGE.with(|page| page.try_borrow_mut().map(|mut slot| slot.take())) {
        Ok(Some(page)) => page.unmount(),
        Ok(None) => log::debug!("teardown: page not mounted"),
        Err(_) => log::warn!("teardown: page busy"),
    }
}

fn start() -> Result<(), PageError> {
    let window = web_sys::window().ok_or(PageError::NoDocument)?;
    let document = window.document().ok_or(PageError::NoDocument)?;
    let config = read_config(&document)?;

    if console_log::init_with_level(config.level()?).is_err() {
        log::debug!("console logger already installed");
    }

    PAGE.with(|slot| {
        let mut slot = slot.try_borrow_mut().map_err(|_| PageError::AlreadyStarted)?;
        if slot.is_some() {
            return Err(PageError::AlreadyStarted);
        }
        *slot = Some(Page::mount(window, document, config)?);
        Ok(())
    })
}

fn read_config(document: &Document) -> Result<PageConfig, PageError> {
    match document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) {
        Some(raw) if !raw.trim().is_empty() => PageConfig::from_json(&raw),
        _ => Ok(PageConfig::default()),
    }
}

fn is_loading(document: &Document) -> bool {
    Reflect::get(document, &JsValue::from_str("readyState"))
        .map(|state| state.as_string().as_deref() == Some("loading"))
        .unwrap_or(false)
}

fn to_js(err: &PageError) -> JsValue {
    JsValue::from_str(&format!("{}: {err}", err.error_code()))
}

fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Log a failed DOM call and continue.
fn warn_on_err<T>(result: Result<T, JsValue>, what: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{what} failed: {}", js_message(&err));
            None
        }
    }
}

// =============================================================================
// RUNTIME
// =============================================================================

struct Runtime {
    controller: RefCell<PageController>,
    host: RefCell<BrowserHost>,
}

impl Runtime {
    fn dispatch(&self, event: Event) -> Propagation {
        self.with(|controller, host| controller.handle(host, event)).unwrap_or_default()
    }

    fn with<R>(&self, f: impl FnOnce(&mut PageController, &mut BrowserHost) -> R) -> Option<R> {
        let (Ok(mut controller), Ok(mut host)) = (self.controller.try_borrow_mut(), self.host.try_borrow_mut())
        else {
            log::warn!("re-entrant page callback dropped");
            return None;
        };
        Some(f(&mut *controller, &mut *host))
    }
}

fn fire(runtime: &Weak<Runtime>, event: Event) -> Propagation {
    runtime.upgrade().map(|rt| rt.dispatch(event)).unwrap_or_default()
}

struct Page {
    runtime: Rc<Runtime>,
    listeners: Vec<Listener>,
    debug: DebugSurface,
}

impl Page {
    fn mount(window: Window, document: Document, config: PageConfig) -> Result<Self, PageError> {
        let namespace = config.debug_namespace.clone();
        let runtime = Rc::new_cyclic(|weak| Runtime {
            host: RefCell::new(BrowserHost::new(window.clone(), document.clone(), &config, weak.clone())),
            controller: RefCell::new(PageController::new(config)),
        });

        let bindings = runtime
            .with(|controller, host| controller.start(host))
            .ok_or(PageError::AlreadyStarted)??;
        let listeners = bind_listeners(&runtime, &window, &document, bindings);
        log::debug!("attached {} listeners", listeners.len());
        let debug = DebugSurface::install(&runtime, window, namespace);

        Ok(Self { runtime, listeners, debug })
    }

    fn unmount(self) {
        self.runtime.with(|controller, host| controller.teardown(host));
        drop(self.listeners);
        drop(self.debug);
    }
}

// =============================================================================
// LISTENERS
// =============================================================================

/// An attached DOM listener, detached on drop.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl Listener {
    /// Forward `kind` events on `target` to the controller. `to_event` picks
    /// the controller event, or `None` to ignore the DOM event.
    fn attach(
        runtime: &Rc<Runtime>,
        target: &EventTarget,
        kind: &'static str,
        to_event: impl Fn(&web_sys::Event) -> Option<Event> + 'static,
    ) -> Option<Self> {
        let runtime = Rc::downgrade(runtime);
        let callback = Closure::wrap(Box::new(move |dom_event: web_sys::Event| {
            if let Some(event) = to_event(&dom_event)
                && fire(&runtime, event) == Propagation::PreventDefault
            {
                dom_event.prevent_default();
            }
        }) as Box<dyn FnMut(web_sys::Event)>);

        warn_on_err(
            target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref()),
            "add listener",
        )?;
        Some(Self { target: target.clone(), kind, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        warn_on_err(
            self.target.remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref()),
            "remove listener",
        );
    }
}

fn node_list(list: Result<NodeList, JsValue>, what: &str) -> Vec<Element> {
    let Some(list) = warn_on_err(list, what) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

fn bind_listeners(runtime: &Rc<Runtime>, window: &Window, document: &Document, bindings: Bindings) -> Vec<Listener> {
    let mut listeners = Vec::new();
    let host = runtime.host.borrow();

    if bindings.theme_toggle
        && let Some(toggle) = host.element(&Node::ThemeToggle)
    {
        listeners.extend(Listener::attach(runtime, &toggle, "click", |_| Some(Event::ThemeToggleClicked)));
    }

    if bindings.mobile_menu
        && let (Some(button), Some(menu)) = (host.element(&Node::MenuButton), host.element(&Node::Menu))
    {
        listeners.extend(Listener::attach(runtime, &button, "click", |_| Some(Event::MenuButtonClicked)));
        for link in node_list(menu.query_selector_all("a"), "select menu links") {
            listeners.extend(Listener::attach(runtime, &link, "click", |_| Some(Event::MenuLinkClicked)));
        }
    }

    if bindings.scroll {
        listeners.extend(Listener::attach(runtime, window, "scroll", |_| Some(Event::Scrolled)));
    }

    if bindings.cursor {
        listeners.extend(Listener::attach(runtime, window, "mousemove", |event| {
            event.dyn_ref::<MouseEvent>().map(|mouse| Event::PointerMoved {
                x: f64::from(mouse.client_x()),
                y: f64::from(mouse.client_y()),
            })
        }));
        for el in node_list(document.query_selector_all(INTERACTIVE_SELECTOR), "select interactive elements") {
            listeners.extend(Listener::attach(runtime, &el, "mouseover", |_| Some(Event::HoverEntered)));
            listeners.extend(Listener::attach(runtime, &el, "mouseout", |_| Some(Event::HoverExited)));
        }
    }

    for anchor in node_list(document.query_selector_all(ANCHOR_SELECTOR), "select anchors") {
        let link = anchor.clone();
        listeners.extend(Listener::attach(runtime, &anchor, "click", move |_| {
            link.get_attribute("href").map(|href| Event::AnchorActivated { href })
        }));
    }

    listeners
}

// =============================================================================
// DEBUG SURFACE
// =============================================================================

/// `window.<namespace> = { setTheme, updateTime, toggleTheme }`.
struct DebugSurface {
    window: Window,
    namespace: String,
    _callbacks: (Closure<dyn FnMut(JsValue)>, Closure<dyn FnMut()>, Closure<dyn FnMut()>),
}

impl DebugSurface {
    fn install(runtime: &Rc<Runtime>, window: Window, namespace: String) -> Self {
        let rt = Rc::downgrade(runtime);
        let set_theme = Closure::wrap(Box::new(move |value: JsValue| {
            let Some(name) = value.as_string() else {
                log::warn!("setTheme expects a string");
                return;
            };
            match name.parse::<Theme>() {
                Ok(theme) => {
                    if let Some(rt) = rt.upgrade() {
                        rt.with(|controller, host| controller.set_theme(host, theme));
                    }
                }
                Err(err) => log::warn!("setTheme: {err}"),
            }
        }) as Box<dyn FnMut(JsValue)>);

        let rt = Rc::downgrade(runtime);
        let update_time = Closure::wrap(Box::new(move || {
            if let Some(rt) = rt.upgrade() {
                rt.with(|_, host| PageController::update_time(host));
            }
        }) as Box<dyn FnMut()>);

        let rt = Rc::downgrade(runtime);
        let toggle_theme = Closure::wrap(Box::new(move || {
            if let Some(rt) = rt.upgrade() {
                rt.with(|controller, host| controller.toggle_theme(host));
            }
        }) as Box<dyn FnMut()>);

        let surface = Object::new();
        let entries: [(&str, &JsValue); 3] = [
            ("setTheme", set_theme.as_ref()),
            ("updateTime", update_time.as_ref()),
            ("toggleTheme", toggle_theme.as_ref()),
        ];
        for (name, callback) in entries {
            warn_on_err(Reflect::set(&surface, &JsValue::from_str(name), callback), "publish debug function");
        }
        warn_on_err(Reflect::set(&window, &JsValue::from_str(&namespace), &surface), "publish debug namespace");

        Self { window, namespace, _callbacks: (set_theme, update_time, toggle_theme) }
    }
}

impl Drop for DebugSurface {
    fn drop(&mut self) {
        warn_on_err(
            Reflect::delete_property(&self.window, &JsValue::from_str(&self.namespace)),
            "remove debug namespace",
        );
    }
}

// =============================================================================
// HOST
// =============================================================================

/// [`Host`] over the live document. Fixed nodes are looked up once.
struct BrowserHost {
    window: Window,
    document: Document,
    nodes: HashMap<Node, Element>,
    runtime: Weak<Runtime>,
    next_timer: u64,
    intervals: HashMap<TimerId, Interval>,
    /// At most one pending one-shot per kind; a new one replaces the old.
    timeouts: HashMap<TimerKind, (TimerId, Timeout)>,
}

impl BrowserHost {
    fn new(window: Window, document: Document, config: &PageConfig, runtime: Weak<Runtime>) -> Self {
        let nodes = resolve_nodes(&document, config);
        Self {
            window,
            document,
            nodes,
            runtime,
            next_timer: 0,
            intervals: HashMap::new(),
            timeouts: HashMap::new(),
        }
    }

    fn element(&self, node: &Node) -> Option<Element> {
        match node {
            Node::Fragment(id) => self.document.get_element_by_id(id),
            fixed => self.nodes.get(fixed).cloned(),
        }
    }

    fn storage(&self) -> Option<Storage> {
        warn_on_err(self.window.local_storage(), "open localStorage").flatten()
    }

    fn next_timer_id(&mut self) -> TimerId {
        self.next_timer += 1;
        TimerId(self.next_timer)
    }
}

fn resolve_nodes(document: &Document, config: &PageConfig) -> HashMap<Node, Element> {
    let ids = &config.elements;
    let mut nodes: HashMap<Node, Element> = [
        (Node::ThemeToggle, &ids.theme_toggle),
        (Node::MenuButton, &ids.mobile_menu_button),
        (Node::Menu, &ids.mobile_menu),
        (Node::NavWrapper, &ids.nav_wrapper),
        (Node::SignatureLogo, &ids.signature_logo),
        (Node::Title, &ids.toggling_title),
        (Node::Time, &ids.current_time),
        (Node::Year, &ids.current_year),
        (Node::CursorDot, &ids.cursor_dot),
        (Node::CursorOutline, &ids.cursor_outline),
    ]
    .into_iter()
    .filter_map(|(node, id)| document.get_element_by_id(id).map(|el| (node, el)))
    .collect();

    if let Some(root) = document.document_element() {
        nodes.insert(Node::Root, root);
    }
    if let Some(hero) = warn_on_err(document.query_selector(&config.hero_selector), "select hero").flatten() {
        nodes.insert(Node::Hero, hero);
    }
    let icon = nodes.get(&Node::MenuButton).map(|button| button.query_selector("i"));
    if let Some(icon) = icon.and_then(|found| warn_on_err(found, "select menu icon")).flatten() {
        nodes.insert(Node::MenuIcon, icon);
    }
    nodes
}

/// Short zone name (`EST`, `GMT+2`) for `date` in the user's locale settings.
fn zone_name(date: &Date) -> String {
    let options = Object::new();
    warn_on_err(
        Reflect::set(&options, &JsValue::from_str("timeZoneName"), &JsValue::from_str("short")),
        "build date options",
    );
    let rendered = String::from(date.to_locale_string("en-US", &options));
    rendered.split_whitespace().next_back().unwrap_or_default().to_owned()
}

impl Host for BrowserHost {
    fn has_element(&self, node: &Node) -> bool {
        self.element(node).is_some()
    }

    fn attribute(&self, node: &Node, name: &str) -> Option<String> {
        self.element(node)?.get_attribute(name)
    }

    fn has_class(&self, node: &Node, class: &str) -> bool {
        self.element(node).is_some_and(|el| el.class_list().contains(class))
    }

    fn hero_bottom(&self) -> Option<f64> {
        self.nodes.get(&Node::Hero).map(|hero| hero.get_bounding_client_rect().bottom())
    }

    fn scroll_y(&self) -> f64 {
        warn_on_err(self.window.scroll_y(), "read scroll offset").unwrap_or_default()
    }

    fn set_text(&mut self, node: &Node, text: &str) {
        if let Some(el) = self.element(node) {
            el.set_text_content(Some(text));
        }
    }

    fn set_style(&mut self, node: &Node, property: &str, value: &str) {
        if let Some(el) = self.element(node)
            && let Some(html) = el.dyn_ref::<HtmlElement>()
        {
            warn_on_err(html.style().set_property(property, value), "set style");
        }
    }

    fn set_attribute(&mut self, node: &Node, name: &str, value: &str) {
        if let Some(el) = self.element(node) {
            warn_on_err(el.set_attribute(name, value), "set attribute");
        }
    }

    fn set_inner_html(&mut self, node: &Node, html: &str) {
        if let Some(el) = self.element(node) {
            el.set_inner_html(html);
        }
    }

    fn set_class_name(&mut self, node: &Node, class_name: &str) {
        if let Some(el) = self.element(node) {
            el.set_class_name(class_name);
        }
    }

    fn set_class(&mut self, node: &Node, class: &str, present: bool) {
        if let Some(el) = self.element(node) {
            warn_on_err(el.class_list().toggle_with_force(class, present), "toggle class");
        }
    }

    fn scroll_into_view(&mut self, node: &Node) {
        if let Some(el) = self.element(node) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }

    fn storage_get(&self, key: &str) -> Option<String> {
        warn_on_err(self.storage()?.get_item(key), "read localStorage").flatten()
    }

    fn storage_set(&mut self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            warn_on_err(storage.set_item(key, value), "write localStorage");
        }
    }

    fn now(&self) -> LocalTime {
        let date = Date::new_0();
        LocalTime {
            year: i32::try_from(date.get_full_year()).unwrap_or_default(),
            hour: date.get_hours(),
            minute: date.get_minutes(),
            second: date.get_seconds(),
            zone: zone_name(&date),
        }
    }

    fn start_interval(&mut self, kind: TimerKind, period_ms: u32) -> TimerId {
        let id = self.next_timer_id();
        let runtime = self.runtime.clone();
        let interval = Interval::new(period_ms, move || {
            fire(&runtime, Event::Timer(kind));
        });
        self.intervals.insert(id, interval);
        id
    }

    fn start_timeout(&mut self, kind: TimerKind, delay_ms: u32) -> TimerId {
        let id = self.next_timer_id();
        let runtime = self.runtime.clone();
        let timeout = Timeout::new(delay_ms, move || {
            fire(&runtime, Event::Timer(kind));
        });
        self.timeouts.insert(kind, (id, timeout));
        id
    }

    fn cancel_timer(&mut self, id: TimerId) {
        if self.intervals.remove(&id).is_none() {
            self.timeouts.retain(|_, (pending, _)| *pending != id);
        }
    }
}
