//! Shared constants for the page controller.

// ── Timers ──────────────────────────────────────────────────────

/// Clock re-render period.
pub const CLOCK_TICK_MS: u32 = 1000;

/// Period between title rotations.
pub const TITLE_ROTATE_MS: u32 = 3000;

/// Delay between fading the title out and swapping its text.
pub const TITLE_FADE_MS: u32 = 300;

/// Inline transition applied to the rotating title so the fade is animated.
pub const TITLE_TRANSITION: &str = "opacity 0.3s ease-in-out";

// ── Navigation ──────────────────────────────────────────────────

/// Scroll offset (CSS pixels) under which the nav stays visible regardless of the hero.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 200.0;

// ── Cursor ──────────────────────────────────────────────────────

/// Outline marker scale while hovering an interactive element.
pub const OUTLINE_HOVER_SCALE: f64 = 1.5;

/// Dot marker scale while hovering an interactive element.
pub const DOT_HOVER_SCALE: f64 = 0.7;

/// Outline border color. Written on every hover transition and never varied.
pub const CURSOR_BORDER_COLOR: &str = "#ffffff";

/// Elements that trigger the cursor hover effect.
pub const INTERACTIVE_SELECTOR: &str = "a, button, .interactive";

// ── Theme ───────────────────────────────────────────────────────

/// Root element attribute carrying the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

pub const SUN_ICON_HTML: &str = r#"<i class="fas fa-sun"></i>"#;
pub const MOON_ICON_HTML: &str = r#"<i class="fas fa-moon"></i>"#;

// ── Menu ────────────────────────────────────────────────────────

/// Class whose presence hides the mobile menu container.
pub const MENU_HIDDEN_CLASS: &str = "hidden";

pub const MENU_CLOSED_ICON_CLASS: &str = "fas fa-bars";
pub const MENU_OPEN_ICON_CLASS: &str = "fas fa-times";

// ── Anchors ─────────────────────────────────────────────────────

/// Links intercepted for smooth in-page scrolling.
pub const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;
