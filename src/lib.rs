//! Client-side controller for the Cognitive Robotics Lab website.
//!
//! Compiled to WebAssembly, this crate wires the static page's interactive
//! behavior: theme switching, the mobile menu, the rotating hero title, the
//! live clock, the custom cursor, scroll-driven navbar visibility, and smooth
//! anchor scrolling. The feature logic is browser-free and runs against the
//! [`host::Host`] capability; the `browser` feature adds the `web-sys` host and
//! the wasm entry points.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | [`controller::PageController`]: feature init, event dispatch, teardown |
//! | [`event`] | Events delivered to the controller |
//! | [`host`] | The [`host::Host`] capability trait and element addressing |
//! | [`memory`] | In-memory host with a virtual clock |
//! | [`timer`] | Timer handles and the virtual-time scheduler |
//! | [`theme`] | Dark/light theme with persisted preference |
//! | [`clock`] | Live time display and copyright year |
//! | [`title`] | Rotating hero title |
//! | [`menu`] | Mobile menu open/close |
//! | [`nav`] | Navbar visibility on scroll |
//! | [`cursor`] | Custom cursor markers |
//! | [`anchor`] | Smooth scrolling for in-page links |
//! | [`config`] | Page configuration |
//! | [`error`] | Crate error type |
//! | [`consts`] | Timings, thresholds, and markup constants |

pub mod anchor;
pub mod clock;
pub mod config;
pub mod consts;
pub mod controller;
pub mod cursor;
pub mod error;
pub mod event;
pub mod host;
pub mod memory;
pub mod menu;
pub mod nav;
pub mod theme;
pub mod timer;
pub mod title;

#[cfg(feature = "browser")]
pub mod web;
