//! Dioxus Scroll Bumper
//!
//! A decorative horizontal divider for Dioxus apps: two dashed line segments
//! flanking an optional centered label, overlaid with a progress fill that
//! tracks how far the divider has traveled through the viewport. The dashes
//! and label fade in once the element is at least 20% visible; all animation
//! is driven by CSS transitions, the component only supplies the state.
//!
//! ```rust,no_run
//! use dioxus::prelude::*;
//! use dioxus_scroll_bumper::ScrollBumper;
//!
//! fn app() -> Element {
//!     rsx! {
//!         ScrollBumper { id: "intermission", title: "Chapter One" }
//!     }
//! }
//! ```
//!
//! On non-web renderers the divider renders in its resting state and does not
//! animate; the viewport listeners are only wired up on `wasm32`.

mod bumper;
#[cfg(target_arch = "wasm32")]
mod listeners;
mod progress;

pub use bumper::{ScrollBumper, ScrollBumperProps};
