//! Dioxus front end for scrollyteller narratives.
//!
//! The binary in `main.rs` launches [`ui::App`] in a desktop webview; the
//! components are exposed here so they can be rendered in tests.

pub mod ui;

pub use ui::App;
