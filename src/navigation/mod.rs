//! Section navigation and the mobile menu.
//!
//! Which section is visible and whether the mobile menu is open are plain
//! typed state owned by a [`ViewController`]. Every transition is a method
//! call that updates the state and returns the [`ViewEffect`]s a renderer
//! must apply; nothing here reads the page.

mod controller;
mod keys;

pub use controller::{MenuState, SiteState, ViewController, ViewEffect, DEFAULT_SECTION};
pub use keys::{is_activation_key, trap_tab, Key};
