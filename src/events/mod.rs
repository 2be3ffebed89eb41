//! Event handling module for keyboard and mouse events.
//!
//! Handlers inspect the current [`App`](crate::app::App) and translate raw
//! terminal events into [`Action`]s; the app applies them to the rating
//! control.

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::Action;
pub use handler::EventHandler;
