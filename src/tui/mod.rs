//! Terminal rendering adapter.
//!
//! - `widget` - the rating control widget (title, segments, value label)
//! - `interaction` - per-frame hit regions for press, drag and wheel input
//! - `ui` - full-screen layout for the demo application
//! - `help_popup` - shortcut overlay
//! - `theme` - colours

mod help_popup;
pub mod interaction;
pub mod theme;
pub mod ui;
pub mod widget;

pub use widget::{RatingLayout, RatingWidget};
