//! A rating control over any finite, ordered domain.
//!
//! The core ([`domain`], [`control`]) maps taps, drag positions and
//! increment/decrement requests onto a selection owned by the caller. The
//! [`tui`] module renders the control with ratatui and turns mouse input into
//! [`events::Action`]s.

pub mod app;
pub mod config;
pub mod control;
pub mod domain;
pub mod error;
pub mod events;
pub mod log;
pub mod rating;
pub mod tui;

pub use control::{FnBinding, RatingControl, SelectionBinding};
pub use domain::{
    AdjustDirection, CaseIterable, Identifiable, OrderedDomain, OrderedSelectableSet, Rateable,
};
pub use error::{DomainError, RatingError};
pub use rating::Rating;
pub use tui::RatingWidget;
