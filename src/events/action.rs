//! Action enum for decoupling input handling from state changes.
//!
//! Every input event (key, mouse press, drag, wheel) is normalized into one
//! of these before it reaches the rating control.

use crate::domain::AdjustDirection;

/// Actions that can be dispatched from event handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // === Application ===
    /// Quit the application
    Quit,
    /// Open help popup
    OpenHelp,
    /// Close help popup
    CloseHelp,

    // === Selection ===
    /// Select the segment at index (keyboard shortcut)
    Tap(usize),
    /// Pointer pressed on the segment at index; selects it and starts a drag
    Press(usize),
    /// Pointer pressed elsewhere on the segment row, at a normalized
    /// horizontal position; selects from it and starts a drag
    PressAt(f64),
    /// Pointer dragged to a normalized horizontal position
    DragTo(f64),
    /// Pointer released, ends any drag
    Release,
    /// Step the selection one element
    Adjust(AdjustDirection),

    /// No action
    None,
}
