//! Mouse event handling.
//!
//! Presses and wheel events are dispatched through the interaction registry,
//! which the renderer populates every frame. Drags are measured against the
//! registered drag track and only count once a press on the track started
//! them. While the help popup is open the control is covered, so only a
//! release that ends an earlier drag gets through.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::{App, InputMode};

use super::Action;

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(app: &App, mouse: MouseEvent) -> Action {
    let x = mouse.column;
    let y = mouse.row;

    if app.input_mode == InputMode::Help {
        return match mouse.kind {
            MouseEventKind::Up(MouseButton::Left) if app.dragging => Action::Release,
            _ => Action::None,
        };
    }

    match mouse.kind {
        MouseEventKind::ScrollUp => app.interactions.handle_scroll_up(x, y),
        MouseEventKind::ScrollDown => app.interactions.handle_scroll_down(x, y),
        MouseEventKind::Down(MouseButton::Left) => app.interactions.handle_click(x, y),
        MouseEventKind::Drag(MouseButton::Left) if app.dragging => {
            app.interactions.handle_drag(x)
        }
        MouseEventKind::Up(MouseButton::Left) if app.dragging => Action::Release,
        _ => Action::None,
    }
}
