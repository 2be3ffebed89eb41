//! Keyboard event handling by input mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, InputMode};
use crate::domain::AdjustDirection;

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Help => handle_help_mode(key),
    }
}

fn handle_normal_mode(app: &App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('?') => Action::OpenHelp,

        // Step adjustment
        KeyCode::Right | KeyCode::Up | KeyCode::Char('l') | KeyCode::Char('+') => {
            Action::Adjust(AdjustDirection::Increment)
        }
        KeyCode::Left | KeyCode::Down | KeyCode::Char('h') | KeyCode::Char('-') => {
            Action::Adjust(AdjustDirection::Decrement)
        }

        // Jump to either end through the position mapping
        KeyCode::Home => Action::DragTo(0.0),
        KeyCode::End => Action::DragTo(1.0),

        // Segment selection by number
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            if index < app.segment_count() {
                Action::Tap(index)
            } else {
                Action::None
            }
        }

        _ => Action::None,
    }
}

fn handle_help_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::CloseHelp,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn three_step_app() -> App {
        let config = Config {
            domain: Some(vec!["low".into(), "mid".into(), "high".into()]),
            ..Config::default()
        };
        App::new(&config).unwrap()
    }

    #[test]
    fn test_arrows_adjust() {
        let app = three_step_app();
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Right)),
            Action::Adjust(AdjustDirection::Increment)
        );
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('h'))),
            Action::Adjust(AdjustDirection::Decrement)
        );
    }

    #[test]
    fn test_digits_limited_to_domain() {
        let app = three_step_app();
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('3'))), Action::Tap(2));
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('4'))), Action::None);
    }

    #[test]
    fn test_help_mode_swallows_adjust() {
        let mut app = three_step_app();
        app.input_mode = InputMode::Help;
        assert_eq!(handle_key_event(&app, key(KeyCode::Right)), Action::None);
        assert_eq!(handle_key_event(&app, key(KeyCode::Esc)), Action::CloseHelp);
    }

    #[test]
    fn test_ctrl_c_quits_in_any_mode() {
        let mut app = three_step_app();
        app.input_mode = InputMode::Help;
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(&app, event), Action::Quit);
    }
}
