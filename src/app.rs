//! Application state for the interactive rating demo.
//!
//! The app owns the selection; the rating control is rebuilt over it for
//! every action, so the control itself holds no state between events.

use ratatui::style::Color;

use crate::config::Config;
use crate::control::RatingControl;
use crate::domain::{OrderedDomain, OrderedSelectableSet};
use crate::error::Result;
use crate::events::Action;
use crate::log;
use crate::tui::interaction::InteractionRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal, // Rating the value
    Help,   // Help popup showing all hotkeys
}

#[derive(Debug)]
pub struct App {
    pub title: String,
    pub domain: OrderedDomain<String>,
    pub selection: String,
    pub filled_color: Color,
    pub empty_color: Color,
    pub input_mode: InputMode,
    /// A segment press started a drag that has not been released yet
    pub dragging: bool,
    pub should_quit: bool,
    /// Interactive regions, rebuilt every render
    pub interactions: InteractionRegistry,
}

impl App {
    /// Build the app from configuration, resolving the initial selection
    /// against the configured domain.
    pub fn new(config: &Config) -> Result<Self> {
        let domain = config.domain()?;
        let selection = match config.initial.as_deref() {
            Some(label) => domain.resolve(label)?.clone(),
            None => domain.first().clone(),
        };

        Ok(Self {
            title: config.title().to_string(),
            domain,
            selection,
            filled_color: config.filled_color(),
            empty_color: config.empty_color(),
            input_mode: InputMode::Normal,
            dragging: false,
            should_quit: false,
            interactions: InteractionRegistry::new(),
        })
    }

    /// Rating control bound to this app's selection.
    pub fn control(&mut self) -> RatingControl<'_, OrderedDomain<String>, &mut String> {
        RatingControl::new(&self.domain, &mut self.selection)
    }

    pub fn segment_count(&self) -> usize {
        self.domain.len()
    }

    pub fn selected_index(&self) -> usize {
        self.domain.index_of(&self.selection)
    }

    /// Apply an action to the app state
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::OpenHelp => self.input_mode = InputMode::Help,
            Action::CloseHelp => self.input_mode = InputMode::Normal,
            Action::Tap(index) => self.select_index(index),
            Action::Press(index) => {
                self.select_index(index);
                self.dragging = true;
            }
            Action::PressAt(percentage) => {
                self.control().select_from_position(percentage);
                self.dragging = true;
            }
            Action::DragTo(percentage) => self.control().select_from_position(percentage),
            Action::Release => self.dragging = false,
            Action::Adjust(direction) => {
                log::log_event(&format!("adjust {:?}", direction));
                self.control().adjust(direction);
            }
            Action::None => {}
        }
    }

    fn select_index(&mut self, index: usize) {
        if let Some(element) = self.domain.element_at(index).cloned() {
            self.control().select(element);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AdjustDirection::{Decrement, Increment};
    use crate::error::{DomainError, RatingError};

    fn app() -> App {
        App::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_defaults_to_first_element() {
        let app = app();
        assert_eq!(app.selection, "One");
        assert_eq!(app.title, "Rating");
        assert_eq!(app.segment_count(), 5);
    }

    #[test]
    fn test_initial_selection_resolved() {
        let config = Config {
            initial: Some("four".into()),
            ..Config::default()
        };
        let app = App::new(&config).unwrap();
        assert_eq!(app.selection, "Four");
        assert_eq!(app.selected_index(), 3);
    }

    #[test]
    fn test_unknown_initial_is_rejected() {
        let config = Config {
            initial: Some("seven".into()),
            ..Config::default()
        };
        assert!(matches!(
            App::new(&config),
            Err(RatingError::Domain(DomainError::UnknownElement(_)))
        ));
    }

    #[test]
    fn test_adjust_walks_and_clamps() {
        let mut app = app();
        for _ in 0..6 {
            app.apply(Action::Adjust(Increment));
        }
        assert_eq!(app.selection, "Five");

        app.apply(Action::Adjust(Decrement));
        assert_eq!(app.selection, "Four");
    }

    #[test]
    fn test_press_drag_release() {
        let mut app = app();
        app.apply(Action::Press(1));
        assert!(app.dragging);
        assert_eq!(app.selection, "Two");

        app.apply(Action::DragTo(0.5));
        assert_eq!(app.selection, "Three");
        app.apply(Action::DragTo(3.0));
        assert_eq!(app.selection, "Five");

        app.apply(Action::Release);
        assert!(!app.dragging);
    }

    #[test]
    fn test_press_at_position_starts_drag() {
        let mut app = app();
        app.apply(Action::PressAt(0.79));
        assert!(app.dragging);
        assert_eq!(app.selection, "Four");
    }

    #[test]
    fn test_tap_out_of_range_ignored() {
        let mut app = app();
        app.apply(Action::Tap(2));
        app.apply(Action::Tap(9));
        assert_eq!(app.selection, "Three");
        assert!(!app.dragging);
    }

    #[test]
    fn test_help_and_quit() {
        let mut app = app();
        app.apply(Action::OpenHelp);
        assert_eq!(app.input_mode, InputMode::Help);
        app.apply(Action::CloseHelp);
        assert_eq!(app.input_mode, InputMode::Normal);
        app.apply(Action::Quit);
        assert!(app.should_quit);
    }
}
