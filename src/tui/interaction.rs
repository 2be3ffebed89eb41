//! Mouse interactivity for the rating control.
//!
//! The renderer registers the control's interactive regions every frame:
//! one clickable region per segment, a scrollable region covering the whole
//! control, and a drag track spanning the segment row. Mouse events are then
//! routed through the registry instead of re-deriving layout in the handler.
//!
//! # Example
//!
//! ```ignore
//! registry.clear();
//! registry.register_segment(0, ClickRegion::new(x, y, width, 1));
//! registry.set_drag_track(ClickRegion::new(x, y, track_width, 1));
//!
//! let action = registry.handle_click(column, row);
//! ```

use ratatui::layout::Rect;

use crate::domain::AdjustDirection;
use crate::events::Action;

/// Rectangular screen area in terminal cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point is within this region
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && u32::from(x) < u32::from(self.x) + u32::from(self.width)
            && u32::from(y) < u32::from(self.y) + u32::from(self.height)
    }

    /// Normalized horizontal position of the centre of column `x`.
    ///
    /// Columns outside the region produce values below 0 or at/above 1.
    pub fn horizontal_fraction(&self, x: u16) -> f64 {
        if self.width == 0 {
            return 0.0;
        }
        (f64::from(x) - f64::from(self.x) + 0.5) / f64::from(self.width)
    }
}

impl From<Rect> for ClickRegion {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// An interactive region that can respond to mouse events.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Identifier for this region (for debugging/logging)
    pub id: &'static str,

    /// The bounds of this interactive region
    pub bounds: ClickRegion,

    /// Action to dispatch on left press (None = not clickable)
    pub on_click: Option<Action>,

    /// Action to dispatch on scroll up (None = not scrollable)
    pub on_scroll_up: Option<Action>,

    /// Action to dispatch on scroll down (None = not scrollable)
    pub on_scroll_down: Option<Action>,

    /// Priority for overlapping regions (higher = checked first)
    pub priority: i32,
}

impl InteractiveRegion {
    /// Create a new clickable region
    pub fn clickable(id: &'static str, bounds: ClickRegion, action: Action) -> Self {
        Self {
            id,
            bounds,
            on_click: Some(action),
            on_scroll_up: None,
            on_scroll_down: None,
            priority: 0,
        }
    }

    /// Create a new scrollable region
    pub fn scrollable(
        id: &'static str,
        bounds: ClickRegion,
        scroll_up: Action,
        scroll_down: Action,
    ) -> Self {
        Self {
            id,
            bounds,
            on_click: None,
            on_scroll_up: Some(scroll_up),
            on_scroll_down: Some(scroll_down),
            priority: 0,
        }
    }

    /// Set the priority (for builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
    drag_track: Option<ClickRegion>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
        self.drag_track = None;
    }

    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    /// Register the press target for the segment at `index`
    pub fn register_segment(&mut self, index: usize, bounds: ClickRegion) {
        self.register(
            InteractiveRegion::clickable("segment", bounds, Action::Press(index)).with_priority(1),
        );
    }

    /// Register the whole control as a wheel target mapped to adjustment
    pub fn register_adjustable(&mut self, bounds: ClickRegion) {
        self.register(InteractiveRegion::scrollable(
            "rating_control",
            bounds,
            Action::Adjust(AdjustDirection::Increment),
            Action::Adjust(AdjustDirection::Decrement),
        ));
    }

    /// Set the row that drag positions are measured against
    pub fn set_drag_track(&mut self, bounds: ClickRegion) {
        self.drag_track = Some(bounds);
    }

    pub fn drag_track(&self) -> Option<ClickRegion> {
        self.drag_track
    }

    /// Find the action for a press at (x, y)
    ///
    /// Returns the action from the highest-priority region that contains the
    /// point and has a click handler. A press on the drag track that hits no
    /// segment (the gaps between them) maps to its position instead.
    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        match self.best_match(x, y, |r| r.on_click.as_ref()) {
            Action::None => match self.drag_track {
                Some(track) if track.contains(x, y) => {
                    Action::PressAt(track.horizontal_fraction(x))
                }
                _ => Action::None,
            },
            action => action,
        }
    }

    pub fn handle_scroll_up(&self, x: u16, y: u16) -> Action {
        self.best_match(x, y, |r| r.on_scroll_up.as_ref())
    }

    pub fn handle_scroll_down(&self, x: u16, y: u16) -> Action {
        self.best_match(x, y, |r| r.on_scroll_down.as_ref())
    }

    /// Map a drag to column `x` onto the drag track.
    ///
    /// The row is ignored and `x` may lie outside the track; the resulting
    /// position is clamped by the domain, not here.
    pub fn handle_drag(&self, x: u16) -> Action {
        match self.drag_track {
            Some(track) if track.width > 0 => Action::DragTo(track.horizontal_fraction(x)),
            _ => Action::None,
        }
    }

    fn best_match<F>(&self, x: u16, y: u16, handler: F) -> Action
    where
        F: Fn(&InteractiveRegion) -> Option<&Action>,
    {
        self.regions
            .iter()
            .filter(|r| r.contains(x, y))
            .filter_map(|r| handler(r).map(|action| (r.priority, action)))
            .max_by_key(|(priority, _)| *priority)
            .map(|(_, action)| action.clone())
            .unwrap_or(Action::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_contains() {
        let region = ClickRegion::new(10, 10, 20, 10);

        assert!(region.contains(10, 10)); // top-left corner
        assert!(region.contains(29, 19)); // just inside bottom-right
        assert!(!region.contains(30, 20)); // just outside
        assert!(!region.contains(9, 10)); // just left
    }

    #[test]
    fn test_contains_at_screen_edge() {
        let region = ClickRegion::new(u16::MAX - 1, 0, 2, 1);
        assert!(region.contains(u16::MAX, 0));
    }

    #[test]
    fn test_horizontal_fraction_centres_columns() {
        let track = ClickRegion::new(4, 0, 10, 1);

        assert!((track.horizontal_fraction(4) - 0.05).abs() < 1e-9);
        assert!((track.horizontal_fraction(13) - 0.95).abs() < 1e-9);
        assert!(track.horizontal_fraction(0) < 0.0);
        assert!(track.horizontal_fraction(30) > 1.0);
    }

    #[test]
    fn test_segment_press_wins_over_control_background() {
        let mut registry = InteractionRegistry::new();
        registry.register(InteractiveRegion::clickable(
            "background",
            ClickRegion::new(0, 0, 20, 5),
            Action::Quit,
        ));
        registry.register_segment(2, ClickRegion::new(8, 2, 3, 1));

        assert!(matches!(registry.handle_click(9, 2), Action::Press(2)));
        assert!(matches!(registry.handle_click(1, 1), Action::Quit));
    }

    #[test]
    fn test_scroll_maps_to_adjust() {
        let mut registry = InteractionRegistry::new();
        registry.register_adjustable(ClickRegion::new(0, 0, 20, 3));

        assert!(matches!(
            registry.handle_scroll_up(5, 1),
            Action::Adjust(AdjustDirection::Increment)
        ));
        assert!(matches!(
            registry.handle_scroll_down(5, 1),
            Action::Adjust(AdjustDirection::Decrement)
        ));
        assert!(matches!(registry.handle_scroll_up(25, 1), Action::None));
    }

    #[test]
    fn test_press_in_segment_gap_hits_track() {
        let mut registry = InteractionRegistry::new();
        registry.register_segment(0, ClickRegion::new(0, 1, 3, 1));
        registry.register_segment(1, ClickRegion::new(4, 1, 4, 1));
        registry.set_drag_track(ClickRegion::new(0, 1, 8, 1));

        assert_eq!(registry.handle_click(1, 1), Action::Press(0));
        assert_eq!(registry.handle_click(3, 1), Action::PressAt(3.5 / 8.0));
        assert_eq!(registry.handle_click(3, 2), Action::None);
    }

    #[test]
    fn test_drag_without_track_is_ignored() {
        let mut registry = InteractionRegistry::new();
        assert!(matches!(registry.handle_drag(3), Action::None));

        registry.set_drag_track(ClickRegion::new(0, 0, 10, 1));
        assert!(matches!(registry.handle_drag(3), Action::DragTo(_)));

        registry.clear();
        assert!(registry.drag_track().is_none());
    }
}
