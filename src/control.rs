//! Rating control state protocol.
//!
//! The control never owns the selection. It borrows a domain and a
//! [`SelectionBinding`] to the caller's value, reads the current selection
//! before computing, and writes the result back through the binding. Build a
//! fresh control for every event or render.
//!
//! # Example
//!
//! ```ignore
//! let domain = OrderedDomain::<Rating>::all_cases()?;
//! let mut selection = Rating::One;
//!
//! RatingControl::new(&domain, &mut selection).adjust(AdjustDirection::Increment);
//! assert_eq!(selection, Rating::Two);
//! ```

use std::fmt::Display;

use crate::domain::{AdjustDirection, OrderedSelectableSet};
use crate::log;

/// Two-way access to a caller-owned selection.
pub trait SelectionBinding<T> {
    fn get(&self) -> T;

    fn set(&mut self, value: T);
}

impl<T: Clone> SelectionBinding<T> for &mut T {
    fn get(&self) -> T {
        (**self).clone()
    }

    fn set(&mut self, value: T) {
        **self = value;
    }
}

/// Binding built from a getter and a setter closure.
pub struct FnBinding<G, S> {
    getter: G,
    setter: S,
}

impl<G, S> FnBinding<G, S> {
    pub fn new(getter: G, setter: S) -> Self {
        Self { getter, setter }
    }
}

impl<T, G, S> SelectionBinding<T> for FnBinding<G, S>
where
    G: Fn() -> T,
    S: FnMut(T),
{
    fn get(&self) -> T {
        (self.getter)()
    }

    fn set(&mut self, value: T) {
        (self.setter)(value);
    }
}

impl<G, S> std::fmt::Debug for FnBinding<G, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnBinding").finish_non_exhaustive()
    }
}

/// Selection operations over a borrowed domain and a caller-owned binding.
#[derive(Debug)]
pub struct RatingControl<'d, D, B> {
    domain: &'d D,
    binding: B,
}

impl<'d, D, B> RatingControl<'d, D, B>
where
    D: OrderedSelectableSet,
    D::Element: Clone,
    B: SelectionBinding<D::Element>,
{
    pub fn new(domain: &'d D, binding: B) -> Self {
        Self { domain, binding }
    }

    pub fn domain(&self) -> &'d D {
        self.domain
    }

    /// Current selection as stored by the caller (may be a non-member).
    pub fn selection(&self) -> D::Element {
        self.binding.get()
    }

    /// Index of the current selection, or 0 when it is not a member.
    pub fn selected_index(&self) -> usize {
        self.domain.index_of(&self.binding.get())
    }

    /// Whether the segment at `index` is drawn as filled.
    pub fn is_filled(&self, index: usize) -> bool {
        index <= self.selected_index()
    }

    pub fn filled_count(&self) -> usize {
        self.selected_index() + 1
    }

    /// Set the selection to `element` without validating membership.
    pub fn select(&mut self, element: D::Element) {
        let before = self.selected_index();
        self.binding.set(element);
        let after = self.selected_index();
        if before != after {
            log::log_event(&format!("selection {} -> {}", before, after));
        }
    }

    /// Move one step in `direction`; a no-op at the boundary or in a
    /// single-element domain.
    pub fn adjust(&mut self, direction: AdjustDirection) {
        if self.domain.len() <= 1 {
            return;
        }
        let current = self.binding.get();
        let next = self.domain.adjust(&current, direction).clone();
        if next != current {
            self.select(next);
        }
    }

    /// Select from an absolute normalized drag position.
    ///
    /// Each call depends only on `percentage`, never on earlier calls.
    pub fn select_from_position(&mut self, percentage: f64) {
        let target = self.domain.element_at_percentage(percentage).clone();
        self.select(target);
    }
}

impl<D, B> RatingControl<'_, D, B>
where
    D: OrderedSelectableSet,
    D::Element: Clone + Display,
    B: SelectionBinding<D::Element>,
{
    /// Text announced for the current value.
    pub fn accessibility_value(&self) -> String {
        self.selection().to_string()
    }
}
