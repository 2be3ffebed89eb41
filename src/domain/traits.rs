//! Element capabilities and the ordered selection trait.

use std::fmt::Display;
use std::hash::Hash;

/// Direction of a single-step adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustDirection {
    /// Move to the next higher-ordered element
    Increment,
    /// Move to the next lower-ordered element
    Decrement,
}

/// An element with a stable identity, used as a rendering key and to
/// reject duplicate domain members.
pub trait Identifiable {
    type Id: Eq + Hash;

    fn id(&self) -> Self::Id;
}

impl Identifiable for String {
    type Id = String;

    fn id(&self) -> String {
        self.clone()
    }
}

impl Identifiable for &'static str {
    type Id = &'static str;

    fn id(&self) -> &'static str {
        *self
    }
}

/// A finite type whose values can be listed in order.
pub trait CaseIterable: Sized + 'static {
    fn all_cases() -> &'static [Self];
}

/// Everything a rating control needs from its elements: equality,
/// identity and a description (via `Display`).
pub trait Rateable: Identifiable + PartialEq + Clone + Display {}

impl<T> Rateable for T where T: Identifiable + PartialEq + Clone + Display {}

/// Index arithmetic over an ordered, finite sequence of distinct elements.
///
/// Iteration order of [`elements`](Self::elements) is the total order used for
/// comparison and for deciding which segments are filled. Implementors must
/// never expose an empty sequence; every provided method is total under that
/// precondition.
///
/// # Example
///
/// ```ignore
/// let domain = OrderedDomain::new(vec!["low", "mid", "high"])?;
///
/// assert_eq!(domain.index_of(&"mid"), 1);
/// assert_eq!(domain.adjust_index(2, AdjustDirection::Increment), 2);
/// assert_eq!(domain.element_at_percentage(1.7), &"high");
/// ```
pub trait OrderedSelectableSet {
    /// The type of elements in the set
    type Element: PartialEq;

    /// Get the ordered elements
    fn elements(&self) -> &[Self::Element];

    /// Get the number of elements
    fn len(&self) -> usize {
        self.elements().len()
    }

    /// Check if the set is empty
    fn is_empty(&self) -> bool {
        self.elements().is_empty()
    }

    /// Position of `element`, or the first position when it is not a member.
    fn index_of(&self, element: &Self::Element) -> usize {
        self.elements()
            .iter()
            .position(|candidate| candidate == element)
            .unwrap_or(0)
    }

    /// Step `index` one position in `direction`, clamping at both ends.
    ///
    /// A set with at most one element never moves.
    fn adjust_index(&self, index: usize, direction: AdjustDirection) -> usize {
        if self.len() <= 1 {
            return index;
        }
        match direction {
            AdjustDirection::Increment => {
                if index >= self.len() - 1 {
                    index
                } else {
                    index + 1
                }
            }
            AdjustDirection::Decrement => index.checked_sub(1).unwrap_or(index),
        }
    }

    /// Offset selected by a normalized position, `clamp(floor(len * p), 0, len - 1)`.
    ///
    /// Positions outside `[0, 1)` clamp to the first or last offset. `NaN`
    /// maps to the first offset.
    fn offset_at_percentage(&self, percentage: f64) -> usize {
        let last = self.len().saturating_sub(1);
        let raw = (self.len() as f64 * percentage).floor();
        // Float-to-int `as` saturates: negatives and NaN become 0.
        (raw as usize).min(last)
    }

    /// Element selected by a normalized drag position.
    fn element_at_percentage(&self, percentage: f64) -> &Self::Element {
        &self.elements()[self.offset_at_percentage(percentage)]
    }

    /// Element one step away from `element` in `direction`.
    ///
    /// An element that is not a member is treated as the first element.
    fn adjust(&self, element: &Self::Element, direction: AdjustDirection) -> &Self::Element {
        let index = self.adjust_index(self.index_of(element), direction);
        &self.elements()[index]
    }

    /// Get the element at `index`, if in range
    fn element_at(&self, index: usize) -> Option<&Self::Element> {
        self.elements().get(index)
    }

    /// Get the lowest-ordered element
    fn first(&self) -> &Self::Element {
        &self.elements()[0]
    }
}
