//! Ordered selection domain
//!
//! Provides the element capability traits, the index arithmetic shared by
//! every rating control, and a validated owned domain type.

mod ordered;
mod traits;

pub use ordered::OrderedDomain;
pub use traits::{AdjustDirection, CaseIterable, Identifiable, OrderedSelectableSet, Rateable};
