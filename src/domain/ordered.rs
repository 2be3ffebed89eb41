//! Owned, validated ordered domain.

use std::collections::HashSet;
use std::fmt::Display;

use crate::error::{DomainError, DomainResult};

use super::traits::{CaseIterable, Identifiable, OrderedSelectableSet, Rateable};

/// A non-empty sequence of distinct elements, fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedDomain<T> {
    elements: Vec<T>,
}

impl<T: Identifiable + PartialEq> OrderedDomain<T> {
    /// Build a domain, rejecting empty input and repeated identities.
    pub fn new(elements: Vec<T>) -> DomainResult<Self> {
        if elements.is_empty() {
            return Err(DomainError::Empty);
        }

        let mut seen = HashSet::with_capacity(elements.len());
        for (index, element) in elements.iter().enumerate() {
            if !seen.insert(element.id()) {
                return Err(DomainError::DuplicateId { index });
            }
        }

        Ok(Self { elements })
    }

    /// Strict membership lookup (no fallback).
    pub fn position(&self, element: &T) -> Option<usize> {
        self.elements.iter().position(|candidate| candidate == element)
    }
}

impl<T: CaseIterable + Rateable> OrderedDomain<T> {
    /// Domain of every case of `T`, in declaration order.
    pub fn all_cases() -> DomainResult<Self> {
        Self::new(T::all_cases().to_vec())
    }
}

impl OrderedDomain<String> {
    /// Domain of plain text labels, e.g. from the config file or CLI.
    ///
    /// Labels are trimmed and blank ones dropped before validation.
    pub fn from_labels<I, S>(labels: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let elements = labels
            .into_iter()
            .map(|label| label.as_ref().trim().to_string())
            .filter(|label| !label.is_empty())
            .collect();
        Self::new(elements)
    }
}

impl<T: Display> OrderedDomain<T> {
    /// Find the element whose description matches `description`, ignoring case.
    pub fn resolve(&self, description: &str) -> DomainResult<&T> {
        let wanted = description.trim();
        self.elements
            .iter()
            .find(|element| element.to_string().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::UnknownElement(wanted.to_string()))
    }
}

impl<T: PartialEq> OrderedSelectableSet for OrderedDomain<T> {
    type Element = T;

    fn elements(&self) -> &[T] {
        &self.elements
    }
}

impl<'a, T> IntoIterator for &'a OrderedDomain<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
