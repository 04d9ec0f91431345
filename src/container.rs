//! Fixed-capacity container for packed item weights.

use std::fmt;

use serde::Serialize;

use crate::types::{Capacity, Weight};

/// A container holding item weights up to a fixed capacity.
///
/// Items are append-only and kept in arrival order. The capacity invariant
/// (`current_load() <= capacity`) is enforced at the point of insertion:
/// [`Container::try_add`] rejects any item that would exceed the capacity
/// and leaves the container untouched. The struct serializes for
/// reporting but has no `Deserialize` impl: a container can only be
/// filled through `try_add`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Container {
    /// Maximum total weight this container can hold.
    capacity: Capacity,
    /// Packed item weights, in arrival order.
    items: Vec<Weight>,
}

impl Container {
    /// Create an empty container with the given capacity.
    pub fn new(capacity: Capacity) -> Self {
        Container {
            capacity,
            items: Vec::new(),
        }
    }

    /// Attempt to add an item.
    ///
    /// Returns `false` without mutating the container if the item would
    /// exceed the remaining capacity, `true` after appending it otherwise.
    ///
    /// The fit check uses `f64` sums, so at extreme magnitude spreads
    /// (item around 1, capacity around 1e16) rounding decides borderline
    /// fits; `current_load()` is the same rounded sum, so the reported
    /// load never exceeds the capacity either way.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxpack::{Capacity, Container, Weight};
    ///
    /// let mut container = Container::new(Capacity::new(10.0)?);
    /// assert!(container.try_add(Weight::new(6.0)?));
    /// assert!(!container.try_add(Weight::new(5.0)?));
    /// assert_eq!(container.current_load(), 6.0);
    /// # Ok::<(), boxpack::Error>(())
    /// ```
    pub fn try_add(&mut self, weight: Weight) -> bool {
        if self.current_load() + weight.value() > self.capacity.value() {
            return false;
        }

        self.items.push(weight);
        true
    }

    /// Get the container's capacity.
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Sum of all packed item weights.
    pub fn current_load(&self) -> f64 {
        self.items.iter().map(|w| w.value()).sum()
    }

    /// Capacity still available for further items.
    pub fn remaining(&self) -> f64 {
        self.capacity.value() - self.current_load()
    }

    /// Fraction of the capacity in use (0.0 for an empty container).
    pub fn fill_ratio(&self) -> f64 {
        self.current_load() / self.capacity.value()
    }

    /// Get the packed items, in arrival order.
    pub fn items(&self) -> &[Weight] {
        &self.items
    }

    /// Number of packed items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Check whether the container holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items = self
            .items
            .iter()
            .map(|w| w.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "[{items}] (used: {}/{}, {:.0}%)",
            self.current_load(),
            self.capacity,
            self.fill_ratio() * 100.0
        )
    }
}
