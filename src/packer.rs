//! Greedy packing engine.
//!
//! This module provides the core packing types:
//! - `Strategy`: the two greedy placement heuristics (first-fit, best-fit)
//! - `Packer`: the engine owning the ordered container list
//!
//! Placement decisions are pure functions over the current container
//! sequence; the engine only appends items and opens new containers, so a
//! run is fully deterministic in the input order.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    container::Container,
    types::{Capacity, Weight},
};

/// Greedy placement strategy, fixed for the engine's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Place each item into the first container with enough remaining
    /// capacity, in creation order.
    #[default]
    FirstFit,
    /// Place each item into the container with the least remaining-but-
    /// sufficient capacity (tightest fit); ties go to the earliest-created.
    BestFit,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strategy::FirstFit => "first-fit",
            Strategy::BestFit => "best-fit",
        };
        f.write_str(label)
    }
}

impl FromStr for Strategy {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first-fit" | "first_fit" | "firstfit" | "first" => Ok(Strategy::FirstFit),
            "best-fit" | "best_fit" | "bestfit" | "best" => Ok(Strategy::BestFit),
            _ => Err(crate::Error::ParseStrategy {
                input: s.to_string(),
                expected: "first-fit, best-fit".to_string(),
            }),
        }
    }
}

/// Index of the first container able to accept `weight`, in creation order.
fn first_fit(containers: &[Container], weight: Weight) -> Option<usize> {
    containers
        .iter()
        .position(|container| container.remaining() >= weight.value())
}

/// Index of the qualifying container with the smallest remaining capacity.
///
/// Ties break toward the earliest-created container: the scan runs in
/// creation order and only a strictly smaller remainder replaces the
/// current candidate.
fn best_fit(containers: &[Container], weight: Weight) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, container) in containers.iter().enumerate() {
        let remaining = container.remaining();
        if remaining < weight.value() {
            continue;
        }
        match best {
            Some((_, best_remaining)) if remaining >= best_remaining => {}
            _ => best = Some((index, remaining)),
        }
    }
    best.map(|(index, _)| index)
}

impl Strategy {
    /// Pick the container for `weight`, or `None` if a new one must open.
    fn select(self, containers: &[Container], weight: Weight) -> Option<usize> {
        match self {
            Strategy::FirstFit => first_fit(containers, weight),
            Strategy::BestFit => best_fit(containers, weight),
        }
    }
}

/// Greedy packing engine.
///
/// Owns an ordered, grow-only sequence of [`Container`]s, all created with
/// the same capacity. Items are placed one at a time per the configured
/// [`Strategy`]; the container list is never reordered or pruned, so
/// repeated [`Packer::pack_items`] calls continue filling the same set.
///
/// An item heavier than the shared capacity is rejected with
/// [`crate::Error::OversizedItem`] before any container is created or
/// mutated, so the total packed weight always equals the total weight of
/// the successfully packed input.
///
/// # Examples
///
/// ```
/// use boxpack::{Packer, Strategy};
///
/// let mut packer = Packer::with_capacity(10.0, Strategy::FirstFit)?;
/// packer.pack_values(&[5.0, 5.0, 5.0])?;
///
/// assert_eq!(packer.container_count(), 2);
/// assert_eq!(packer.containers()[0].current_load(), 10.0);
/// assert_eq!(packer.containers()[1].current_load(), 5.0);
/// # Ok::<(), boxpack::Error>(())
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Packer {
    /// Capacity applied to every newly opened container.
    box_capacity: Capacity,
    /// Placement strategy, fixed at construction.
    strategy: Strategy,
    /// Containers in creation order.
    containers: Vec<Container>,
}

impl Packer {
    /// Create a packing engine with a validated capacity.
    pub fn new(box_capacity: Capacity, strategy: Strategy) -> Self {
        Packer {
            box_capacity,
            strategy,
            containers: Vec::new(),
        }
    }

    /// Create a packing engine from a raw capacity value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidCapacity`] if `box_capacity` is zero,
    /// negative, or not finite.
    pub fn with_capacity(box_capacity: f64, strategy: Strategy) -> crate::Result<Self> {
        Ok(Self::new(Capacity::new(box_capacity)?, strategy))
    }

    /// Place a single item per the configured strategy.
    ///
    /// Opens a new container when no existing one can accept the item.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OversizedItem`] if the item cannot fit even
    /// an empty container. No container is created or mutated in that case.
    pub fn pack_item(&mut self, weight: Weight) -> crate::Result<()> {
        if weight.value() > self.box_capacity.value() {
            return Err(crate::Error::OversizedItem {
                weight: weight.value(),
                capacity: self.box_capacity.value(),
            });
        }

        match self.strategy.select(&self.containers, weight) {
            Some(index) => {
                let accepted = self.containers[index].try_add(weight);
                debug_assert!(accepted, "selected container rejected a fitting item");
            }
            None => {
                let mut container = Container::new(self.box_capacity);
                let accepted = container.try_add(weight);
                debug_assert!(accepted, "empty container rejected a non-oversized item");
                self.containers.push(container);
            }
        }

        Ok(())
    }

    /// Place a batch of items, strictly in input order.
    ///
    /// Each weight is committed before the next is examined; the engine
    /// keeps its accumulated containers across calls, so successive batches
    /// continue filling the same set.
    ///
    /// # Errors
    ///
    /// Stops at the first oversized item with
    /// [`crate::Error::OversizedItem`]; items before it stay packed, the
    /// failing item leaves no partial mutation.
    pub fn pack_items(&mut self, weights: &[Weight]) -> crate::Result<()> {
        for &weight in weights {
            self.pack_item(weight)?;
        }
        Ok(())
    }

    /// Validate a batch of raw values and pack them.
    ///
    /// The whole batch is validated before any placement happens, so an
    /// invalid value anywhere in `raw` leaves the engine untouched.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidWeight`] for a non-positive or
    /// non-finite value (nothing packed), or [`crate::Error::OversizedItem`]
    /// from placement.
    pub fn pack_values(&mut self, raw: &[f64]) -> crate::Result<()> {
        let weights = raw
            .iter()
            .map(|&value| Weight::new(value))
            .collect::<crate::Result<Vec<_>>>()?;
        self.pack_items(&weights)
    }

    /// Containers in creation order (immutable view).
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// The shared capacity applied to every container.
    pub fn capacity(&self) -> Capacity {
        self.box_capacity
    }

    /// The configured placement strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Number of containers opened so far.
    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    /// Total weight packed across all containers.
    pub fn total_weight(&self) -> f64 {
        self.containers.iter().map(Container::current_load).sum()
    }

    /// Mean fill ratio across containers (0.0 when none are open).
    pub fn average_fill_ratio(&self) -> f64 {
        if self.containers.is_empty() {
            return 0.0;
        }
        let total: f64 = self.containers.iter().map(Container::fill_ratio).sum();
        total / self.containers.len() as f64
    }
}
