//! Packing run reports and aggregate statistics.

use serde::{Deserialize, Serialize};

use crate::{container::Container, packer::Packer};

/// Summary of a single packed container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerSummary {
    /// 1-based position in creation order.
    pub index: usize,
    pub items: Vec<f64>,
    pub load: f64,
    pub capacity: f64,
    pub remaining: f64,
    pub fill_ratio: f64,
}

impl ContainerSummary {
    fn from_container(index: usize, container: &Container) -> Self {
        ContainerSummary {
            index,
            items: container.items().iter().map(|w| w.value()).collect(),
            load: container.current_load(),
            capacity: container.capacity().value(),
            remaining: container.remaining(),
            fill_ratio: container.fill_ratio(),
        }
    }
}

/// Complete report of a packing run.
///
/// Pure data computed from a [`Packer`]; rendering and file output live in
/// the CLI layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackingReport {
    pub strategy: String,
    pub capacity: f64,
    pub containers: Vec<ContainerSummary>,
    pub container_count: usize,
    pub total_weight: f64,
    pub average_fill_ratio: f64,
}

impl PackingReport {
    /// Build a report from the packer's current container set.
    pub fn from_packer(packer: &Packer) -> Self {
        let containers = packer
            .containers()
            .iter()
            .enumerate()
            .map(|(i, container)| ContainerSummary::from_container(i + 1, container))
            .collect();

        PackingReport {
            strategy: packer.strategy().to_string(),
            capacity: packer.capacity().value(),
            containers,
            container_count: packer.container_count(),
            total_weight: packer.total_weight(),
            average_fill_ratio: packer.average_fill_ratio(),
        }
    }
}
