//! Greedy shipment box packer
//!
//! This crate provides:
//! - A fixed-capacity [`Container`] abstraction with an insertion-time
//!   capacity invariant
//! - A single-pass [`Packer`] engine with two greedy placement strategies
//!   (first-fit and best-fit)
//! - Serializable packing reports and CSV export
//! - A CLI for running and comparing packing jobs
//!
//! The engine is deterministic: the same strategy, capacity, and weight
//! sequence always produce the same container sequence. There is no
//! backtracking and no optimality guarantee.

pub mod analysis;
pub mod cli;
pub mod container;
pub mod error;
pub mod export;
pub mod packer;
pub mod types;

pub use analysis::{ContainerSummary, PackingReport};
pub use container::Container;
pub use error::{Error, Result};
pub use export::CsvExporter;
pub use packer::{Packer, Strategy};
pub use types::{Capacity, Weight};
