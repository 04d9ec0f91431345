//! CLI infrastructure for the boxpack tool
//!
//! This module provides the command-line interface for running packing
//! jobs, comparing strategies, and exporting results.

pub mod commands;
pub mod config;
pub mod output;
