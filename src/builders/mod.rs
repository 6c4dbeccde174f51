//! # Builders
//!
//! This module provides builder patterns for configuring file operations.
//!
//! ## Modules
//!
//! - [`runner_builder`] - Builder for [`RoundTripRunner`](crate::runner::RoundTripRunner)
//!
//! ## Usage
//!
//! Builders provide a fluent API with sensible defaults; only the settings
//! that differ from the defaults need to be named.

pub mod runner_builder;

pub use runner_builder::RunnerBuilder;
