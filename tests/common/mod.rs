//! Common test utilities and helpers.
//!
//! This module provides shared functionality for the integration tests:
//! - Form builders
//! - Custom assertions on field presentation

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
