//! Common test utilities and helpers.
//!
//! This module provides shared functionality for all tests, including:
//! - Custom assertions
//! - Fake recognizers and analyzers
//! - Temporary workspace builders
//! - A local entity-analysis endpoint

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;
pub mod server;

pub use assertions::*;
pub use fixtures::*;
pub use server::*;
