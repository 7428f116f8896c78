//! Diagnostics for the stencil template engine
//!
//! This crate provides the source location type, the location-tagged
//! diagnostic value accumulated by every pipeline stage, and utilities for
//! suggesting candidate names and reporting diagnostics to the terminal.

pub mod diagnostic;
pub mod location;
pub mod suggestion;

pub use diagnostic::{TemplateError, report_errors};
pub use location::Location;
pub use suggestion::match_strings;
