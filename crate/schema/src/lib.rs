//! Typed template schemas
//!
//! A [`Definition`] declares which attributes, booleans and child collections
//! a template may reference on a user type, and compiles a parsed template
//! into a single evaluator function while collecting every reference error.

pub mod definition;

pub use definition::{Definition, Evaluator};
