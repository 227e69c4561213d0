//! Utility functions for the sibyl gateway.
//!
//! - [`names`] - Symbol to display-name resolution

mod names;

pub use names::name_for_symbol;
