//! Core types for the `nav-search` element.
//!
//! Nothing here touches a DOM: options, configuration, the debounce
//! primitive and the keyboard state machine are plain data and functions.

pub mod debounce;
pub mod error;
pub mod navigator;
pub mod types;

pub use error::SetupError;

/// Component version.
pub const VERSION: &str = "0.0.1";
