//! Option indexing, substring matching and result rendering.
//!
//! # Design
//!
//! - The `Index` is built once from the declared source entries and keeps their order.
//! - Matching is a plain substring test against each option's precomputed search key.
//! - Matches render in index order, through a `Template` when one is configured,
//!   otherwise as a default link fragment.
//! - All fragments are concatenated into one `RenderedResults` that replaces the
//!   results container content in a single pass.

mod config;
mod engine;
mod index;
mod query;
mod results;
mod template;

pub use config::SearchConfig;
pub use engine::{SearchEngine, SearchOutcome};
pub use index::Index;
pub use query::SearchQuery;
pub use results::RenderedResults;
pub use template::{Template, escape_html, render_default};

#[cfg(test)]
mod tests;
