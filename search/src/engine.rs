//! Query matching and rendering over a built index.

use crate::config::SearchConfig;
use crate::index::Index;
use crate::query::SearchQuery;
use crate::results::RenderedResults;
use crate::template::{Template, render_default};
use navsearch_core::types::NavOption;

/// What a search produced, and how the results container should look.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Empty query: clear the container and collapse.
    Cleared,
    /// At least one match: replace the container content and expand.
    Rendered(RenderedResults),
    /// Non-empty query without matches.
    NoMatch,
}

impl SearchOutcome {
    /// Markup for the results container.
    pub fn html(&self) -> &str {
        match self {
            Self::Rendered(results) => &results.html,
            Self::Cleared | Self::NoMatch => "",
        }
    }

    pub fn count(&self) -> usize {
        match self {
            Self::Rendered(results) => results.count,
            Self::Cleared | Self::NoMatch => 0,
        }
    }
}

pub struct SearchEngine {
    index: Index,
    template: Option<Template>,
    config: SearchConfig,
}

/// Create operations.
impl SearchEngine {
    pub fn new(index: Index, template: Option<Template>, config: SearchConfig) -> Self {
        Self {
            index,
            template,
            config,
        }
    }
}

/// Search operations.
impl SearchEngine {
    /// Matching options in index order.
    pub fn matches<'a>(&'a self, query: &'a SearchQuery) -> impl Iterator<Item = &'a NavOption> {
        self.index
            .iter()
            .filter(move |option| option.matches(query.as_str()))
    }

    /// Filters and renders in one linear pass. Same index and query, same output.
    pub fn search(&self, query: &SearchQuery) -> SearchOutcome {
        if query.is_empty() {
            return SearchOutcome::Cleared;
        }

        let mut results = RenderedResults::default();
        for option in self.matches(query) {
            results.push(&self.render(option));
        }

        tracing::trace!(query = query.as_str(), matches = results.count, "search");

        if results.is_empty() {
            SearchOutcome::NoMatch
        } else {
            SearchOutcome::Rendered(results)
        }
    }

    pub fn render(&self, option: &NavOption) -> String {
        match &self.template {
            Some(template) => template.render(option),
            None => render_default(option),
        }
    }
}

/// Accessors.
impl SearchEngine {
    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
