//! Option indexer.

use navsearch_core::types::{NavOption, RawEntry};

/// Ordered, build-once collection of options. Source order defines render order.
#[derive(Debug, Clone, Default)]
pub struct Index {
    options: Vec<NavOption>,
}

impl Index {
    pub fn build<I>(entries: I, separator: &str) -> Self
    where
        I: IntoIterator<Item = RawEntry>,
    {
        let options = entries
            .into_iter()
            .map(|entry| NavOption::from_entry(entry, separator))
            .collect();
        Self { options }
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&NavOption> {
        self.options.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NavOption> {
        self.options.iter()
    }
}
