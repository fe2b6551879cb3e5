//! Rendered result markup.

/// Concatenated fragments for every match, in index order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedResults {
    pub html: String,
    /// Number of options that contributed a fragment.
    pub count: usize,
}

impl RenderedResults {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub(crate) fn push(&mut self, fragment: &str) {
        self.html.push_str(fragment);
        self.count += 1;
    }
}
