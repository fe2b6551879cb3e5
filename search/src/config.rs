use navsearch_core::types::SearchSettings;

#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Joins value and label in each option's search key.
    pub separator: String,
    /// Report a non-empty query with no matches as collapsed.
    pub collapse_on_no_match: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchSettings::default().into()
    }
}

impl From<&SearchSettings> for SearchConfig {
    fn from(settings: &SearchSettings) -> Self {
        Self {
            separator: settings.separator.clone(),
            collapse_on_no_match: settings.collapse_on_no_match,
        }
    }
}

impl From<SearchSettings> for SearchConfig {
    fn from(settings: SearchSettings) -> Self {
        Self::from(&settings)
    }
}
