use super::{DataSet, SearchKey};

/// One entry as declared in the source list, before indexing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEntry {
    pub value: String,
    /// Explicit `label` attribute, if any.
    pub label: Option<String>,
    /// Text content, used when there is no usable label.
    pub text: String,
    pub data: DataSet,
}

impl RawEntry {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key, value);
        self
    }

    /// The label shown to the user. An empty explicit label counts as absent.
    pub fn display_label(&self) -> &str {
        match self.label.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ => &self.text,
        }
    }
}

/// A selectable, searchable entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavOption {
    pub value: String,
    pub label: String,
    pub data: DataSet,
    pub search_key: SearchKey,
}

impl NavOption {
    pub fn from_entry(entry: RawEntry, separator: &str) -> Self {
        let label = entry.display_label().to_string();
        let search_key = SearchKey::derive(&entry.value, &label, separator);
        Self {
            value: entry.value,
            label,
            data: entry.data,
            search_key,
        }
    }

    /// `query` must already be lower-cased.
    pub fn matches(&self, query: &str) -> bool {
        self.search_key.contains(query)
    }
}
