use nutype::nutype;

/// Lower-cased haystack an option is matched against.
///
/// Computed once at index-build time from `value`, a separator and `label`.
/// Mutating the source entry afterwards does not refresh it.
#[nutype(
    sanitize(lowercase),
    derive(Debug, Clone, PartialEq, Eq, Hash, AsRef, Display)
)]
pub struct SearchKey(String);

impl SearchKey {
    pub fn derive(value: &str, label: &str, separator: &str) -> Self {
        let mut raw = String::with_capacity(value.len() + separator.len() + label.len());
        raw.push_str(value);
        raw.push_str(separator);
        raw.push_str(label);
        Self::new(raw)
    }

    /// Substring test. `needle` is expected to be lower-cased already.
    pub fn contains(&self, needle: &str) -> bool {
        self.as_ref().contains(needle)
    }

    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}
