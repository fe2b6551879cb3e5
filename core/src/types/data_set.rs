use std::collections::BTreeMap;

const DATA_PREFIX: &str = "data-";

/// String-keyed annotations attached to a source entry.
///
/// Keys are stored the way a browser `dataset` exposes them: the `data-`
/// prefix stripped and the rest converted from kebab-case to camelCase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataSet(BTreeMap<String, String>);

impl DataSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from raw element attributes, keeping only `data-*` ones.
    pub fn from_attributes<I, N, V>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: Into<String>,
    {
        let map = attributes
            .into_iter()
            .filter_map(|(name, value)| {
                let name = name.as_ref().to_ascii_lowercase();
                let rest = name.strip_prefix(DATA_PREFIX)?;
                Some((kebab_to_camel(rest), value.into()))
            })
            .collect();
        Self(map)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Looks `key` up verbatim, then in its camelCase form, so both
    /// `foo-bar` and `fooBar` resolve an attribute written as `data-foo-bar`.
    pub fn get(&self, key: &str) -> Option<&str> {
        if let Some(value) = self.0.get(key) {
            return Some(value.as_str());
        }
        if !key.contains('-') {
            return None;
        }
        self.0.get(&kebab_to_camel(key)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DataSet {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// `foo-bar-baz` -> `fooBarBaz`. A dash not followed by a lowercase ASCII
/// letter is kept as-is.
pub fn kebab_to_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '-' {
            if let Some(next) = chars.peek().copied().filter(char::is_ascii_lowercase) {
                out.push(next.to_ascii_uppercase());
                chars.next();
                continue;
            }
        }
        out.push(c);
    }
    out
}
