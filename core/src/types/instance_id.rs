use std::fmt;
use uuid::Uuid;

/// Per-instance identifier linking an input to its results container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(Uuid);

impl InstanceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }

    /// Element id of the results container, e.g. `nav-search-results-<uuid>`.
    pub fn results_id(&self, prefix: &str) -> String {
        format!("{prefix}-results-{}", self.0.as_hyphenated())
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_hyphenated())
    }
}
