mod component;

pub use component::{ConfigError, ElementConfig, InputConfig, NavSearchConfig, SearchSettings};
