pub(crate) mod config;
pub use config::{
    ConfigError, ElementConfig, InputConfig, NavSearchConfig, SearchSettings,
};

pub(crate) mod data_set;
pub use data_set::{DataSet, kebab_to_camel};

pub(crate) mod instance_id;
pub use instance_id::InstanceId;

pub(crate) mod option;
pub use option::{NavOption, RawEntry};

pub(crate) mod search_key;
pub use search_key::SearchKey;
