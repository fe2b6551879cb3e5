use thiserror::Error;

/// Setup failures. Both leave the component inert rather than surfacing to the host page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("could not find input[type=search]")]
    MissingInput,

    #[error("could not find datalist element{}", list_suffix(.list))]
    MissingSourceList { list: Option<String> },
}

fn list_suffix(list: &Option<String>) -> String {
    list.as_deref().map(|l| format!(" #{l}")).unwrap_or_default()
}
