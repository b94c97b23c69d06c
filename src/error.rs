//! Error type shared by the builder, the registry and the HTTP layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompositionError {
    /// `build()` was called before a mandatory field was set.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid site type '{0}': expected one of portal, site, user")]
    InvalidSiteType(String),

    #[error("Invalid permission '{0}'")]
    InvalidPermission(String),

    #[error("No open container to close")]
    NoOpenContainer,

    #[error("{0} nested container(s) still open; close them before building the page")]
    UnclosedContainers(usize),

    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Page registry lock poisoned")]
    RegistryPoisoned,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CompositionError {
    /// Errors caused by the caller's input rather than by the process itself.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingField(_)
                | Self::InvalidSiteType(_)
                | Self::InvalidPermission(_)
                | Self::NoOpenContainer
                | Self::UnclosedContainers(_)
                | Self::Json(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CompositionError>;
