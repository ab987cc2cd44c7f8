//! Error types for attaching the wave-text animation and reading its config.

use thiserror::Error;

use crate::wave::Side;

/// Reasons the animation could not be wired to a container.
///
/// None of these are fatal to the host page: the DOM layer logs them and
/// leaves the section static.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AttachError {
    #[error("wave-text container not found")]
    MissingContainer,
    #[error("missing {0} column group")]
    MissingColumn(Side),
    #[error("missing content: {0} column has no text elements")]
    EmptyColumn(Side),
    #[error("missing thumbnail image")]
    MissingThumbnail,
    #[error("dom access failed: {0}")]
    Dom(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid wave options: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} is not a number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },
}
