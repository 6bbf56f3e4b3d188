use thiserror::Error;

/// The error type for the fallible parts of glyphkit: loading icon data and installing the
/// shared defaults.  Rendering itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Malformed icon data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported element `<{0}>` in icon data")]
    UnknownTag(String),

    #[error("Attribute `{0}` must be a string or a number")]
    InvalidAttribute(String),

    #[error("No icon named `{0}`")]
    UnknownIcon(String),

    #[error("The shared icon defaults have already been installed")]
    DefaultsAlreadyInstalled,
}

pub type Result<T> = std::result::Result<T, Error>;
