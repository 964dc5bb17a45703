//! Error types for configuration parsing and host setup.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CursorError>;

#[derive(Error, Debug)]
pub enum CursorError {
    /// The configuration object was not valid JSON for `CursorOptions`
    #[error("invalid cursor configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A numeric field was negative or not finite
    #[error("invalid value for `{field}`: {value}")]
    InvalidValue { field: String, value: f64 },

    /// The drawing surface could not produce a 2D context
    #[error("canvas has no usable 2d context")]
    MissingContext,
}
