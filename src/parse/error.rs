use thiserror::Error;

/// Structural problems that make a feed document unusable as a whole.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("top-level value is not an object")]
    NotAnObject,

    #[error("missing top-level 'jdks' array")]
    MissingProducts,

    #[error("'jdks' is not an array")]
    ProductsNotArray,
}
