//! Error types for the delivery ETA engine

use thiserror::Error;

/// Result type alias using [`EtaError`]
pub type Result<T> = std::result::Result<T, EtaError>;

/// Errors produced while loading artifacts or serving predictions
#[derive(Error, Debug)]
pub enum EtaError {
    /// An artifact file is missing, unreadable, or inconsistent with the rest
    /// of the bundle. Fatal: the process cannot serve predictions without a
    /// complete bundle.
    #[error("Artifact error: {0}")]
    ArtifactError(String),

    /// A categorical value could not be resolved to any encoder column, even
    /// after mode fill. Defensive: cannot occur with enum-typed inputs and a
    /// complete mode table.
    #[error("Encoding error: {0}")]
    EncodingError(String),

    /// Raw input violates its declared range
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A required column is absent from the engineered row and the fill tables
    #[error("Feature not found: {0}")]
    FeatureNotFound(String),

    /// Feature vector shape does not match what the model was trained on
    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeError { expected: String, actual: String },

    /// Serialization error (JSON)
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
