// error.rs: fatal error taxonomy. Parameter parsing never fails; everything
// here is a configuration or filesystem problem surfaced to the caller.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("configured column '{0}' missing from record")]
    MissingColumn(String),

    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path} is missing its header row")]
    MissingHeader { path: String },
}
