use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the collaborators around the scorer.
///
/// Scoring itself never fails; these cover config files, form lookups and
/// the optional speech hook.
#[derive(Debug, Error)]
pub enum TriageError {
    #[error("failed to access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("failed to render config: {0}")]
    ConfigRender(#[from] toml::ser::Error),
    #[error("unknown form field: {0}")]
    UnknownField(String),
    #[error("speech failed: {0}")]
    Speech(String),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TriageError>;
