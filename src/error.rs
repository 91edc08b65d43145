use std::path::PathBuf;

use thiserror::Error;

/// Malformed inline markup. Aborts conversion of the whole document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unterminated inline element")]
    UnterminatedInline { delimiter: &'static str },
}

/// A node invariant was violated while rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("missing value")]
    MissingValue,
    #[error("missing tag")]
    MissingTag,
    #[error("missing children")]
    MissingChildren,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    Read {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    Parse {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Any failure of a full markdown to markup conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Render(#[from] RenderError),
}
