use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("testimonial carousel needs at least one record")]
    EmptyCarousel,
    #[error("content field `{0}` must not be empty")]
    MissingField(&'static str),
    #[error("invalid link in `{field}`: {value}")]
    InvalidLink { field: &'static str, value: String },
    #[error("failed to read content file '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed content toml")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("preference file '{path}' could not be accessed")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("preference file is not a string map")]
    Json(#[from] serde_json::Error),
}
