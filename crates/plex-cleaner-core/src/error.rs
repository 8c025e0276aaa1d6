use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid filename pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("Library section {0:?} not found on server")]
    SectionNotFound(String),

    #[error("Delete of media item {media_id} returned status {status}")]
    DeleteFailed { media_id: i64, status: u16 },

    #[error("{0}")]
    Other(String),
}
