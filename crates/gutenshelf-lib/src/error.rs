use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to fetch from catalog: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("failed to decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid catalog url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("storage write failed: {0}")]
    Storage(String),
    #[error("no book id in context")]
    MissingIdentifier,
    #[error("book {0} not found in catalog")]
    NotFound(i64),
}
