use thiserror::Error;

/// Failures a news provider call can produce. Recovered inside the
/// crate by substituting mock articles; never returned to callers.
#[derive(Debug, Error)]
pub enum Error {
    #[error("http request failed: {0}")]
    Http(String),

    #[error("provider returned status {0}")]
    Status(u16),

    #[error("unexpected payload: {0}")]
    Payload(String),
}

impl From<surf::Error> for Error {
    fn from(err: surf::Error) -> Self {
        Error::Http(err.to_string())
    }
}
