use thiserror::Error;

/// Failures a quote provider call can produce. These never leave the
/// crate: every variant is recovered by substituting a mock quote.
#[derive(Debug, Error)]
pub enum Error {
    #[error("http request failed: {0}")]
    Http(String),

    #[error("provider returned status {0}")]
    Status(u16),

    #[error("unexpected payload: {0}")]
    Payload(String),

    #[error("no quote returned for {0}")]
    NotFound(String),

    #[error("quote for {0} is missing a price")]
    MissingPrice(String),
}

impl From<surf::Error> for Error {
    fn from(err: surf::Error) -> Self {
        Error::Http(err.to_string())
    }
}
