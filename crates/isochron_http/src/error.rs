use isochron_core::error::ServiceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("could not build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("transport failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl ClientError {
    /// The service error, when the exchange completed but could not be turned
    /// into a result.
    pub fn as_service_error(&self) -> Option<&ServiceError> {
        match self {
            ClientError::Service(error) => Some(error),
            _ => None,
        }
    }
}
