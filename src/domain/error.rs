use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Remote mutation failed: {0}")]
    RemoteMutationFailed(#[source] Box<DomainError>),

    #[error("Not found error: {0}")]
    NotFoundError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Wraps a store failure from a mutation call. The wrapper tells the
    /// caller that no local event was published for the attempted mutation.
    pub fn mutation_failed(source: DomainError) -> Self {
        DomainError::RemoteMutationFailed(Box::new(source))
    }
}

impl From<reqwest::Error> for DomainError {
    fn from(error: reqwest::Error) -> Self {
        DomainError::NetworkError(format!("HTTP error: {}", error))
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(error: serde_json::Error) -> Self {
        DomainError::MalformedPayload(format!("JSON error: {}", error))
    }
}

impl From<String> for DomainError {
    fn from(error: String) -> Self {
        DomainError::InternalError(error)
    }
}

impl From<&str> for DomainError {
    fn from(error: &str) -> Self {
        DomainError::InternalError(error.to_string())
    }
}
