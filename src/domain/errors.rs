//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Required setting (the LLM credential) is missing. Fatal.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The articles folder does not exist. Fatal when raised by the pre-flight check.
    #[error("Folder '{0}' does not exist")]
    ResourceNotFound(String),

    /// The folder exists but holds no matching article files.
    #[error("No articles were found in '{0}'")]
    EmptyInputSet(String),

    /// Any LLM call failure: network, auth, rate limit, malformed response.
    #[error("LLM service error: {0}")]
    ExternalService(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::Io(e.to_string())
    }
}

impl DomainError {
    /// True for errors that end the run during setup.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            DomainError::Configuration(_) | DomainError::ResourceNotFound(_)
        )
    }
}
