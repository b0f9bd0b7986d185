use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No clothes provided")]
    EmptyInput,

    #[error("Aggregation error: {0}")]
    Aggregation(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),

    #[error("Invalid vocabulary: {0}")]
    InvalidVocabulary(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Which side of the request boundary caused a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The submitted request is structurally invalid
    Client,
    /// Anything that went wrong while computing the response
    Internal,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyInput => ErrorKind::Client,
            _ => ErrorKind::Internal,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_client_error() {
        assert_eq!(Error::EmptyInput.kind(), ErrorKind::Client);
        assert_eq!(Error::EmptyInput.to_string(), "No clothes provided");
    }

    #[test]
    fn test_other_errors_are_internal() {
        assert_eq!(Error::Aggregation("nan".into()).kind(), ErrorKind::Internal);
        assert_eq!(Error::Unexpected("boom".into()).kind(), ErrorKind::Internal);
        assert_eq!(Error::Catalog("bad".into()).kind(), ErrorKind::Internal);
    }
}
