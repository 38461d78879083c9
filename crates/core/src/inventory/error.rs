use thiserror::Error;

/// Errors that can occur when reading a request body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("Request body is missing")]
    MissingBody,
    #[error("Request body is not valid UTF-8: {0}")]
    InvalidEncoding(String),
    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),
    #[error("Request body must be a JSON object")]
    NotAnObject,
}
