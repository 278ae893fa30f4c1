use std::error::Error as StdError;

use crate::domain::{ApiError, ResponseCode, ValidationError};
use crate::transport::MalformedErrorEnvelope;

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`MedianaSmsClient`](crate::MedianaSmsClient).
///
/// Only [`MedianaSmsError::Api`] means "the API understood the request and said no";
/// every other variant means the exchange itself failed or the API misbehaved.
pub enum MedianaSmsError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, connection refused, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The server answered with HTTP 500; the body is not inspected.
    #[error("the MedianaSMS API is currently unavailable")]
    ServiceUnavailable,

    /// The response body is not a valid envelope.
    #[error("response body is not a valid envelope (HTTP {status}): {source}")]
    InvalidEnvelope {
        status: u16,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// The API reported an error in a well-formed error envelope.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// The API reported an error, but its body matched no known error schema.
    #[error(transparent)]
    MalformedErrorEnvelope(#[from] MalformedErrorEnvelope),

    /// The envelope's `data` did not match the shape expected by the endpoint.
    #[error("could not decode response data: {0}")]
    Decode(#[source] Box<dyn StdError + Send + Sync>),

    /// The request payload could not be serialized to JSON.
    #[error("could not encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The configured base URL cannot be used to build request URLs.
    #[error("invalid base URL: {url}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: Option<url::ParseError>,
    },

    /// The endpoint returns data, but the server answered `204 No Content`.
    #[error("response carried no envelope")]
    MissingEnvelope,

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl MedianaSmsError {
    /// The classified API error, if the API reported one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// The response code carried by an API error, well-formed or not.
    pub fn response_code(&self) -> Option<&ResponseCode> {
        match self {
            Self::Api(err) => Some(err.code()),
            Self::MalformedErrorEnvelope(err) => Some(&err.code),
            _ => None,
        }
    }
}
