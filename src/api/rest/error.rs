use std::result;

use reqwest::{Method, StatusCode, header::InvalidHeaderValue};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RestApiError {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(reqwest::Error),

    #[error("Url parse error: {0}")]
    UrlParse(String),

    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] InvalidHeaderValue),

    #[error("Credentials are required for this request")]
    MissingRequestCredentials,

    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(Method),

    #[error("Failed to send request: {0}")]
    SendFailed(reqwest::Error),

    #[error("API responded with error status {status}: {text}")]
    ErrorResponse { status: StatusCode, text: String },

    #[error("Failed to decode response body: {0}")]
    ResponseDecoding(reqwest::Error),

    #[error("Failed to deserialize response `{raw_response}`: {e}")]
    ResponseJsonDeserializeFailed {
        raw_response: String,
        e: serde_json::Error,
    },

    #[error("Failed to serialize request body: {0}")]
    RequestJsonSerializeFailed(serde_json::Error),
}

pub type Result<T> = result::Result<T, RestApiError>;
