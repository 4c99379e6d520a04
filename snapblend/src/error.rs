//! Error definitions for the SDK.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("missing input: {message}")]
    MissingInput { message: String },

    #[error("image processing failed: {message}")]
    Processing { message: String },

    #[error("empty response from the generation service")]
    EmptyResponse,

    #[error("blocked by content policy: {message}")]
    SafetyBlock { message: String },

    #[error("no image in response: {message}")]
    NoImageReturned { message: String },

    #[error("quota exceeded: {message}")]
    QuotaExceeded { message: String },

    #[error("authentication failed: {message}")]
    AuthFailure { message: String },

    #[error("credential not configured: {message}")]
    ConfigMissing { message: String },

    #[error("model endpoint not found: {message}")]
    EndpointNotFound { message: String },

    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("HTTP client error: {source}")]
    HttpClient {
        #[from]
        source: reqwest::Error,
    },

    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("{message}")]
    Unknown { message: String },
}

/// Classified failure kinds surfaced to callers.
///
/// Transport-level variants (`ApiError`, `HttpClient`, ...) collapse into
/// `Unknown` here; `classify::classify` folds them into a specific kind
/// before a generation call returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingInput,
    ProcessingError,
    EmptyResponse,
    SafetyBlock,
    NoImageReturned,
    QuotaExceeded,
    AuthFailure,
    ConfigMissing,
    EndpointNotFound,
    Unknown,
}

impl Error {
    /// The classified kind of this failure.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingInput { .. } => ErrorKind::MissingInput,
            Self::Processing { .. } => ErrorKind::ProcessingError,
            Self::EmptyResponse => ErrorKind::EmptyResponse,
            Self::SafetyBlock { .. } => ErrorKind::SafetyBlock,
            Self::NoImageReturned { .. } => ErrorKind::NoImageReturned,
            Self::QuotaExceeded { .. } => ErrorKind::QuotaExceeded,
            Self::AuthFailure { .. } => ErrorKind::AuthFailure,
            Self::ConfigMissing { .. } => ErrorKind::ConfigMissing,
            Self::EndpointNotFound { .. } => ErrorKind::EndpointNotFound,
            Self::ApiError { .. }
            | Self::InvalidConfig { .. }
            | Self::HttpClient { .. }
            | Self::Serialization { .. }
            | Self::Io { .. }
            | Self::Unknown { .. } => ErrorKind::Unknown,
        }
    }

    /// One user-facing sentence per failure: cause plus remedy where one exists.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::MissingInput => {
                "Add both a portrait photo and a product photo, then pick a scene.".into()
            }
            ErrorKind::ProcessingError => {
                "That image could not be read; try uploading a different file.".into()
            }
            ErrorKind::EmptyResponse => {
                "The generation service returned nothing; try again in a moment.".into()
            }
            ErrorKind::SafetyBlock => {
                "The request was declined by the content policy; try a different scene or different photos.".into()
            }
            ErrorKind::NoImageReturned => {
                "The service answered without an image; try again or pick a different scene.".into()
            }
            ErrorKind::QuotaExceeded => {
                "The rate or plan limit was reached; wait a little and retry.".into()
            }
            ErrorKind::AuthFailure => {
                "The API credential was rejected; check the configured key.".into()
            }
            ErrorKind::ConfigMissing => {
                "No API credential is configured; set the key before generating.".into()
            }
            ErrorKind::EndpointNotFound => {
                "The image model is unavailable in this deployment; check the configured model name.".into()
            }
            ErrorKind::Unknown => format!("Image generation failed: {self}."),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
