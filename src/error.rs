/// Error types
use thiserror::Error;

/// Failure of a single HTTP round-trip
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HttpError {
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("malformed response body: {0}")]
    Decode(String),
}

impl From<url::ParseError> for HttpError {
    fn from(err: url::ParseError) -> Self {
        HttpError::InvalidUrl(err.to_string())
    }
}

/// Failure to obtain the active page URL
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LocatorError {
    #[error("content script injection failed: {0}")]
    Injection(String),

    #[error("no reply from content script: {0}")]
    Messaging(String),

    #[error("reply carried no URL")]
    MissingUrl,
}

/// Reasons a summarize run stops early
///
/// The `Display` text is what the user sees.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PipelineError {
    #[error("Failed to inject content script.")]
    ScriptInjection,

    #[error("Failed to communicate with the content script. Please try again.")]
    ContentScript,

    #[error("Failed to get the video URL!")]
    UrlUnavailable,

    #[error("Invalid YouTube URL!")]
    InvalidUrl,

    #[error("Failed to fetch video details.")]
    DetailsUnavailable,

    #[error("A summary is already being generated.")]
    AlreadyRunning,
}

impl From<LocatorError> for PipelineError {
    fn from(err: LocatorError) -> Self {
        match err {
            LocatorError::Injection(_) => PipelineError::ScriptInjection,
            LocatorError::Messaging(_) => PipelineError::ContentScript,
            LocatorError::MissingUrl => PipelineError::UrlUnavailable,
        }
    }
}
