/// Bullet-point summaries from the generative language API
use crate::api_data::GenerateContentRequest;
use crate::config::ApiConfig;
use crate::error::HttpError;
use crate::http::HttpClient;
use serde_json::Value;

pub const NO_SUMMARY_TEXT: &str = "No summary available.";
pub const ERROR_TEXT: &str = "An error occurred.";

/// Outcome of a summarization request
///
/// The two sentinel variants render as fixed text, exactly like a real
/// summary; they are kept apart only so callers can log or inspect them.
#[derive(Debug, Clone, PartialEq)]
pub enum Summary {
    Text(String),
    /// The API answered without any usable text
    Unavailable,
    /// The request or the response body failed
    Failed,
}

impl Summary {
    pub fn as_str(&self) -> &str {
        match self {
            Summary::Text(text) => text.as_str(),
            Summary::Unavailable => NO_SUMMARY_TEXT,
            Summary::Failed => ERROR_TEXT,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        !matches!(self, Summary::Text(_))
    }
}

/// Prompt asking for a bullet-point summary
///
/// Title and description are embedded untouched.
pub fn build_prompt(title: &str, description: &str) -> String {
    format!(
        "Summarize the following YouTube video in bullet points:\nTitle: {}\nDescription: {}",
        title, description
    )
}

/// First candidate's first text part, if present and non-empty
pub fn extract_summary_text(response: &Value) -> Option<&str> {
    response
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}

/// Ask the model to summarize a video
///
/// Never fails: missing text becomes `Summary::Unavailable` and any
/// request fault becomes `Summary::Failed`.
pub async fn get_summary<C: HttpClient>(
    client: &C,
    config: &ApiConfig,
    title: &str,
    description: &str,
) -> Summary {
    match request_summary(client, config, title, description).await {
        Ok(response) => {
            log::debug!("API Response: {}", response);
            match extract_summary_text(&response) {
                Some(text) => Summary::Text(text.to_string()),
                None => {
                    log::warn!("Response carried no summary text");
                    Summary::Unavailable
                }
            }
        }
        Err(e) => {
            log::error!("Error fetching summary: {}", e);
            Summary::Failed
        }
    }
}

async fn request_summary<C: HttpClient>(
    client: &C,
    config: &ApiConfig,
    title: &str,
    description: &str,
) -> Result<Value, HttpError> {
    let url = config.generate_content_url()?;
    let request = GenerateContentRequest::from_prompt(build_prompt(title, description));
    let body = serde_json::to_value(&request).map_err(|e| HttpError::Decode(e.to_string()))?;

    client.post_json(&url, &body).await
}
