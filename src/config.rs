/// Build-time configuration: API keys, endpoints, labels
use url::Url;

pub const IDLE_LABEL: &str = "Summarize Video";
pub const BUSY_LABEL: &str = "Summarizing...";

const YOUTUBE_VIDEOS_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/videos";
const GEMINI_MODELS_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Keys and endpoints for the two external APIs
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub youtube_api_key: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub youtube_endpoint: String,
    pub gemini_endpoint: String,
}

impl ApiConfig {
    pub fn new(youtube_api_key: &str, gemini_api_key: &str) -> ApiConfig {
        ApiConfig {
            youtube_api_key: youtube_api_key.to_string(),
            gemini_api_key: gemini_api_key.to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            youtube_endpoint: YOUTUBE_VIDEOS_ENDPOINT.to_string(),
            gemini_endpoint: GEMINI_MODELS_ENDPOINT.to_string(),
        }
    }

    /// Keys baked in at compile time
    ///
    /// `YOUTUBE_DATA_API_KEY`, `GEMINI_API_KEY` and optionally `GEMINI_MODEL`
    /// are read from the build environment. Unset keys fall back to
    /// placeholders that the APIs will reject.
    pub fn from_build_env() -> ApiConfig {
        let mut config = ApiConfig::new(
            option_env!("YOUTUBE_DATA_API_KEY").unwrap_or("YOUTUBE_DATA_API"),
            option_env!("GEMINI_API_KEY").unwrap_or("GEMINI_API_KEY"),
        );
        if let Some(model) = option_env!("GEMINI_MODEL") {
            config.gemini_model = model.to_string();
        }
        config
    }

    /// Metadata lookup URL; the identifier is inserted as-is
    pub fn video_details_url(&self, video_id: &str) -> Result<Url, url::ParseError> {
        Url::parse(&format!(
            "{}?part=snippet&id={}&key={}",
            self.youtube_endpoint, video_id, self.youtube_api_key
        ))
    }

    pub fn generate_content_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&format!(
            "{}/{}:generateContent?key={}",
            self.gemini_endpoint, self.gemini_model, self.gemini_api_key
        ))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_details_url() {
        let config = ApiConfig::new("yt-key", "gem-key");
        let url = config.video_details_url("abc123").unwrap();

        assert_eq!(
            url.as_str(),
            "https://www.googleapis.com/youtube/v3/videos?part=snippet&id=abc123&key=yt-key"
        );
    }

    #[test]
    fn test_video_details_url_keeps_id_verbatim() {
        let config = ApiConfig::new("k", "k");
        let url = config.video_details_url("a%2Db").unwrap();

        assert!(url.as_str().contains("id=a%2Db&"));
    }

    #[test]
    fn test_generate_content_url() {
        let config = ApiConfig::new("yt-key", "gem-key");
        let url = config.generate_content_url().unwrap();

        assert_eq!(
            url.as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent?key=gem-key"
        );
    }

    #[test]
    fn test_custom_model() {
        let mut config = ApiConfig::new("a", "b");
        config.gemini_model = "gemini-2.0-flash".to_string();

        let url = config.generate_content_url().unwrap();
        assert_eq!(url.path(), "/v1beta/models/gemini-2.0-flash:generateContent");
    }
}
