/// JSON-over-HTTP seam used by the fetcher and the summarizer
use crate::error::HttpError;
use serde_json::Value;
use url::Url;

/// Minimal JSON client
///
/// Implementations must not interpret status codes: API error bodies are
/// returned as ordinary JSON and handled by the caller's shape checks.
#[allow(async_fn_in_trait)]
pub trait HttpClient {
    async fn get_json(&self, url: &Url) -> Result<Value, HttpError>;

    async fn post_json(&self, url: &Url, body: &Value) -> Result<Value, HttpError>;
}

/// `reqwest` client; on wasm32 this goes through the browser fetch API
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    pub fn new() -> ReqwestClient {
        ReqwestClient {
            inner: reqwest::Client::new(),
        }
    }

    async fn read_json(response: reqwest::Response) -> Result<Value, HttpError> {
        log::debug!("{} answered {}", response.url(), response.status());
        response
            .json::<Value>()
            .await
            .map_err(|e| HttpError::Decode(e.to_string()))
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for ReqwestClient {
    async fn get_json(&self, url: &Url) -> Result<Value, HttpError> {
        let response = self
            .inner
            .get(url.clone())
            .send()
            .await
            .map_err(|e| HttpError::Transport(e.to_string()))?;

        Self::read_json(response).await
    }

    async fn post_json(&self, url: &Url, body: &Value) -> Result<Value, HttpError> {
        let response = self
            .inner
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| HttpError::Transport(e.to_string()))?;

        Self::read_json(response).await
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use std::cell::RefCell;

    /// Canned responses plus a log of what was requested
    pub struct MockHttp {
        pub get_response: Result<Value, HttpError>,
        pub post_response: Result<Value, HttpError>,
        pub gets: RefCell<Vec<String>>,
        pub posts: RefCell<Vec<(String, Value)>>,
    }

    impl MockHttp {
        pub fn new(
            get_response: Result<Value, HttpError>,
            post_response: Result<Value, HttpError>,
        ) -> MockHttp {
            MockHttp {
                get_response,
                post_response,
                gets: RefCell::new(Vec::new()),
                posts: RefCell::new(Vec::new()),
            }
        }
    }

    impl HttpClient for MockHttp {
        async fn get_json(&self, url: &Url) -> Result<Value, HttpError> {
            self.gets.borrow_mut().push(url.to_string());
            self.get_response.clone()
        }

        async fn post_json(&self, url: &Url, body: &Value) -> Result<Value, HttpError> {
            self.posts.borrow_mut().push((url.to_string(), body.clone()));
            self.post_response.clone()
        }
    }
}
