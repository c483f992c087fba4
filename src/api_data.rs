/// Wire types for the video metadata API, the generative API and page messaging
use serde::{Deserialize, Serialize};

/// Title and description of a single video
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoDetails {
    pub title: String,
    pub description: String,
}

/// `videos?part=snippet` response body
#[derive(Debug, Clone, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoItem {
    pub snippet: Snippet,
}

/// Metadata block of a video
#[derive(Debug, Clone, Deserialize)]
pub struct Snippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl VideoListResponse {
    /// Details of the first item, if any
    pub fn into_first_details(self) -> Option<VideoDetails> {
        self.items.into_iter().next().map(|item| VideoDetails {
            title: item.snippet.title,
            description: item.snippet.description,
        })
    }
}

/// `generateContent` request body
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Part {
    pub text: String,
}

impl GenerateContentRequest {
    /// A request carrying a single text prompt
    pub fn from_prompt(prompt: String) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        }
    }
}

/// Request sent into the page context
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action")]
pub enum PageRequest {
    #[serde(rename = "getURL")]
    GetUrl,
}

/// Reply from the page context
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PageReply {
    #[serde(default)]
    pub url: Option<String>,
}
