/// Video metadata lookup
use crate::api_data::{VideoDetails, VideoListResponse};
use crate::config::ApiConfig;
use crate::error::HttpError;
use crate::http::HttpClient;

/// Fetch title and description for a video
///
/// Returns `None` when the API knows no such video and also when the
/// request or the response body fails; the fault is only logged.
pub async fn fetch_video_details<C: HttpClient>(
    client: &C,
    config: &ApiConfig,
    video_id: &str,
) -> Option<VideoDetails> {
    match request_details(client, config, video_id).await {
        Ok(Some(details)) => Some(details),
        Ok(None) => {
            log::info!("No video details found for {}", video_id);
            None
        }
        Err(e) => {
            log::error!("Error fetching video details: {}", e);
            None
        }
    }
}

async fn request_details<C: HttpClient>(
    client: &C,
    config: &ApiConfig,
    video_id: &str,
) -> Result<Option<VideoDetails>, HttpError> {
    let url = config.video_details_url(video_id)?;
    let body = client.get_json(&url).await?;

    let response: VideoListResponse =
        serde_json::from_value(body).map_err(|e| HttpError::Decode(e.to_string()))?;

    Ok(response.into_first_details())
}
