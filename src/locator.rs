/// Active page URL lookup
use crate::api_data::{PageReply, PageRequest};
use crate::error::LocatorError;
use wasm_bindgen::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn injectContentScript() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn sendMessageToTab(tab_id: i32, message: JsValue) -> Result<JsValue, JsValue>;
}

/// Something that can tell us the URL of the page the user is looking at
#[allow(async_fn_in_trait)]
pub trait PageLocator {
    async fn active_page_url(&self) -> Result<String, LocatorError>;
}

/// Accept a reply only if it carries a non-empty URL
pub fn url_from_reply(reply: Option<PageReply>) -> Result<String, LocatorError> {
    reply
        .and_then(|r| r.url)
        .filter(|url| !url.is_empty())
        .ok_or(LocatorError::MissingUrl)
}

/// Decode a raw reply; `undefined` and `null` mean no reply
pub fn decode_reply(reply: JsValue) -> Result<Option<PageReply>, LocatorError> {
    if reply.is_undefined() || reply.is_null() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(reply)
        .map(Some)
        .map_err(|e| LocatorError::Messaging(format!("Failed to parse reply: {:?}", e)))
}

fn js_error_message(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

/// Injects `content.js` into the active tab and asks it for `location.href`
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensionLocator;

impl PageLocator for ExtensionLocator {
    async fn active_page_url(&self) -> Result<String, LocatorError> {
        let tab_id = injectContentScript()
            .await
            .map_err(|e| LocatorError::Injection(js_error_message(&e)))?
            .as_f64()
            .ok_or_else(|| LocatorError::Injection("active tab has no id".to_string()))?
            as i32;

        let request = serde_wasm_bindgen::to_value(&PageRequest::GetUrl)
            .map_err(|e| LocatorError::Messaging(format!("Failed to serialize: {:?}", e)))?;

        let reply = sendMessageToTab(tab_id, request)
            .await
            .map_err(|e| LocatorError::Messaging(js_error_message(&e)))?;

        let url = url_from_reply(decode_reply(reply)?)?;
        log::debug!("Response from content script: {}", url);
        Ok(url)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_from_reply() {
        let reply = PageReply {
            url: Some("https://www.youtube.com/watch?v=abc".to_string()),
        };
        assert_eq!(
            url_from_reply(Some(reply)),
            Ok("https://www.youtube.com/watch?v=abc".to_string())
        );
    }

    #[test]
    fn test_url_from_missing_reply() {
        assert_eq!(url_from_reply(None), Err(LocatorError::MissingUrl));
        assert_eq!(
            url_from_reply(Some(PageReply { url: None })),
            Err(LocatorError::MissingUrl)
        );
        assert_eq!(
            url_from_reply(Some(PageReply { url: Some(String::new()) })),
            Err(LocatorError::MissingUrl)
        );
    }
}
