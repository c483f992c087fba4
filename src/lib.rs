/// YouTube Summarizer - Chrome Extension that summarizes the video in the active tab
/// Built with Rust + WASM + Yew

mod api_data;
mod config;
mod error;
mod http;
mod locator;
mod metadata;
mod pipeline;
mod summarizer;
mod video_id;
mod view_state;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export video id extraction for JavaScript access
#[wasm_bindgen]
pub fn extract_video_id(url: &str) -> Option<String> {
    video_id::extract_video_id(url)
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
