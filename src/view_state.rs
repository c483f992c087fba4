/// Popup view state and summary rendering
use crate::config::{BUSY_LABEL, IDLE_LABEL};

/// Where a summarize run currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Idle,
    Locating,
    Extracting,
    FetchingDetails,
    Summarizing,
    Rendering,
    Error,
}

impl Stage {
    /// True while a run owns the view
    pub fn is_busy(self) -> bool {
        !matches!(self, Stage::Idle | Stage::Error)
    }

    pub fn describe(self) -> &'static str {
        match self {
            Stage::Idle => "Ready",
            Stage::Locating => "Reading the active tab...",
            Stage::Extracting => "Reading the video id...",
            Stage::FetchingDetails => "Fetching video details...",
            Stage::Summarizing => "Asking for a summary...",
            Stage::Rendering => "Rendering summary...",
            Stage::Error => "Failed",
        }
    }
}

/// Everything the popup shows
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub button_label: String,
    pub items: Vec<String>,
    pub stage: Stage,
    pub error: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        ViewState {
            button_label: IDLE_LABEL.to_string(),
            items: Vec::new(),
            stage: Stage::Idle,
            error: None,
        }
    }

    /// Busy label, previous error cleared; old items stay until replaced
    pub fn begin_run(&mut self) {
        self.button_label = BUSY_LABEL.to_string();
        self.error = None;
        self.stage = Stage::Locating;
    }

    pub fn enter(&mut self, stage: Stage) {
        log::debug!("Stage {:?} -> {:?}", self.stage, stage);
        self.stage = stage;
    }

    pub fn fail(&mut self, message: &str) {
        self.button_label = IDLE_LABEL.to_string();
        self.error = Some(message.to_string());
        self.stage = Stage::Error;
    }

    pub fn is_busy(&self) -> bool {
        self.stage.is_busy()
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-blank lines of a summary, in order, untrimmed
pub fn summary_points(summary: &str) -> Vec<String> {
    summary
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Show a summary as a bullet list and restore the idle label
pub fn render_summary(view: &mut ViewState, summary: &str) {
    view.button_label = IDLE_LABEL.to_string();
    view.items = summary_points(summary);
}
