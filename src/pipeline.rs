/// Summarize pipeline: locate page, extract id, fetch details, summarize, render
use crate::config::ApiConfig;
use crate::error::PipelineError;
use crate::http::HttpClient;
use crate::locator::PageLocator;
use crate::metadata::fetch_video_details;
use crate::summarizer::get_summary;
use crate::video_id::extract_video_id;
use crate::view_state::{Stage, ViewState, render_summary};
use std::cell::Cell;
use std::rc::Rc;
use uuid::Uuid;

/// Allows at most one run in flight
#[derive(Debug, Clone, Default)]
pub struct RunGuard {
    active: Rc<Cell<Option<Uuid>>>,
}

/// Proof of owning the current run; releases the guard on drop
#[derive(Debug)]
pub struct RunToken {
    id: Uuid,
    active: Rc<Cell<Option<Uuid>>>,
}

impl RunGuard {
    pub fn new() -> Self {
        RunGuard::default()
    }

    pub fn try_begin(&self) -> Option<RunToken> {
        if self.active.get().is_some() {
            return None;
        }
        let id = Uuid::new_v4();
        self.active.set(Some(id));
        Some(RunToken {
            id,
            active: self.active.clone(),
        })
    }

    pub fn is_running(&self) -> bool {
        self.active.get().is_some()
    }
}

impl RunToken {
    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl Drop for RunToken {
    fn drop(&mut self) {
        if self.active.get() == Some(self.id) {
            self.active.set(None);
        }
    }
}

/// Drives one summarize run against a view
pub struct Controller<L, C> {
    locator: L,
    client: C,
    config: ApiConfig,
    guard: RunGuard,
}

impl<L: PageLocator, C: HttpClient> Controller<L, C> {
    pub fn new(locator: L, client: C, config: ApiConfig) -> Self {
        Controller {
            locator,
            client,
            config,
            guard: RunGuard::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.guard.is_running()
    }

    /// Run the whole pipeline once
    ///
    /// `publish` receives a snapshot after every change to `view`. A call
    /// made while another run is in flight returns
    /// `PipelineError::AlreadyRunning` and leaves `view` untouched. Any
    /// other error has already been written to `view` when it is returned.
    pub async fn run<P>(&self, view: &mut ViewState, mut publish: P) -> Result<(), PipelineError>
    where
        P: FnMut(&ViewState),
    {
        let token = match self.guard.try_begin() {
            Some(token) => token,
            None => {
                log::warn!("Summarize requested while a run is in flight");
                return Err(PipelineError::AlreadyRunning);
            }
        };
        log::info!("Run {} started", token.id());

        view.begin_run();
        publish(view);

        let result = self.execute(view, &mut publish).await;
        match &result {
            Ok(()) => {
                view.enter(Stage::Idle);
                log::info!("Run {} finished with {} items", token.id(), view.items.len());
            }
            Err(e) => {
                view.fail(&e.to_string());
                log::error!("Run {} failed: {:?}", token.id(), e);
            }
        }
        publish(view);
        result
    }

    async fn execute<P>(&self, view: &mut ViewState, publish: &mut P) -> Result<(), PipelineError>
    where
        P: FnMut(&ViewState),
    {
        let url = self.locator.active_page_url().await?;

        view.enter(Stage::Extracting);
        publish(view);
        let video_id = extract_video_id(&url).ok_or(PipelineError::InvalidUrl)?;

        view.enter(Stage::FetchingDetails);
        publish(view);
        let details = fetch_video_details(&self.client, &self.config, &video_id)
            .await
            .ok_or(PipelineError::DetailsUnavailable)?;

        view.enter(Stage::Summarizing);
        publish(view);
        let summary = get_summary(&self.client, &self.config, &details.title, &details.description).await;
        if summary.is_sentinel() {
            log::warn!("Rendering fallback summary: {}", summary.as_str());
        }

        view.enter(Stage::Rendering);
        render_summary(view, summary.as_str());
        Ok(())
    }
}
