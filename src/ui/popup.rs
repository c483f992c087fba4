/// Popup UI for the YouTube summarizer extension

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use patternfly_yew::prelude::*;
use crate::config::ApiConfig;
use crate::error::PipelineError;
use crate::http::ReqwestClient;
use crate::locator::ExtensionLocator;
use crate::pipeline::Controller;
use crate::ui::components::{StageLine, SummaryList};
use crate::view_state::ViewState;

type PopupController = Controller<ExtensionLocator, ReqwestClient>;

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(ViewState::new);
    let controller = use_memo((), |_| {
        PopupController::new(ExtensionLocator, ReqwestClient::new(), ApiConfig::from_build_env())
    });

    // Summarize button handler
    let on_summarize = {
        let view = view.clone();
        let controller = controller.clone();

        Callback::from(move |_: MouseEvent| {
            let view = view.clone();
            let controller = controller.clone();

            spawn_local(async move {
                let mut current = (*view).clone();
                let publish = {
                    let view = view.clone();
                    move |snapshot: &ViewState| view.set(snapshot.clone())
                };

                match controller.run(&mut current, publish).await {
                    Ok(()) => {}
                    Err(PipelineError::AlreadyRunning) => {}
                    Err(e) => notify_user(&e.to_string()),
                }
            });
        })
    };

    let is_busy = view.is_busy() || controller.is_running();

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"YouTube Summarizer"}</h1>

            <Button
                onclick={on_summarize}
                disabled={is_busy}
                variant={ButtonVariant::Primary}
                block={true}
            >
                {view.button_label.clone()}
            </Button>

            if is_busy {
                <StageLine message={view.stage.describe()} />
            }

            if let Some(err) = view.error.clone() {
                <div class="message-top-margin">
                    <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                        {err}
                    </Alert>
                </div>
            }

            <SummaryList items={view.items.clone()} />
        </div>
    }
}

// Blocking notification, as the user expects from a failed click
fn notify_user(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::error!("Failed to show alert: {:?}", e);
        }
    }
}
