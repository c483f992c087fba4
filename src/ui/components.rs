/// Reusable UI components

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryListProps {
    pub items: Vec<String>,
}

/// One `<li>` per summary point; text is never parsed as markup
#[function_component(SummaryList)]
pub fn summary_list(props: &SummaryListProps) -> Html {
    if props.items.is_empty() {
        return html! {};
    }

    html! {
        <ul id="summaryOutput" class="summary-output">
            {for props.items.iter().map(|item| html! {
                <li class="summary-item">{item.clone()}</li>
            })}
        </ul>
    }
}

#[derive(Properties, PartialEq)]
pub struct StageLineProps {
    pub message: AttrValue,
}

#[function_component(StageLine)]
pub fn stage_line(props: &StageLineProps) -> Html {
    html! {
        <div class="stage-line">
            <div class="loading-spinner"></div>
            <p class="loading-message">{props.message.clone()}</p>
        </div>
    }
}
