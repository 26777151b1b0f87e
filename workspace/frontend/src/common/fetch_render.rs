use yew::prelude::*;
use crate::hooks::RenderState;
use super::loading::{Loading, LoadingSize, LoadingSpinner};
use super::error::ErrorDisplay;

#[derive(Properties)]
pub struct FetchRenderProps<T: Clone + PartialEq + 'static> {
    pub state: RenderState<T>,
    pub render: Callback<T, Html>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    #[prop_or_default]
    pub loading_text: Option<String>,
    /// Inline errors are a single alert line, for regions inside cards
    #[prop_or_default]
    pub compact: bool,
}

impl<T: Clone + PartialEq + 'static> PartialEq for FetchRenderProps<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
            && self.loading_text == other.loading_text
            && self.compact == other.compact
    }
}

/// Component that handles rendering based on RenderState
/// - Loading: shows loading spinner
/// - Failed: shows error display with optional retry
/// - Rendered: calls render callback with data
#[function_component(FetchRender)]
pub fn fetch_render<T>(props: &FetchRenderProps<T>) -> Html
where
    T: Clone + PartialEq + 'static,
{
    match &props.state {
        RenderState::Idle => html! {},
        RenderState::Loading => {
            if props.compact || props.loading_text.is_some() {
                let size = if props.compact { LoadingSize::Small } else { LoadingSize::Large };
                html! { <Loading size={size} text={props.loading_text.clone()} compact={props.compact} /> }
            } else {
                html! { <LoadingSpinner /> }
            }
        }
        RenderState::Failed(err) => {
            html! {
                <ErrorDisplay
                    message={err.to_string()}
                    on_retry={props.on_retry.clone()}
                    compact={props.compact}
                />
            }
        }
        RenderState::Rendered(data) => props.render.emit(data.clone()),
    }
}

/// Renders one independently decoded section of a response: its own error
/// stays inside its own card.
#[derive(Properties)]
pub struct SectionRenderProps<T: Clone + PartialEq + 'static> {
    pub section: Result<T, crate::api_client::ApiError>,
    pub render: Callback<T, Html>,
}

impl<T: Clone + PartialEq + 'static> PartialEq for SectionRenderProps<T> {
    fn eq(&self, other: &Self) -> bool {
        self.section == other.section
    }
}

#[function_component(SectionRender)]
pub fn section_render<T>(props: &SectionRenderProps<T>) -> Html
where
    T: Clone + PartialEq + 'static,
{
    match &props.section {
        Ok(data) => props.render.emit(data.clone()),
        Err(err) => html! { <ErrorDisplay message={err.to_string()} compact=true /> },
    }
}
