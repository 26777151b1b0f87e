use yew::prelude::*;

use crate::charts::{self, ChartSpec};
use crate::common::error::ErrorDisplay;

#[derive(Properties, PartialEq)]
pub struct ChartCanvasProps {
    /// DOM id the chart registry keys the widget by
    pub canvas_id: AttrValue,
    pub spec: ChartSpec,
    #[prop_or(AttrValue::Static("height: 320px;"))]
    pub style: AttrValue,
    #[prop_or(AttrValue::Static("No data to chart yet"))]
    pub empty_text: AttrValue,
}

/// Host element for one registry-owned chart. The chart is redrawn whenever
/// the chart description changes and destroyed when the component unmounts.
#[function_component(ChartCanvas)]
pub fn chart_canvas(props: &ChartCanvasProps) -> Html {
    let error = use_state(|| None::<String>);
    let is_empty = props.spec.is_empty();

    {
        let error = error.clone();
        use_effect_with((props.canvas_id.clone(), props.spec.clone()), move |(canvas_id, spec)| {
            let canvas_id = canvas_id.to_string();

            if spec.is_empty() {
                charts::destroy_chart(&canvas_id);
                error.set(None);
            } else {
                match charts::render_chart(&canvas_id, spec) {
                    Ok(()) => {
                        log::trace!("Chart drawn on {}", canvas_id);
                        error.set(None);
                    }
                    Err(err) => {
                        log::error!("Chart on {} failed: {}", canvas_id, err);
                        error.set(Some(err.to_string()));
                    }
                }
            }

            move || {
                charts::destroy_chart(&canvas_id);
            }
        });
    }

    html! {
        <div class="relative">
            if let Some(message) = (*error).clone() {
                <ErrorDisplay message={message} compact=true />
            }
            if is_empty {
                <div class="flex items-center justify-center text-sm text-gray-500" style={props.style.clone()}>
                    {props.empty_text.clone()}
                </div>
            }
            // The host stays mounted so the registry always finds its element.
            <div
                id={props.canvas_id.clone()}
                class={classes!("chart-container", is_empty.then_some("hidden"))}
                style={props.style.clone()}
            ></div>
        </div>
    }
}
