use flight_common::HistoryRecord;
use yew::prelude::*;

use crate::charts::series::history_chart;
use crate::common::error::ErrorDisplay;
use crate::components::chart_canvas::ChartCanvas;
use crate::settings;

pub const HISTORY_CANVAS_ID: &str = "priceChart";

#[derive(Properties, PartialEq)]
pub struct HistoryChartProps {
    pub records: Vec<HistoryRecord>,
}

/// Predicted prices over time, drawn in the user's preferred chart style.
#[function_component(HistoryChart)]
pub fn history_chart_view(props: &HistoryChartProps) -> Html {
    let settings = settings::get_settings();

    match history_chart(&props.records, settings.chart_kind.into(), &settings.currency) {
        Ok(spec) => html! {
            <ChartCanvas canvas_id={HISTORY_CANVAS_ID} spec={spec} empty_text="No predictions yet" />
        },
        Err(err) => html! { <ErrorDisplay message={err.to_string()} compact=true /> },
    }
}
