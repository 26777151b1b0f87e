use flight_common::TrendPoint;
use yew::prelude::*;

use crate::charts::series::price_trend_chart;
use crate::common::error::ErrorDisplay;
use crate::components::chart_canvas::ChartCanvas;
use crate::settings;

pub const TRENDS_CANVAS_ID: &str = "priceTrendsChart";

#[derive(Properties, PartialEq)]
pub struct TrendsChartProps {
    pub points: Vec<TrendPoint>,
}

#[function_component(TrendsChart)]
pub fn trends_chart(props: &TrendsChartProps) -> Html {
    let currency = settings::get_settings().currency;

    match price_trend_chart(&props.points, &currency) {
        Ok(spec) => html! {
            <ChartCanvas canvas_id={TRENDS_CANVAS_ID} spec={spec} empty_text="No price trends recorded yet" />
        },
        Err(err) => html! { <ErrorDisplay message={err.to_string()} compact=true /> },
    }
}
