use flight_common::format::format_optional_price;
use flight_common::AlertsSummary;
use yew::prelude::*;

use crate::settings;

/// How many watched routes are listed.
const TOP_ROUTES: usize = 5;

#[derive(Properties, PartialEq)]
pub struct AlertsProps {
    pub summary: AlertsSummary,
}

#[function_component(AlertsOverview)]
pub fn alerts_overview(props: &AlertsProps) -> Html {
    let currency = settings::get_settings().currency;
    let summary = &props.summary;
    let routes = summary.top_routes();

    html! {
        <div class="flex flex-col gap-4" id="alertsSummary">
            <div class="stats stats-vertical md:stats-horizontal shadow bg-base-200">
                <div class="stat">
                    <div class="stat-title">{"Total Alerts"}</div>
                    <div class="stat-value text-2xl">{summary.total_alerts}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">{"Active"}</div>
                    <div class="stat-value text-2xl text-success">{summary.active_alerts}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">{"Avg Target"}</div>
                    <div class="stat-value text-2xl">{format_optional_price(summary.avg_target_price, &currency)}</div>
                </div>
            </div>
            if routes.is_empty() {
                <p class="text-sm text-gray-500">{"No routes watched yet"}</p>
            } else {
                <ul class="flex flex-col gap-1">
                    {for routes.into_iter().take(TOP_ROUTES).map(|(route, count)| html! {
                        <li class="flex justify-between text-sm" key={route.to_string()}>
                            <span>{route}</span>
                            <span class="badge badge-ghost">{count}</span>
                        </li>
                    })}
                </ul>
            }
        </div>
    }
}
