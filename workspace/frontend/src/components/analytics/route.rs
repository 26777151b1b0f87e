use flight_common::format::{format_optional_price, format_price};
use flight_common::{AirlineComparison, BookingTimeAdvice, RouteStats, DESTINATIONS, SOURCES};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::api_client::analytics::{get_route_analytics, RouteAnalyticsReport};
use crate::charts::series::airline_chart;
use crate::common::error::ErrorDisplay;
use crate::common::fetch_hook::use_lazy_render_cycle;
use crate::common::fetch_render::{FetchRender, SectionRender};
use crate::components::chart_canvas::ChartCanvas;
use crate::settings;

pub const AIRLINE_CANVAS_ID: &str = "airlineComparisonChart";

type Airlines = Vec<AirlineComparison>;

#[derive(Properties, PartialEq)]
struct RouteSelectProps {
    id: AttrValue,
    label: AttrValue,
    options: &'static [&'static str],
    value: String,
    on_change: Callback<String>,
}

#[function_component(RouteSelect)]
fn route_select(props: &RouteSelectProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    html! {
        <label class="form-control w-full max-w-xs">
            <div class="label"><span class="label-text">{props.label.clone()}</span></div>
            <select id={props.id.clone()} class="select select-bordered" {onchange}>
                <option value="" selected={props.value.is_empty()}>{"Select..."}</option>
                {for props.options.iter().map(|option| html! {
                    <option value={*option} selected={props.value == *option}>{*option}</option>
                })}
            </select>
        </label>
    }
}

/// Statistics for the route picked in the two selectors. Nothing is fetched
/// until both are set; every change after that starts a new cycle.
#[function_component(RouteAnalytics)]
pub fn route_analytics() -> Html {
    let source = use_state(String::new);
    let destination = use_state(String::new);

    let (state, fetch) = {
        let source = (*source).clone();
        let destination = (*destination).clone();
        use_lazy_render_cycle(move || {
            let source = source.clone();
            let destination = destination.clone();
            async move { get_route_analytics(&source, &destination).await }
        })
    };

    {
        let fetch = fetch.clone();
        use_effect_with(((*source).clone(), (*destination).clone()), move |(source, destination)| {
            if !source.is_empty() && !destination.is_empty() {
                log::debug!("Route selected: {} -> {}", source, destination);
                fetch.emit(());
            }
            || ()
        });
    }

    let on_source = {
        let source = source.clone();
        Callback::from(move |value: String| source.set(value))
    };
    let on_destination = {
        let destination = destination.clone();
        Callback::from(move |value: String| destination.set(value))
    };

    let selected = !source.is_empty() && !destination.is_empty();

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"Route Analytics"}</h2>
                <div class="flex flex-wrap gap-4">
                    <RouteSelect id="routeSource" label="From" options={SOURCES} value={(*source).clone()} on_change={on_source} />
                    <RouteSelect id="routeDestination" label="To" options={DESTINATIONS} value={(*destination).clone()} on_change={on_destination} />
                </div>
                if selected {
                    <FetchRender<RouteAnalyticsReport>
                        state={(*state).clone()}
                        on_retry={Some(fetch)}
                        compact=true
                        render={Callback::from(|report: RouteAnalyticsReport| html! { <RouteReport report={report} /> })}
                    />
                } else {
                    <p class="text-sm text-gray-500 mt-4">{"Pick a source and destination to see route statistics"}</p>
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct RouteReportProps {
    report: RouteAnalyticsReport,
}

#[function_component(RouteReport)]
fn route_report(props: &RouteReportProps) -> Html {
    let report = &props.report;

    html! {
        <div class="flex flex-col gap-6 mt-4">
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <SectionRender<RouteStats>
                    section={report.route_stats.clone()}
                    render={Callback::from(|stats: RouteStats| html! { <RouteStatsCard stats={stats} /> })}
                />
                <SectionRender<BookingTimeAdvice>
                    section={report.best_booking_time.clone()}
                    render={Callback::from(|advice: BookingTimeAdvice| html! { <BookingTimeCard advice={advice} /> })}
                />
            </div>
            <SectionRender<Airlines>
                section={report.airline_comparison.clone()}
                render={Callback::from(|airlines: Airlines| html! { <AirlineComparisonChart airlines={airlines} /> })}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct RouteStatsCardProps {
    stats: RouteStats,
}

#[function_component(RouteStatsCard)]
fn route_stats_card(props: &RouteStatsCardProps) -> Html {
    let currency = settings::get_settings().currency;
    let stats = &props.stats;

    let range = format!(
        "{} - {}",
        format_optional_price(stats.min_price, &currency),
        format_optional_price(stats.max_price, &currency)
    );

    let mut airlines: Vec<(&String, &u32)> = stats.airlines.iter().collect();
    airlines.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    html! {
        <div class="flex flex-col gap-3" id="routeStats">
            <div class="stats stats-vertical shadow bg-base-200">
                <div class="stat">
                    <div class="stat-title">{"Average Price"}</div>
                    <div class="stat-value text-2xl">{format_optional_price(stats.avg_price, &currency)}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">{"Price Range"}</div>
                    <div class="stat-value text-lg">{range}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">{"Predictions"}</div>
                    <div class="stat-value text-2xl">{stats.total_predictions}</div>
                </div>
            </div>
            if !airlines.is_empty() {
                <div class="flex flex-wrap gap-2">
                    {for airlines.into_iter().map(|(airline, count)| html! {
                        <span class="badge badge-outline" key={airline.clone()}>{format!("{}: {}", airline, count)}</span>
                    })}
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct BookingTimeCardProps {
    advice: BookingTimeAdvice,
}

#[function_component(BookingTimeCard)]
fn booking_time_card(props: &BookingTimeCardProps) -> Html {
    let currency = settings::get_settings().currency;
    let advice = &props.advice;

    html! {
        <div class="flex flex-col gap-2" id="bookingTime">
            <div class="alert alert-success">
                <i class="fas fa-clock"></i>
                <div>
                    <div class="font-semibold">{format!("Best time: {}", advice.best_time)}</div>
                    <div class="text-sm">{format_price(advice.best_price, &currency)}</div>
                </div>
            </div>
            <div class="alert alert-warning">
                <i class="fas fa-exclamation-triangle"></i>
                <div>
                    <div class="font-semibold">{format!("Avoid: {}", advice.worst_time)}</div>
                    <div class="text-sm">{format_optional_price(advice.worst_price, &currency)}</div>
                </div>
            </div>
            <p class="text-sm">
                {"Potential savings: "}
                <span class="font-bold text-success">{format_price(advice.savings_potential, &currency)}</span>
            </p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AirlineComparisonChartProps {
    airlines: Vec<AirlineComparison>,
}

#[function_component(AirlineComparisonChart)]
fn airline_comparison_chart(props: &AirlineComparisonChartProps) -> Html {
    let currency = settings::get_settings().currency;

    match airline_chart(&props.airlines, &currency) {
        Ok(spec) => html! {
            <ChartCanvas canvas_id={AIRLINE_CANVAS_ID} spec={spec} empty_text="No airlines fly this route yet" />
        },
        Err(err) => html! { <ErrorDisplay message={err.to_string()} compact=true /> },
    }
}
