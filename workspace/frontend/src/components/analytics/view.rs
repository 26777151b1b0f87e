use flight_common::{AlertsSummary, Deal, TrendPoint};
use yew::prelude::*;

use super::alerts::AlertsOverview;
use super::deals::BestDeals;
use super::route::RouteAnalytics;
use super::trends::TrendsChart;
use crate::api_client::analytics::{get_analytics, AnalyticsReport};
use crate::common::fetch_hook::{use_periodic_refresh, use_render_cycle};
use crate::common::fetch_render::{FetchRender, SectionRender};
use crate::settings;

type Trends = Vec<TrendPoint>;
type Deals = Vec<Deal>;

#[derive(Properties, PartialEq)]
pub struct AnalyticsProps {
    #[prop_or_default]
    pub reload: u32,
}

#[function_component(Analytics)]
pub fn analytics(props: &AnalyticsProps) -> Html {
    let (state, refetch) = use_render_cycle(get_analytics);
    use_periodic_refresh(settings::get_settings().refresh_interval_ms, refetch.clone());

    {
        let refetch = refetch.clone();
        use_effect_with(props.reload, move |reload| {
            if *reload > 0 {
                refetch.emit(());
            }
            || ()
        });
    }

    let render_report = Callback::from(|report: AnalyticsReport| {
        html! {
            <>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Price Trends"}</h2>
                        <SectionRender<Trends>
                            section={report.price_trends}
                            render={Callback::from(|points: Trends| html! { <TrendsChart points={points} /> })}
                        />
                    </div>
                </div>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h2 class="card-title">{"Best Deals"}</h2>
                            <SectionRender<Deals>
                                section={report.best_deals}
                                render={Callback::from(|deals: Deals| html! { <BestDeals deals={deals} /> })}
                            />
                        </div>
                    </div>
                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h2 class="card-title">{"Price Alerts"}</h2>
                            <SectionRender<AlertsSummary>
                                section={report.alerts_summary}
                                render={Callback::from(|summary: AlertsSummary| html! { <AlertsOverview summary={summary} /> })}
                            />
                        </div>
                    </div>
                </div>
            </>
        }
    });

    html! {
        <div class="flex flex-col gap-6">
            <FetchRender<AnalyticsReport>
                state={(*state).clone()}
                render={render_report}
                on_retry={Some(refetch)}
                loading_text={Some("Loading analytics...".to_string())}
            />
            <RouteAnalytics />
        </div>
    }
}
