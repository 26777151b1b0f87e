use flight_common::format::format_datetime;
use flight_common::summary::latest_timestamp;
use flight_common::{summarize, HistoryRecord};
use yew::prelude::*;

use crate::api_client::history::get_history;
use crate::common::fetch_hook::use_render_cycle;
use crate::common::fetch_render::FetchRender;
use crate::components::history::StatsCards;
use crate::settings;

type Records = Vec<HistoryRecord>;

#[derive(Properties, PartialEq)]
pub struct UserStatsProps {
    /// Incremented by the parent to pull fresh numbers
    #[prop_or_default]
    pub reload: u32,
}

/// The user's running totals, shown beside the prediction form.
#[function_component(UserStats)]
pub fn user_stats(props: &UserStatsProps) -> Html {
    let (state, refetch) = use_render_cycle(get_history);

    {
        let refetch = refetch.clone();
        use_effect_with(props.reload, move |reload| {
            if *reload > 0 {
                log::debug!("Refreshing user stats ({})", reload);
                refetch.emit(());
            }
            || ()
        });
    }

    let currency: AttrValue = settings::get_settings().currency.into();

    html! {
        <FetchRender<Records>
            state={(*state).clone()}
            on_retry={Some(refetch)}
            compact=true
            render={Callback::from(move |records: Records| {
                let last = latest_timestamp(&records)
                    .map(|ts| format_datetime(&ts))
                    .unwrap_or_else(|| "Never".to_string());
                html! {
                    <div class="flex flex-col gap-2">
                        <StatsCards stats={summarize(&records)} currency={currency.clone()} />
                        <p class="text-sm text-gray-500 text-right" id="lastPrediction">
                            {"Last prediction: "}{last}
                        </p>
                    </div>
                }
            })}
        />
    }
}
