use flight_common::{summarize, HistoryRecord};
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::chart::HistoryChart;
use super::stats::StatsCards;
use super::table::HistoryTable;
use crate::api_client::history::{get_history, start_export};
use crate::common::fetch_hook::{use_periodic_refresh, use_render_cycle};
use crate::common::fetch_render::FetchRender;
use crate::common::toast::ToastContext;
use crate::settings;

type Records = Vec<HistoryRecord>;

/// Pause between clicking export and the download starting.
const EXPORT_DELAY_MS: u32 = 500;

#[derive(Properties, PartialEq)]
pub struct HistoryProps {
    /// Bumped by the page shell to force a reload
    #[prop_or_default]
    pub reload: u32,
}

#[function_component(History)]
pub fn history(props: &HistoryProps) -> Html {
    let settings = settings::get_settings();
    let toast = use_context::<ToastContext>();
    let (state, refetch) = use_render_cycle(get_history);
    let exporting = use_state(|| false);

    use_periodic_refresh(settings.refresh_interval_ms, refetch.clone());

    {
        let refetch = refetch.clone();
        use_effect_with(props.reload, move |reload| {
            if *reload > 0 {
                log::debug!("History reload requested ({})", reload);
                refetch.emit(());
            }
            || ()
        });
    }

    let on_refresh = {
        let refetch = refetch.clone();
        Callback::from(move |_: MouseEvent| {
            log::debug!("User refreshed history");
            refetch.emit(());
        })
    };

    let on_export = {
        let exporting = exporting.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            if *exporting {
                return;
            }
            exporting.set(true);
            if let Some(toast) = &toast {
                toast.show_info("Preparing export...".to_string());
            }

            let exporting = exporting.clone();
            let toast = toast.clone();
            Timeout::new(EXPORT_DELAY_MS, move || {
                if let Err(err) = start_export() {
                    log::error!("Export failed: {}", err);
                    if let Some(toast) = &toast {
                        toast.show_error(err.to_string());
                    }
                }
                exporting.set(false);
            })
            .forget();
        })
    };

    let currency: AttrValue = settings.currency.clone().into();
    let retry = refetch.clone();

    html! {
        <div class="flex flex-col gap-6">
            <div class="flex justify-end gap-2">
                <button class="btn btn-sm btn-ghost" onclick={on_refresh} disabled={state.is_loading()}>
                    <i class="fas fa-sync-alt"></i>{" Refresh"}
                </button>
                <button class="btn btn-sm btn-primary" id="exportBtn" onclick={on_export} disabled={*exporting}>
                    if *exporting {
                        <span class="loading loading-spinner loading-xs"></span>{" Exporting..."}
                    } else {
                        <i class="fas fa-file-export"></i>{" Export"}
                    }
                </button>
            </div>

            <FetchRender<Records>
                state={(*state).clone()}
                on_retry={Some(retry.clone())}
                compact=true
                render={{
                    let currency = currency.clone();
                    Callback::from(move |records: Records| {
                        html! { <StatsCards stats={summarize(&records)} currency={currency.clone()} /> }
                    })
                }}
            />

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Price History"}</h2>
                    <FetchRender<Records>
                        state={(*state).clone()}
                        on_retry={Some(retry.clone())}
                        render={Callback::from(|records: Records| {
                            html! { <HistoryChart records={records} /> }
                        })}
                    />
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Prediction History"}</h2>
                    <FetchRender<Records>
                        state={(*state).clone()}
                        on_retry={Some(retry)}
                        loading_text={Some("Loading history...".to_string())}
                        render={Callback::from(|records: Records| {
                            html! { <HistoryTable records={records} /> }
                        })}
                    />
                </div>
            </div>
        </div>
    }
}
