use flight_common::format::format_price;
use flight_common::{PredictRequest, Prediction};
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::form::PredictForm;
use super::user_stats::UserStats;
use crate::api_client::prediction::predict;
use crate::common::fetch_hook::use_lazy_render_cycle;
use crate::common::toast::ToastContext;
use crate::hooks::RenderState;
use crate::settings;

/// Wait before re-reading the stats so the new prediction is counted.
const STATS_REFRESH_DELAY_MS: u32 = 1000;

#[function_component(Predict)]
pub fn predict_view() -> Html {
    let form = use_state(PredictRequest::default);
    let stats_reload = use_state(|| 0u32);

    let (state, submit) = {
        let request = (*form).clone();
        use_lazy_render_cycle(move || {
            let request = request.clone();
            async move { predict(&request).await }
        })
    };

    // Re-read the stats shortly after each successful prediction
    {
        let stats_reload = stats_reload.clone();
        let toast = use_context::<ToastContext>();
        use_effect_with((*state).clone(), move |state| {
            if let (Some(toast), RenderState::Rendered(_)) = (&toast, state) {
                toast.show_success("Prediction ready");
            }
            let pending = state.is_rendered().then(|| {
                let stats_reload = stats_reload.clone();
                Timeout::new(STATS_REFRESH_DELAY_MS, move || stats_reload.set(*stats_reload + 1))
            });
            move || drop(pending)
        });
    }

    let on_change = {
        let form = form.clone();
        Callback::from(move |next: PredictRequest| form.set(next))
    };

    html! {
        <div class="grid grid-cols-1 xl:grid-cols-3 gap-6">
            <div class="card bg-base-100 shadow xl:col-span-2">
                <div class="card-body">
                    <h2 class="card-title">{"Predict a Fare"}</h2>
                    <PredictForm
                        form={(*form).clone()}
                        on_change={on_change}
                        on_submit={submit}
                        busy={state.is_loading()}
                    />
                    <PredictionResult state={(*state).clone()} />
                </div>
            </div>
            <div class="flex flex-col gap-4">
                <h2 class="text-lg font-semibold">{"Your Stats"}</h2>
                <UserStats reload={*stats_reload} />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PredictionResultProps {
    state: RenderState<Prediction>,
}

#[function_component(PredictionResult)]
fn prediction_result(props: &PredictionResultProps) -> Html {
    match &props.state {
        RenderState::Idle | RenderState::Loading => html! {},
        RenderState::Failed(err) => html! {
            <div class="alert alert-error mt-4" id="result" role="alert">
                <i class="fas fa-exclamation-circle"></i>
                <span>{"Error: "}<span class="error-message">{err.to_string()}</span></span>
            </div>
        },
        RenderState::Rendered(prediction) => {
            let currency = settings::get_settings().currency;
            html! {
                <div class="card bg-primary text-primary-content mt-4" id="result">
                    <div class="card-body items-center text-center">
                        <p class="text-sm uppercase tracking-wide">{"Predicted Price"}</p>
                        <p class="text-4xl font-bold">{format_price(prediction.price, &currency)}</p>
                        if let Some(duration) = prediction.duration {
                            <p class="text-sm">{format!("Flight duration: {}", duration)}</p>
                        }
                    </div>
                </div>
            }
        }
    }
}
