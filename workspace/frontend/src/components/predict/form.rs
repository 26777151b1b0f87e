use flight_common::{PredictRequest, AIRLINES, DESTINATIONS, MAX_STOPS, SOURCES};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::common::animation::use_ellipsis;

const DOTS_STEP_MS: u32 = 400;

#[derive(Properties, PartialEq)]
pub struct PredictFormProps {
    pub form: PredictRequest,
    pub on_change: Callback<PredictRequest>,
    pub on_submit: Callback<()>,
    #[prop_or_default]
    pub busy: bool,
}

/// Callback for a form control that writes its value into one field.
fn field<E>(props: &PredictFormProps, read: fn(&E) -> String, apply: fn(&mut PredictRequest, String)) -> Callback<Event>
where
    E: wasm_bindgen::JsCast + AsRef<web_sys::EventTarget> + 'static,
{
    let form = props.form.clone();
    let on_change = props.on_change.clone();
    Callback::from(move |e: Event| {
        let target: E = e.target_unchecked_into();
        let mut next = form.clone();
        apply(&mut next, read(&target));
        on_change.emit(next);
    })
}

fn select_value(select: &HtmlSelectElement) -> String {
    select.value()
}

fn input_value(input: &HtmlInputElement) -> String {
    input.value()
}

fn options(values: &'static [&'static str], selected: &str) -> Html {
    html! {
        <>
            <option value="" selected={selected.is_empty()} disabled=true>{"Select..."}</option>
            {for values.iter().map(|value| html! {
                <option value={*value} selected={selected == *value}>{*value}</option>
            })}
        </>
    }
}

#[function_component(PredictForm)]
pub fn predict_form(props: &PredictFormProps) -> Html {
    let dots = use_ellipsis(props.busy, DOTS_STEP_MS);
    let form = &props.form;

    let on_source = field(props, select_value, |f, v| f.source = v);
    let on_destination = field(props, select_value, |f, v| f.destination = v);
    let on_airline = field(props, select_value, |f, v| f.airline = v);
    let on_stops = field(props, select_value, |f, v| f.stops = v.parse().unwrap_or_default());
    let on_departure = field(props, input_value, |f, v| f.departure = v);
    let on_arrival = field(props, input_value, |f, v| f.arrival = v);

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form class="grid grid-cols-1 md:grid-cols-2 gap-4" id="predictionForm" {onsubmit}>
            <label class="form-control">
                <div class="label"><span class="label-text">{"From"}</span></div>
                <select id="source" class="select select-bordered" onchange={on_source}>
                    {options(SOURCES, &form.source)}
                </select>
            </label>
            <label class="form-control">
                <div class="label"><span class="label-text">{"To"}</span></div>
                <select id="destination" class="select select-bordered" onchange={on_destination}>
                    {options(DESTINATIONS, &form.destination)}
                </select>
            </label>
            <label class="form-control">
                <div class="label"><span class="label-text">{"Airline"}</span></div>
                <select id="airline" class="select select-bordered" onchange={on_airline}>
                    {options(AIRLINES, &form.airline)}
                </select>
            </label>
            <label class="form-control">
                <div class="label"><span class="label-text">{"Stops"}</span></div>
                <select id="stops" class="select select-bordered" onchange={on_stops}>
                    {for (0..=MAX_STOPS).map(|stops| html! {
                        <option value={stops.to_string()} selected={form.stops == stops}>{stops}</option>
                    })}
                </select>
            </label>
            <label class="form-control">
                <div class="label"><span class="label-text">{"Departure"}</span></div>
                <input id="departure" type="datetime-local" class="input input-bordered" value={form.departure.clone()} onchange={on_departure} />
            </label>
            <label class="form-control">
                <div class="label"><span class="label-text">{"Arrival"}</span></div>
                <input id="arrival" type="datetime-local" class="input input-bordered" value={form.arrival.clone()} onchange={on_arrival} />
            </label>
            <div class="md:col-span-2">
                <button type="submit" class="btn btn-primary w-full" disabled={props.busy}>
                    if props.busy {
                        <span class="loading loading-spinner loading-sm"></span>
                        {format!("Predicting{}", ".".repeat(dots))}
                    } else {
                        <i class="fas fa-magic"></i>{" Predict Price"}
                    }
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> PredictFormProps {
        PredictFormProps {
            form: PredictRequest::default(),
            on_change: Callback::noop(),
            on_submit: Callback::noop(),
            busy: false,
        }
    }

    #[test]
    fn test_field_callbacks_for_both_control_kinds() {
        let props = props();
        let select: Callback<Event> = field(&props, select_value, |f, v| f.airline = v);
        let input: Callback<Event> = field(&props, input_value, |f, v| f.departure = v);
        assert_ne!(select, input);
    }
}
