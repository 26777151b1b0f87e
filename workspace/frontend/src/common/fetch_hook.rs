use gloo_timers::callback::Interval;
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use crate::api_client::ApiError;
use crate::hooks::{RenderCycle, RenderState};

/// Region state plus a callback that starts a new render cycle.
///
/// Every emit tags its fetch with a fresh cycle id; a response that arrives
/// after a newer cycle was started is dropped. The latest `fetch_fn` passed
/// in is the one used, so closures can capture current inputs.
#[hook]
pub fn use_lazy_render_cycle<T, F, Fut>(fetch_fn: F) -> (UseStateHandle<RenderState<T>>, Callback<()>)
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = use_state(|| RenderState::Idle);
    let cycle = use_mut_ref(RenderCycle::new);
    let latest = use_mut_ref(|| None::<Rc<F>>);
    *latest.borrow_mut() = Some(Rc::new(fetch_fn));

    let refetch = {
        let state = state.clone();
        let cycle = cycle.clone();
        let latest = latest.clone();

        use_callback((), move |_, _| {
            let Some(fetch_fn) = latest.borrow().clone() else {
                return;
            };

            let id = cycle.borrow_mut().begin();
            log::trace!("Render cycle {:?} started", id);
            state.set(RenderState::Loading);

            let state = state.clone();
            let cycle = cycle.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = (*fetch_fn)().await;
                match cycle.borrow().settle(id, result) {
                    Some(next) => state.set(next),
                    None => log::debug!("Discarding stale completion of cycle {:?}", id),
                }
            });
        })
    };

    (state, refetch)
}

/// Same as [`use_lazy_render_cycle`] but starts the first cycle on mount.
#[hook]
pub fn use_render_cycle<T, F, Fut>(fetch_fn: F) -> (UseStateHandle<RenderState<T>>, Callback<()>)
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let (state, refetch) = use_lazy_render_cycle(fetch_fn);

    // Fetch on mount
    {
        let refetch = refetch.clone();
        use_effect_with((), move |_| {
            refetch.emit(());
            || ()
        });
    }

    (state, refetch)
}

/// Emits `refresh` every `interval_ms` while the component is mounted.
/// A zero interval disables the timer.
#[hook]
pub fn use_periodic_refresh(interval_ms: u32, refresh: Callback<()>) {
    use_effect_with(interval_ms, move |interval_ms| {
        let interval_ms = *interval_ms;
        let interval = (interval_ms > 0).then(|| {
            Interval::new(interval_ms, move || {
                log::debug!("Periodic refresh ({} ms)", interval_ms);
                refresh.emit(());
            })
        });

        move || drop(interval)
    });
}
