use flight_common::format::count_up;
use gloo_timers::callback::{Interval, Timeout};
use gloo_timers::future::TimeoutFuture;
use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

const FRAME_MS: u32 = 16;

/// Animates a number from 0 up to `target` over `duration_ms`.
#[hook]
pub fn use_count_up(target: f64, duration_ms: u32) -> f64 {
    let shown = use_state(|| 0.0_f64);

    {
        let shown = shown.clone();
        use_effect_with(target.to_bits(), move |bits| {
            let target = f64::from_bits(*bits);
            let alive = Rc::new(Cell::new(true));

            if duration_ms == 0 {
                shown.set(target);
            } else {
                shown.set(0.0);
                let alive = alive.clone();
                let started = js_sys::Date::now();
                wasm_bindgen_futures::spawn_local(async move {
                    loop {
                        TimeoutFuture::new(FRAME_MS).await;
                        if !alive.get() {
                            break;
                        }
                        let progress = (js_sys::Date::now() - started) / f64::from(duration_ms);
                        shown.set(count_up(0.0, target, progress));
                        if progress >= 1.0 {
                            break;
                        }
                    }
                });
            }

            move || alive.set(false)
        });
    }

    *shown
}

/// Number of leading items that should be visible `step_ms` apart after
/// `items` last changed. Pending reveals are cancelled when `items` changes
/// or the component unmounts.
#[hook]
pub fn use_staggered_reveal<K>(items: K, delays: Vec<u32>) -> usize
where
    K: PartialEq + 'static,
{
    let revealed = use_state(|| 0usize);

    {
        let revealed = revealed.clone();
        use_effect_with(items, move |_| {
            revealed.set(0);
            let timeouts: Vec<Timeout> = delays
                .into_iter()
                .enumerate()
                .map(|(index, delay)| {
                    let revealed = revealed.clone();
                    Timeout::new(delay, move || revealed.set(index + 1))
                })
                .collect();

            move || drop(timeouts)
        });
    }

    *revealed
}

/// Dot count (0 to 3) for a "Working..." label, ticking every `step_ms`
/// while `active`. Resets to 0 when inactive.
#[hook]
pub fn use_ellipsis(active: bool, step_ms: u32) -> usize {
    let dots = use_state(|| 0usize);

    {
        let dots = dots.clone();
        use_effect_with(active, move |active| {
            dots.set(0);
            let ticker = active.then(|| {
                let dots = dots.clone();
                let count = Rc::new(Cell::new(0usize));
                Interval::new(step_ms, move || {
                    count.set((count.get() + 1) % 4);
                    dots.set(count.get());
                })
            });

            move || drop(ticker)
        });
    }

    *dots
}
