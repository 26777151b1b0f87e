use yew::prelude::*;
use yew_router::prelude::*;

mod components;
pub mod api_client;
pub mod charts;
pub mod common;
pub mod hooks;
pub mod settings;
pub mod table;

use api_client::preferences::get_preferences;
use common::loading::Loading;
use common::toast::ToastProvider;
use components::analytics::Analytics;
use components::history::History;
use components::layout::Layout;
use components::predict::Predict;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/predict-page")]
    Predict,
    #[at("/history-page")]
    History,
    #[at("/analytics-page")]
    Analytics,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home | Route::Predict => {
            log::trace!("Rendering Predict page");
            html! { <Layout title="Flight Price Prediction"><Predict /></Layout> }
        }
        Route::History => {
            log::trace!("Rendering History page");
            html! { <HistoryPage /> }
        }
        Route::Analytics => {
            log::trace!("Rendering Analytics page");
            html! { <AnalyticsPage /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1>{"404 Not Found"}</h1></Layout> }
        }
    }
}

/// Reload counter driven by the navbar refresh button.
#[hook]
fn use_reload_trigger() -> (u32, Callback<()>) {
    let reload = use_state(|| 0u32);
    let on_refresh = {
        let reload = reload.clone();
        Callback::from(move |_| {
            log::debug!("Page refresh triggered");
            reload.set(*reload + 1);
        })
    };
    (*reload, on_refresh)
}

#[function_component(HistoryPage)]
fn history_page() -> Html {
    let (reload, on_refresh) = use_reload_trigger();

    html! {
        <Layout title="Prediction History" on_refresh={Some(on_refresh)}>
            <History reload={reload} />
        </Layout>
    }
}

#[function_component(AnalyticsPage)]
fn analytics_page() -> Html {
    let (reload, on_refresh) = use_reload_trigger();

    html! {
        <Layout title="Price Analytics" on_refresh={Some(on_refresh)}>
            <Analytics reload={reload} />
        </Layout>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    // Pages format with the user's currency, so they wait for preferences.
    let ready = use_state(|| false);

    {
        let ready = ready.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match get_preferences().await {
                    Ok(preferences) => settings::update_settings(|s| s.apply_preferences(&preferences)),
                    Err(e) => log::warn!("Using local settings, preferences unavailable: {}", e),
                }
                ready.set(true);
            });
            || ()
        });
    }

    if !*ready {
        return html! { <Loading text={Some("Loading FlightCast...".to_string())} /> };
    }

    html! {
        <ToastProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== FlightCast Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_paths() {
        assert_eq!(Route::Predict.to_path(), "/predict-page");
        assert_eq!(Route::History.to_path(), "/history-page");
        assert_eq!(Route::Analytics.to_path(), "/analytics-page");
    }

    #[test]
    fn test_recognize_pages() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/predict-page"), Some(Route::Predict));
        assert_eq!(Route::recognize("/history-page"), Some(Route::History));
    }
}
