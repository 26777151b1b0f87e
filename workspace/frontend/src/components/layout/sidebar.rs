use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    html! {
        <div class="drawer-side z-50">
            <label aria-label="close sidebar" class="drawer-overlay" for="app-drawer"></label>
            <ul class="menu p-4 w-72 min-h-full bg-base-100 text-base-content border-r border-base-300">
                <li class="mb-4">
                    <div class="flex items-center gap-3 px-2">
                        <div class="w-10 h-10 rounded-lg bg-primary flex items-center justify-center text-primary-content font-bold text-2xl">
                            <i class="fas fa-plane-departure"></i>
                        </div>
                        <span class="text-2xl font-bold tracking-tight">{"FlightCast"}</span>
                    </div>
                </li>

                <li><Link<Route> to={Route::Predict} classes="nav-link"><i class="fas fa-magic w-5"></i> {"Predict"}</Link<Route>></li>
                <li><Link<Route> to={Route::History} classes="nav-link"><i class="fas fa-history w-5"></i> {"History"}</Link<Route>></li>
                <li><Link<Route> to={Route::Analytics} classes="nav-link"><i class="fas fa-chart-line w-5"></i> {"Analytics"}</Link<Route>></li>
            </ul>
        </div>
    }
}
