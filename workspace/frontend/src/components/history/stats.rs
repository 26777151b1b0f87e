use flight_common::format::format_price;
use flight_common::Stats;
use yew::prelude::*;

use crate::common::animation::use_count_up;

/// Length of the count-up on the stats cards.
pub const COUNT_UP_MS: u32 = 1000;

#[derive(Properties, PartialEq)]
pub struct AnimatedNumberProps {
    pub target: f64,
    /// Formats as money in this currency, or as a whole number when unset
    #[prop_or_default]
    pub currency: Option<AttrValue>,
    #[prop_or(COUNT_UP_MS)]
    pub duration_ms: u32,
}

#[function_component(AnimatedNumber)]
pub fn animated_number(props: &AnimatedNumberProps) -> Html {
    let shown = use_count_up(props.target, props.duration_ms);

    let text = match &props.currency {
        Some(currency) => format_price(shown, currency),
        None => format!("{:.0}", shown),
    };

    html! { <span>{text}</span> }
}

#[derive(Properties, PartialEq)]
pub struct StatsCardsProps {
    pub stats: Stats,
    pub currency: AttrValue,
}

#[function_component(StatsCards)]
pub fn stats_cards(props: &StatsCardsProps) -> Html {
    let stats = props.stats;
    let currency = Some(props.currency.clone());

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-4">
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Total Predictions"}</div>
                    <div class="stat-value text-primary" id="total-predictions">
                        <AnimatedNumber target={stats.count as f64} />
                    </div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Total Spent"}</div>
                    <div class="stat-value text-2xl" id="total-spent">
                        <AnimatedNumber target={stats.total} currency={currency.clone()} />
                    </div>
                    <div class="stat-desc">{"Sum of predicted fares"}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Average Price"}</div>
                    <div class="stat-value text-2xl" id="avg-price">
                        <AnimatedNumber target={stats.average} currency={currency} />
                    </div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Unique Routes"}</div>
                    <div class="stat-value text-secondary" id="unique-routes">
                        <AnimatedNumber target={stats.distinct_routes as f64} />
                    </div>
                </div>
            </div>
        </div>
    }
}
