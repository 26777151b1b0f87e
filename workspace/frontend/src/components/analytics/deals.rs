use flight_common::format::format_price;
use flight_common::Deal;
use yew::prelude::*;

use crate::settings;

#[derive(Properties, PartialEq)]
pub struct DealsProps {
    pub deals: Vec<Deal>,
}

#[function_component(BestDeals)]
pub fn best_deals(props: &DealsProps) -> Html {
    let currency = settings::get_settings().currency;

    if props.deals.is_empty() {
        return html! { <p class="text-sm text-gray-500">{"No deals found yet"}</p> };
    }

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4" id="bestDeals">
            {for props.deals.iter().map(|deal| {
                html! {
                    <div class="card bg-base-200">
                        <div class="card-body p-4">
                            <div class="flex justify-between items-center">
                                <span class="font-semibold">
                                    {&deal.source}
                                    <i class="fas fa-arrow-right mx-2 text-xs"></i>
                                    {&deal.destination}
                                </span>
                                <span class="badge badge-success">
                                    {format!("Save {}", format_price(deal.savings, &currency))}
                                </span>
                            </div>
                            <div class="text-sm text-gray-500">{&deal.airline}</div>
                            <div class="flex justify-between text-sm">
                                <span>{"Deal: "}<span class="font-bold text-success">{format_price(deal.deal_price, &currency)}</span></span>
                                <span>{"Avg: "}<span class="line-through">{format_price(deal.avg_price, &currency)}</span></span>
                            </div>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
