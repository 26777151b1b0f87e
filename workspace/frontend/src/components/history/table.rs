use flight_common::HistoryRecord;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::common::animation::use_staggered_reveal;
use crate::settings;
use crate::table::{history_rows, TableRow};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HistoryTableProps {
    pub records: Vec<HistoryRecord>,
}

#[function_component(HistoryTable)]
pub fn history_table(props: &HistoryTableProps) -> Html {
    let settings = settings::get_settings();
    let rows = history_rows(&props.records, &settings.currency, settings.row_stagger_ms);

    let delays: Vec<u32> = rows
        .iter()
        .filter_map(|row| match row {
            TableRow::Entry(entry) => Some(entry.delay_ms),
            TableRow::Placeholder => None,
        })
        .collect();
    let revealed = use_staggered_reveal(props.records.clone(), delays);

    html! {
        <div class="overflow-x-auto">
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        <th>{"Date"}</th>
                        <th>{"Route"}</th>
                        <th>{"Airline"}</th>
                        <th>{"Stops"}</th>
                        <th>{"Duration"}</th>
                        <th class="text-right">{"Price"}</th>
                    </tr>
                </thead>
                <tbody id="historyTableBody">
                    {for rows.into_iter().enumerate().map(|(index, row)| match row {
                        TableRow::Placeholder => html! {
                            <tr key="placeholder">
                                <td colspan="6" class="text-center text-gray-500 py-8">
                                    <p>{"No predictions yet. Start making predictions to see your history here."}</p>
                                    <Link<Route> to={Route::Predict} classes="btn btn-primary btn-sm mt-4">
                                        <i class="fas fa-magic"></i>{" Make First Prediction"}
                                    </Link<Route>>
                                </td>
                            </tr>
                        },
                        TableRow::Entry(entry) => {
                            let visibility = if index < revealed { "opacity-100" } else { "opacity-0" };
                            html! {
                                <tr key={entry.key.clone()} class={classes!("transition-opacity", "duration-300", visibility)}>
                                    <td>{entry.date}</td>
                                    <td>
                                        <span class="font-medium">{entry.source}</span>
                                        <i class="fas fa-arrow-right mx-2 text-xs text-gray-400"></i>
                                        <span class="font-medium">{entry.destination}</span>
                                    </td>
                                    <td>{entry.airline}</td>
                                    <td><span class={classes!("badge", entry.stops_badge)}>{entry.stops}</span></td>
                                    <td>{entry.duration}</td>
                                    <td class="text-right font-mono">{entry.price}</td>
                                </tr>
                            }
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
