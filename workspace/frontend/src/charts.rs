//! Chart rendering: pure series mapping, a registry that owns one widget per
//! canvas, and the Plotly backend that draws them.

pub mod plotly_backend;
pub mod registry;
pub mod series;

use std::cell::RefCell;

pub use series::{ChartError, ChartSpec};

use self::plotly_backend::PlotlyBackend;
use self::registry::ChartRegistry;

thread_local! {
    static CHARTS: RefCell<ChartRegistry<PlotlyBackend>> = RefCell::new(ChartRegistry::new(PlotlyBackend));
}

/// Draws `spec` on the element with id `canvas_id`, replacing whatever chart was there.
pub fn render_chart(canvas_id: &str, spec: &ChartSpec) -> Result<(), ChartError> {
    CHARTS.with(|charts| charts.borrow_mut().render(canvas_id, spec).map(|_| ()))
}

/// Tears down the chart on `canvas_id`; `false` if none was live.
pub fn destroy_chart(canvas_id: &str) -> bool {
    CHARTS.with(|charts| charts.borrow_mut().destroy(canvas_id))
}
