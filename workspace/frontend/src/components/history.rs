mod chart;
mod stats;
mod table;
mod view;

pub use stats::StatsCards;
pub use view::History;
