mod alerts;
mod deals;
mod route;
mod trends;
mod view;

pub use view::Analytics;
