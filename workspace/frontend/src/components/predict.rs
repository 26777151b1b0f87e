mod form;
mod user_stats;
mod view;

pub use view::Predict;
