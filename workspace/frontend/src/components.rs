pub mod analytics;
pub mod chart_canvas;
pub mod history;
pub mod layout;
pub mod predict;
