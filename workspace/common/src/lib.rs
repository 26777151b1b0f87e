//! Transport types and pure helpers shared by the FlightCast frontend.
//! The structs mirror the JSON payloads of the flight-price backend so the
//! frontend can decode responses without duplicating shapes, and the helper
//! modules hold the data transforms that don't need a DOM.

mod analytics;
mod history;
mod prediction;
mod preferences;

pub mod format;
pub mod summary;
pub mod timestamp;

pub use analytics::{AirlineComparison, AlertsSummary, BookingTimeAdvice, Deal, RouteStats, TrendPoint};
pub use history::HistoryRecord;
pub use prediction::{
    FlightDuration, PredictRequest, PredictResponse, Prediction, PredictionError, AIRLINES, DESTINATIONS,
    MAX_STOPS, SOURCES,
};
pub use preferences::{ChartPreference, Preferences};
pub use summary::{summarize, Stats};
