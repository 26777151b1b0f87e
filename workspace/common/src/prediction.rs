use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::timestamp::parse_timestamp;

/// Departure cities the backend model was trained on.
pub const SOURCES: &[&str] = &["Chennai", "Delhi", "Kolkata", "Mumbai"];

/// Arrival cities the backend model was trained on.
pub const DESTINATIONS: &[&str] = &["Cochin", "Delhi", "Hyderabad", "Kolkata"];

pub const AIRLINES: &[&str] = &[
    "Air India",
    "GoAir",
    "IndiGo",
    "Jet Airways",
    "Jet Airways Business",
    "Multiple carriers",
    "Multiple carriers Premium economy",
    "SpiceJet",
    "Trujet",
    "Vistara",
    "Vistara Premium economy",
];

pub const MAX_STOPS: u32 = 4;

/// Request body for `POST /predict`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PredictRequest {
    pub source: String,
    pub destination: String,
    pub airline: String,
    /// ISO date-time, as produced by a `datetime-local` input.
    pub departure: String,
    pub arrival: String,
    pub stops: u32,
}

impl PredictRequest {
    /// Checks the form before it goes over the wire.
    pub fn validate(&self) -> Result<(), String> {
        let required = [
            ("source", &self.source),
            ("destination", &self.destination),
            ("airline", &self.airline),
            ("departure", &self.departure),
            ("arrival", &self.arrival),
        ];
        if let Some((name, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(format!("Missing {}", name));
        }

        if self.stops > MAX_STOPS {
            return Err(format!("At most {} stops are supported", MAX_STOPS));
        }

        let departure = parse_timestamp(&self.departure)
            .ok_or_else(|| format!("Invalid departure time: {}", self.departure))?;
        let arrival = parse_timestamp(&self.arrival)
            .ok_or_else(|| format!("Invalid arrival time: {}", self.arrival))?;
        if arrival <= departure {
            return Err("Arrival must be after departure".to_string());
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FlightDuration {
    #[serde(default)]
    pub hours: i64,
    #[serde(default)]
    pub minutes: i64,
}

impl fmt::Display for FlightDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

/// Raw `POST /predict` response. The backend uses the same shape for
/// successes (status 200) and failures (status 400).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PredictResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub duration: Option<FlightDuration>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A successful prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub price: f64,
    pub duration: Option<FlightDuration>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    /// `success: false`, with the backend's message.
    #[error("{0}")]
    Refused(String),
    /// `success: true` but a required field is absent.
    #[error("Prediction response is missing `{0}`")]
    MissingField(&'static str),
}

impl PredictResponse {
    pub fn into_prediction(self) -> Result<Prediction, PredictionError> {
        if !self.success {
            let message = self
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| "Prediction failed".to_string());
            return Err(PredictionError::Refused(message));
        }

        let price = self.price.ok_or(PredictionError::MissingField("price"))?;
        Ok(Prediction {
            price,
            duration: self.duration,
        })
    }
}
