use flight_common::{AirlineComparison, AlertsSummary, BookingTimeAdvice, Deal, RouteStats, TrendPoint};
use serde_json::Value;

use crate::api_client::{self, section, ApiError};

/// `GET /analytics`, with every section decoded on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsReport {
    pub price_trends: Result<Vec<TrendPoint>, ApiError>,
    pub best_deals: Result<Vec<Deal>, ApiError>,
    pub alerts_summary: Result<AlertsSummary, ApiError>,
}

impl AnalyticsReport {
    pub fn from_value(value: &Value) -> Self {
        Self {
            price_trends: section(value, "price_trends"),
            best_deals: section(value, "best_deals"),
            alerts_summary: section(value, "alerts_summary"),
        }
    }
}

/// `GET /route-analytics` for one source/destination pair.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteAnalyticsReport {
    pub route_stats: Result<RouteStats, ApiError>,
    pub best_booking_time: Result<BookingTimeAdvice, ApiError>,
    pub airline_comparison: Result<Vec<AirlineComparison>, ApiError>,
}

impl RouteAnalyticsReport {
    pub fn from_value(value: &Value) -> Self {
        Self {
            route_stats: section(value, "route_stats"),
            best_booking_time: section(value, "best_booking_time"),
            airline_comparison: section(value, "airline_comparison"),
        }
    }
}

pub async fn get_analytics() -> Result<AnalyticsReport, ApiError> {
    log::trace!("Fetching analytics overview");
    let value = api_client::get_json("/analytics", &[]).await?;
    let report = AnalyticsReport::from_value(&value);
    if let Err(e) = &report.price_trends {
        log::warn!("Price trends unavailable: {}", e);
    }
    Ok(report)
}

pub async fn get_route_analytics(source: &str, destination: &str) -> Result<RouteAnalyticsReport, ApiError> {
    if source.is_empty() || destination.is_empty() {
        return Err(ApiError::Validation("Source and destination are required".to_string()));
    }

    log::debug!("Fetching route analytics for {} -> {}", source, destination);
    let value = api_client::get_json("/route-analytics", &[("source", source), ("destination", destination)]).await?;
    Ok(RouteAnalyticsReport::from_value(&value))
}
