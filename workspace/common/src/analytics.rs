use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Daily price aggregate from `GET /analytics`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    #[serde(deserialize_with = "crate::timestamp::deserialize_date")]
    pub date: NaiveDate,
    pub avg_price: f64,
    pub min_price: f64,
    pub max_price: f64,
}

/// A route whose cheapest prediction fell well below its average.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Deal {
    pub source: String,
    pub destination: String,
    pub airline: String,
    pub deal_price: f64,
    pub avg_price: f64,
    pub savings: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AlertsSummary {
    #[serde(default)]
    pub total_alerts: u32,
    #[serde(default)]
    pub active_alerts: u32,
    #[serde(default)]
    pub avg_target_price: Option<f64>,
    #[serde(default)]
    pub most_watched_routes: BTreeMap<String, u32>,
}

impl AlertsSummary {
    /// Watched routes, most alerts first, ties broken by name.
    pub fn top_routes(&self) -> Vec<(&str, u32)> {
        let mut routes: Vec<(&str, u32)> = self
            .most_watched_routes
            .iter()
            .map(|(route, count)| (route.as_str(), *count))
            .collect();
        routes.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        routes
    }
}

/// Price statistics for one source/destination pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RouteStats {
    #[serde(default)]
    pub avg_price: Option<f64>,
    #[serde(default)]
    pub min_price: Option<f64>,
    #[serde(default)]
    pub max_price: Option<f64>,
    #[serde(default)]
    pub price_std: Option<f64>,
    #[serde(default)]
    pub total_predictions: u32,
    /// Airline name to number of predictions.
    #[serde(default)]
    pub airlines: BTreeMap<String, u32>,
    /// Hour of day (as a string key) to average price.
    #[serde(default)]
    pub popular_times: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingTimeAdvice {
    pub best_time: String,
    pub worst_time: String,
    pub best_price: f64,
    #[serde(default)]
    pub worst_price: Option<f64>,
    pub savings_potential: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AirlineComparison {
    pub airline: String,
    pub avg_price: f64,
    #[serde(default)]
    pub min_price: Option<f64>,
    #[serde(default)]
    pub max_price: Option<f64>,
    #[serde(default)]
    pub price_std: Option<f64>,
    #[serde(default)]
    pub flight_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_point_accepts_http_date() {
        let json = r#"{"date": "Fri, 05 Jan 2024 00:00:00 GMT", "avg_price": 6000.0, "min_price": 5000.0, "max_price": 7000.0}"#;
        let point: TrendPoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }

    #[test]
    fn test_route_stats_all_fields_optional() {
        let stats: RouteStats = serde_json::from_str("{}").unwrap();
        assert_eq!(stats, RouteStats::default());

        let stats: RouteStats = serde_json::from_str(
            r#"{"avg_price": 5500.0, "price_std": null, "total_predictions": 4, "airlines": {"IndiGo": 3, "GoAir": 1}}"#,
        )
        .unwrap();
        assert_eq!(stats.avg_price, Some(5500.0));
        assert_eq!(stats.price_std, None);
        assert_eq!(stats.airlines.get("IndiGo"), Some(&3));
    }

    #[test]
    fn test_top_routes_ordering() {
        let mut summary = AlertsSummary::default();
        summary.most_watched_routes.insert("Delhi-Cochin".to_string(), 2);
        summary.most_watched_routes.insert("Mumbai-Delhi".to_string(), 5);
        summary.most_watched_routes.insert("Chennai-Kolkata".to_string(), 2);

        assert_eq!(
            summary.top_routes(),
            vec![("Mumbai-Delhi", 5), ("Chennai-Kolkata", 2), ("Delhi-Cochin", 2)]
        );
    }

    #[test]
    fn test_deal_savings_taken_as_sent() {
        let json = r#"{"source": "Delhi", "destination": "Cochin", "airline": "SpiceJet", "deal_price": 4200, "avg_price": 5000, "savings": 750}"#;
        let deal: Deal = serde_json::from_str(json).unwrap();
        assert_eq!(deal.savings, 750.0);
    }
}
