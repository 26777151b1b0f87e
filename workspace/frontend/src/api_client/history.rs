use flight_common::HistoryRecord;
use serde_json::Value;
use web_sys::window;

use crate::api_client::{self, ApiError};
use crate::settings;

pub const HISTORY_ENDPOINT: &str = "/history";
pub const EXPORT_ENDPOINT: &str = "/export";

/// Decodes the history array record by record. Malformed entries are
/// dropped with a warning instead of failing the whole table.
pub fn decode_records(value: Value) -> Result<Vec<HistoryRecord>, ApiError> {
    let Value::Array(items) = value else {
        return Err(ApiError::Validation("History response is not a list".to_string()));
    };

    let total = items.len();
    let records: Vec<HistoryRecord> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("Skipping history entry {}: {}", index, e);
                None
            }
        })
        .collect();

    if records.len() < total {
        log::warn!("Dropped {} of {} history entries", total - records.len(), total);
    }
    Ok(records)
}

/// Get the prediction history, newest first
pub async fn get_history() -> Result<Vec<HistoryRecord>, ApiError> {
    log::trace!("Fetching prediction history");
    let result = match api_client::get_json(HISTORY_ENDPOINT, &[]).await {
        Ok(value) => decode_records(value),
        Err(e) => Err(e),
    };
    match &result {
        Ok(records) => log::info!("Fetched {} history records", records.len()),
        Err(e) => log::error!("Failed to fetch history: {}", e),
    }
    result
}

pub fn export_url() -> String {
    settings::get_settings().api_url(EXPORT_ENDPOINT)
}

/// Starts the CSV download by navigating to the export endpoint.
pub fn start_export() -> Result<(), ApiError> {
    let url = export_url();
    log::info!("Starting history export from {}", url);
    let window = window().ok_or_else(|| ApiError::Network("No browser window available".to_string()))?;
    window
        .location()
        .set_href(&url)
        .map_err(|e| ApiError::Network(format!("Navigation to {} failed: {:?}", url, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_keeps_order() {
        let value = json!([
            {"timestamp": "2024-01-06T08:00:00", "source": "Delhi", "destination": "Cochin", "airline": "IndiGo", "stops": 0, "duration": "3h 5m", "price": 5000},
            {"timestamp": "2024-01-05T08:00:00", "source": "Mumbai", "destination": "Delhi", "airline": "GoAir", "stops": 2, "duration": "7h 0m", "price": 7000}
        ]);
        let records = decode_records(value).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].source, "Delhi");
        assert_eq!(records[1].source, "Mumbai");
    }

    #[test]
    fn test_decode_skips_malformed_entries() {
        let value = json!([
            {"timestamp": "2024-01-06T08:00:00", "source": "Delhi", "destination": "Cochin", "airline": "IndiGo", "price": 5000},
            {"timestamp": "2024-01-05T08:00:00", "source": "Delhi"},
            "garbage"
        ]);
        let records = decode_records(value).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_decode_rejects_non_list() {
        assert!(matches!(
            decode_records(json!({"error": "nope"})),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn test_export_url_follows_settings() {
        assert_eq!(export_url(), "/export");
    }
}
