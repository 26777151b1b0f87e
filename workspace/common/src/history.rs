use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One saved prediction, as returned by `GET /history` (newest first).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub timestamp: NaiveDateTime,
    pub source: String,
    pub destination: String,
    pub airline: String,
    #[serde(default)]
    pub stops: u32,
    /// Pre-rendered by the backend, e.g. `"2h 50m"`.
    #[serde(default)]
    pub duration: String,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_backend_record() {
        let json = r#"{
            "id": 7,
            "timestamp": "2024-01-05T10:30:00.512000",
            "source": "Delhi",
            "destination": "Cochin",
            "airline": "IndiGo",
            "stops": 1,
            "duration": "5h 20m",
            "price": 6123.5
        }"#;

        let record: HistoryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, Some(7));
        assert_eq!((record.source.as_str(), record.destination.as_str()), ("Delhi", "Cochin"));
        assert_eq!(record.stops, 1);
        assert_eq!(record.price, 6123.5);
    }

    #[test]
    fn test_decode_tolerates_missing_optional_fields() {
        let json = r#"{"timestamp": "2024-01-05", "source": "DEL", "destination": "BOM", "airline": "GoAir", "price": 5000}"#;

        let record: HistoryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, None);
        assert_eq!(record.stops, 0);
        assert!(record.duration.is_empty());
        assert_eq!(record.price, 5000.0);
    }

    #[test]
    fn test_decode_rejects_bad_timestamp() {
        let json = r#"{"timestamp": "soon", "source": "DEL", "destination": "BOM", "airline": "GoAir", "price": 1}"#;
        let err = serde_json::from_str::<HistoryRecord>(json).unwrap_err();
        assert!(err.to_string().contains("unrecognised timestamp"));
    }
}
