//! Row model for the prediction history table.

use flight_common::format::{format_date, format_price, stops_label};
use flight_common::HistoryRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub key: String,
    pub date: String,
    pub source: String,
    pub destination: String,
    pub airline: String,
    pub stops: String,
    pub stops_badge: &'static str,
    pub duration: String,
    pub price: String,
    /// When the row fades in, relative to the render.
    pub delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableRow {
    Entry(HistoryRow),
    /// Shown instead of rows when there is no history yet.
    Placeholder,
}

pub fn stops_badge(stops: u32) -> &'static str {
    match stops {
        0 => "badge-success",
        1 => "badge-warning",
        _ => "badge-error",
    }
}

/// `index × step_ms` for each of `count` rows.
pub fn entrance_delays(count: usize, step_ms: u32) -> Vec<u32> {
    (0..count)
        .map(|index| u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms))
        .collect()
}

/// One row per record in input order, or a single placeholder row.
pub fn history_rows(records: &[HistoryRecord], currency: &str, step_ms: u32) -> Vec<TableRow> {
    if records.is_empty() {
        return vec![TableRow::Placeholder];
    }

    records
        .iter()
        .zip(entrance_delays(records.len(), step_ms))
        .enumerate()
        .map(|(index, (record, delay_ms))| {
            TableRow::Entry(HistoryRow {
                key: match record.id {
                    Some(id) => format!("prediction-{}", id),
                    None => format!("row-{}-{}", index, record.timestamp),
                },
                date: format_date(&record.timestamp),
                source: record.source.clone(),
                destination: record.destination.clone(),
                airline: record.airline.clone(),
                stops: stops_label(record.stops),
                stops_badge: stops_badge(record.stops),
                duration: record.duration.clone(),
                price: format_price(record.price, currency),
                delay_ms,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: Option<i64>, source: &str, stops: u32, price: f64) -> HistoryRecord {
        HistoryRecord {
            id,
            timestamp: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap().and_hms_opt(10, 0, 0).unwrap(),
            source: source.to_string(),
            destination: "Cochin".to_string(),
            airline: "IndiGo".to_string(),
            stops,
            duration: "2h 50m".to_string(),
            price,
        }
    }

    #[test]
    fn test_empty_history_renders_placeholder() {
        assert_eq!(history_rows(&[], "INR", 100), vec![TableRow::Placeholder]);
    }

    #[test]
    fn test_one_row_per_record_in_order() {
        let records = vec![
            record(Some(3), "Mumbai", 0, 5000.0),
            record(Some(2), "Delhi", 1, 6000.0),
            record(None, "Chennai", 2, 7000.0),
        ];
        let rows = history_rows(&records, "INR", 100);
        assert_eq!(rows.len(), 3);

        let entries: Vec<&HistoryRow> = rows
            .iter()
            .map(|row| match row {
                TableRow::Entry(entry) => entry,
                TableRow::Placeholder => panic!("unexpected placeholder"),
            })
            .collect();
        let sources: Vec<&str> = entries.iter().map(|e| e.source.as_str()).collect();
        assert_eq!(sources, vec!["Mumbai", "Delhi", "Chennai"]);
        assert_eq!(entries.iter().map(|e| e.delay_ms).collect::<Vec<_>>(), vec![0, 100, 200]);

        assert_eq!(entries[0].key, "prediction-3");
        assert!(entries[2].key.starts_with("row-2-"));
        assert_eq!(entries[0].price, "₹5,000.00");
        assert_eq!(entries[0].date, "2024-01-05");
        assert_eq!((entries[0].stops.as_str(), entries[0].stops_badge), ("0 stops", "badge-success"));
        assert_eq!((entries[1].stops.as_str(), entries[1].stops_badge), ("1 stop", "badge-warning"));
        assert_eq!(entries[2].stops_badge, "badge-error");
    }

    #[test]
    fn test_rerender_is_idempotent() {
        let records = vec![record(Some(1), "Delhi", 0, 4500.0)];
        assert_eq!(history_rows(&records, "USD", 50), history_rows(&records, "USD", 50));
    }

    #[test]
    fn test_entrance_delays() {
        assert!(entrance_delays(0, 100).is_empty());
        assert_eq!(entrance_delays(4, 0), vec![0, 0, 0, 0]);
        assert_eq!(entrance_delays(3, 250), vec![0, 250, 500]);
    }
}
