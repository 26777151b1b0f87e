use flight_common::format::{format_date, format_day};
use flight_common::{AirlineComparison, ChartPreference, HistoryRecord, TrendPoint};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("Series `{name}` does not line up with the chart labels (expected {expected} points, found {found})")]
    Misaligned {
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("Failed to serialize chart: {0}")]
    Serialize(String),
    #[error("Failed to draw chart on `{canvas_id}`: {message}")]
    Mount { canvas_id: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
}

impl From<ChartPreference> for ChartKind {
    fn from(preference: ChartPreference) -> Self {
        match preference {
            ChartPreference::Line => ChartKind::Line,
            ChartPreference::Bar => ChartKind::Bar,
        }
    }
}

/// Ordered (label, value) pairs feeding one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub color: &'static str,
    pub points: Vec<(String, f64)>,
}

impl Series {
    pub fn new(name: impl Into<String>, color: &'static str, points: Vec<(String, f64)>) -> Self {
        Self {
            name: name.into(),
            color,
            points,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub name: String,
    pub color: &'static str,
    pub values: Vec<f64>,
}

/// Everything a backend needs to draw one chart. Labels are shared by all
/// datasets, index for index.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: Option<String>,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartSpec {
    /// Builds a chart whose label axis comes from the first series. Every
    /// other series must carry the same labels in the same order.
    pub fn from_series(kind: ChartKind, series: Vec<Series>) -> Result<Self, ChartError> {
        let labels: Vec<String> = series
            .first()
            .map(|s| s.points.iter().map(|(label, _)| label.clone()).collect())
            .unwrap_or_default();

        let mut datasets = Vec::with_capacity(series.len());
        for s in series {
            let aligned = s.points.len() == labels.len()
                && s.points.iter().zip(&labels).all(|((label, _), expected)| label == expected);
            if !aligned {
                return Err(ChartError::Misaligned {
                    name: s.name,
                    expected: labels.len(),
                    found: s.points.len(),
                });
            }

            datasets.push(Dataset {
                name: s.name,
                color: s.color,
                values: s.points.into_iter().map(|(_, value)| value).collect(),
            });
        }

        Ok(Self {
            kind,
            title: None,
            x_title: None,
            y_title: None,
            labels,
            datasets,
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_axis_titles(mut self, x: Option<&str>, y: Option<&str>) -> Self {
        self.x_title = x.map(str::to_string);
        self.y_title = y.map(str::to_string);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

fn price_axis(currency: &str) -> String {
    format!("Price ({})", currency)
}

/// Average, minimum and maximum price per day.
pub fn trend_series(points: &[TrendPoint]) -> Vec<Series> {
    let labels: Vec<String> = points.iter().map(|p| format_day(&p.date)).collect();
    let series = |name: &str, color: &'static str, value: fn(&TrendPoint) -> f64| {
        Series::new(
            name,
            color,
            labels.iter().cloned().zip(points.iter().map(value)).collect(),
        )
    };

    vec![
        series("Average Price", "rgb(75, 192, 192)", |p| p.avg_price),
        series("Minimum Price", "rgb(54, 162, 235)", |p| p.min_price),
        series("Maximum Price", "rgb(255, 99, 132)", |p| p.max_price),
    ]
}

pub fn airline_series(airlines: &[AirlineComparison]) -> Series {
    Series::new(
        "Average Price",
        "rgba(75, 192, 192, 0.7)",
        airlines.iter().map(|a| (a.airline.clone(), a.avg_price)).collect(),
    )
}

/// Predicted prices oldest first; `records` arrive newest first.
pub fn history_series(records: &[HistoryRecord]) -> Series {
    Series::new(
        "Predicted Prices",
        "#667eea",
        records
            .iter()
            .rev()
            .map(|r| (format_date(&r.timestamp), r.price))
            .collect(),
    )
}

pub fn price_trend_chart(points: &[TrendPoint], currency: &str) -> Result<ChartSpec, ChartError> {
    Ok(ChartSpec::from_series(ChartKind::Line, trend_series(points))?
        .with_axis_titles(Some("Date"), Some(price_axis(currency).as_str())))
}

pub fn airline_chart(airlines: &[AirlineComparison], currency: &str) -> Result<ChartSpec, ChartError> {
    Ok(ChartSpec::from_series(ChartKind::Bar, vec![airline_series(airlines)])?
        .with_axis_titles(None, Some(price_axis(currency).as_str())))
}

pub fn history_chart(records: &[HistoryRecord], kind: ChartKind, currency: &str) -> Result<ChartSpec, ChartError> {
    Ok(ChartSpec::from_series(kind, vec![history_series(records)])?
        .with_title("Your Flight Price Predictions Over Time")
        .with_axis_titles(Some("Date"), Some(price_axis(currency).as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn trend(day: u32, avg: f64) -> TrendPoint {
        TrendPoint {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            avg_price: avg,
            min_price: avg - 500.0,
            max_price: avg + 500.0,
        }
    }

    fn record(day: u32, price: f64) -> HistoryRecord {
        HistoryRecord {
            id: None,
            timestamp: NaiveDate::from_ymd_opt(2024, 2, day).unwrap().and_hms_opt(8, 0, 0).unwrap(),
            source: "Delhi".to_string(),
            destination: "Cochin".to_string(),
            airline: "IndiGo".to_string(),
            stops: 0,
            duration: "3h 0m".to_string(),
            price,
        }
    }

    #[test]
    fn test_trend_datasets_align() {
        // deliberately out of date order: no implicit sort
        let points = vec![trend(3, 6000.0), trend(1, 5000.0), trend(2, 5500.0)];
        let spec = price_trend_chart(&points, "INR").unwrap();

        assert_eq!(spec.kind, ChartKind::Line);
        assert_eq!(spec.labels, vec!["2024-01-03", "2024-01-01", "2024-01-02"]);
        assert_eq!(spec.datasets.len(), 3);
        assert_eq!(spec.datasets[0].values, vec![6000.0, 5000.0, 5500.0]);
        assert_eq!(spec.datasets[1].values, vec![5500.0, 4500.0, 5000.0]);
        assert_eq!(spec.datasets[2].values, vec![6500.0, 5500.0, 6000.0]);
        assert!(spec.datasets.iter().all(|d| d.values.len() == spec.labels.len()));
        assert_eq!(spec.y_title.as_deref(), Some("Price (INR)"));
    }

    #[test]
    fn test_misaligned_series_rejected() {
        let a = Series::new("a", "red", vec![("x".to_string(), 1.0), ("y".to_string(), 2.0)]);
        let b = Series::new("b", "blue", vec![("x".to_string(), 1.0)]);
        assert_eq!(
            ChartSpec::from_series(ChartKind::Line, vec![a.clone(), b]),
            Err(ChartError::Misaligned {
                name: "b".to_string(),
                expected: 2,
                found: 1
            })
        );

        let swapped = Series::new("c", "green", vec![("y".to_string(), 2.0), ("x".to_string(), 1.0)]);
        assert!(ChartSpec::from_series(ChartKind::Line, vec![a, swapped]).is_err());
    }

    #[test]
    fn test_history_series_is_chronological() {
        let records = vec![record(3, 7000.0), record(2, 6000.0), record(1, 5000.0)];
        let series = history_series(&records);
        assert_eq!(
            series.points,
            vec![
                ("2024-02-01".to_string(), 5000.0),
                ("2024-02-02".to_string(), 6000.0),
                ("2024-02-03".to_string(), 7000.0),
            ]
        );
    }

    #[test]
    fn test_history_chart_follows_preference() {
        let spec = history_chart(&[record(1, 5000.0)], ChartPreference::Bar.into(), "USD").unwrap();
        assert_eq!(spec.kind, ChartKind::Bar);
        assert_eq!(spec.title.as_deref(), Some("Your Flight Price Predictions Over Time"));
    }

    #[test]
    fn test_airline_chart_keeps_backend_order() {
        let airlines = vec![
            AirlineComparison {
                airline: "Vistara".to_string(),
                avg_price: 8000.0,
                min_price: None,
                max_price: None,
                price_std: None,
                flight_count: 2,
            },
            AirlineComparison {
                airline: "GoAir".to_string(),
                avg_price: 4000.0,
                min_price: None,
                max_price: None,
                price_std: None,
                flight_count: 1,
            },
        ];
        let spec = airline_chart(&airlines, "INR").unwrap();
        assert_eq!(spec.kind, ChartKind::Bar);
        assert_eq!(spec.labels, vec!["Vistara", "GoAir"]);
        assert_eq!(spec.datasets[0].values, vec![8000.0, 4000.0]);
    }

    #[test]
    fn test_empty_input() {
        let spec = price_trend_chart(&[], "INR").unwrap();
        assert!(spec.is_empty());
        assert_eq!(spec.datasets.len(), 3);
        assert!(ChartSpec::from_series(ChartKind::Bar, vec![]).unwrap().datasets.is_empty());
    }
}
