use plotly::common::{Line, Marker, Mode};
use plotly::{Bar, Scatter};
use serde::Serialize;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;

use super::registry::ChartBackend;
use super::series::{ChartError, ChartKind, ChartSpec};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = Plotly, js_name = newPlot)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = Plotly)]
    fn purge(div_id: &str) -> Result<(), JsValue>;
}

fn serialize_error(e: impl std::fmt::Display) -> ChartError {
    ChartError::Serialize(e.to_string())
}

/// Plotly figure (`data`, `layout`, `config`) for `spec`.
pub fn to_plot_json(spec: &ChartSpec) -> Result<Value, ChartError> {
    let traces = spec
        .datasets
        .iter()
        .map(|dataset| {
            let x = spec.labels.clone();
            let y = dataset.values.clone();
            match spec.kind {
                ChartKind::Line => serde_json::to_value(
                    Scatter::new(x, y)
                        .name(dataset.name.as_str())
                        .mode(Mode::LinesMarkers)
                        .line(Line::new().color(dataset.color).width(3.0)),
                ),
                ChartKind::Bar => serde_json::to_value(
                    Bar::new(x, y)
                        .name(dataset.name.as_str())
                        .marker(Marker::new().color(dataset.color)),
                ),
            }
            .map_err(serialize_error)
        })
        .collect::<Result<Vec<Value>, ChartError>>()?;

    let axis_title = |title: &Option<String>| title.as_ref().map(|text| json!({ "text": text }));

    let top_margin = if spec.title.is_some() { 40 } else { 10 };

    // Category axes keep labels in the order given instead of re-sorting dates
    let layout = json!({
        "title": spec.title.as_ref().map(|text| json!({ "text": text })),
        "margin": {"t": top_margin, "r": 10, "l": 60, "b": 50},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "showlegend": spec.datasets.len() > 1 || spec.kind == ChartKind::Line,
        "legend": {"orientation": "h", "y": -0.25},
        "hovermode": "x unified",
        "barmode": "group",
        "xaxis": {"type": "category", "showgrid": false, "title": axis_title(&spec.x_title)},
        "yaxis": {"rangemode": "tozero", "gridcolor": "#eee", "title": axis_title(&spec.y_title)}
    });

    let config = json!({"responsive": true, "displayModeBar": false});

    Ok(json!({ "data": traces, "layout": layout, "config": config }))
}

fn to_js(value: &Value) -> Result<JsValue, ChartError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(serialize_error)
}

/// Draws through the global `Plotly` object loaded by `index.html`.
pub struct PlotlyBackend;

impl ChartBackend for PlotlyBackend {
    fn mount(&mut self, canvas_id: &str, spec: &ChartSpec) -> Result<(), ChartError> {
        let mount_error = |message: String| ChartError::Mount {
            canvas_id: canvas_id.to_string(),
            message,
        };

        let exists = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(canvas_id))
            .is_some();
        if !exists {
            return Err(mount_error("element not found".to_string()));
        }

        let figure = to_plot_json(spec)?;
        new_plot(
            canvas_id,
            to_js(&figure["data"])?,
            to_js(&figure["layout"])?,
            to_js(&figure["config"])?,
        )
        .map(|_| ())
        .map_err(|e| mount_error(format!("{:?}", e)))
    }

    fn destroy(&mut self, canvas_id: &str) {
        if let Err(e) = purge(canvas_id) {
            log::warn!("Plotly.purge({}) failed: {:?}", canvas_id, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::series::Series;

    fn spec(kind: ChartKind) -> ChartSpec {
        ChartSpec::from_series(
            kind,
            vec![
                Series::new("Average Price", "red", vec![("2024-01-02".to_string(), 6.0), ("2024-01-01".to_string(), 5.0)]),
                Series::new("Minimum Price", "blue", vec![("2024-01-02".to_string(), 4.0), ("2024-01-01".to_string(), 3.0)]),
            ],
        )
        .unwrap()
        .with_axis_titles(Some("Date"), Some("Price (INR)"))
    }

    #[test]
    fn test_line_figure() {
        let figure = to_plot_json(&spec(ChartKind::Line)).unwrap();
        let data = figure["data"].as_array().unwrap();

        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["type"], "scatter");
        assert_eq!(data[0]["name"], "Average Price");
        assert_eq!(data[0]["x"], json!(["2024-01-02", "2024-01-01"]));
        assert_eq!(data[1]["y"], json!([4.0, 3.0]));
        assert_eq!(figure["layout"]["xaxis"]["type"], "category");
        assert_eq!(figure["layout"]["yaxis"]["title"]["text"], "Price (INR)");
    }

    #[test]
    fn test_bar_figure() {
        let figure = to_plot_json(&spec(ChartKind::Bar)).unwrap();
        assert_eq!(figure["data"][0]["type"], "bar");
        assert_eq!(figure["layout"]["title"], Value::Null);
    }
}
