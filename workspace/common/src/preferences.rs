use serde::{Deserialize, Serialize};

fn default_currency() -> String {
    crate::format::DEFAULT_CURRENCY.to_string()
}

/// Chart style the user picked for the history chart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartPreference {
    Bar,
    #[default]
    #[serde(other)]
    Line,
}

/// User preferences from `GET /settings`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub chart_type: ChartPreference,
    #[serde(default)]
    pub notification_enabled: bool,
    #[serde(default)]
    pub theme: Option<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            chart_type: ChartPreference::default(),
            notification_enabled: true,
            theme: None,
        }
    }
}
