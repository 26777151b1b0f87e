pub mod analytics;
pub mod history;
pub mod prediction;
pub mod preferences;

use std::borrow::Cow;

use flight_common::PredictionError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::settings;

/// Everything that can go wrong between issuing a request and holding a typed value.
/// `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Transport failure: unreachable host, CORS, aborted connection.
    #[error("Request failed: {0}")]
    Network(String),
    /// Non-2xx status, or a body reporting `success: false`.
    #[error("{message}")]
    Response { status: Option<u16>, message: String },
    /// Body is not JSON.
    #[error("Failed to parse response: {0}")]
    Parse(String),
    /// JSON parsed but a field is missing or has the wrong type, or the
    /// request was rejected before sending.
    #[error("{0}")]
    Validation(String),
}

impl From<PredictionError> for ApiError {
    fn from(err: PredictionError) -> Self {
        match err {
            PredictionError::Refused(message) => ApiError::Response { status: None, message },
            missing @ PredictionError::MissingField(_) => ApiError::Validation(missing.to_string()),
        }
    }
}

/// Replaces the bare `NaN`/`Infinity` tokens some JSON encoders emit for
/// non-finite floats with `null`. String contents are left alone.
pub fn sanitize_json(text: &str) -> Cow<'_, str> {
    if !text.contains("NaN") && !text.contains("Infinity") {
        return Cow::Borrowed(text);
    }

    const TOKENS: [&str; 3] = ["-Infinity", "Infinity", "NaN"];

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = rest.chars().next() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
        } else if let Some(token) = TOKENS.iter().find(|t| rest.starts_with(**t)) {
            out.push_str("null");
            rest = &rest[token.len()..];
            continue;
        }

        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    Cow::Owned(out)
}

pub fn parse_json(text: &str) -> Result<Value, ApiError> {
    serde_json::from_str(&sanitize_json(text)).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Converts parsed JSON into `T`; shape mismatches become [`ApiError::Validation`].
pub fn decode_value<T>(value: Value, context: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    serde_json::from_value(value).map_err(|e| ApiError::Validation(format!("Invalid data from {}: {}", context, e)))
}

/// Decodes one top-level field of an object so a broken sibling can't take it down.
pub fn section<T>(value: &Value, key: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    match value.get(key) {
        None | Some(Value::Null) => Err(ApiError::Validation(format!("Response has no `{}`", key))),
        Some(section) => serde_json::from_value(section.clone())
            .map_err(|e| ApiError::Validation(format!("Invalid `{}`: {}", key, e))),
    }
}

/// Builds the error for a non-2xx response, preferring the backend's own
/// `error` message when the body carries one.
pub fn error_from_body(status: u16, body: &str) -> ApiError {
    let message = parse_json(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP error: {}", status));

    ApiError::Response {
        status: Some(status),
        message,
    }
}

async fn read_json(method: &str, endpoint: &str, response: Response) -> Result<Value, ApiError> {
    let status = response.status();
    let body = response.text().await.map_err(|e| {
        let err = ApiError::Network(e.to_string());
        log::error!("{} {} - {}", method, endpoint, err);
        err
    })?;

    if !response.ok() {
        let err = error_from_body(status, &body);
        log::error!("{} {} - {} (status {})", method, endpoint, err, status);
        return Err(err);
    }

    log::trace!("{} {} - Response received, parsing JSON", method, endpoint);
    parse_json(&body).map_err(|err| {
        log::error!("{} {} - {}", method, endpoint, err);
        err
    })
}

/// GET an endpoint and return the raw JSON, for callers that decode sections individually.
pub async fn get_json(endpoint: &str, params: &[(&str, &str)]) -> Result<Value, ApiError> {
    let url = settings::get_settings().api_url(endpoint);
    log::debug!("GET request to: {} {:?}", url, params);

    let mut request = Request::get(&url);
    if !params.is_empty() {
        request = request.query(params.iter().copied());
    }

    let response = request.send().await.map_err(|e| {
        let err = ApiError::Network(e.to_string());
        log::error!("GET {} - {}", endpoint, err);
        err
    })?;

    let value = read_json("GET", endpoint, response).await?;
    log::info!("GET {} - Success", endpoint);
    Ok(value)
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str, params: &[(&str, &str)]) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let value = get_json(endpoint, params).await?;
    decode_value(value, endpoint).map_err(|err| {
        log::error!("GET {} - {}", endpoint, err);
        err
    })
}

/// Common POST request handler
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let url = settings::get_settings().api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            let err = ApiError::Validation(format!("Failed to serialize request: {}", e));
            log::error!("POST {} - {}", endpoint, err);
            err
        })?
        .send()
        .await
        .map_err(|e| {
            let err = ApiError::Network(e.to_string());
            log::error!("POST {} - {}", endpoint, err);
            err
        })?;

    let value = read_json("POST", endpoint, response).await?;
    let decoded = decode_value(value, endpoint).map_err(|err| {
        log::error!("POST {} - {}", endpoint, err);
        err
    })?;

    log::info!("POST {} - Success", endpoint);
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Point {
        date: String,
        price: f64,
    }

    #[test]
    fn test_sanitize_untouched_without_tokens() {
        assert!(matches!(sanitize_json(r#"{"a": 1}"#), Cow::Borrowed(_)));
    }

    #[test]
    fn test_sanitize_replaces_non_finite() {
        let text = r#"{"std": NaN, "hi": Infinity, "lo": -Infinity, "note": "NaN stays"}"#;
        let value = parse_json(text).unwrap();
        assert_eq!(value["std"], Value::Null);
        assert_eq!(value["hi"], Value::Null);
        assert_eq!(value["lo"], Value::Null);
        assert_eq!(value["note"], "NaN stays");
    }

    #[test]
    fn test_sanitize_respects_escaped_quotes() {
        let text = r#"{"s": "say \"NaN\"", "v": NaN}"#;
        let value = parse_json(text).unwrap();
        assert_eq!(value["s"], "say \"NaN\"");
        assert_eq!(value["v"], Value::Null);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(parse_json("<html>oops</html>"), Err(ApiError::Parse(_))));
    }

    #[test]
    fn test_wrong_shape_is_validation_error() {
        let value = parse_json(r#"{"date": "2024-01-05"}"#).unwrap();
        let err = decode_value::<Point>(value, "/points").unwrap_err();
        match err {
            ApiError::Validation(message) => assert!(message.contains("/points")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_section_isolation() {
        let value = parse_json(r#"{"good": {"date": "2024-01-05", "price": 1.5}, "bad": {"date": 3}}"#).unwrap();

        let good: Result<Point, _> = section(&value, "good");
        assert_eq!(
            good,
            Ok(Point {
                date: "2024-01-05".to_string(),
                price: 1.5
            })
        );
        assert!(matches!(section::<Point>(&value, "bad"), Err(ApiError::Validation(_))));
        assert_eq!(
            section::<Point>(&value, "missing"),
            Err(ApiError::Validation("Response has no `missing`".to_string()))
        );
    }

    #[test]
    fn test_error_from_body_prefers_backend_message() {
        let err = error_from_body(400, r#"{"success": false, "error": "Invalid airline"}"#);
        assert_eq!(err.to_string(), "Invalid airline");
        assert_eq!(
            err,
            ApiError::Response {
                status: Some(400),
                message: "Invalid airline".to_string()
            }
        );
    }

    #[test]
    fn test_error_from_body_falls_back_to_status() {
        assert_eq!(error_from_body(502, "Bad Gateway").to_string(), "HTTP error: 502");
        assert_eq!(error_from_body(500, r#"{"error": ""}"#).to_string(), "HTTP error: 500");
    }

    #[test]
    fn test_prediction_errors_map_to_taxonomy() {
        let refused: ApiError = PredictionError::Refused("Invalid airline".to_string()).into();
        assert_eq!(refused.to_string(), "Invalid airline");

        let missing: ApiError = PredictionError::MissingField("price").into();
        assert!(matches!(missing, ApiError::Validation(_)));
    }
}
