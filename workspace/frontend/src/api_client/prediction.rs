use flight_common::{PredictRequest, PredictResponse, Prediction};

use crate::api_client::{self, ApiError};

/// Validate the form and ask the backend for a price.
pub async fn predict(request: &PredictRequest) -> Result<Prediction, ApiError> {
    request.validate().map_err(|message| {
        log::debug!("Prediction form rejected: {}", message);
        ApiError::Validation(message)
    })?;

    log::debug!(
        "Requesting prediction: {} -> {} with {}",
        request.source,
        request.destination,
        request.airline
    );
    let response: PredictResponse = api_client::post("/predict", request).await?;
    let result = response.into_prediction().map_err(ApiError::from);
    match &result {
        Ok(prediction) => log::info!("Predicted price {:.2}", prediction.price),
        Err(e) => log::error!("Prediction failed: {}", e),
    }
    result
}
