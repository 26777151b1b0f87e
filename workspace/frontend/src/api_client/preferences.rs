use flight_common::Preferences;

use crate::api_client::{self, ApiError};

/// Get the signed-in user's display preferences
pub async fn get_preferences() -> Result<Preferences, ApiError> {
    log::trace!("Fetching user preferences");
    let result: Result<Preferences, ApiError> = api_client::get("/settings", &[]).await;
    match &result {
        Ok(prefs) => log::info!("Fetched preferences (currency {})", prefs.currency),
        Err(e) => log::warn!("Failed to fetch preferences: {}", e),
    }
    result
}
