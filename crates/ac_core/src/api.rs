//! JSON boundary for frontend integration.
//!
//! Errors are reported in-band in the response object so the caller never
//! has to deal with a failed serialization of the error itself.

use crate::error::OptimizeError;
use crate::models::account::Account;
use crate::optimizer::OptimizerSettings;
use crate::prefs::{GlobalPreferenceStore, OptimizePreferences, PreferenceStore};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    pub account: Account,
    pub hero_id: u32,
    #[serde(default)]
    pub preferences: OptimizePreferences,
}

#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<OptimizerSettings>,
}

impl OptimizeResponse {
    fn ok(settings: OptimizerSettings) -> Self {
        Self { success: true, error: None, settings: Some(settings) }
    }

    fn err(message: impl Into<String>) -> Self {
        Self { success: false, error: Some(message.into()), settings: None }
    }
}

/// Run the pipeline for a JSON request, persisting preferences through the
/// process-global store.
pub fn optimize_json(request_json: &str) -> String {
    let response = match serde_json::from_str::<OptimizeRequest>(request_json) {
        Ok(request) => optimize(&request, &GlobalPreferenceStore),
        Err(err) => OptimizeResponse::err(format!("invalid request: {}", err)),
    };

    serde_json::to_string(&response)
        .unwrap_or_else(|err| format!(r#"{{"success":false,"error":"{}"}}"#, err))
}

/// Current preference snapshot from the process-global store, as JSON.
pub fn preferences_json() -> String {
    let prefs = GlobalPreferenceStore.current();
    serde_json::to_string(&prefs)
        .unwrap_or_else(|err| format!(r#"{{"error":"{}"}}"#, err))
}

fn optimize(request: &OptimizeRequest, store: &dyn PreferenceStore) -> OptimizeResponse {
    let Some(hero) = request.account.hero(request.hero_id) else {
        return OptimizeResponse::err(
            OptimizeError::UnknownHero { id: request.hero_id }.to_string(),
        );
    };

    match OptimizerSettings::build(&request.account, hero, &request.preferences, store) {
        Ok(settings) => OptimizeResponse::ok(settings),
        Err(err) => OptimizeResponse::err(err.to_string()),
    }
}
