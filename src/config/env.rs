//! Environment-based configuration loading.

use std::env;

use super::schema::{Config, DEFAULT_BASE_URL, DEFAULT_DEVICE_ID};
use crate::error::GateError;

/// Environment variable holding the organization credential (required).
pub const ORG_KEY_VAR: &str = "MACHINEID_ORG_KEY";

/// Environment variable overriding the device identifier (optional).
pub const DEVICE_ID_VAR: &str = "MACHINEID_DEVICE_ID";

/// Environment variable overriding the service base URL (optional).
pub const BASE_URL_VAR: &str = "MACHINEID_BASE_URL";

/// Load configuration from MACHINEID_* environment variables.
///
/// Fails fast on a missing or blank credential, before any network call.
pub fn load_config() -> Result<Config, GateError> {
    let org_key = env::var(ORG_KEY_VAR).unwrap_or_default().trim().to_string();
    if org_key.is_empty() {
        return Err(GateError::MissingOrgKey);
    }

    let device_id = device_id_or_default(env::var(DEVICE_ID_VAR).ok());
    let base_url = normalize_base_url(
        &env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
    );

    let config = Config {
        org_key,
        device_id,
        base_url,
    };
    config.validate()?;

    Ok(config)
}

/// Use the fixed fallback identifier when the override is unset or blank.
fn device_id_or_default(raw: Option<String>) -> String {
    match raw {
        Some(id) if !id.trim().is_empty() => id.trim().to_string(),
        _ => DEFAULT_DEVICE_ID.to_string(),
    }
}

/// Strip trailing slashes so endpoint paths join cleanly.
fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
