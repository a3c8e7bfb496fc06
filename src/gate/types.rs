//! Wire types for the register/validate exchange.
//!
//! Responses are decoded exactly once, at the HTTP boundary; the rest of
//! the crate only sees these owned typed values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// JSON body sent to both device endpoints.
#[derive(Serialize)]
pub struct DeviceRequest<'a> {
    #[serde(rename = "deviceId")]
    pub device_id: &'a str,
}

/// Registration status tag returned by the server.
///
/// `Ok`, `Exists`, and `Restored` permit continuation. `LimitReached` is a
/// terminal policy outcome, not an error. Anything else is carried verbatim
/// in `Other` and halts the flow.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum RegisterStatus {
    Ok,
    Exists,
    Restored,
    LimitReached,
    Other(String),
}

impl From<String> for RegisterStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "ok" => RegisterStatus::Ok,
            "exists" => RegisterStatus::Exists,
            "restored" => RegisterStatus::Restored,
            "limit_reached" => RegisterStatus::LimitReached,
            _ => RegisterStatus::Other(raw),
        }
    }
}

impl fmt::Display for RegisterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterStatus::Ok => f.write_str("ok"),
            RegisterStatus::Exists => f.write_str("exists"),
            RegisterStatus::Restored => f.write_str("restored"),
            RegisterStatus::LimitReached => f.write_str("limit_reached"),
            RegisterStatus::Other(tag) => f.write_str(tag),
        }
    }
}

impl RegisterStatus {
    /// Whether this registration outcome permits the validate call.
    pub fn allows_validation(&self) -> bool {
        matches!(
            self,
            RegisterStatus::Ok | RegisterStatus::Exists | RegisterStatus::Restored
        )
    }
}

/// Response from device registration.
///
/// Plan metadata is present only when the server includes it.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationResult {
    pub status: RegisterStatus,
    pub handler: Option<String>,
    #[serde(rename = "planTier")]
    pub plan_tier: Option<String>,
    pub limit: Option<u32>,
    #[serde(rename = "devicesUsed")]
    pub devices_used: Option<u32>,
    pub remaining: Option<u32>,
}

/// Response from device validation: the hard gate.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationDecision {
    /// Absent field means denied, never allowed.
    #[serde(default)]
    pub allowed: bool,
    pub code: Option<String>,
    pub reason: Option<String>,
    pub request_id: Option<String>,
    pub handler: Option<String>,
}

impl ValidationDecision {
    /// Decision tag for display; servers send either `code` or `reason`.
    pub fn explanation(&self) -> Option<&str> {
        self.code.as_deref().or(self.reason.as_deref())
    }
}
