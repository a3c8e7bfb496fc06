//! HTTP communication with the licensing service.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::types::{DeviceRequest, RegistrationResult, ValidationDecision};
use crate::config::Config;
use crate::error::GateError;

/// Header carrying the organization credential.
pub const ORG_KEY_HEADER: &str = "x-org-key";

/// Path of the device registration endpoint.
pub const REGISTER_PATH: &str = "/api/v1/devices/register";

/// Path of the device validation endpoint.
pub const VALIDATE_PATH: &str = "/api/v1/devices/validate";

/// Per-call timeout. Exceeding it is a transport error, surfaced to the
/// caller and never retried.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the two-call register/validate handshake.
pub struct DeviceGateClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl DeviceGateClient {
    /// Build a client bound to the configured base URL.
    pub fn new(config: &Config) -> Result<Self, GateError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Register the device with the organization (idempotent on the server).
    pub fn register(
        &self,
        org_key: &str,
        device_id: &str,
    ) -> Result<RegistrationResult, GateError> {
        let url = self.endpoint(REGISTER_PATH);
        eprintln!("→ Registering device '{}' via {} ...", device_id, url);

        let result: RegistrationResult = self.post_device(&url, org_key, device_id)?;

        eprintln!(
            "✔ register response: status={} handler={}",
            result.status,
            result.handler.as_deref().unwrap_or("-")
        );
        Ok(result)
    }

    /// Ask the server whether this device may run.
    pub fn validate(
        &self,
        org_key: &str,
        device_id: &str,
    ) -> Result<ValidationDecision, GateError> {
        let url = self.endpoint(VALIDATE_PATH);
        eprintln!("→ Validating device '{}' via {} ...", device_id, url);

        let decision: ValidationDecision = self.post_device(&url, org_key, device_id)?;

        eprintln!(
            "✔ validate decision: allowed={} code={} request_id={} handler={}",
            decision.allowed,
            decision.explanation().unwrap_or("-"),
            decision.request_id.as_deref().unwrap_or("-"),
            decision.handler.as_deref().unwrap_or("-")
        );
        Ok(decision)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST the device payload and decode one response.
    ///
    /// The body is parsed as JSON before the status code is inspected, so a
    /// non-JSON body is reported with its raw status and text even on HTTP
    /// errors. A JSON body on status >= 400 carries the server's `error`
    /// message when present.
    fn post_device<T: DeserializeOwned>(
        &self,
        url: &str,
        org_key: &str,
        device_id: &str,
    ) -> Result<T, GateError> {
        let response = self
            .http
            .post(url)
            .header(ORG_KEY_HEADER, org_key)
            .json(&DeviceRequest { device_id })
            .send()?;

        let status = response.status().as_u16();
        let body = response.text()?;

        let value: Value = serde_json::from_str(&body).map_err(|_| GateError::Parse {
            status,
            body: body.clone(),
        })?;

        if status >= 400 {
            let message = value
                .get("error")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {status}"));
            return Err(GateError::Http { status, message });
        }

        serde_json::from_value(value).map_err(|_| GateError::Parse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_join() {
        let config = Config {
            org_key: "org_test".to_string(),
            device_id: "agent-01".to_string(),
            base_url: "http://localhost:8080".to_string(),
        };
        let client = DeviceGateClient::new(&config).unwrap();

        assert_eq!(
            client.endpoint(REGISTER_PATH),
            "http://localhost:8080/api/v1/devices/register"
        );
        assert_eq!(
            client.endpoint(VALIDATE_PATH),
            "http://localhost:8080/api/v1/devices/validate"
        );
    }
}
