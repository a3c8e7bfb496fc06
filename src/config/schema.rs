//! Configuration schema for the device gate.

use crate::error::GateError;

/// Default licensing service base URL.
pub const DEFAULT_BASE_URL: &str = "https://machineid.io";

/// Fallback device identifier.
///
/// Minimal, deterministic default for demos and starters. No local machine
/// info. Override with MACHINEID_DEVICE_ID if needed.
pub const DEFAULT_DEVICE_ID: &str = "rust-starter:01";

/// Main configuration structure.
///
/// Constructed once at startup and passed to the client; nothing else reads
/// the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Organization credential carried in the x-org-key header
    pub org_key: String,

    /// Device identifier registered and validated with the service.
    /// Stable for the lifetime of the process.
    pub device_id: String,

    /// Base URL of the licensing service, with no trailing slash
    pub base_url: String,
}

impl Config {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), GateError> {
        if self.org_key.trim().is_empty() {
            return Err(GateError::MissingOrgKey);
        }

        if self.device_id.trim().is_empty() {
            return Err(GateError::Config("device id cannot be empty".to_string()));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(GateError::Config(format!(
                "base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            org_key: "org_test123456789".to_string(),
            device_id: "agent-01".to_string(),
            base_url: "http://localhost:8080".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.org_key = "".to_string();
        assert!(matches!(
            config.validate(),
            Err(GateError::MissingOrgKey)
        ));
    }

    #[test]
    fn test_blank_org_key_rejected() {
        let mut config = valid_config();
        config.org_key = "   ".to_string();
        assert!(matches!(
            config.validate(),
            Err(GateError::MissingOrgKey)
        ));
    }

    #[test]
    fn test_bad_scheme_rejected() {
        let mut config = valid_config();
        config.base_url = "ftp://machineid.io".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("http:// or https://"));
    }

    #[test]
    fn test_empty_device_id_rejected() {
        let mut config = valid_config();
        config.device_id = "".to_string();
        assert!(config.validate().is_err());
    }
}
