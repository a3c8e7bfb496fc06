//! Error taxonomy for the device gate flow.
//!
//! Every variant here is fatal and maps to exit code 1. Policy denials
//! (limit reached, validation disallowed) are not errors; they travel as
//! `GateOutcome` and exit 0.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GateError {
    /// The organization credential is unset or blank. Checked before any
    /// network call.
    #[error(
        "Missing MACHINEID_ORG_KEY.\nExample:\n  export MACHINEID_ORG_KEY=org_your_key_here"
    )]
    MissingOrgKey,

    /// Any other configuration rejection, e.g. a base URL without an
    /// http/https scheme.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Network-level failure: connect, TLS, or the per-call timeout.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// HTTP status >= 400 with a JSON body; `message` is the server's
    /// `error` field when present, else `HTTP <status>`.
    #[error("Server error (HTTP {status}): {message}")]
    Http { status: u16, message: String },

    /// The response body was not JSON (or not the expected shape). The raw
    /// status code and body are always surfaced, never a silent default.
    #[error("Could not parse JSON response. Status code: {status}. Body: {body}")]
    Parse { status: u16, body: String },

    /// Register returned a status outside the known set; `status` carries
    /// the server's tag verbatim.
    #[error("Register did not succeed: unexpected status '{status}'")]
    UnexpectedStatus { status: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_org_key_names_the_variable() {
        let msg = GateError::MissingOrgKey.to_string();
        assert!(msg.contains("MACHINEID_ORG_KEY"));
        assert!(msg.contains("export MACHINEID_ORG_KEY="));
    }

    #[test]
    fn test_parse_error_carries_status_and_raw_body() {
        let err = GateError::Parse {
            status: 502,
            body: "<html>bad gateway</html>".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("502"));
        assert!(msg.contains("<html>bad gateway</html>"));
    }

    #[test]
    fn test_http_error_prefers_server_message() {
        let err = GateError::Http {
            status: 401,
            message: "invalid org key".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("401"));
        assert!(msg.contains("invalid org key"));
    }

    #[test]
    fn test_unexpected_status_quotes_the_tag() {
        let err = GateError::UnexpectedStatus {
            status: "revoked".to_string(),
        };
        assert!(err.to_string().contains("'revoked'"));
    }
}
