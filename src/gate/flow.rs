//! Gate sequencing: register, wait, validate, decide.

use std::thread;
use std::time::Duration;

use super::client::DeviceGateClient;
use super::types::{RegisterStatus, RegistrationResult, ValidationDecision};
use crate::config::Config;
use crate::error::GateError;

/// Fixed wait between register and validate. Registration propagates
/// asynchronously on the server side; this is a single deliberate delay,
/// not a retry loop.
pub const PROPAGATION_DELAY: Duration = Duration::from_secs(1);

/// Terminal outcomes of the gate. All three map to exit code 0; failures
/// travel as `GateError` and exit 1.
#[derive(Debug)]
pub enum GateOutcome {
    /// Server allowed execution.
    Allowed,
    /// Server answered and denied execution (hard gate).
    Denied,
    /// Organization device limit reached; a policy stop, not an error.
    LimitReached(RegistrationResult),
}

/// Run the register-then-validate handshake.
///
/// Validate is only reached after registration returned a continuable
/// status (`ok`, `exists`, `restored`); `limit_reached` and unknown tags
/// stop the flow without a second call.
pub fn run_gate(config: &Config) -> Result<GateOutcome, GateError> {
    let client = DeviceGateClient::new(config)?;

    let registration = client.register(&config.org_key, &config.device_id)?;
    print_registration_summary(&registration);

    if registration.status == RegisterStatus::LimitReached {
        return Ok(GateOutcome::LimitReached(registration));
    }
    if !registration.status.allows_validation() {
        return Err(GateError::UnexpectedStatus {
            status: registration.status.to_string(),
        });
    }

    eprintln!(
        "→ Waiting {}s for registration to propagate ...",
        PROPAGATION_DELAY.as_secs()
    );
    thread::sleep(PROPAGATION_DELAY);

    let decision = client.validate(&config.org_key, &config.device_id)?;
    print_validation_summary(&decision);

    if decision.allowed {
        Ok(GateOutcome::Allowed)
    } else {
        Ok(GateOutcome::Denied)
    }
}

fn print_registration_summary(registration: &RegistrationResult) {
    eprintln!();
    eprintln!("Registration summary:");
    eprintln!("  status      : {}", registration.status);
    if let Some(tier) = &registration.plan_tier {
        eprintln!("  planTier    : {}", tier);
    }
    if let Some(limit) = registration.limit {
        eprintln!("  limit       : {}", limit);
    }
    if let Some(used) = registration.devices_used {
        eprintln!("  devicesUsed : {}", used);
    }
    if let Some(remaining) = registration.remaining {
        eprintln!("  remaining   : {}", remaining);
    }
    eprintln!();
}

fn print_validation_summary(decision: &ValidationDecision) {
    eprintln!();
    eprintln!("Validation summary:");
    eprintln!("  allowed     : {}", decision.allowed);
    eprintln!("  code        : {}", decision.explanation().unwrap_or("-"));
    eprintln!(
        "  request_id  : {}",
        decision.request_id.as_deref().unwrap_or("-")
    );
    eprintln!();
}
