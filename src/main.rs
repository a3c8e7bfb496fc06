//! machineid-gate - register-then-validate device gate.
//!
//! Registers this process's device with the licensing service, validates
//! it, and reports whether execution is allowed:
//! 1. Register (idempotent)
//! 2. Fixed propagation wait
//! 3. Validate (hard gate)
//!
//! Exit code 0 covers allowed and policy-denied outcomes; exit code 1 is
//! reserved for configuration and unexpected failures.

mod config;
mod error;
mod gate;

use std::process::exit;

use config::{load_config, Config};
use gate::{run_gate, GateOutcome};

fn main() {
    let config = match load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("❌ {}", e);
            exit(1);
        }
    };

    print_startup_summary(&config);

    match run_gate(&config) {
        Ok(GateOutcome::Allowed) => {
            eprintln!("✅ Execution allowed. Start/continue work here.");
            exit(0);
        }
        Ok(GateOutcome::Denied) => {
            eprintln!("🚫 Execution denied (hard gate). Exiting immediately.");
            exit(0);
        }
        Ok(GateOutcome::LimitReached(registration)) => {
            match (registration.devices_used, registration.limit) {
                (Some(used), Some(limit)) => eprintln!(
                    "🚫 Device limit reached ({}/{}). Exiting without validation.",
                    used, limit
                ),
                _ => eprintln!("🚫 Device limit reached. Exiting without validation."),
            }
            exit(0);
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            exit(1);
        }
    }
}

fn print_startup_summary(config: &Config) {
    eprintln!("✔ MACHINEID_ORG_KEY loaded: {}", mask_key(&config.org_key));
    eprintln!("Using base_url: {}", config.base_url);
    eprintln!("Using device_id: {}", config.device_id);
    eprintln!();
}

/// First characters of the credential for display; never the full key.
fn mask_key(key: &str) -> String {
    let prefix: String = key.chars().take(12).collect();
    format!("{}...", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key_truncates() {
        assert_eq!(mask_key("org_test123456789"), "org_test1234...");
    }

    #[test]
    fn test_mask_key_short_input() {
        assert_eq!(mask_key("org"), "org...");
    }
}
