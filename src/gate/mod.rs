//! Gate module - device registration and validation against the licensing
//! service.

pub mod client;
pub mod flow;
pub mod types;

pub use client::DeviceGateClient;
pub use flow::{run_gate, GateOutcome};
pub use types::{RegisterStatus, RegistrationResult, ValidationDecision};
