//! Configuration module - load and validate the gate configuration.

pub mod env;
pub mod schema;

pub use env::load_config;
pub use schema::Config;
