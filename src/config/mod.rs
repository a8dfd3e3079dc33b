// src/config/mod.rs

pub mod parameters;
pub mod scenario;
pub mod error;

pub use parameters::VerletParameters;
pub use scenario::{ModelConfig, Scenario};
pub use error::ConfigError;
