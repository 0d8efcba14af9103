pub mod config;
pub mod error;
pub mod import;
pub mod ranking;
pub mod telemetry;
