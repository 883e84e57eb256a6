pub mod ai;
pub mod config;
pub mod error;
pub mod generator;
pub mod insights;
pub mod platform;
pub mod telemetry;
