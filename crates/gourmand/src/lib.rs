pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod search;
pub mod telemetry;
