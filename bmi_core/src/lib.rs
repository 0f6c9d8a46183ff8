#![forbid(unsafe_code)]

//! Core domain model and business logic for the BMI service.
//!
//! This crate provides:
//! - Domain types (measurements, categories, reports, log records)
//! - The pure computation engine
//! - The append-only calculation log store
//! - Request-handling service logic
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod engine;
pub mod log_store;
pub mod service;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use log_store::{FileLogStore, LogStore, MemoryLogStore};
pub use service::{calculate, history, validate, Calculation, VALIDATION_MESSAGE};
