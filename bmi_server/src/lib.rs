#![forbid(unsafe_code)]

//! HTTP boundary for the BMI service.
//!
//! The router and handlers live here so end-to-end tests can drive the
//! service in-process; the `bmid` binary only wires config and storage to
//! [`routes::router`].

pub mod routes;

pub use routes::{router, AppState};
