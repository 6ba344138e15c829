//! HTTP middleware stack: CORS policy, panic recovery and per-request tracing.

pub mod cors;
pub mod panic;
pub mod trace;
