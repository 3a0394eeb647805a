//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod clock;
pub mod config;
pub mod gpu_server;
pub mod ports;
pub mod result_log;
