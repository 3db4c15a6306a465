//! Library exports for reusing waymeasure subsystems.
//!
//! Exposes the measurement tool, rendering primitives, and configuration
//! data structures so that integration tests and external tooling can share
//! the same logic as the main binary.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod tool;
pub mod util;

pub use config::Config;
