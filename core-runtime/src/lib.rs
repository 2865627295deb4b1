//! # Core Runtime Module
//!
//! Foundational runtime infrastructure for the health bridge:
//! - Logging and tracing setup
//! - Shared runtime error types
//!
//! ## Overview
//!
//! Host applications call [`logging::init_logging`] once during startup to
//! establish the tracing conventions the bridge crates emit against.

pub mod error;
pub mod logging;

pub use error::{Error, Result};
