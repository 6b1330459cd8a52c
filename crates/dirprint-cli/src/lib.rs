//! dirprint-cli library
//!
//! This module exposes the command implementations of dirprint-cli for testing purposes.

pub mod commands;
pub mod logging;

pub use commands::OutputFormat;
