//! Command-line interface definitions.
//!
//! This layer only declares the argument surface; handlers live in
//! [`crate::commands`].

pub mod app;
pub mod commands;

pub use app::{Cli, Commands};
