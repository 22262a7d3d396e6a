//! Command handlers.
//!
//! Each handler takes the parsed arguments plus the shared [`Console`] and
//! returns `anyhow::Result`, so the binary maps success and failure onto
//! exit codes in one place.
//!
//! [`Console`]: crate::output::Console

pub mod auth;
pub mod config;
pub mod ping;
pub mod profile;
