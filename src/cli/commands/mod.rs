pub mod auth;
pub mod config;
pub mod profile;

pub use auth::{AuthCommands, AuthSubcommands};
pub use config::{ConfigCommands, ConfigSubcommands, ContextArgs};
pub use profile::{ProfileCommands, ProfileSubcommands};
