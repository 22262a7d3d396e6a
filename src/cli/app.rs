use clap::{Parser, Subcommand};

use super::commands::{AuthCommands, ConfigCommands, ProfileCommands};
use crate::api::Environment;

#[derive(Parser)]
#[command(name = "connman")]
#[command(about = "A CLI client for the CIS2 Connection Manager API", version)]
pub struct Cli {
    /// Suppress informational output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_colour: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ping the Connection Manager hello-world endpoint
    Ping {
        /// Environment to ping (prompted for when omitted)
        #[arg(long, value_enum)]
        env: Option<Environment>,
    },
    /// Authentication subcommands
    Auth(AuthCommands),
    /// Manage CIS2 Connection Manager configurations
    Config(ConfigCommands),
    /// View, set and update profiles
    Profile(ProfileCommands),
}
