use clap::{Args, Subcommand};

use crate::api::Environment;

#[derive(Args)]
pub struct AuthCommands {
    #[command(subcommand)]
    pub command: AuthSubcommands,
}

#[derive(Subcommand)]
pub enum AuthSubcommands {
    /// Login to a CIS2 Connection Manager environment
    Login {
        /// Profile to authenticate with
        #[arg(long)]
        profile: Option<String>,

        /// Environment to authenticate against
        #[arg(long, value_enum)]
        env: Option<Environment>,

        /// Secret for the environment
        #[arg(long)]
        secret: Option<String>,
    },
    /// Show the selected profile and whether a cached token is live
    Status,
}
