use clap::{Args, Subcommand};

#[derive(Args)]
pub struct ProfileCommands {
    #[command(subcommand)]
    pub command: ProfileSubcommands,
}

#[derive(Subcommand)]
pub enum ProfileSubcommands {
    /// Interactively create one or more profiles
    New,
    /// List the names of the stored profiles
    List,
    /// Show a stored profile
    Get {
        /// Profile name
        profile_name: String,
    },
}
