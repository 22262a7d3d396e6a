use clap::{Args, Subcommand};

use crate::api::{Environment, SigningAlgorithm};

#[derive(Args)]
pub struct ConfigCommands {
    #[command(subcommand)]
    pub command: ConfigSubcommands,
}

/// Environment and team selection shared by the config subcommands. Both
/// are optional on the command line; an active profile supplies them
/// otherwise.
#[derive(Args, Debug, Clone)]
pub struct ContextArgs {
    /// CIS2 Connection Manager environment
    #[arg(long, value_enum)]
    pub env: Option<Environment>,

    /// Team ID owning the configs
    #[arg(long)]
    pub team_id: Option<String>,
}

#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Get a single config by name
    Get {
        /// The config to fetch
        config_id: String,

        #[command(flatten)]
        context: ContextArgs,
    },
    /// List all configs within a single environment and team
    List {
        /// Fetch the full detail of each config entry
        #[arg(long)]
        with_detail: bool,

        #[command(flatten)]
        context: ContextArgs,
    },
    /// Create a new config
    Create {
        /// The name of the client to be created
        client_name: String,

        /// A redirect URI of the client (repeatable)
        #[arg(long = "redirect-uri", required = true)]
        redirect_uri: Vec<String>,

        /// The backchannel logout URI of the client
        #[arg(long)]
        backchannel_logout_uri: String,

        /// The JSON Web Key Set URI of the client
        #[arg(long)]
        jwks_uri: String,

        /// The signing algorithm of the JSON Web Key Set
        #[arg(long, value_enum)]
        jwks_uri_signing_algorithm: SigningAlgorithm,

        /// Description of the client
        #[arg(long)]
        description: Option<String>,

        #[command(flatten)]
        context: ContextArgs,
    },
    /// Edit an existing config
    Edit {
        /// The name of the client to be modified
        client_name: String,

        /// A replacement redirect URI (repeatable, replaces the full list)
        #[arg(long = "redirect-uri")]
        redirect_uri: Option<Vec<String>>,

        /// The new backchannel logout URI of the client
        #[arg(long)]
        backchannel_logout_uri: Option<String>,

        /// The new JSON Web Key Set URI of the client
        #[arg(long)]
        jwks_uri: Option<String>,

        /// The new signing algorithm of the JSON Web Key Set
        #[arg(long, value_enum)]
        jwks_uri_signing_algorithm: Option<SigningAlgorithm>,

        /// The new description of the client
        #[arg(long)]
        description: Option<String>,

        #[command(flatten)]
        context: ContextArgs,
    },
}
