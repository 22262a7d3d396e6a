use anyhow::Result;
use clap::Parser;
use log::info;

use connman_cli::api::ClientConfigPatch;
use connman_cli::cli::commands::{AuthSubcommands, ConfigSubcommands, ProfileSubcommands};
use connman_cli::cli::{Cli, Commands};
use connman_cli::commands::config::CreateOptions;
use connman_cli::commands::{auth, config, ping, profile};
use connman_cli::output::Console;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let console = Console::from_flags(cli.quiet, cli.no_colour);
    info!("Starting connman");

    profile::first_run_check(console).await?;

    match cli.command {
        Commands::Ping { env } => ping::ping_command(env, console).await,
        Commands::Auth(args) => match args.command {
            AuthSubcommands::Login {
                profile,
                env,
                secret,
            } => auth::login_command(profile, env, secret, console).await,
            AuthSubcommands::Status => auth::status_command(console).await,
        },
        Commands::Config(args) => match args.command {
            ConfigSubcommands::Get { config_id, context } => {
                config::get_command(config_id, context, console).await
            }
            ConfigSubcommands::List {
                with_detail,
                context,
            } => config::list_command(with_detail, context, console).await,
            ConfigSubcommands::Create {
                client_name,
                redirect_uri,
                backchannel_logout_uri,
                jwks_uri,
                jwks_uri_signing_algorithm,
                description,
                context,
            } => {
                let options = CreateOptions {
                    client_name,
                    redirect_uris: redirect_uri,
                    backchannel_logout_uri,
                    jwks_uri,
                    jwks_uri_signing_algorithm,
                    description,
                };
                config::create_command(options, context, console).await
            }
            ConfigSubcommands::Edit {
                client_name,
                redirect_uri,
                backchannel_logout_uri,
                jwks_uri,
                jwks_uri_signing_algorithm,
                description,
                context,
            } => {
                let patch = ClientConfigPatch {
                    redirect_uris: redirect_uri,
                    backchannel_logout_uri,
                    jwks_uri,
                    jwks_uri_signing_algorithm,
                    description,
                };
                config::edit_command(client_name, patch, context, console).await
            }
        },
        Commands::Profile(args) => match args.command {
            ProfileSubcommands::New => profile::new_command(console).await,
            ProfileSubcommands::List => profile::list_command(console).await,
            ProfileSubcommands::Get { profile_name } => {
                profile::get_command(profile_name, console).await
            }
        },
    }
}
