use anyhow::Result;

use super::{require_token, resolve_context};
use crate::api::{ApiClient, NewClientConfig, SigningAlgorithm};
use crate::cli::commands::ContextArgs;
use crate::config::Config;
use crate::output::Console;
use crate::token::TokenCache;

pub struct CreateOptions {
    pub client_name: String,
    pub redirect_uris: Vec<String>,
    pub backchannel_logout_uri: String,
    pub jwks_uri: String,
    pub jwks_uri_signing_algorithm: SigningAlgorithm,
    pub description: Option<String>,
}

/// Register a new client config with the team.
pub async fn create_command(
    options: CreateOptions,
    context: ContextArgs,
    console: Console,
) -> Result<()> {
    let config = Config::load()?;
    let (env, team_id) = resolve_context(&config, &console, context.env, context.team_id)?;

    let cache = TokenCache::new(console)?;
    let token = require_token(&cache, env, &team_id)?;

    let body = NewClientConfig {
        client_name: options.client_name,
        redirect_uris: options.redirect_uris,
        backchannel_logout_uri: options.backchannel_logout_uri,
        jwks_uri: options.jwks_uri,
        jwks_uri_signing_algorithm: options.jwks_uri_signing_algorithm,
        description: options.description,
    };

    let client = ApiClient::new(env, console)?;
    let created = client.create_config(&team_id, &body, &token.token).await?;
    console.success(&format!("Created config with name={}", created.config_name));
    console.print_json(&created, true);
    Ok(())
}
