use anyhow::Result;

use super::{require_token, resolve_context};
use crate::api::ApiClient;
use crate::cli::commands::ContextArgs;
use crate::config::Config;
use crate::output::Console;
use crate::token::TokenCache;

/// Fetch one config and print it with its integrity hash.
pub async fn get_command(config_id: String, context: ContextArgs, console: Console) -> Result<()> {
    let config = Config::load()?;
    let (env, team_id) = resolve_context(&config, &console, context.env, context.team_id)?;

    let cache = TokenCache::new(console)?;
    let token = require_token(&cache, env, &team_id)?;

    let client = ApiClient::new(env, console)?;
    let envelope = client.get_config(&team_id, &config_id, &token.token).await?;
    console.print_json(&envelope, true);
    Ok(())
}
