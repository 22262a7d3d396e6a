use anyhow::Result;
use serde_json::Map;

use super::{require_token, resolve_context};
use crate::api::ApiClient;
use crate::cli::commands::ContextArgs;
use crate::config::Config;
use crate::output::Console;
use crate::token::TokenCache;

/// List the team's configs, either as names or fully expanded.
pub async fn list_command(with_detail: bool, context: ContextArgs, console: Console) -> Result<()> {
    let config = Config::load()?;
    let (env, team_id) = resolve_context(&config, &console, context.env, context.team_id)?;

    let cache = TokenCache::new(console)?;
    let token = require_token(&cache, env, &team_id)?;

    let client = ApiClient::new(env, console)?;
    let list = client.list_configs(&team_id, &token.token).await?;
    if list.configs.is_empty() {
        console.warn("You have not set up any configs for this team.");
        return Ok(());
    }

    console.success(&format!("Retrieved {} config entries", list.configs.len()));
    if !with_detail {
        console.debug(
            "Listing config names only. Use --with-detail for the full entries.",
        );
        console.print_json(&list.configs, true);
        return Ok(());
    }

    let mut detailed = Map::new();
    for config_id in &list.configs {
        let envelope = client.get_config(&team_id, config_id, &token.token).await?;
        detailed.insert(config_id.clone(), serde_json::to_value(&envelope)?);
    }
    console.print_json(&detailed, true);
    Ok(())
}
