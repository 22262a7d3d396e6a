use anyhow::{Result, bail};

use super::{require_token, resolve_context};
use crate::api::{ApiClient, ClientConfigPatch};
use crate::cli::commands::ContextArgs;
use crate::config::Config;
use crate::output::Console;
use crate::token::TokenCache;

/// Merge-edit an existing config: fetch the current revision, overlay the
/// supplied fields and write it back against the fetched integrity hash.
pub async fn edit_command(
    client_name: String,
    patch: ClientConfigPatch,
    context: ContextArgs,
    console: Console,
) -> Result<()> {
    if patch.is_empty() {
        console.error("No fields to change were provided.");
        bail!("Nothing to edit");
    }

    let config = Config::load()?;
    let (env, team_id) = resolve_context(&config, &console, context.env, context.team_id)?;

    let cache = TokenCache::new(console)?;
    let token = require_token(&cache, env, &team_id)?;

    let client = ApiClient::new(env, console)?;
    let envelope = client
        .get_config(&team_id, &client_name, &token.token)
        .await?;

    let merged = envelope.client_config.apply(&patch);
    if merged == envelope.client_config {
        console.warn("The new client is identical to the current client.");
    }

    console.info(&format!("Saving modified client with hash={}", envelope.hash));
    client
        .update_config(&team_id, &client_name, &merged, &envelope.hash, &token.token)
        .await?;
    console.success(&format!("Updated client {client_name}"));
    console.print_json(&merged, true);
    Ok(())
}
