//! Config management commands.

pub mod create;
pub mod edit;
pub mod get;
pub mod list;

pub use create::{CreateOptions, create_command};
pub use edit::edit_command;
pub use get::get_command;
pub use list::list_command;

use anyhow::{Result, bail};

use crate::api::Environment;
use crate::config::Config;
use crate::output::Console;
use crate::token::{CachedToken, TokenCache};

/// Resolve the environment and team a config command operates on. An
/// active profile wins over the explicit flags; with neither the command
/// fails before any network traffic.
pub(crate) fn resolve_context(
    config: &Config,
    console: &Console,
    env: Option<Environment>,
    team_id: Option<String>,
) -> Result<(Environment, String)> {
    if let Some((active, profile)) = config.resolve_active_profile() {
        console.info(&format!("Using profile {}", active.selected));
        return Ok((profile.environment, profile.team_id.clone()));
    }
    match (env, team_id) {
        (Some(env), Some(team_id)) => Ok((env, team_id)),
        _ => {
            console.error("Could not determine an environment or team ID.");
            console.error(
                "Authenticate with a profile, or provide the --env and --team-id arguments.",
            );
            bail!("Missing environment or team ID");
        }
    }
}

/// The cached token a config command runs with. No valid token means no
/// network call is attempted.
pub(crate) fn require_token(
    cache: &TokenCache,
    env: Environment,
    team_id: &str,
) -> Result<CachedToken> {
    match cache.lookup(env, team_id, false)? {
        Some(token) => Ok(token),
        None => bail!("No valid cached token for the {env} environment; run 'connman auth login' first"),
    }
}
