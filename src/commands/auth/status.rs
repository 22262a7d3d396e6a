use anyhow::Result;

use crate::config::Config;
use crate::output::Console;
use crate::token::{TokenCache, format_timestamp};

/// Show the selected profile and whether a live token is cached for it.
pub async fn status_command(console: Console) -> Result<()> {
    let config = Config::load()?;
    let Some((active, profile)) = config.resolve_active_profile() else {
        console.print("No active profile.", false);
        console.print(
            "Run 'connman auth login --profile <name>' to select one.",
            false,
        );
        return Ok(());
    };

    let cache = TokenCache::new(console)?;
    let token = cache.lookup(profile.environment, &profile.team_id, true)?;

    console.print("[Active Profile]", false);
    console.print(&format!("Name:\t\t{}", active.selected), false);
    console.print(&format!("Environment:\t{}", profile.environment), false);
    console.print(&format!("Team ID:\t{}", profile.team_id), false);
    console.print(
        &format!("Last Auth Time:\t{} UTC", format_timestamp(active.authtime)),
        false,
    );
    console.print(&format!("Token Active:\t{}", token.is_some()), false);
    Ok(())
}
