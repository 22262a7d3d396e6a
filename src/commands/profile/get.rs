use anyhow::{Result, bail};

use crate::config::Config;
use crate::output::Console;

/// Print one stored profile, secret included.
pub async fn get_command(profile_name: String, console: Console) -> Result<()> {
    let config = Config::load()?;
    let Some(profile) = config.profile(&profile_name) else {
        console.error(&format!("Profile {profile_name} not found."));
        bail!("Unknown profile '{profile_name}'");
    };
    console.print_json(profile, true);
    Ok(())
}
