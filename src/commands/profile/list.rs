use anyhow::Result;

use crate::config::Config;
use crate::output::Console;

/// Print the names of the stored profiles.
pub async fn list_command(console: Console) -> Result<()> {
    let config = Config::load()?;
    console.print_json(&config.profile_names(), true);
    Ok(())
}
