use anyhow::Result;

use crate::api::{ApiClient, Environment};
use crate::output::Console;
use crate::ui::prompts;

/// Ping the hello-world endpoint of the chosen environment.
pub async fn ping_command(env: Option<Environment>, console: Console) -> Result<()> {
    let env = match env {
        Some(env) => env,
        None => prompts::prompt_environment("Which environment do you want to ping?")?,
    };

    let client = ApiClient::new(env, console)?;
    client.ping().await?;
    console.success(&format!(
        "Connection Manager responded in the {env} environment"
    ));
    Ok(())
}
