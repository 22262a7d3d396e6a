//! Profile management commands.

pub mod get;
pub mod list;
pub mod new;

pub use get::get_command;
pub use list::list_command;
pub use new::{define_profiles, new_command};

use anyhow::Result;
use is_terminal::IsTerminal;

use crate::config::Config;
use crate::output::Console;
use crate::ui::prompts;

/// First-run offer: when no config file exists yet and the session is
/// interactive, offer to define profiles before running the requested
/// command. Declining, quiet mode and non-interactive stdin all skip it.
pub async fn first_run_check(console: Console) -> Result<()> {
    if Config::exists() || console.is_quiet() || !std::io::stdin().is_terminal() {
        return Ok(());
    }

    console.info("It looks like this is the first time you have run Connman.");
    console.print("[Credentials]", false);
    console.print(
        "Connman can store your secrets for CIS2 Connection Manager as profiles.",
        false,
    );
    console.print(
        "You can opt out, but you will then have to provide the secret for the relevant environment on every authentication.\n",
        false,
    );
    if prompts::prompt_confirmation("Would you like to define profiles interactively now?", true)? {
        let mut config = Config::load()?;
        define_profiles(&mut config, console).await?;
    }
    Ok(())
}
