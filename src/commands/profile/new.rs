use anyhow::Result;
use log::debug;

use crate::api::ApiClient;
use crate::config::{Config, Profile};
use crate::output::Console;
use crate::ui::prompts;

/// Interactively create profiles.
pub async fn new_command(console: Console) -> Result<()> {
    let mut config = Config::load()?;
    define_profiles(&mut config, console).await
}

/// Loop prompting for profile definitions until the operator stops.
///
/// Each secret is validated with a live authentication before the profile
/// is saved; a failed attempt offers a retry instead of aborting the loop.
pub async fn define_profiles(config: &mut Config, console: Console) -> Result<()> {
    loop {
        console.print("[Create Profile]", false);
        let name = prompts::prompt_profile_name()?;
        if name.is_empty() {
            console.error("Profile names cannot be empty.");
            continue;
        }
        if config.profile(&name).is_some() {
            console.error(&format!("You already have a profile named {name}."));
            continue;
        }

        let env = prompts::prompt_environment(
            "Which CIS2 environment do you want to create a profile for?",
        )?;
        let secret = prompts::prompt_secret(env)?;

        let client = ApiClient::new(env, console)?;
        match client.authenticate(&secret).await {
            Ok((_, claims)) => {
                let Some(profile) = Profile::from_claims(env, secret, &claims) else {
                    console.error("The authentication response did not include any team IDs.");
                    if prompts::prompt_confirmation("Would you like to try again?", true)? {
                        continue;
                    }
                    return Ok(());
                };
                console.success(&format!(
                    "This profile is valid for the following team IDs: {}",
                    claims.team_ids.join(", ")
                ));

                config.upsert_profile(name, profile);
                config.save()?;
                console.success(&format!("Profile saved to {}", Config::path()?.display()));

                if !prompts::prompt_confirmation("Would you like to create another profile?", false)?
                {
                    return Ok(());
                }
            }
            Err(err) => {
                debug!("Secret validation failed: {err:#}");
                console.error(&format!(
                    "Failed to validate the provided secret against the {env} environment."
                ));
                if !prompts::prompt_confirmation("Would you like to try again?", true)? {
                    return Ok(());
                }
            }
        }
    }
}
