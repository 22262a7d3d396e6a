use anyhow::{Result, bail};
use chrono::Utc;

use crate::api::{ApiClient, Environment};
use crate::config::Config;
use crate::output::Console;
use crate::token::{TokenCache, TokenClaims, format_timestamp};

/// Authenticate against a Connection Manager environment, either with a
/// stored profile or with an explicit environment and secret.
pub async fn login_command(
    profile: Option<String>,
    env: Option<Environment>,
    secret: Option<String>,
    console: Console,
) -> Result<()> {
    if profile.is_none() && env.is_none() && secret.is_none() {
        console.error("Missing --profile or --env and --secret arguments.");
        console.error("See 'connman auth login --help' for usage.");
        bail!("No authentication arguments were provided");
    }
    if profile.is_some() && (env.is_some() || secret.is_some()) {
        console.error("Either --profile or --env and --secret arguments are supported, not both.");
        bail!("Conflicting authentication arguments");
    }

    let config = Config::load()?;
    let (env, secret, selected) = if let Some(name) = profile {
        console.info("Performing Profile Authentication");
        let Some(stored) = config.profile(&name) else {
            console.error(&format!("Profile {name} does not exist."));
            console.error("Use 'connman profile new' to set up a new profile.");
            bail!("Unknown profile '{name}'");
        };
        console.success(&format!("Profile {name} exists."));
        (stored.environment, stored.secret.clone(), Some(name))
    } else {
        console.info("Performing Secret Authentication");
        match (env, secret) {
            (Some(env), Some(secret)) => (env, secret, None),
            _ => {
                console.error("Both --env and --secret arguments are required.");
                bail!("Incomplete authentication arguments");
            }
        }
    };

    let client = ApiClient::new(env, console)?;
    let (raw, claims) = client.authenticate(&secret).await?;
    print_token_info(&console, &claims);

    let cache = TokenCache::new(console)?;
    cache.store(&raw, &claims, env)?;

    if let Some(name) = selected {
        let mut config = Config::load()?;
        config.select_profile(&name, Utc::now().timestamp())?;
        config.save()?;
        console.success(&format!("Selected Profile: {name}"));
    }

    console.success("Authenticated with CIS2 Connection Manager");
    Ok(())
}

fn print_token_info(console: &Console, claims: &TokenClaims) {
    let audience = match &claims.aud {
        serde_json::Value::String(audience) => audience.clone(),
        other => other.to_string(),
    };
    console.print("\n--------- Token Info ----------", false);
    console.print(&format!("Issuer:\t\t{}", claims.iss), false);
    console.print(&format!("Subject:\t{}", claims.sub), false);
    console.print(&format!("Audience:\t{audience}"), false);
    console.print(
        &format!("Issued At:\t{} UTC", format_timestamp(claims.iat)),
        false,
    );
    console.print(
        &format!("Expires:\t{} UTC", format_timestamp(claims.exp)),
        false,
    );
    console.print(&format!("Team ID(s):\t{}", claims.team_ids.join(", ")), false);
    console.print("-------------------------------\n", false);
}
