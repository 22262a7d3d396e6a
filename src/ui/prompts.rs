//! Interactive prompts for profile setup.

use anyhow::Result;
use dialoguer::{Input, Password, Select};

use crate::api::Environment;

pub fn prompt_profile_name() -> Result<String> {
    let name = Input::<String>::new()
        .with_prompt("What would you like to name this profile?")
        .interact()?;
    Ok(name.trim().to_string())
}

pub fn prompt_environment(prompt: &str) -> Result<Environment> {
    let environments = Environment::all();
    let labels = environments.map(|env| env.code());
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(environments[selection])
}

pub fn prompt_secret(env: Environment) -> Result<String> {
    let secret = Password::new()
        .with_prompt(format!("Provide your secret for the {env} environment"))
        .interact()?;
    Ok(secret.trim().to_string())
}

pub fn prompt_confirmation(prompt: &str, default_yes: bool) -> Result<bool> {
    let options = ["Yes", "No"];
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&options)
        .default(if default_yes { 0 } else { 1 })
        .interact()?;
    Ok(selection == 0)
}
