//! Profile storage for Connection Manager credentials.
//!
//! Profiles live in a single TOML file under the user config directory,
//! together with a pointer to the profile selected by the last successful
//! login.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::api::Environment;
use crate::token::TokenClaims;

/// A stored credential bundle for one Connection Manager environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub environment: Environment,
    pub secret: String,
    pub team_id: String,
}

impl Profile {
    /// Build a profile from a successful authentication. The first team id
    /// in the claims becomes the profile's team; returns `None` when the
    /// claims carry no team ids.
    pub fn from_claims(
        environment: Environment,
        secret: String,
        claims: &TokenClaims,
    ) -> Option<Self> {
        let team_id = claims.team_ids.first()?.clone();
        Some(Self {
            environment,
            secret,
            team_id,
        })
    }
}

/// Pointer to the profile selected by the last successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveProfile {
    pub selected: String,
    /// Unix timestamp of the login that selected this profile.
    pub authtime: i64,
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub active: Option<ActiveProfile>,
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

impl Config {
    /// Path of the config file: `<user config dir>/connman-cli/config.toml`.
    pub fn path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().context("Failed to determine the user config directory")?;
        Ok(config_dir.join("connman-cli").join("config.toml"))
    }

    pub fn exists() -> bool {
        Self::path().map(|path| path.exists()).unwrap_or(false)
    }

    /// Load the config file, or an empty config when none exists yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {}, starting empty", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialise config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        debug!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    pub fn upsert_profile(&mut self, name: String, profile: Profile) {
        self.profiles.insert(name, profile);
    }

    pub fn profile_names(&self) -> Vec<&str> {
        self.profiles.keys().map(String::as_str).collect()
    }

    /// Point the active-profile marker at `name`. The profile must exist.
    pub fn select_profile(&mut self, name: &str, authtime: i64) -> Result<()> {
        if !self.profiles.contains_key(name) {
            bail!("Profile '{name}' does not exist");
        }
        self.active = Some(ActiveProfile {
            selected: name.to_string(),
            authtime,
        });
        Ok(())
    }

    /// The selected profile, if the pointer is set and still refers to a
    /// profile that exists. A dangling pointer is logged and ignored.
    pub fn resolve_active_profile(&self) -> Option<(&ActiveProfile, &Profile)> {
        let active = self.active.as_ref()?;
        match self.profiles.get(&active.selected) {
            Some(profile) => Some((active, profile)),
            None => {
                warn!(
                    "Selected profile '{}' no longer exists in the config file",
                    active.selected
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile(env: Environment) -> Profile {
        Profile {
            environment: env,
            secret: "s3cret".to_string(),
            team_id: "T123".to_string(),
        }
    }

    fn sample_claims(team_ids: &[&str]) -> TokenClaims {
        TokenClaims {
            iss: "connection-manager".to_string(),
            sub: "T1".to_string(),
            aud: serde_json::Value::String("connman".to_string()),
            iat: 1_700_000_000,
            exp: 1_700_003_600,
            team_ids: team_ids.iter().map(|id| id.to_string()).collect(),
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn profiles_built_from_claims_take_the_first_team_id() {
        let claims = sample_claims(&["T1", "T2"]);
        let profile =
            Profile::from_claims(Environment::Dev, "s3cret".to_string(), &claims).unwrap();
        assert_eq!(profile.team_id, "T1");
        assert_eq!(profile.environment, Environment::Dev);
        assert_eq!(profile.secret, "s3cret");
    }

    #[test]
    fn claims_without_team_ids_build_no_profile() {
        let claims = sample_claims(&[]);
        assert!(Profile::from_claims(Environment::Dev, "s3cret".to_string(), &claims).is_none());
    }

    #[test]
    fn toml_round_trip_preserves_profiles_and_pointer() {
        let mut config = Config::default();
        config.upsert_profile("alpha".to_string(), sample_profile(Environment::Dev));
        config.upsert_profile("beta".to_string(), sample_profile(Environment::Int));
        config.select_profile("alpha", 1_700_000_000).unwrap();

        let text = toml::to_string_pretty(&config).unwrap();
        let reloaded: Config = toml::from_str(&text).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn empty_config_serialises_without_active_section() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(!text.contains("active"));
        let reloaded: Config = toml::from_str(&text).unwrap();
        assert!(reloaded.active.is_none());
        assert!(reloaded.profiles.is_empty());
    }

    #[test]
    fn select_profile_rejects_unknown_names() {
        let mut config = Config::default();
        assert!(config.select_profile("missing", 0).is_err());
        assert!(config.active.is_none());
    }

    #[test]
    fn dangling_active_pointer_resolves_to_none() {
        let mut config = Config::default();
        config.upsert_profile("alpha".to_string(), sample_profile(Environment::Dev));
        config.select_profile("alpha", 42).unwrap();
        config.profiles.remove("alpha");

        assert!(config.resolve_active_profile().is_none());
    }

    #[test]
    fn resolve_active_profile_returns_selected_entry() {
        let mut config = Config::default();
        config.upsert_profile("alpha".to_string(), sample_profile(Environment::Dep));
        config.select_profile("alpha", 42).unwrap();

        let (active, profile) = config.resolve_active_profile().unwrap();
        assert_eq!(active.selected, "alpha");
        assert_eq!(active.authtime, 42);
        assert_eq!(profile.environment, Environment::Dep);
    }
}
