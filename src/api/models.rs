//! Data shapes exchanged with the Connection Manager API.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// CIS2 Connection Manager deployment environments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Int,
    Dep,
}

impl Environment {
    /// Three-letter code used in hostnames, token file names and the
    /// config file.
    pub const fn code(&self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Int => "int",
            Environment::Dep => "dep",
        }
    }

    /// Base endpoint of the Connection Manager API in this environment.
    pub fn base_endpoint(&self) -> String {
        format!(
            "https://connectionmanager.nhs{}.auth-ptl.cis2.spineservices.nhs.uk",
            self.code()
        )
    }

    pub const fn all() -> [Environment; 3] {
        [Environment::Dev, Environment::Int, Environment::Dep]
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Signing algorithms accepted for a client's JWKS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum SigningAlgorithm {
    #[value(name = "RS256")]
    #[serde(rename = "RS256")]
    Rs256,
    #[value(name = "RS512")]
    #[serde(rename = "RS512")]
    Rs512,
}

/// An OAuth-client registration as the server returns it.
///
/// Unknown fields are collected into `extra` so that an update echoes the
/// server's full representation rather than a lossy subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub client_name: String,
    pub redirect_uris: Vec<String>,
    pub backchannel_logout_uri: String,
    pub jwks_uri: String,
    pub jwks_uri_signing_algorithm: SigningAlgorithm,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Caller-supplied field overrides for an edit. `None` keeps the server
/// value; the client name itself is never patched, it identifies the
/// config being edited.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ClientConfigPatch {
    pub redirect_uris: Option<Vec<String>>,
    pub backchannel_logout_uri: Option<String>,
    pub jwks_uri: Option<String>,
    pub jwks_uri_signing_algorithm: Option<SigningAlgorithm>,
    pub description: Option<String>,
}

impl ClientConfigPatch {
    pub fn is_empty(&self) -> bool {
        self.redirect_uris.is_none()
            && self.backchannel_logout_uri.is_none()
            && self.jwks_uri.is_none()
            && self.jwks_uri_signing_algorithm.is_none()
            && self.description.is_none()
    }
}

impl ClientConfig {
    /// Merge overrides onto this config. Omitted fields keep their current
    /// values, including any `extra` fields the server returned.
    pub fn apply(&self, patch: &ClientConfigPatch) -> ClientConfig {
        let mut merged = self.clone();
        if let Some(redirect_uris) = &patch.redirect_uris {
            merged.redirect_uris = redirect_uris.clone();
        }
        if let Some(backchannel_logout_uri) = &patch.backchannel_logout_uri {
            merged.backchannel_logout_uri = backchannel_logout_uri.clone();
        }
        if let Some(jwks_uri) = &patch.jwks_uri {
            merged.jwks_uri = jwks_uri.clone();
        }
        if let Some(algorithm) = patch.jwks_uri_signing_algorithm {
            merged.jwks_uri_signing_algorithm = algorithm;
        }
        if let Some(description) = &patch.description {
            merged.description = Some(description.clone());
        }
        merged
    }
}

/// Response to fetching a single config: the config plus the integrity
/// hash of this revision, required to update it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigEnvelope {
    pub client_config: ClientConfig,
    pub hash: String,
}

/// Response to listing a team's configs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigList {
    #[serde(default)]
    pub configs: Vec<String>,
}

/// Body for creating a config.
#[derive(Debug, Clone, Serialize)]
pub struct NewClientConfig {
    pub client_name: String,
    pub redirect_uris: Vec<String>,
    pub backchannel_logout_uri: String,
    pub jwks_uri: String,
    pub jwks_uri_signing_algorithm: SigningAlgorithm,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Response to creating a config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedConfig {
    pub config_name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_config() -> ClientConfig {
        let mut extra = Map::new();
        extra.insert("client_id".to_string(), Value::String("abc123".to_string()));
        ClientConfig {
            client_name: "my-app".to_string(),
            redirect_uris: vec!["https://example.org/cb".to_string()],
            backchannel_logout_uri: "https://example.org/logout".to_string(),
            jwks_uri: "https://example.org/jwks".to_string(),
            jwks_uri_signing_algorithm: SigningAlgorithm::Rs256,
            description: None,
            extra,
        }
    }

    #[test]
    fn environment_codes_and_endpoints() {
        assert_eq!(Environment::Dev.code(), "dev");
        assert_eq!(
            Environment::Int.base_endpoint(),
            "https://connectionmanager.nhsint.auth-ptl.cis2.spineservices.nhs.uk"
        );
    }

    #[test]
    fn environment_serialises_as_lowercase_code() {
        assert_eq!(serde_json::to_string(&Environment::Dep).unwrap(), "\"dep\"");
        let parsed: Environment = serde_json::from_str("\"int\"").unwrap();
        assert_eq!(parsed, Environment::Int);
    }

    #[test]
    fn signing_algorithm_uses_uppercase_wire_names() {
        assert_eq!(
            serde_json::to_string(&SigningAlgorithm::Rs512).unwrap(),
            "\"RS512\""
        );
        let parsed: SigningAlgorithm = serde_json::from_str("\"RS256\"").unwrap();
        assert_eq!(parsed, SigningAlgorithm::Rs256);
    }

    #[test]
    fn empty_patch_keeps_the_config_identical() {
        let config = server_config();
        let merged = config.apply(&ClientConfigPatch::default());
        assert_eq!(merged, config);
    }

    #[test]
    fn patch_overrides_only_the_supplied_fields() {
        let config = server_config();
        let patch = ClientConfigPatch {
            jwks_uri: Some("https://example.org/jwks2".to_string()),
            description: Some("updated".to_string()),
            ..ClientConfigPatch::default()
        };
        let merged = config.apply(&patch);

        assert_eq!(merged.jwks_uri, "https://example.org/jwks2");
        assert_eq!(merged.description.as_deref(), Some("updated"));
        assert_eq!(merged.redirect_uris, config.redirect_uris);
        assert_eq!(merged.client_name, "my-app");
        assert_eq!(merged.extra.get("client_id"), config.extra.get("client_id"));
    }

    #[test]
    fn unknown_server_fields_survive_a_round_trip() {
        let body = serde_json::json!({
            "client_name": "my-app",
            "redirect_uris": ["https://example.org/cb"],
            "backchannel_logout_uri": "https://example.org/logout",
            "jwks_uri": "https://example.org/jwks",
            "jwks_uri_signing_algorithm": "RS256",
            "client_id": "abc123",
            "created_at": "2024-01-01T00:00:00Z",
        });
        let config: ClientConfig = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(config.extra.len(), 2);

        let echoed = serde_json::to_value(&config).unwrap();
        assert_eq!(echoed, body);
    }
}
