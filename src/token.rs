//! Session-token decoding and the on-disk token cache.
//!
//! Successful authentications are cached as one JSON file per
//! (environment, subject, expiry) triple so that repeated commands reuse a
//! live token instead of re-authenticating.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use log::debug;
use reqwest::header::{HeaderMap, SET_COOKIE};
use serde::{Deserialize, Serialize};

use crate::api::Environment;
use crate::api::constants::SESSION_COOKIE;
use crate::output::Console;

/// Claims carried by a Connection Manager session token.
///
/// The token is decoded without signature verification: it arrives over TLS
/// directly from the issuing endpoint and no signing key is published, so
/// the claims are only ever used for display and cache bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub iss: String,
    pub sub: String,
    pub aud: serde_json::Value,
    pub iat: i64,
    pub exp: i64,
    #[serde(default)]
    pub team_ids: Vec<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One cached token file: the raw bearer value plus its decoded claims.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedToken {
    pub token: String,
    pub info: TokenClaims,
}

/// Extract the session cookie issued by the authentication endpoint.
pub fn session_cookie(headers: &HeaderMap) -> Result<String> {
    for value in headers.get_all(SET_COOKIE) {
        let Ok(value) = value.to_str() else { continue };
        let Some(pair) = value.split(';').next() else { continue };
        if let Some((name, token)) = pair.split_once('=') {
            if name.trim() == SESSION_COOKIE {
                return Ok(token.trim().to_string());
            }
        }
    }
    bail!("No {SESSION_COOKIE} cookie in the authentication response")
}

/// Decode the claims segment of a JWT without verifying its signature.
pub fn decode_claims(token: &str) -> Result<TokenClaims> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| anyhow!("Malformed session token: missing claims segment"))?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .context("Malformed session token: claims segment is not base64")?;
    serde_json::from_slice(&bytes).context("Malformed session token: claims are not valid JSON")
}

/// Cookie and decoded claims from an authentication response.
pub fn decode_session_token(headers: &HeaderMap) -> Result<(String, TokenClaims)> {
    let raw = session_cookie(headers)?;
    let claims = decode_claims(&raw)?;
    Ok((raw, claims))
}

/// `YYYY-MM-DD HH:MM:SS` rendering of a unix timestamp.
pub fn format_timestamp(timestamp: i64) -> String {
    match DateTime::<Utc>::from_timestamp(timestamp, 0) {
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => timestamp.to_string(),
    }
}

/// On-disk cache of session tokens.
pub struct TokenCache {
    dir: PathBuf,
    console: Console,
}

impl TokenCache {
    /// Cache rooted at `<user cache dir>/connman-cli`.
    pub fn new(console: Console) -> Result<Self> {
        let cache_dir =
            dirs::cache_dir().context("Failed to determine the user cache directory")?;
        Ok(Self {
            dir: cache_dir.join("connman-cli"),
            console,
        })
    }

    /// Cache rooted at an explicit directory.
    pub fn with_dir(dir: impl Into<PathBuf>, console: Console) -> Self {
        Self {
            dir: dir.into(),
            console,
        }
    }

    pub fn file_name(env: Environment, subject: &str, exp: i64) -> String {
        format!("token-{}-{}-{}.json", env.code(), subject, exp)
    }

    /// Write a freshly issued token to the cache and return its path.
    /// Tokens with distinct expiries coexist; an identical triple is
    /// overwritten.
    pub fn store(&self, raw: &str, claims: &TokenClaims, env: Environment) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create cache directory: {}", self.dir.display()))?;
        let path = self.dir.join(Self::file_name(env, &claims.sub, claims.exp));
        let cached = CachedToken {
            token: raw.to_string(),
            info: claims.clone(),
        };
        let body = serde_json::to_string(&cached).context("Failed to serialise token")?;
        fs::write(&path, body)
            .with_context(|| format!("Failed to write token file: {}", path.display()))?;
        self.console
            .info(&format!("Saved temporary access token to {}", path.display()));
        Ok(path)
    }

    /// Find the freshest live token for (environment, subject).
    ///
    /// Expired files are deleted as they are encountered, in silent mode
    /// too. Among the survivors the token with the furthest-future expiry
    /// wins. `silent` suppresses the console chatter, not the sweep.
    pub fn lookup(
        &self,
        env: Environment,
        subject: &str,
        silent: bool,
    ) -> Result<Option<CachedToken>> {
        let prefix = format!("token-{}-{}", env.code(), subject);
        let now = Utc::now().timestamp();
        let mut candidates: Vec<CachedToken> = Vec::new();

        if self.dir.is_dir() {
            let entries = fs::read_dir(&self.dir).with_context(|| {
                format!("Failed to read cache directory: {}", self.dir.display())
            })?;
            for entry in entries {
                let entry = entry.with_context(|| {
                    format!("Failed to read cache directory: {}", self.dir.display())
                })?;
                let name = entry.file_name().to_string_lossy().into_owned();
                if !name.starts_with(&prefix) || !name.ends_with(".json") {
                    continue;
                }
                let Some(exp) = expiry_from_name(&name) else {
                    debug!("Skipping unparseable token file {name}");
                    continue;
                };
                if exp <= now {
                    fs::remove_file(entry.path()).with_context(|| {
                        format!("Failed to remove expired token file: {name}")
                    })?;
                    if !silent {
                        self.console
                            .debug(&format!("Removed expired token {name} from the cache"));
                    }
                    continue;
                }
                let content = fs::read_to_string(entry.path())
                    .with_context(|| format!("Failed to read token file: {name}"))?;
                let cached: CachedToken = serde_json::from_str(&content)
                    .with_context(|| format!("Failed to parse token file: {name}"))?;
                candidates.push(cached);
            }
        }

        let best = candidates.into_iter().max_by_key(|cached| cached.info.exp);
        if !silent {
            match &best {
                Some(cached) => self.console.info(&format!(
                    "Access token expires {} UTC",
                    format_timestamp(cached.info.exp)
                )),
                None => self
                    .console
                    .warn("No valid cached tokens are present. Please reauthenticate."),
            }
        }
        Ok(best)
    }
}

/// Expiry encoded as the final `-` separated segment of the file name.
fn expiry_from_name(name: &str) -> Option<i64> {
    name.strip_suffix(".json")?.rsplit('-').next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_parses_from_the_last_segment() {
        assert_eq!(
            expiry_from_name("token-dev-T123-1700000000.json"),
            Some(1_700_000_000)
        );
        // Subjects may themselves contain separators.
        assert_eq!(
            expiry_from_name("token-int-team-42-1800000000.json"),
            Some(1_800_000_000)
        );
        assert_eq!(expiry_from_name("token-dev-T123-soon.json"), None);
        assert_eq!(expiry_from_name("notes.txt"), None);
    }

    #[test]
    fn file_name_encodes_environment_subject_and_expiry() {
        assert_eq!(
            TokenCache::file_name(Environment::Dev, "T123", 1_700_000_000),
            "token-dev-T123-1700000000.json"
        );
    }

    #[test]
    fn session_cookie_is_found_among_other_cookies() {
        let mut headers = HeaderMap::new();
        headers.append(SET_COOKIE, "theme=dark; Path=/".parse().unwrap());
        headers.append(
            SET_COOKIE,
            format!("{SESSION_COOKIE}=abc.def.ghi; Path=/; Secure; HttpOnly")
                .parse()
                .unwrap(),
        );
        assert_eq!(session_cookie(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn missing_session_cookie_is_an_error() {
        let mut headers = HeaderMap::new();
        headers.append(SET_COOKIE, "theme=dark; Path=/".parse().unwrap());
        assert!(session_cookie(&headers).is_err());
    }

    #[test]
    fn claims_decode_without_signature_verification() {
        let claims = serde_json::json!({
            "iss": "connection-manager",
            "sub": "T123",
            "aud": "connman",
            "iat": 1_700_000_000,
            "exp": 1_700_003_600,
            "team_ids": ["T123", "T456"],
        });
        let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims).unwrap());
        let token = format!("header.{payload}.signature");

        let decoded = decode_claims(&token).unwrap();
        assert_eq!(decoded.sub, "T123");
        assert_eq!(decoded.exp, 1_700_003_600);
        assert_eq!(decoded.team_ids, vec!["T123", "T456"]);
    }

    #[test]
    fn token_without_claims_segment_is_rejected() {
        assert!(decode_claims("justoneblob").is_err());
    }

    #[test]
    fn timestamps_render_as_utc_date_and_time() {
        assert_eq!(format_timestamp(1_700_000_000), "2023-11-14 22:13:20");
    }
}
