//! Protocol constants for the Connection Manager API.

/// Cookie that carries the session token.
pub const SESSION_COOKIE: &str = "__Host-session";

/// Authorization scheme used by the authentication endpoint.
pub const SECRET_AUTH_SCHEME: &str = "SecretAuth";

/// Fixed timeout applied to every request.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

pub mod endpoints {
    pub const HELLO_WORLD: &str = "/api/hello_world";
    pub const AUTH: &str = "/api/auth";

    /// Config collection for a team.
    pub fn configs(team_id: &str) -> String {
        format!("/api/configs/{team_id}")
    }

    /// A single config within a team.
    pub fn config(team_id: &str, config_id: &str) -> String {
        format!("/api/configs/{team_id}/{config_id}")
    }

    /// Config update, keyed by the integrity hash of the revision being
    /// replaced.
    pub fn config_update(team_id: &str, config_id: &str, hash: &str) -> String {
        format!(
            "/api/configs/{team_id}/{config_id}?hash={}",
            urlencoding::encode(hash)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::endpoints;

    #[test]
    fn config_endpoints_include_team_and_config() {
        assert_eq!(endpoints::configs("T123"), "/api/configs/T123");
        assert_eq!(endpoints::config("T123", "my-app"), "/api/configs/T123/my-app");
    }

    #[test]
    fn update_endpoint_url_encodes_the_hash() {
        assert_eq!(
            endpoints::config_update("T123", "my-app", "a/b+c="),
            "/api/configs/T123/my-app?hash=a%2Fb%2Bc%3D"
        );
    }
}
