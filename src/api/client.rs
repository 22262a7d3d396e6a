//! HTTP client for the Connection Manager API.
//!
//! Every operation funnels through a single request primitive that owns
//! JSON negotiation, session-cookie auth, the fixed timeout and failure
//! diagnostics. Operations above it stay declarative.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, COOKIE, HeaderMap, HeaderValue};
use reqwest::{Method, Response};
use serde_json::{Map, Value, json};

use super::constants::{REQUEST_TIMEOUT_SECS, SECRET_AUTH_SCHEME, SESSION_COOKIE, endpoints};
use super::models::{ClientConfig, ConfigEnvelope, ConfigList, CreatedConfig, Environment, NewClientConfig};
use crate::output::Console;
use crate::token::{self, TokenClaims};

/// Request payload accepted by the request primitive. JSON values are
/// serialised; raw text passes through unchanged.
#[derive(Debug, Clone)]
pub enum RequestBody {
    Json(Value),
    Raw(String),
}

impl RequestBody {
    fn into_text(self) -> Result<String> {
        match self {
            RequestBody::Json(value) => {
                serde_json::to_string(&value).context("Failed to serialise request body")
            }
            RequestBody::Raw(text) => Ok(text),
        }
    }
}

impl From<Value> for RequestBody {
    fn from(value: Value) -> Self {
        RequestBody::Json(value)
    }
}

impl From<String> for RequestBody {
    fn from(text: String) -> Self {
        RequestBody::Raw(text)
    }
}

pub struct ApiClient {
    http: reqwest::Client,
    env: Environment,
    console: Console,
}

impl ApiClient {
    pub fn new(env: Environment, console: Console) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { http, env, console })
    }

    /// Send one request and return the successful response.
    ///
    /// A transport failure or non-2xx status is terminal: the full request
    /// and response context is printed for diagnosis and an error is
    /// returned rather than a response the caller would have to re-check.
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        headers: Option<HeaderMap>,
        body: Option<RequestBody>,
        session_token: Option<&str>,
    ) -> Result<Response> {
        let url = format!("{}{}", self.env.base_endpoint(), endpoint);
        self.console
            .info(&format!("Sending request to endpoint={endpoint}"));

        let mut header_map = headers.unwrap_or_default();
        header_map.insert(ACCEPT, HeaderValue::from_static("application/json"));
        header_map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(session_token) = session_token {
            let cookie = format!("{SESSION_COOKIE}={session_token}");
            header_map.insert(
                COOKIE,
                HeaderValue::from_str(&cookie)
                    .context("Session token is not a valid header value")?,
            );
        }

        let body_text = body.map(RequestBody::into_text).transpose()?;
        debug!("{method} {url}");

        let mut request = self.http.request(method.clone(), &url).headers(header_map.clone());
        if let Some(text) = &body_text {
            request = request.body(text.clone());
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                self.console.error(&format!(
                    "An unexpected error occurred whilst calling the {endpoint} endpoint"
                ));
                return Err(anyhow::Error::new(err)
                    .context(format!("Request to {url} failed")));
            }
        };

        let status = response.status();
        if !status.is_success() {
            self.console.warn(&format!(
                "Received unexpected response from the {endpoint} endpoint"
            ));
            let response_headers = headers_to_json(response.headers());
            let response_body = response.text().await.unwrap_or_default();
            let diagnostics = json!({
                "Status Code": status.as_u16(),
                "Request Method": method.as_str(),
                "Request URL": url,
                "Request Headers": headers_to_json(&header_map),
                "Request Body": body_text,
                "Response Headers": response_headers,
                "Response Body": response_body,
            });
            self.console.print_json(&diagnostics, false);
            bail!("The {endpoint} endpoint returned {status}");
        }

        Ok(response)
    }

    /// Ping the hello-world endpoint.
    pub async fn ping(&self) -> Result<()> {
        self.request(Method::GET, endpoints::HELLO_WORLD, None, None, None)
            .await?;
        Ok(())
    }

    /// Exchange an environment secret for a session token, returned raw
    /// together with its decoded claims.
    pub async fn authenticate(&self, secret: &str) -> Result<(String, TokenClaims)> {
        let mut headers = HeaderMap::new();
        let value = format!("{SECRET_AUTH_SCHEME} {secret}");
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&value).context("Secret is not a valid header value")?,
        );
        let response = self
            .request(Method::POST, endpoints::AUTH, Some(headers), None, None)
            .await?;
        token::decode_session_token(response.headers())
    }

    pub async fn list_configs(&self, team_id: &str, session_token: &str) -> Result<ConfigList> {
        let response = self
            .request(
                Method::GET,
                &endpoints::configs(team_id),
                None,
                None,
                Some(session_token),
            )
            .await?;
        response
            .json()
            .await
            .context("Failed to parse the config list response")
    }

    pub async fn get_config(
        &self,
        team_id: &str,
        config_id: &str,
        session_token: &str,
    ) -> Result<ConfigEnvelope> {
        let response = self
            .request(
                Method::GET,
                &endpoints::config(team_id, config_id),
                None,
                None,
                Some(session_token),
            )
            .await?;
        response
            .json()
            .await
            .context("Failed to parse the config response")
    }

    pub async fn create_config(
        &self,
        team_id: &str,
        config: &NewClientConfig,
        session_token: &str,
    ) -> Result<CreatedConfig> {
        let body = serde_json::to_value(config).context("Failed to serialise the new config")?;
        let response = self
            .request(
                Method::POST,
                &endpoints::configs(team_id),
                None,
                Some(body.into()),
                Some(session_token),
            )
            .await?;
        response
            .json()
            .await
            .context("Failed to parse the config creation response")
    }

    /// Replace a config revision identified by its integrity hash.
    pub async fn update_config(
        &self,
        team_id: &str,
        config_id: &str,
        config: &ClientConfig,
        hash: &str,
        session_token: &str,
    ) -> Result<()> {
        let body = serde_json::to_value(config).context("Failed to serialise the config")?;
        self.request(
            Method::PUT,
            &endpoints::config_update(team_id, config_id, hash),
            None,
            Some(body.into()),
            Some(session_token),
        )
        .await?;
        Ok(())
    }
}

fn headers_to_json(headers: &HeaderMap) -> Value {
    let mut map = Map::new();
    for (name, value) in headers {
        let value = value.to_str().unwrap_or("<binary>");
        map.insert(name.to_string(), Value::String(value.to_string()));
    }
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_bodies_serialise_and_raw_bodies_pass_through() {
        let json_body = RequestBody::from(json!({"a": 1}));
        assert_eq!(json_body.into_text().unwrap(), "{\"a\":1}");

        let raw_body = RequestBody::from("not json".to_string());
        assert_eq!(raw_body.into_text().unwrap(), "not json");
    }

    #[test]
    fn headers_render_as_a_json_object() {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let value = headers_to_json(&headers);
        assert_eq!(value["accept"], "application/json");
    }
}
