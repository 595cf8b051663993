//! Client for the external auth collaborator.
//!
//! The application never runs sign-in/sign-up flows itself; it only asks the
//! provider whether the stored token still maps to a session, and tells it
//! when the user signs out. A present session means "authorized"; the coarse
//! role on it gates write affordances in the UI.

use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;

use crate::models::session::Session;

pub struct AuthClient {
    client: Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .context("Failed to build auth HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Resolve the stored token into a session, or `None` when the provider
    /// does not recognize it (expired, revoked, never issued).
    pub fn get_session(&self, token: &str) -> Result<Option<Session>> {
        if token.is_empty() {
            return Ok(None);
        }

        let response = self
            .client
            .get(format!("{}/api/auth/get-session", self.base_url))
            .bearer_auth(token)
            .send()
            .context("Network error while fetching session")?;

        match response.status() {
            StatusCode::OK => {
                // The provider answers `null` for an anonymous request.
                let session: Option<Session> = response
                    .json()
                    .context("Auth provider returned an unreadable session payload")?;
                Ok(session)
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(None),
            status => Err(anyhow!("Session lookup failed with HTTP status {}", status)),
        }
    }

    /// Invalidate the session on the provider side. The local token is
    /// discarded by the caller regardless of the outcome.
    pub fn sign_out(&self, token: &str) -> Result<()> {
        let response = self
            .client
            .post(format!("{}/api/auth/sign-out", self.base_url))
            .bearer_auth(token)
            .send()
            .context("Network error while signing out")?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "Sign-out failed with HTTP status {}",
                response.status()
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let client = AuthClient::new("https://auth.example.com/").unwrap();
        assert_eq!(client.base_url, "https://auth.example.com");
    }

    #[test]
    fn test_empty_token_short_circuits() {
        // No network call is made for an empty token.
        let client = AuthClient::new("https://auth.invalid").unwrap();
        assert!(client.get_session("").unwrap().is_none());
    }
}
