//! Google Play connector
//!
//! Turns a service account key file into an authenticated
//! `AndroidPublisherClient`.

use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::domain::ports::{AuthError, PublisherConnector};

use super::client::{AndroidPublisherClient, DEFAULT_API_BASE_URL};
use super::credentials::{ServiceAccountKey, TokenSource, DEFAULT_TOKEN_URI};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connects to the Play Developer API with a service account
#[derive(Debug, Clone)]
pub struct GooglePlayConnector {
    api_base_url: String,
    default_token_uri: String,
    /// Total time allowed per call, body included; `None` means unbounded
    request_timeout: Option<Duration>,
}

impl GooglePlayConnector {
    pub fn new() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            default_token_uri: DEFAULT_TOKEN_URI.to_string(),
            request_timeout: None,
        }
    }

    /// Override the API endpoint (staging proxies, tests)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Token endpoint used when the key file does not name one
    pub fn with_default_token_uri(mut self, uri: impl Into<String>) -> Self {
        self.default_token_uri = uri.into();
        self
    }

    /// Cap every call, bundle upload included
    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    fn http_client(&self) -> Result<Client, AuthError> {
        // The blocking client otherwise gives up after 30s, even mid-upload
        Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(self.request_timeout)
            .build()
            .map_err(|e| AuthError::Transport(e.to_string()))
    }
}

impl Default for GooglePlayConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl PublisherConnector for GooglePlayConnector {
    type Service = AndroidPublisherClient;

    fn connect(&self, credentials: &Path) -> Result<Self::Service, AuthError> {
        let key = ServiceAccountKey::load(credentials)?;
        debug!(
            path = %credentials.display(),
            client_email = %key.client_email,
            "loaded service account key"
        );

        let http = self.http_client()?;
        let tokens = TokenSource::new(http.clone(), key, credentials, &self.default_token_uri);
        let token = tokens.fetch()?;
        debug!(
            token_uri = %tokens.token_uri(),
            expires_in = ?token.expires_in(),
            "authenticated"
        );

        Ok(AndroidPublisherClient::new(http, token, &self.api_base_url))
    }
}
