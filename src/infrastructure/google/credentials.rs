//! Service account credentials
//!
//! Implements the OAuth2 JWT bearer flow used by Google service accounts:
//! sign a short-lived RS256 assertion with the key file's private key and
//! trade it at the token endpoint for an access token scoped to the
//! publishing API.

use std::path::{Path, PathBuf};

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::ports::AuthError;

/// OAuth scope granting access to the Play Developer publishing API
pub const ANDROID_PUBLISHER_SCOPE: &str = "https://www.googleapis.com/auth/androidpublisher";

/// Token endpoint used when neither the key file nor config names one
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Google caps assertion lifetime at one hour
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// The fields of a service account JSON key that the flow needs
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    #[serde(rename = "type", default)]
    pub key_type: Option<String>,
    pub client_email: String,
    pub private_key: String,
    #[serde(default)]
    pub private_key_id: Option<String>,
    #[serde(default)]
    pub token_uri: Option<String>,
}

impl std::fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("client_email", &self.client_email)
            .field("private_key_id", &self.private_key_id)
            .field("token_uri", &self.token_uri)
            .finish_non_exhaustive()
    }
}

impl ServiceAccountKey {
    /// Read and parse a key file
    pub fn load(path: &Path) -> Result<Self, AuthError> {
        let content = std::fs::read_to_string(path).map_err(|source| AuthError::KeyFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &content)
    }

    /// Parse key file content; `path` is only used in error messages
    pub fn parse(path: &Path, content: &str) -> Result<Self, AuthError> {
        let invalid = |message: String| AuthError::InvalidKey {
            path: path.to_path_buf(),
            message,
        };

        let key: ServiceAccountKey =
            serde_json::from_str(content).map_err(|e| invalid(e.to_string()))?;

        if let Some(kind) = &key.key_type {
            if kind != "service_account" {
                return Err(invalid(format!(
                    "expected a \"service_account\" key, found \"{kind}\""
                )));
            }
        }
        if key.client_email.trim().is_empty() {
            return Err(invalid("client_email is empty".to_string()));
        }

        Ok(key)
    }

    /// Token endpoint: the key's own, else `fallback`
    pub fn token_uri<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.token_uri
            .as_deref()
            .filter(|u| !u.is_empty())
            .unwrap_or(fallback)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct AssertionClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

/// Build the signed JWT assertion for the token request
pub fn signed_assertion(
    key: &ServiceAccountKey,
    key_path: &Path,
    token_uri: &str,
    issued_at: i64,
) -> Result<String, AuthError> {
    let invalid = |message: String| AuthError::InvalidKey {
        path: key_path.to_path_buf(),
        message,
    };

    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
        .map_err(|e| invalid(format!("private_key is not a usable RSA key: {e}")))?;

    let mut header = Header::new(Algorithm::RS256);
    header.kid = key.private_key_id.clone();

    let claims = AssertionClaims {
        iss: key.client_email.clone(),
        scope: ANDROID_PUBLISHER_SCOPE.to_string(),
        aud: token_uri.to_string(),
        iat: issued_at,
        exp: issued_at + ASSERTION_LIFETIME_SECS,
    };

    jsonwebtoken::encode(&header, &claims, &encoding_key)
        .map_err(|e| invalid(format!("cannot sign assertion: {e}")))
}

/// Bearer token for the publishing API
#[derive(Clone)]
pub struct AccessToken {
    value: String,
    expires_in: Option<i64>,
}

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            expires_in: None,
        }
    }

    pub fn secret(&self) -> &str {
        &self.value
    }

    /// Lifetime in seconds as reported by the token endpoint
    pub fn expires_in(&self) -> Option<i64> {
        self.expires_in
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct TokenErrorResponse {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

/// Exchanges a service account key for an access token
pub struct TokenSource {
    http: reqwest::blocking::Client,
    key: ServiceAccountKey,
    key_path: PathBuf,
    token_uri: String,
}

impl TokenSource {
    pub fn new(
        http: reqwest::blocking::Client,
        key: ServiceAccountKey,
        key_path: impl Into<PathBuf>,
        default_token_uri: &str,
    ) -> Self {
        let token_uri = key.token_uri(default_token_uri).to_string();
        Self {
            http,
            key,
            key_path: key_path.into(),
            token_uri,
        }
    }

    pub fn token_uri(&self) -> &str {
        &self.token_uri
    }

    /// Perform the JWT bearer grant
    pub fn fetch(&self) -> Result<AccessToken, AuthError> {
        let now = chrono::Utc::now().timestamp();
        let assertion = signed_assertion(&self.key, &self.key_path, &self.token_uri, now)?;

        debug!(
            token_uri = %self.token_uri,
            client_email = %self.key.client_email,
            "requesting access token"
        );

        let response = self
            .http
            .post(&self.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(AuthError::TokenRejected(describe_token_error(
                status.as_u16(),
                &body,
            )));
        }

        let token: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| AuthError::TokenRejected(format!("unreadable token response: {e}")))?;
        debug!(expires_in = ?token.expires_in, "access token granted");

        Ok(AccessToken {
            value: token.access_token,
            expires_in: token.expires_in,
        })
    }
}

fn describe_token_error(status: u16, body: &str) -> String {
    match serde_json::from_str::<TokenErrorResponse>(body) {
        Ok(TokenErrorResponse {
            error,
            error_description: Some(description),
        }) => format!("{error}: {description} (HTTP {status})"),
        Ok(TokenErrorResponse { error, .. }) => format!("{error} (HTTP {status})"),
        Err(_) if body.trim().is_empty() => format!("HTTP {status}"),
        Err(_) => format!("{} (HTTP {status})", body.trim()),
    }
}
