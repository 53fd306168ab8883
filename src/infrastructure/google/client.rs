//! Play Developer API client
//!
//! Blocking `reqwest` client for the `edits` resource of androidpublisher v3.
//! One instance is bound to one access token; the edit session is passed
//! into every call rather than held here.

use std::fs::File;

use reqwest::blocking::{Body, Client, RequestBuilder, Response};
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE, LOCATION};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::domain::entities::{
    CommittedEdit, EditSession, ResolvedArtifact, TrackAssignment, TrackRelease, UploadResult,
};
use crate::domain::ports::{PublishingService, RemoteError};
use crate::domain::value_objects::VersionCode;

use super::credentials::AccessToken;
use super::wire;

/// Production endpoint of the publishing API
pub const DEFAULT_API_BASE_URL: &str = "https://androidpublisher.googleapis.com";

const API_PATH: &str = "androidpublisher/v3/applications";
const BUNDLE_CONTENT_TYPE: &str = "application/octet-stream";

/// Authenticated androidpublisher v3 client
pub struct AndroidPublisherClient {
    http: Client,
    token: AccessToken,
    base_url: String,
}

impl AndroidPublisherClient {
    pub fn new(http: Client, token: AccessToken, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http,
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn edits_url(&self, package_name: &str) -> String {
        format!("{}/{}/{}/edits", self.base_url, API_PATH, package_name)
    }

    fn edit_url(&self, edit: &EditSession) -> String {
        format!("{}/{}", self.edits_url(edit.package_name()), edit.id())
    }

    fn bundle_upload_url(&self, edit: &EditSession) -> String {
        format!(
            "{}/upload/{}/{}/edits/{}/bundles?uploadType=resumable",
            self.base_url,
            API_PATH,
            edit.package_name(),
            edit.id()
        )
    }

    fn send(&self, request: RequestBuilder) -> Result<Response, RemoteError> {
        request
            .bearer_auth(self.token.secret())
            .send()
            .map_err(|e| RemoteError::Transport(e.to_string()))
    }

    fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, RemoteError> {
        read_json(self.send(request)?)
    }

    /// Start a resumable upload session and return its URI
    fn start_upload_session(&self, edit: &EditSession, size: u64) -> Result<String, RemoteError> {
        let response = self.send(
            self.http
                .post(self.bundle_upload_url(edit))
                .header("X-Upload-Content-Type", BUNDLE_CONTENT_TYPE)
                .header("X-Upload-Content-Length", size)
                .header(CONTENT_LENGTH, 0),
        )?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .map_err(|e| RemoteError::Transport(e.to_string()))?;
            return Err(api_error(status.as_u16(), &body));
        }

        response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| {
                RemoteError::InvalidResponse("upload session has no Location header".to_string())
            })
    }
}

impl PublishingService for AndroidPublisherClient {
    fn open_edit(&self, package_name: &str) -> Result<EditSession, RemoteError> {
        let edit: wire::AppEdit = self.send_json(
            self.http
                .post(self.edits_url(package_name))
                .json(&wire::AppEdit::default()),
        )?;

        let id = edit
            .id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| RemoteError::InvalidResponse("edit has no id".to_string()))?;
        let expires_at = edit
            .expiry_time_seconds
            .and_then(|s| s.parse::<i64>().ok());
        debug!(edit_id = %id, ?expires_at, "edit opened");

        Ok(EditSession::new(id, package_name).with_expiry(expires_at))
    }

    fn upload_bundle(
        &self,
        edit: &EditSession,
        artifact: &ResolvedArtifact,
    ) -> Result<UploadResult, RemoteError> {
        let artifact_error = |source| RemoteError::Artifact {
            path: artifact.path().to_path_buf(),
            source,
        };

        // Handle lives exactly as long as the request body
        let file = File::open(artifact.path()).map_err(artifact_error)?;
        let size = file.metadata().map_err(artifact_error)?.len();

        debug!(file = %artifact.file_name(), size, "starting resumable upload");
        let session_uri = self.start_upload_session(edit, size)?;
        trace!(%session_uri, size, "upload session started");

        let bundle: wire::Bundle = self.send_json(
            self.http
                .put(&session_uri)
                .header(CONTENT_TYPE, BUNDLE_CONTENT_TYPE)
                .body(Body::sized(file, size)),
        )?;
        debug!(version_code = bundle.version_code, "bundle uploaded");

        Ok(UploadResult {
            version_code: VersionCode(bundle.version_code),
            sha256: bundle.sha256,
        })
    }

    fn assign_track(
        &self,
        edit: &EditSession,
        release: &TrackRelease,
    ) -> Result<TrackAssignment, RemoteError> {
        let track_name = release.track.as_str();
        let body = wire::Track {
            track: track_name.to_string(),
            releases: vec![wire::TrackRelease {
                version_codes: vec![release.version_code.get()],
                status: Some(release.status.as_str().to_string()),
            }],
        };

        let track: wire::Track = self.send_json(
            self.http
                .put(format!("{}/tracks/{}", self.edit_url(edit), track_name))
                .json(&body),
        )?;
        debug!(track = %track.track, "track updated");

        Ok(TrackAssignment {
            track: track.track,
            version_codes: track
                .releases
                .iter()
                .flat_map(|r| r.version_codes.iter().copied().map(VersionCode))
                .collect(),
        })
    }

    fn commit_edit(&self, edit: &EditSession) -> Result<CommittedEdit, RemoteError> {
        let committed: wire::AppEdit = self.send_json(
            self.http
                .post(format!("{}:commit", self.edit_url(edit)))
                .header(CONTENT_LENGTH, 0),
        )?;

        let id = committed
            .id
            .ok_or_else(|| RemoteError::InvalidResponse("committed edit has no id".to_string()))?;
        debug!(edit_id = %id, "edit committed");

        Ok(CommittedEdit { id })
    }
}

fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, RemoteError> {
    let status = response.status();
    let body = response
        .text()
        .map_err(|e| RemoteError::Transport(e.to_string()))?;

    if !status.is_success() {
        return Err(api_error(status.as_u16(), &body));
    }

    serde_json::from_str(&body).map_err(|e| RemoteError::InvalidResponse(e.to_string()))
}

/// Build a `RemoteError::Api`, preferring the message inside Google's error envelope
fn api_error(status: u16, body: &str) -> RemoteError {
    let message = match serde_json::from_str::<wire::ErrorEnvelope>(body) {
        Ok(envelope) => envelope
            .error
            .message
            .or(envelope.error.status)
            .unwrap_or_else(|| body.trim().to_string()),
        Err(_) => body.trim().to_string(),
    };
    let message = if message.is_empty() {
        reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("request failed")
            .to_string()
    } else {
        message
    };
    RemoteError::Api { status, message }
}
