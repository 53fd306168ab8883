//! Google Play Developer API
//!
//! - `credentials` - Service account key and OAuth2 JWT bearer grant
//! - `client` - `PublishingService` over androidpublisher v3 edits
//! - `connector` - `PublisherConnector` wiring the two together

mod client;
mod connector;
mod credentials;
mod wire;

#[cfg(test)]
mod test_support;

pub use client::{AndroidPublisherClient, DEFAULT_API_BASE_URL};
pub use connector::GooglePlayConnector;
pub use credentials::{AccessToken, ServiceAccountKey, TokenSource, DEFAULT_TOKEN_URI};
