//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::{DeployUseCase, DeploymentRequest};
use crate::config::Config;
use crate::domain::ports::DeployEventSink;
use crate::infrastructure::{
    ConsoleEventSink, ConsoleStyle, GooglePlayConnector, JsonEventSink, LocalFs,
};
use crate::ui::UiContext;

use super::cli::Cli;

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase = DeployUseCase<LocalFs, GooglePlayConnector>;

/// Create a deploy use case talking to the endpoints in `config`
pub fn create_deploy_use_case(config: &Config) -> ConcreteDeployUseCase {
    DeployUseCase::new(LocalFs::new(), create_connector(config))
}

/// Create the Google Play connector for the configured endpoints
pub fn create_connector(config: &Config) -> GooglePlayConnector {
    GooglePlayConnector::new()
        .with_api_base_url(&config.api.base_url)
        .with_default_token_uri(&config.api.token_uri)
}

/// Build the run's request from parsed arguments and configuration
pub fn create_request(cli: &Cli, config: &Config) -> DeploymentRequest {
    DeploymentRequest::new(&cli.aab, &cli.service_account, &cli.package_name)
        .with_track(cli.resolved_track(config.deploy.track))
}

/// Pick the event sink for the output mode
///
/// - `--json`: NDJSON on stdout
/// - otherwise: progress lines on stdout
pub fn create_event_sink(ui: &UiContext) -> Arc<dyn DeployEventSink> {
    if ui.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stdout(ConsoleStyle {
            color: ui.color,
            unicode: ui.unicode,
            annotations: ui.annotations,
        }))
    }
}
