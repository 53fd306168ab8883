//! playdeploy CLI - upload an Android App Bundle to Google Play
//!
//! Usage: playdeploy --aab <PATH> --service-account <PATH> --package-name <NAME> [--track <TRACK>]

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use playdeploy::config::{self, Config};
use playdeploy::domain::ports::DeployEvent;
use playdeploy::presentation::{factory, Cli};
use playdeploy::ui::UiContext;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match load_config(&cli) {
        Ok(config) => deploy(&cli, &config),
        Err(e) => {
            debug!(error = ?e, "setup failed");
            // No usable config, so the failure is reported with default output settings
            let ui = UiContext::new(cli.json, cli.color, &Config::default());
            factory::create_event_sink(&ui).on_event(DeployEvent::Failed {
                stage: None,
                error: format!("{e:#}"),
            });
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let (config, warnings) = config::load_or_default(cli.config.as_deref(), &cwd)
        .context("failed to load configuration")?;
    for warning in &warnings {
        warn!("{warning}");
    }
    Ok(config)
}

fn deploy(cli: &Cli, config: &Config) -> ExitCode {
    let ui = UiContext::new(cli.json, cli.color, config);
    let request = factory::create_request(cli, config);
    let use_case = factory::create_deploy_use_case(config);

    let outcome = use_case.execute_with_events(&request, factory::create_event_sink(&ui));
    ExitCode::from(outcome.exit_code())
}

/// Diagnostics go to stderr so stdout stays clean for `--json`
fn init_tracing(verbose: u8) {
    let default_directive = match verbose {
        0 => "warn",
        1 => "warn,playdeploy=debug",
        _ => "warn,playdeploy=trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
