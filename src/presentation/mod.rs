//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Choosing how progress is reported (console or NDJSON)
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use playdeploy::presentation::factory;
//!
//! let use_case = factory::create_deploy_use_case(&config);
//! let outcome = use_case.execute_with_events(&request, factory::create_event_sink(&ui));
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen};
pub use factory::{create_deploy_use_case, create_event_sink, create_request};
