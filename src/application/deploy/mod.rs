//! Deploy Module
//!
//! Orchestrates one upload of a bundle to a Play Console track.
//!
//! ## Structure
//!
//! - `request` - Run inputs (`DeploymentRequest`)
//! - `outcome` - Result types (`DeployOutcome`, `DeploySummary`)
//! - `use_case` - The edit/upload/assign/commit sequence (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use playdeploy::application::deploy::{DeploymentRequest, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(LocalFs::new(), connector);
//! let outcome = use_case.execute(&DeploymentRequest::new(aab, key, "com.acme.game"));
//! std::process::exit(outcome.exit_code().into());
//! ```

mod outcome;
mod request;
mod use_case;

pub use outcome::{DeployOutcome, DeploySummary};
pub use request::DeploymentRequest;
pub use use_case::DeployUseCase;
