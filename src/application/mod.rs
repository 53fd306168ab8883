//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Resolve a bundle and publish it to a track

pub mod deploy;

pub use deploy::{DeployOutcome, DeploySummary, DeployUseCase, DeploymentRequest};
