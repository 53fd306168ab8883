//! Common test utilities for playdeploy CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated working directory and config home, plus CLI runner
//! - `PlayServer`: Scripted stand-in for the token endpoint and Play API

#![allow(dead_code)]

pub mod env;
pub mod play_server;

pub use env::*;
pub use play_server::*;
