//! Terminal presentation helpers
//!
//! - `theme` - Colors and icons with ASCII fallback
//! - `terminal` - TTY/color/CI detection
//! - `ci` - GitHub Actions workflow commands
//! - `context` - Per-run output settings resolved from CLI, config and terminal

pub mod ci;
pub mod context;
pub mod terminal;
pub mod theme;

pub use context::UiContext;
