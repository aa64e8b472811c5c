//! Input/output operations, persistence, and error handling
//!
//! This module contains everything that crosses the crate boundary:
//! - The crate-wide error type
//! - Named constants for board defaults and placement parameters
//! - Snapshot capture/restore and its JSON file codec
//! - Debug preview rendering, progress reporting, and the CLI surface

/// Command-line interface and board processing orchestration
pub mod cli;
/// Board defaults and placement constants
pub mod configuration;
/// Error types for board operations
pub mod error;
/// Debug preview PNG export
pub mod preview;
/// Row progress reporting for the CLI
pub mod progress;
/// Snapshot capture, restore, and file codec
pub mod snapshot;
