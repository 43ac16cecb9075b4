//! Configuration module for FinTooz
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Assistant endpoint preferences

pub mod paths;
pub mod settings;

pub use paths::FinPaths;
pub use settings::{AssistantSettings, Settings};
