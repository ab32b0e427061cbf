//! Shared test utilities for the ui-exports workspace.
//!
//! This crate provides plugin directory fixtures so crate test suites do not
//! each hand-write manifests. Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`plugins`]: [`TestPluginDir`](plugins::TestPluginDir) builder for
//!   plugin scan dirs and `uix.toml` configs

pub mod plugins;

pub use plugins::TestPluginDir;
