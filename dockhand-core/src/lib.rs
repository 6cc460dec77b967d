//! Dockhand Core - Foundation crate for the Dockhand dockerization service
//!
//! This crate provides shared functionality used across all Dockhand modules:
//!
//! # Modules
//!
//! - [`config`] — Strongly-typed configuration with TOML and environment variable support
//! - [`domain`] — Shared domain model (repository analysis documents)
//! - [`infrastructure`] — In-memory task and result stores
//! - [`logging`] — Structured logging with tracing
//!
//! # Configuration
//!
//! Load configuration from files and environment:
//!
//! ```rust,ignore
//! use dockhand_core::Config;
//!
//! let config = Config::load()?;
//! ```
//!
//! Environment variables use the `DOCKHAND__` prefix with double underscore separators:
//!
//! ```bash
//! DOCKHAND__SERVER__PORT=8000
//! DOCKHAND__LLM__MODEL=openai/gpt-4o-mini
//! ```

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;

pub use config::Config;
pub use logging::init_tracing;
