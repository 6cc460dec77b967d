//! Dockhand - Main application library
//!
//! This is the main binary crate that wires together all modules

mod app;

pub use app::{AppHandle, create_app};
pub use dockhand_core::{Config, init_tracing};

// Re-export for convenience
pub use dockhand_core;
pub use dockhand_llm;
pub use dockhand_orchestrator;
