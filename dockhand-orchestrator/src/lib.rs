//! Dockhand Orchestrator - task orchestration and HTTP surface
//!
//! Owns the analysis and dockerization workflows, the background job queue,
//! the clients for the external GitHub tool agent and the GitHub REST API,
//! and the axum presentation layer.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
