//! Shared domain model

pub mod analysis;

pub use analysis::{
    AnalysisPayload, ProjectOverview, RepositoryAnalysis, SystemArchitecture,
    TechnicalArchitecture, TechnologyStack,
};
