//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod exploration;

pub use exploration::{
    // Session
    ExplorationSession,
    ScreenAnswer,
    // Commands and Results
    ExitExplorationHandler, ExitExplorationResult,
    ResumeExplorationHandler, ResumeExplorationResult,
    SubmitAnswerCommand, SubmitAnswerHandler, SubmitAnswerResult,
    // Queries
    ExplorationResults, GetResultsHandler,
};
