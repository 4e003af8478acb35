//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands mutate the caller-owned session; queries only read.

pub mod handlers;

pub use handlers::{
    ExitExplorationHandler, ExitExplorationResult, ExplorationResults, ExplorationSession,
    GetResultsHandler, ResumeExplorationHandler, ResumeExplorationResult, ScreenAnswer,
    SubmitAnswerCommand, SubmitAnswerHandler, SubmitAnswerResult,
};
