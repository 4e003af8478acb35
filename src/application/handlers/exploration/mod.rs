//! Exploration command and query handlers.

mod answer;
mod exit_exploration;
mod get_results;
mod resume_exploration;
mod session;
mod submit_answer;

pub use answer::ScreenAnswer;
pub use exit_exploration::{ExitExplorationHandler, ExitExplorationResult};
pub use get_results::{ExplorationResults, GetResultsHandler};
pub use resume_exploration::{ResumeExplorationHandler, ResumeExplorationResult};
pub use session::ExplorationSession;
pub use submit_answer::{SubmitAnswerCommand, SubmitAnswerHandler, SubmitAnswerResult};
