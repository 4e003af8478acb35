//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors, timestamps, state machine trait)
//! - `exploration` - Signal store for one quiz session
//! - `mappers` - Pure choice-to-signal mappers, one per scored screen
//! - `ranking` - Cluster alignment, ranking and result presentation
//! - `flow` - Screen sequencing for the quiz

pub mod exploration;
pub mod flow;
pub mod foundation;
pub mod mappers;
pub mod ranking;
