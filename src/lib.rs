//! Beyondstreams - career exploration scoring core
//!
//! A short quiz turns each answer into weighted signal deltas. The deltas
//! accumulate in one [`ExplorationState`](domain::exploration::ExplorationState),
//! and the results screen ranks career clusters by how well they align
//! with the normalized signals.
//!
//! - `domain` - signals, mappers, ranking, screen flow
//! - `ports` / `adapters` - persistence of the exploration document
//! - `application` - handlers that drive a session through the quiz
//! - `config` - environment-based configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
