//! Ranking - turns accumulated signals into ranked career clusters.
//!
//! The algorithm in [`ClusterRanker`] is independent of the profile table;
//! [`CAREER_CLUSTERS`] is just the default input.

mod cluster;
mod presentation;
mod ranker;

pub use cluster::{ClusterProfile, CAREER_CLUSTERS};
pub use presentation::{
    layout_bubbles, signal_color, signal_info, Bubble, Position, SignalInfo, LAYOUT_POSITIONS,
};
pub use ranker::{ClusterAlignment, ClusterRanker, MotionClass, RankedCluster, RankingOptions};
