//! Cluster Ranker - alignment scoring, top-K selection, size and motion hints.

use serde::{Deserialize, Serialize};

use crate::domain::exploration::{SignalKey, SignalVector};

use super::presentation::signal_color;
use super::{ClusterProfile, CAREER_CLUSTERS};

/// Tunables for the ranking output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingOptions {
    /// Number of clusters kept after sorting.
    pub top_k: usize,
    /// Display size for the lowest score among the kept clusters.
    pub min_size: f64,
    /// Display size for the highest score among the kept clusters.
    pub max_size: f64,
    /// Relative score rank 0 must exceed to be marked stable.
    pub stable_threshold: f64,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            top_k: 4,
            min_size: 80.0,
            max_size: 160.0,
            stable_threshold: 0.7,
        }
    }
}

/// Presentation hint for how a bubble moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionClass {
    /// High-confidence top match
    Stable,
    /// Default
    Drift,
    /// Related clusters further down the ranking
    Orbit,
}

/// Alignment of one cluster with the user's signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterAlignment {
    pub cluster: String,
    pub score: f64,
    pub dominant_signal: SignalKey,
    pub color: String,
}

/// A cluster that made the top-K, with its display hints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCluster {
    pub rank: usize,
    pub cluster: String,
    pub score: f64,
    pub dominant_signal: SignalKey,
    pub color: String,
    /// Score rescaled to [0, 1] across the kept clusters (0.5 when all equal).
    pub relative_score: f64,
    pub size: f64,
    pub motion: MotionClass,
}

/// Scores and ranks cluster profiles against a signal vector.
///
/// Pure and deterministic: the same vector always yields the same list.
#[derive(Debug, Clone, Copy)]
pub struct ClusterRanker<'a> {
    clusters: &'a [ClusterProfile],
    options: RankingOptions,
}

impl ClusterRanker<'static> {
    /// Ranker over the built-in clusters.
    pub fn with_options(options: RankingOptions) -> Self {
        Self::new(CAREER_CLUSTERS, options)
    }
}

impl Default for ClusterRanker<'static> {
    fn default() -> Self {
        Self::with_options(RankingOptions::default())
    }
}

impl<'a> ClusterRanker<'a> {
    pub fn new(clusters: &'a [ClusterProfile], options: RankingOptions) -> Self {
        Self { clusters, options }
    }

    pub fn options(&self) -> &RankingOptions {
        &self.options
    }

    /// Dot product of normalized signals with the cluster's listed weights.
    pub fn alignment(normalized: &SignalVector, cluster: &ClusterProfile) -> f64 {
        cluster
            .weights
            .iter()
            .map(|(key, weight)| normalized.get(*key) * weight)
            .sum()
    }

    /// Alignment for every cluster, in declaration order.
    pub fn score_all(&self, signals: &SignalVector) -> Vec<ClusterAlignment> {
        let normalized = signals.normalized();
        self.clusters
            .iter()
            .map(|cluster| ClusterAlignment {
                cluster: cluster.name.to_string(),
                score: Self::alignment(&normalized, cluster),
                dominant_signal: cluster.dominant_signal,
                color: signal_color(cluster.dominant_signal).to_string(),
            })
            .collect()
    }

    /// Ranks clusters and attaches size and motion hints to the top K.
    ///
    /// # Algorithm
    /// 1. Normalize signals by their total (all zero when the total is 0)
    /// 2. Score each cluster by alignment
    /// 3. Stable sort descending, so ties keep declaration order
    /// 4. Keep the first `top_k`
    /// 5. Rescale scores linearly into `[min_size, max_size]` using the min
    ///    and max of the kept scores; equal scores get the midpoint
    /// 6. Rank 0 is `Stable` when its relative score exceeds the threshold,
    ///    ranks 2+ are `Orbit`, everything else `Drift`
    pub fn rank(&self, signals: &SignalVector) -> Vec<RankedCluster> {
        let mut alignments = self.score_all(signals);
        alignments.sort_by(|a, b| b.score.total_cmp(&a.score));
        alignments.truncate(self.options.top_k);

        let Some(max_score) = alignments.iter().map(|a| a.score).reduce(f64::max) else {
            return Vec::new();
        };
        let min_score = alignments
            .iter()
            .map(|a| a.score)
            .fold(max_score, f64::min);
        let range = max_score - min_score;

        alignments
            .into_iter()
            .enumerate()
            .map(|(rank, alignment)| {
                let relative_score = if range > 0.0 {
                    (alignment.score - min_score) / range
                } else {
                    0.5
                };
                let size = self.options.min_size
                    + relative_score * (self.options.max_size - self.options.min_size);
                let motion = self.motion_for(rank, relative_score);

                RankedCluster {
                    rank,
                    cluster: alignment.cluster,
                    score: alignment.score,
                    dominant_signal: alignment.dominant_signal,
                    color: alignment.color,
                    relative_score,
                    size,
                    motion,
                }
            })
            .collect()
    }

    fn motion_for(&self, rank: usize, relative_score: f64) -> MotionClass {
        if rank == 0 && relative_score > self.options.stable_threshold {
            MotionClass::Stable
        } else if rank >= 2 {
            MotionClass::Orbit
        } else {
            MotionClass::Drift
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn scenario_signals() -> SignalVector {
        SignalVector::from_pairs([
            (SignalKey::Analytical, 6.0),
            (SignalKey::Structured, 3.0),
            (SignalKey::Social, 1.0),
        ])
    }

    #[test]
    fn data_and_insights_scores_documented_value() {
        let alignments = ClusterRanker::default().score_all(&scenario_signals());
        let data = alignments
            .iter()
            .find(|a| a.cluster == "Data & Insights")
            .unwrap();
        assert!((data.score - 0.69).abs() < EPS);
    }

    #[test]
    fn data_and_insights_ranks_near_the_top() {
        let ranked = ClusterRanker::default().rank(&scenario_signals());
        let position = ranked
            .iter()
            .position(|r| r.cluster == "Data & Insights")
            .unwrap();
        assert!(position <= 1, "ranked at {}", position);
    }

    #[test]
    fn scenario_ranking_order() {
        // Systems & Operations: 0.3*0.9 + 0.6*0.6 + 0.1*0.3 = 0.66
        // Innovation & Growth: 0.6*0.7 + 0.3*0.4 = 0.54
        // People & Community: 0.1*0.9 + 0.6*0.3 = 0.27
        let ranked = ClusterRanker::default().rank(&scenario_signals());
        let names: Vec<_> = ranked.iter().map(|r| r.cluster.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Data & Insights",
                "Systems & Operations",
                "Innovation & Growth",
                "People & Community"
            ]
        );
    }

    #[test]
    fn all_zero_signals_fall_back_to_declaration_order() {
        let ranked = ClusterRanker::default().rank(&SignalVector::zero());
        let names: Vec<_> = ranked.iter().map(|r| r.cluster.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Data & Insights",
                "Expression & Creation",
                "People & Community",
                "Systems & Operations"
            ]
        );
        for r in &ranked {
            assert_eq!(r.score, 0.0);
        }
    }

    #[test]
    fn negative_total_does_not_promote_disliked_cluster() {
        let signals = SignalVector::from_pairs([
            (SignalKey::Social, -2.0),
            (SignalKey::Exploratory, -1.0),
        ]);

        let ranked = ClusterRanker::default().rank(&signals);

        assert_eq!(ranked[0].cluster.as_str(), "Data & Insights");
        assert_eq!(ranked[0].motion, MotionClass::Drift);
        for r in &ranked {
            assert_eq!(r.score, 0.0);
        }
    }

    #[test]
    fn equal_scores_get_midpoint_size() {
        let ranked = ClusterRanker::default().rank(&SignalVector::zero());
        for r in &ranked {
            assert!((r.relative_score - 0.5).abs() < EPS);
            assert!((r.size - 120.0).abs() < EPS);
        }
        assert_eq!(ranked[0].motion, MotionClass::Drift);
    }

    #[test]
    fn sizes_span_the_configured_range() {
        let ranked = ClusterRanker::default().rank(&scenario_signals());
        assert!((ranked[0].size - 160.0).abs() < EPS);
        assert!((ranked[3].size - 80.0).abs() < EPS);
    }

    #[test]
    fn motion_classes_follow_rank() {
        let ranked = ClusterRanker::default().rank(&scenario_signals());
        assert_eq!(ranked[0].motion, MotionClass::Stable);
        assert_eq!(ranked[1].motion, MotionClass::Drift);
        assert_eq!(ranked[2].motion, MotionClass::Orbit);
        assert_eq!(ranked[3].motion, MotionClass::Orbit);
    }

    #[test]
    fn top_k_limits_output() {
        let ranker = ClusterRanker::with_options(RankingOptions {
            top_k: 2,
            ..RankingOptions::default()
        });
        assert_eq!(ranker.rank(&scenario_signals()).len(), 2);
    }

    #[test]
    fn empty_cluster_table_yields_empty_ranking() {
        let ranker = ClusterRanker::new(&[], RankingOptions::default());
        assert!(ranker.rank(&scenario_signals()).is_empty());
    }

    #[test]
    fn colors_come_from_dominant_signal() {
        let ranked = ClusterRanker::default().rank(&scenario_signals());
        assert_eq!(ranked[0].color, "#4A90E2");
        assert_eq!(ranked[1].color, "#FF6B35");
    }

    proptest! {
        #[test]
        fn ranking_is_deterministic(values in prop::collection::vec(0u32..50u32, 6)) {
            let signals = SignalVector::from_pairs(
                SignalKey::ALL.iter().copied().zip(values.iter().map(|v| f64::from(*v))),
            );
            let ranker = ClusterRanker::default();
            prop_assert_eq!(ranker.rank(&signals), ranker.rank(&signals));
        }

        #[test]
        fn ranked_scores_are_non_increasing(values in prop::collection::vec(0u32..50u32, 6)) {
            let signals = SignalVector::from_pairs(
                SignalKey::ALL.iter().copied().zip(values.iter().map(|v| f64::from(*v))),
            );
            let ranked = ClusterRanker::default().rank(&signals);
            prop_assert_eq!(ranked.len(), 4);
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
            }
        }
    }
}
