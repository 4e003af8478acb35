//! Static career cluster profiles.

use crate::domain::exploration::SignalKey;

/// A career family expressed as weights over signals.
///
/// Keys absent from `weights` contribute nothing to alignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterProfile {
    pub name: &'static str,
    pub weights: &'static [(SignalKey, f64)],
    pub dominant_signal: SignalKey,
}

impl ClusterProfile {
    /// Weight for a key, 0 when the profile does not list it.
    pub fn weight(&self, key: SignalKey) -> f64 {
        self.weights
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, w)| *w)
            .unwrap_or(0.0)
    }
}

/// The built-in clusters in declaration order; ties in ranking keep this order.
pub const CAREER_CLUSTERS: &[ClusterProfile] = &[
    ClusterProfile {
        name: "Data & Insights",
        weights: &[
            (SignalKey::Analytical, 0.9),
            (SignalKey::Structured, 0.5),
            (SignalKey::Exploratory, 0.4),
            (SignalKey::Creative, 0.2),
        ],
        dominant_signal: SignalKey::Analytical,
    },
    ClusterProfile {
        name: "Expression & Creation",
        weights: &[
            (SignalKey::Creative, 0.9),
            (SignalKey::Exploratory, 0.6),
            (SignalKey::Social, 0.4),
            (SignalKey::Analytical, 0.2),
        ],
        dominant_signal: SignalKey::Creative,
    },
    ClusterProfile {
        name: "People & Community",
        weights: &[
            (SignalKey::Social, 0.9),
            (SignalKey::Creative, 0.4),
            (SignalKey::Exploratory, 0.6),
            (SignalKey::Analytical, 0.3),
        ],
        dominant_signal: SignalKey::Social,
    },
    ClusterProfile {
        name: "Systems & Operations",
        weights: &[
            (SignalKey::Structured, 0.9),
            (SignalKey::Analytical, 0.6),
            (SignalKey::Social, 0.3),
            (SignalKey::Exploratory, 0.2),
        ],
        dominant_signal: SignalKey::Structured,
    },
    ClusterProfile {
        name: "Innovation & Growth",
        weights: &[
            (SignalKey::Exploratory, 0.9),
            (SignalKey::Analytical, 0.7),
            (SignalKey::Creative, 0.5),
            (SignalKey::Structured, 0.4),
        ],
        dominant_signal: SignalKey::Exploratory,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_weights_are_within_unit_interval() {
        for cluster in CAREER_CLUSTERS {
            for (_, weight) in cluster.weights {
                assert!((0.0..=1.0).contains(weight), "{} has weight {}", cluster.name, weight);
            }
        }
    }

    #[test]
    fn dominant_signal_carries_the_highest_weight() {
        for cluster in CAREER_CLUSTERS {
            let dominant = cluster.weight(cluster.dominant_signal);
            assert!(cluster.weights.iter().all(|(_, w)| *w <= dominant));
        }
    }

    #[test]
    fn unlisted_key_has_zero_weight() {
        assert_eq!(CAREER_CLUSTERS[0].weight(SignalKey::Social), 0.0);
        assert_eq!(CAREER_CLUSTERS[0].weight(SignalKey::Practical), 0.0);
    }
}
