//! Ranking configuration

use serde::Deserialize;

use crate::domain::ranking::RankingOptions;

use super::error::ValidationError;

/// Tunables for the results screen
#[derive(Debug, Clone, Deserialize)]
pub struct RankingConfig {
    /// Number of clusters shown
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Bubble size for the lowest shown score
    #[serde(default = "default_min_size")]
    pub min_size: f64,

    /// Bubble size for the highest shown score
    #[serde(default = "default_max_size")]
    pub max_size: f64,

    /// Relative score the top cluster needs to be drawn as stable
    #[serde(default = "default_stable_threshold")]
    pub stable_threshold: f64,
}

impl RankingConfig {
    /// Validate ranking configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.top_k == 0 {
            return Err(ValidationError::InvalidTopK);
        }
        if self.min_size > self.max_size {
            return Err(ValidationError::InvalidSizeRange {
                min: self.min_size,
                max: self.max_size,
            });
        }
        if !(0.0..=1.0).contains(&self.stable_threshold) {
            return Err(ValidationError::InvalidStableThreshold(self.stable_threshold));
        }
        Ok(())
    }

    /// Options for the cluster ranker
    pub fn options(&self) -> RankingOptions {
        RankingOptions {
            top_k: self.top_k,
            min_size: self.min_size,
            max_size: self.max_size,
            stable_threshold: self.stable_threshold,
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            min_size: default_min_size(),
            max_size: default_max_size(),
            stable_threshold: default_stable_threshold(),
        }
    }
}

fn default_top_k() -> usize {
    4
}

fn default_min_size() -> f64 {
    80.0
}

fn default_max_size() -> f64 {
    160.0
}

fn default_stable_threshold() -> f64 {
    0.7
}
