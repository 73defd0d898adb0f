use serde::{Deserialize, Serialize};

/// Factor weights; tunable policy, not structure. Must sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub tier: f64,
    pub concern: f64,
    pub budget: f64,
    pub affinity: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.tier + self.concern + self.budget + self.affinity
    }
}

pub const DEFAULT_WEIGHTS: Weights = Weights {
    tier: 0.40,
    concern: 0.25,
    budget: 0.25,
    affinity: 0.10,
};

/// Scoring configuration applied to every bundle in a ranking call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub weights: Weights,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
        }
    }
}
