mod config;
mod rules;

pub use config::{MatchingConfig, Weights, DEFAULT_WEIGHTS};

use crate::workflows::diagnosis::domain::GolferProfile;

use super::domain::{Bundle, MatchResult};

/// Stateless engine turning a profile and a catalog into a ranked list.
///
/// Scoring is a deterministic weighted sum; the ranking is a total order
/// with ties resolved by catalog insertion order so repeated calls with the
/// same input render identically downstream.
pub struct MatchingEngine {
    config: MatchingConfig,
}

impl MatchingEngine {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    pub fn rank(&self, profile: &GolferProfile, catalog: &[Bundle]) -> Vec<MatchResult> {
        let mut results: Vec<MatchResult> = catalog
            .iter()
            .map(|bundle| self.score_bundle(bundle, profile))
            .collect();

        // Stable sort keeps catalog insertion order for equal scores.
        results.sort_by(|a, b| b.score.cmp(&a.score));

        for (index, result) in results.iter_mut().enumerate() {
            result.rank = index + 1;
        }

        results
    }

    fn score_bundle(&self, bundle: &Bundle, profile: &GolferProfile) -> MatchResult {
        let (factors, total) = rules::score_bundle(bundle, profile, &self.config);
        let score = (total * 100.0).round().clamp(0.0, 100.0) as u8;

        let rationale = factors
            .iter()
            .map(|factor| factor.note.as_str())
            .collect::<Vec<_>>()
            .join("; ");

        MatchResult {
            bundle_id: bundle.id.clone(),
            score,
            rank: 0,
            rationale,
            factors,
        }
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new(MatchingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::diagnosis::domain::{
        BudgetBand, Concern, GolferProfile, SkillTier,
    };
    use crate::workflows::recommendation::catalog::standard_bundles;
    use crate::workflows::recommendation::domain::{Bundle, BundleId};

    fn tier_bundle(id: &str, tier: SkillTier) -> Bundle {
        Bundle {
            id: BundleId(id.to_string()),
            display_name: format!("{id} set"),
            brand: "Acme".to_string(),
            components: Vec::new(),
            base_price: 40_000,
            recommended_tier: tier,
            strengths: vec![Concern::Direction],
            base_affinity: 0.5,
        }
    }

    fn beginner_profile() -> GolferProfile {
        GolferProfile {
            skill_tier: SkillTier::Beginner,
            ..GolferProfile::default()
        }
    }

    #[test]
    fn empty_catalog_ranks_to_an_empty_list() {
        let engine = MatchingEngine::default();
        assert!(engine.rank(&beginner_profile(), &[]).is_empty());
    }

    #[test]
    fn ranking_is_deterministic_across_calls() {
        let engine = MatchingEngine::default();
        let catalog = standard_bundles();
        let profile = GolferProfile {
            skill_tier: SkillTier::Intermediate,
            primary_concern: Some(Concern::Consistency),
            budget: BudgetBand::OverHundredThousand,
            ..GolferProfile::default()
        };

        let first = engine.rank(&profile, &catalog);
        let second = engine.rank(&profile, &catalog);
        assert_eq!(first, second);
    }

    #[test]
    fn tier_isolation_orders_by_tier_distance() {
        let engine = MatchingEngine::new(MatchingConfig {
            weights: Weights {
                tier: 1.0,
                concern: 0.0,
                budget: 0.0,
                affinity: 0.0,
            },
        });
        let catalog = vec![
            tier_bundle("a", SkillTier::Beginner),
            tier_bundle("b", SkillTier::Intermediate),
            tier_bundle("c", SkillTier::Advanced),
            tier_bundle("d", SkillTier::Beginner),
        ];

        let ranked = engine.rank(&beginner_profile(), &catalog);
        let ids: Vec<&str> = ranked
            .iter()
            .map(|result| result.bundle_id.0.as_str())
            .collect();

        assert_eq!(ids, vec!["a", "d", "b", "c"]);
        assert_eq!(ranked[0].score, ranked[1].score);
        assert!(ranked[1].score > ranked[2].score);
        assert!(ranked[2].score > ranked[3].score);
        assert_eq!(
            ranked.iter().map(|result| result.rank).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn zero_scores_still_rank_the_full_catalog() {
        let engine = MatchingEngine::new(MatchingConfig {
            weights: Weights {
                tier: 1.0,
                concern: 0.0,
                budget: 0.0,
                affinity: 0.0,
            },
        });
        // Tier fit floors at 0.2, so force zero through the budget rule instead.
        let engine_budget = MatchingEngine::new(MatchingConfig {
            weights: Weights {
                tier: 0.0,
                concern: 0.0,
                budget: 1.0,
                affinity: 0.0,
            },
        });
        let mut far_over = tier_bundle("far-over", SkillTier::Beginner);
        far_over.base_price = 200_000;
        let profile = GolferProfile {
            budget: BudgetBand::UnderTenThousand,
            ..beginner_profile()
        };

        let ranked = engine_budget.rank(&profile, &[far_over]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].score, 0);
        assert_eq!(ranked[0].rank, 1);

        // The tier-only engine still returns every bundle as well.
        let ranked = engine.rank(&beginner_profile(), &[tier_bundle("a", SkillTier::Advanced)]);
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn scores_stay_within_bounds_and_carry_rationale() {
        let engine = MatchingEngine::default();
        let catalog = standard_bundles();
        let profile = GolferProfile {
            skill_tier: SkillTier::Beginner,
            primary_concern: Some(Concern::Distance),
            budget: BudgetBand::FiftyToHundredThousand,
            ..GolferProfile::default()
        };

        for result in engine.rank(&profile, &catalog) {
            assert!(result.score <= 100);
            assert!(!result.rationale.is_empty());
            assert_eq!(result.factors.len(), 4);
        }
    }

    #[test]
    fn unknown_tier_profile_uses_the_neutral_tier_fit() {
        let engine = MatchingEngine::new(MatchingConfig {
            weights: Weights {
                tier: 1.0,
                concern: 0.0,
                budget: 0.0,
                affinity: 0.0,
            },
        });

        let ranked = engine.rank(
            &GolferProfile::default(),
            &[tier_bundle("a", SkillTier::Advanced)],
        );
        assert_eq!(ranked[0].score, 50);
    }
}
