use crate::workflows::diagnosis::domain::{BudgetBand, Concern, GolferProfile, SkillTier};
use crate::workflows::recommendation::domain::{Bundle, FactorKind, FactorScore};

use super::config::MatchingConfig;

const ADJACENT_TIER_FIT: f64 = 0.6;
const DISTANT_TIER_FIT: f64 = 0.2;
const UNKNOWN_TIER_FIT: f64 = 0.5;
const CONCERN_BASELINE: f64 = 0.4;

/// Apply every rule to one bundle, returning the audit trail and the raw
/// weighted total in [0,1].
pub(crate) fn score_bundle(
    bundle: &Bundle,
    profile: &GolferProfile,
    config: &MatchingConfig,
) -> (Vec<FactorScore>, f64) {
    let weights = config.weights;
    let mut factors = vec![
        tier_fit(bundle, profile.skill_tier),
        concern_fit(bundle, profile.primary_concern),
        budget_fit(bundle, profile.budget),
        base_affinity(bundle),
    ];
    factors[0].weight = weights.tier;
    factors[1].weight = weights.concern;
    factors[2].weight = weights.budget;
    factors[3].weight = weights.affinity;

    let total = factors
        .iter()
        .map(|factor| factor.fit * factor.weight)
        .sum();

    (factors, total)
}

pub(crate) fn tier_fit(bundle: &Bundle, tier: SkillTier) -> FactorScore {
    let (fit, note) = match tier.steps_from(bundle.recommended_tier) {
        Some(0) => (
            1.0,
            format!("built for {} golfers", bundle.recommended_tier.label()),
        ),
        Some(1) => (
            ADJACENT_TIER_FIT,
            format!(
                "aimed one tier away ({})",
                bundle.recommended_tier.label()
            ),
        ),
        Some(_) => (
            DISTANT_TIER_FIT,
            format!(
                "aimed at {} golfers, a distant tier",
                bundle.recommended_tier.label()
            ),
        ),
        None => (UNKNOWN_TIER_FIT, "skill tier not stated yet".to_string()),
    };

    score(FactorKind::TierFit, fit, note)
}

pub(crate) fn concern_fit(bundle: &Bundle, concern: Option<Concern>) -> FactorScore {
    let (fit, note) = match concern {
        Some(concern) if bundle.strengths.contains(&concern) => (
            1.0,
            format!("strengths cover your {} concern", concern.label()),
        ),
        Some(concern) => (
            CONCERN_BASELINE,
            format!("no declared strength for {}", concern.label()),
        ),
        None => (CONCERN_BASELINE, "no primary concern stated".to_string()),
    };

    score(FactorKind::ConcernFit, fit, note)
}

pub(crate) fn budget_fit(bundle: &Bundle, band: BudgetBand) -> FactorScore {
    let (fit, note) = match band.ceiling_yen() {
        None => (1.0, "open budget matches any set".to_string()),
        Some(ceiling) if bundle.base_price <= ceiling => (
            1.0,
            format!("within the {} budget", band.label()),
        ),
        Some(ceiling) => {
            // Linear falloff, hitting zero at twice the band ceiling.
            let overshoot = f64::from(bundle.base_price - ceiling) / f64::from(ceiling);
            (
                (1.0 - overshoot).max(0.0),
                format!("¥{} over the {} budget", bundle.base_price - ceiling, band.label()),
            )
        }
    };

    score(FactorKind::BudgetFit, fit, note)
}

pub(crate) fn base_affinity(bundle: &Bundle) -> FactorScore {
    let fit = bundle.base_affinity.clamp(0.0, 1.0);
    score(
        FactorKind::BaseAffinity,
        fit,
        format!("catalog baseline {:.2}", fit),
    )
}

fn score(factor: FactorKind, fit: f64, note: String) -> FactorScore {
    FactorScore {
        factor,
        fit,
        weight: 0.0,
        note,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::recommendation::domain::BundleId;

    fn bundle(price: u32, tier: SkillTier, strengths: Vec<Concern>, affinity: f64) -> Bundle {
        Bundle {
            id: BundleId("test-set".to_string()),
            display_name: "Test Set".to_string(),
            brand: "Acme".to_string(),
            components: Vec::new(),
            base_price: price,
            recommended_tier: tier,
            strengths,
            base_affinity: affinity,
        }
    }

    #[test]
    fn tier_fit_rewards_exact_and_penalizes_distance() {
        let beginner_set = bundle(50_000, SkillTier::Beginner, vec![], 0.5);
        assert_eq!(tier_fit(&beginner_set, SkillTier::Beginner).fit, 1.0);
        assert_eq!(tier_fit(&beginner_set, SkillTier::Intermediate).fit, 0.6);
        assert_eq!(tier_fit(&beginner_set, SkillTier::Advanced).fit, 0.2);
        assert_eq!(tier_fit(&beginner_set, SkillTier::Unknown).fit, 0.5);
    }

    #[test]
    fn concern_fit_matches_declared_strengths() {
        let set = bundle(50_000, SkillTier::Beginner, vec![Concern::Direction], 0.5);
        assert_eq!(concern_fit(&set, Some(Concern::Direction)).fit, 1.0);
        assert_eq!(concern_fit(&set, Some(Concern::Putting)).fit, 0.4);
        assert_eq!(concern_fit(&set, None).fit, 0.4);
    }

    #[test]
    fn budget_fit_is_full_inside_the_band() {
        let set = bundle(45_000, SkillTier::Beginner, vec![], 0.5);
        assert_eq!(budget_fit(&set, BudgetBand::ThirtyToFiftyThousand).fit, 1.0);
        assert_eq!(budget_fit(&set, BudgetBand::Undecided).fit, 1.0);
        assert_eq!(budget_fit(&set, BudgetBand::OverHundredThousand).fit, 1.0);
    }

    #[test]
    fn budget_fit_degrades_monotonically_past_the_ceiling() {
        let band = BudgetBand::ThirtyToFiftyThousand;
        let prices = [50_000u32, 60_000, 75_000, 90_000, 100_000, 150_000];
        let fits: Vec<f64> = prices
            .iter()
            .map(|price| budget_fit(&bundle(*price, SkillTier::Beginner, vec![], 0.5), band).fit)
            .collect();

        for pair in fits.windows(2) {
            assert!(pair[1] <= pair[0], "fit must not increase with price");
        }
        assert_eq!(fits[0], 1.0);
        // Exactly twice the ceiling lands on zero.
        assert!(fits[4].abs() < 1e-9);
        assert_eq!(fits[5], 0.0);
    }

    #[test]
    fn base_affinity_is_clamped() {
        assert_eq!(
            base_affinity(&bundle(0, SkillTier::Beginner, vec![], 1.7)).fit,
            1.0
        );
        assert_eq!(
            base_affinity(&bundle(0, SkillTier::Beginner, vec![], -0.2)).fit,
            0.0
        );
    }
}
