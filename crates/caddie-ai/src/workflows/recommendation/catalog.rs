use crate::workflows::diagnosis::domain::{ClubSlot, Concern, SkillTier};

use super::domain::{Bundle, BundleComponent, BundleId, ShaftFlex};

/// Catalog lookup failure; surfaced to the host for retry, never retried here.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Read-only source of recommendable bundles.
///
/// One request per ranking call; the catalog is small enough to load wholly.
pub trait CatalogProvider: Send + Sync {
    fn fetch_catalog(&self) -> Result<Vec<Bundle>, CatalogError>;
}

/// In-memory provider backed by a fixed bundle list.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    bundles: Vec<Bundle>,
}

impl StaticCatalog {
    pub fn new(bundles: Vec<Bundle>) -> Self {
        Self { bundles }
    }

    pub fn standard() -> Self {
        Self::new(standard_bundles())
    }

    pub fn bundles(&self) -> &[Bundle] {
        &self.bundles
    }
}

impl CatalogProvider for StaticCatalog {
    fn fetch_catalog(&self) -> Result<Vec<Bundle>, CatalogError> {
        Ok(self.bundles.clone())
    }
}

fn component(slot: ClubSlot, brand: &str, model: &str, flex: Option<ShaftFlex>) -> BundleComponent {
    BundleComponent {
        slot,
        brand: brand.to_string(),
        model: model.to_string(),
        flex,
    }
}

/// Seed catalog: six full club sets across the three tiers, assembled from
/// current retail lineups so demos and tests have realistic content.
pub fn standard_bundles() -> Vec<Bundle> {
    vec![
        Bundle {
            id: BundleId("tm-stealth-launch".to_string()),
            display_name: "TaylorMade Stealth 2 Launch Set".to_string(),
            brand: "TaylorMade".to_string(),
            components: vec![
                component(
                    ClubSlot::Driver,
                    "TaylorMade",
                    "Stealth 2",
                    Some(ShaftFlex::Regular),
                ),
                component(
                    ClubSlot::Wood,
                    "TaylorMade",
                    "Stealth 2 3W",
                    Some(ShaftFlex::Regular),
                ),
                component(
                    ClubSlot::Iron,
                    "TaylorMade",
                    "Stealth HD 5-PW",
                    Some(ShaftFlex::Regular),
                ),
                component(
                    ClubSlot::Wedge,
                    "TaylorMade",
                    "MG3 56",
                    Some(ShaftFlex::Regular),
                ),
                component(ClubSlot::Putter, "TaylorMade", "Spider GT", None),
            ],
            base_price: 98_000,
            recommended_tier: SkillTier::Beginner,
            strengths: vec![Concern::Distance, Concern::Direction],
            base_affinity: 0.8,
        },
        Bundle {
            id: BundleId("cw-paradym-easy".to_string()),
            display_name: "Callaway Paradym Easy Flight Set".to_string(),
            brand: "Callaway".to_string(),
            components: vec![
                component(
                    ClubSlot::Driver,
                    "Callaway",
                    "Paradym",
                    Some(ShaftFlex::Regular),
                ),
                component(
                    ClubSlot::Wood,
                    "Callaway",
                    "Paradym 3W",
                    Some(ShaftFlex::Regular),
                ),
                component(
                    ClubSlot::Iron,
                    "Callaway",
                    "Rogue ST Max 6-PW",
                    Some(ShaftFlex::Regular),
                ),
                component(
                    ClubSlot::Wedge,
                    "Callaway",
                    "Jaws Raw 56",
                    Some(ShaftFlex::Regular),
                ),
                component(ClubSlot::Putter, "Callaway", "Odyssey White Hot OG", None),
            ],
            base_price: 89_000,
            recommended_tier: SkillTier::Beginner,
            strengths: vec![Concern::Direction, Concern::Consistency],
            base_affinity: 0.7,
        },
        Bundle {
            id: BundleId("pg-g430-steady".to_string()),
            display_name: "PING G430 Steady Flight Set".to_string(),
            brand: "PING".to_string(),
            components: vec![
                component(
                    ClubSlot::Driver,
                    "PING",
                    "G430",
                    Some(ShaftFlex::Regular),
                ),
                component(
                    ClubSlot::Wood,
                    "PING",
                    "G430 3W",
                    Some(ShaftFlex::Regular),
                ),
                component(
                    ClubSlot::Iron,
                    "PING",
                    "i525 5-PW",
                    Some(ShaftFlex::Stiff),
                ),
                component(
                    ClubSlot::Wedge,
                    "PING",
                    "Glide 4.0 56",
                    Some(ShaftFlex::Stiff),
                ),
                component(ClubSlot::Putter, "PING", "PLD Anser", None),
            ],
            base_price: 158_000,
            recommended_tier: SkillTier::Intermediate,
            strengths: vec![Concern::Consistency, Concern::Putting],
            base_affinity: 0.75,
        },
        Bundle {
            id: BundleId("mz-jpx-feel".to_string()),
            display_name: "Mizuno JPX Pure Feel Set".to_string(),
            brand: "Mizuno".to_string(),
            components: vec![
                component(
                    ClubSlot::Driver,
                    "Mizuno",
                    "ST-X",
                    Some(ShaftFlex::Stiff),
                ),
                component(
                    ClubSlot::Wood,
                    "Mizuno",
                    "ST-X 3W",
                    Some(ShaftFlex::Stiff),
                ),
                component(
                    ClubSlot::Iron,
                    "Mizuno",
                    "JPX923 Forged 5-PW",
                    Some(ShaftFlex::Regular),
                ),
                component(
                    ClubSlot::Wedge,
                    "Mizuno",
                    "T22 56",
                    Some(ShaftFlex::Regular),
                ),
                component(ClubSlot::Putter, "Mizuno", "M-Craft I", None),
            ],
            base_price: 149_000,
            recommended_tier: SkillTier::Intermediate,
            strengths: vec![Concern::Approach, Concern::Consistency],
            base_affinity: 0.7,
        },
        Bundle {
            id: BundleId("tt-tsr-tour".to_string()),
            display_name: "Titleist TSR Tour Set".to_string(),
            brand: "Titleist".to_string(),
            components: vec![
                component(
                    ClubSlot::Driver,
                    "Titleist",
                    "TSR3",
                    Some(ShaftFlex::Stiff),
                ),
                component(
                    ClubSlot::Wood,
                    "Titleist",
                    "TSR2 3W",
                    Some(ShaftFlex::Stiff),
                ),
                component(
                    ClubSlot::Iron,
                    "Titleist",
                    "T200 4-PW",
                    Some(ShaftFlex::Stiff),
                ),
                component(
                    ClubSlot::Wedge,
                    "Titleist",
                    "Vokey SM9 56",
                    Some(ShaftFlex::Stiff),
                ),
                component(ClubSlot::Putter, "Titleist", "Scotty Cameron Super Select", None),
            ],
            base_price: 248_000,
            recommended_tier: SkillTier::Advanced,
            strengths: vec![Concern::Direction, Concern::Approach],
            base_affinity: 0.85,
        },
        Bundle {
            id: BundleId("sx-zx-speed".to_string()),
            display_name: "Srixon ZX Low Spin Set".to_string(),
            brand: "Srixon".to_string(),
            components: vec![
                component(
                    ClubSlot::Driver,
                    "Srixon",
                    "ZX7",
                    Some(ShaftFlex::Stiff),
                ),
                component(
                    ClubSlot::Wood,
                    "Srixon",
                    "ZX 3W",
                    Some(ShaftFlex::Stiff),
                ),
                component(
                    ClubSlot::Iron,
                    "Srixon",
                    "ZX7 4-PW",
                    Some(ShaftFlex::ExtraStiff),
                ),
                component(
                    ClubSlot::Wedge,
                    "Srixon",
                    "ZX 58",
                    Some(ShaftFlex::Stiff),
                ),
                component(ClubSlot::Putter, "Srixon", "Z-Star Mallet", None),
            ],
            base_price: 198_000,
            recommended_tier: SkillTier::Advanced,
            strengths: vec![Concern::Distance],
            base_affinity: 0.65,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_bundles_are_well_formed() {
        let bundles = standard_bundles();
        assert_eq!(bundles.len(), 6);

        for bundle in &bundles {
            assert_ne!(bundle.recommended_tier, SkillTier::Unknown);
            assert!(bundle.base_affinity >= 0.0 && bundle.base_affinity <= 1.0);
            assert!(!bundle.strengths.is_empty());
            assert_eq!(bundle.components.len(), 5);
            assert_eq!(bundle.components[0].slot, ClubSlot::Driver);
            assert_eq!(bundle.components[4].slot, ClubSlot::Putter);
            assert!(bundle.components[4].flex.is_none());
        }
    }

    #[test]
    fn seed_covers_every_tier_and_concern() {
        let bundles = standard_bundles();
        for tier in [
            SkillTier::Beginner,
            SkillTier::Intermediate,
            SkillTier::Advanced,
        ] {
            assert!(bundles.iter().any(|bundle| bundle.recommended_tier == tier));
        }
        for concern in [
            Concern::Direction,
            Concern::Distance,
            Concern::Consistency,
            Concern::Approach,
            Concern::Putting,
        ] {
            assert!(bundles
                .iter()
                .any(|bundle| bundle.strengths.contains(&concern)));
        }
    }

    #[test]
    fn static_catalog_returns_its_bundles() {
        let catalog = StaticCatalog::standard();
        let fetched = catalog.fetch_catalog().expect("static fetch succeeds");
        assert_eq!(fetched.len(), catalog.bundles().len());
        assert_eq!(fetched[0].id, BundleId("tm-stealth-launch".to_string()));
    }
}
