use serde::{Deserialize, Serialize};

use crate::workflows::diagnosis::domain::{ClubSlot, Concern, SkillTier};

/// Identifier wrapper for catalog bundles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BundleId(pub String);

/// Shaft stiffness as printed on the club.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShaftFlex {
    Regular,
    Stiff,
    ExtraStiff,
}

impl ShaftFlex {
    pub const fn label(self) -> &'static str {
        match self {
            ShaftFlex::Regular => "R",
            ShaftFlex::Stiff => "S",
            ShaftFlex::ExtraStiff => "X",
        }
    }
}

/// One club inside a bundle; putters carry no flex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleComponent {
    pub slot: ClubSlot,
    pub brand: String,
    pub model: String,
    pub flex: Option<ShaftFlex>,
}

/// A purchasable set of golf clubs treated as one recommendable unit.
///
/// Catalog entities are externally supplied and read-only; the engine never
/// mutates them and relies on their insertion order for tie-breaking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    pub id: BundleId,
    pub display_name: String,
    pub brand: String,
    pub components: Vec<BundleComponent>,
    pub base_price: u32,
    pub recommended_tier: SkillTier,
    pub strengths: Vec<Concern>,
    pub base_affinity: f64,
}

/// Which rule contributed to a score, for transparent audits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    TierFit,
    ConcernFit,
    BudgetFit,
    BaseAffinity,
}

impl FactorKind {
    pub const fn label(self) -> &'static str {
        match self {
            FactorKind::TierFit => "tier fit",
            FactorKind::ConcernFit => "concern fit",
            FactorKind::BudgetFit => "budget fit",
            FactorKind::BaseAffinity => "base affinity",
        }
    }
}

/// Discrete contribution to a match score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorScore {
    pub factor: FactorKind,
    pub fit: f64,
    pub weight: f64,
    pub note: String,
}

/// Ranked outcome for one bundle; recomputed fully on every ranking call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub bundle_id: BundleId,
    pub score: u8,
    pub rank: usize,
    pub rationale: String,
    pub factors: Vec<FactorScore>,
}
