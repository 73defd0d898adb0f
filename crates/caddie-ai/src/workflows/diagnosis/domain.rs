use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for diagnosis sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

/// The seven fixed questions of the diagnosis script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionId {
    Experience,
    ScoreRange,
    PrimaryConcern,
    ConfidentClub,
    StrugglingClub,
    Goal,
    Budget,
}

impl QuestionId {
    pub const fn label(self) -> &'static str {
        match self {
            QuestionId::Experience => "experience",
            QuestionId::ScoreRange => "score_range",
            QuestionId::PrimaryConcern => "primary_concern",
            QuestionId::ConfidentClub => "confident_club",
            QuestionId::StrugglingClub => "struggling_club",
            QuestionId::Goal => "goal",
            QuestionId::Budget => "budget",
        }
    }
}

/// A single question with its closed option set, immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: &'static str,
    pub options: Vec<&'static str>,
    pub position: usize,
}

impl Question {
    pub fn offers(&self, option: &str) -> bool {
        self.options.iter().any(|label| *label == option)
    }
}

/// One collected answer; at most one per question id at any time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question: QuestionId,
    pub selected: String,
    pub answered_at: DateTime<Utc>,
}

/// Coarse skill classification derived from the experience and score answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillTier {
    Beginner,
    Intermediate,
    Advanced,
    Unknown,
}

impl SkillTier {
    pub const fn label(self) -> &'static str {
        match self {
            SkillTier::Beginner => "beginner",
            SkillTier::Intermediate => "intermediate",
            SkillTier::Advanced => "advanced",
            SkillTier::Unknown => "unknown",
        }
    }

    /// Number of tier steps between two known tiers; `None` when either side is unknown.
    pub fn steps_from(self, other: SkillTier) -> Option<u8> {
        let rank = |tier: SkillTier| match tier {
            SkillTier::Beginner => Some(0i8),
            SkillTier::Intermediate => Some(1),
            SkillTier::Advanced => Some(2),
            SkillTier::Unknown => None,
        };
        Some(rank(self)?.abs_diff(rank(other)?))
    }
}

/// Self-reported scoring range, kept as a secondary signal for tier inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    HundredTwentyOrMore,
    HundredTenToNineteen,
    HundredToHundredNine,
    NinetyToNinetyNine,
    EightyToEightyNine,
    SeventyToSeventyNine,
    SixtyNineOrLess,
}

impl ScoreBand {
    /// Tier implied by scoring alone, used when the duration answer is inconclusive.
    pub const fn tier_hint(self) -> SkillTier {
        match self {
            ScoreBand::HundredTwentyOrMore
            | ScoreBand::HundredTenToNineteen
            | ScoreBand::HundredToHundredNine => SkillTier::Beginner,
            ScoreBand::NinetyToNinetyNine => SkillTier::Intermediate,
            ScoreBand::EightyToEightyNine
            | ScoreBand::SeventyToSeventyNine
            | ScoreBand::SixtyNineOrLess => SkillTier::Advanced,
        }
    }
}

/// The pain points a golfer can name, matched against bundle strengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Concern {
    Direction,
    Distance,
    Consistency,
    Approach,
    Putting,
}

impl Concern {
    pub const fn label(self) -> &'static str {
        match self {
            Concern::Direction => "direction",
            Concern::Distance => "distance",
            Concern::Consistency => "consistency",
            Concern::Approach => "approach",
            Concern::Putting => "putting",
        }
    }
}

/// Club categories used both for preference answers and bundle components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClubSlot {
    Driver,
    Wood,
    Iron,
    Wedge,
    Putter,
}

impl ClubSlot {
    pub const fn label(self) -> &'static str {
        match self {
            ClubSlot::Driver => "driver",
            ClubSlot::Wood => "wood",
            ClubSlot::Iron => "iron",
            ClubSlot::Wedge => "wedge",
            ClubSlot::Putter => "putter",
        }
    }
}

/// What the golfer wants out of the game, recorded for presentation and audits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalFocus {
    LowerScores,
    EnjoyRounds,
    MoreDistance,
    ImproveWithFriends,
}

/// Budget buckets in yen; `Undecided` is a wide band that matches every bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetBand {
    UnderTenThousand,
    TenToThirtyThousand,
    ThirtyToFiftyThousand,
    FiftyToHundredThousand,
    OverHundredThousand,
    Undecided,
}

impl BudgetBand {
    pub const fn label(self) -> &'static str {
        match self {
            BudgetBand::UnderTenThousand => "under ¥10,000",
            BudgetBand::TenToThirtyThousand => "¥10,000-¥30,000",
            BudgetBand::ThirtyToFiftyThousand => "¥30,000-¥50,000",
            BudgetBand::FiftyToHundredThousand => "¥50,000-¥100,000",
            BudgetBand::OverHundredThousand => "¥100,000 or more",
            BudgetBand::Undecided => "undecided",
        }
    }

    /// Price ceiling of the band; open-ended bands have no ceiling and accept any price.
    pub const fn ceiling_yen(self) -> Option<u32> {
        match self {
            BudgetBand::UnderTenThousand => Some(10_000),
            BudgetBand::TenToThirtyThousand => Some(30_000),
            BudgetBand::ThirtyToFiftyThousand => Some(50_000),
            BudgetBand::FiftyToHundredThousand => Some(100_000),
            BudgetBand::OverHundredThousand | BudgetBand::Undecided => None,
        }
    }
}

/// Normalized representation of the golfer's stated experience and preferences.
///
/// Derived from whatever answers have been collected so far; unanswered
/// questions surface as `Unknown`/`None`/`Undecided` so ranking can run
/// against a partial profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GolferProfile {
    pub skill_tier: SkillTier,
    pub score_band: Option<ScoreBand>,
    pub primary_concern: Option<Concern>,
    pub confident_club: Option<ClubSlot>,
    pub struggling_club: Option<ClubSlot>,
    pub goal: Option<GoalFocus>,
    pub budget: BudgetBand,
}

impl Default for GolferProfile {
    fn default() -> Self {
        Self {
            skill_tier: SkillTier::Unknown,
            score_band: None,
            primary_concern: None,
            confident_club: None,
            struggling_club: None,
            goal: None,
            budget: BudgetBand::Undecided,
        }
    }
}
