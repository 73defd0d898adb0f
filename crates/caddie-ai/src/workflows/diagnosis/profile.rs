use super::domain::{
    Answer, BudgetBand, ClubSlot, Concern, GoalFocus, GolferProfile, QuestionId, ScoreBand,
    SkillTier,
};

/// Schema drift between the presentation layer and this mapping table.
///
/// Unlike a flow validation failure this is a configuration bug: the answer
/// was accepted against a question whose options this module does not know.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("answer '{value}' is not a known option for question '{}'", .question.label())]
pub struct UnknownAnswerValue {
    pub question: QuestionId,
    pub value: String,
}

/// Pure, total mapping from collected answers to a canonical profile.
///
/// Defined for partial answer sets so ranking can run before completion;
/// unanswered questions keep their `Default` placeholders.
pub fn profile_from_answers(answers: &[Answer]) -> Result<GolferProfile, UnknownAnswerValue> {
    let mut profile = GolferProfile::default();
    let mut duration_unsure = false;

    for answer in answers {
        match answer.question {
            QuestionId::Experience => {
                let (tier, unsure) = skill_tier_for(answer)?;
                profile.skill_tier = tier;
                duration_unsure = unsure;
            }
            QuestionId::ScoreRange => profile.score_band = score_band_for(answer)?,
            QuestionId::PrimaryConcern => profile.primary_concern = concern_for(answer)?,
            QuestionId::ConfidentClub => profile.confident_club = club_for(answer)?,
            QuestionId::StrugglingClub => profile.struggling_club = club_for(answer)?,
            QuestionId::Goal => profile.goal = goal_for(answer)?,
            QuestionId::Budget => profile.budget = budget_band_for(answer)?,
        }
    }

    // Duration recall is weak evidence; when the golfer could not say how
    // long they have played, the reported scoring range decides the tier.
    if duration_unsure {
        if let Some(band) = profile.score_band {
            profile.skill_tier = band.tier_hint();
        }
    }

    Ok(profile)
}

fn skill_tier_for(answer: &Answer) -> Result<(SkillTier, bool), UnknownAnswerValue> {
    match answer.selected.as_str() {
        "Under 6 months" => Ok((SkillTier::Beginner, false)),
        "1-3 years" => Ok((SkillTier::Intermediate, false)),
        "3+ years" => Ok((SkillTier::Advanced, false)),
        "Not sure" => Ok((SkillTier::Beginner, true)),
        _ => Err(unknown(answer)),
    }
}

fn score_band_for(answer: &Answer) -> Result<Option<ScoreBand>, UnknownAnswerValue> {
    match answer.selected.as_str() {
        "120 or more" => Ok(Some(ScoreBand::HundredTwentyOrMore)),
        "110-119" => Ok(Some(ScoreBand::HundredTenToNineteen)),
        "100-109" => Ok(Some(ScoreBand::HundredToHundredNine)),
        "90-99" => Ok(Some(ScoreBand::NinetyToNinetyNine)),
        "80-89" => Ok(Some(ScoreBand::EightyToEightyNine)),
        "70-79" => Ok(Some(ScoreBand::SeventyToSeventyNine)),
        "69 or less" => Ok(Some(ScoreBand::SixtyNineOrLess)),
        "Not sure" => Ok(None),
        _ => Err(unknown(answer)),
    }
}

fn concern_for(answer: &Answer) -> Result<Option<Concern>, UnknownAnswerValue> {
    match answer.selected.as_str() {
        "Direction" => Ok(Some(Concern::Direction)),
        "Distance" => Ok(Some(Concern::Distance)),
        "Consistency" => Ok(Some(Concern::Consistency)),
        "Approach" => Ok(Some(Concern::Approach)),
        "Putting" => Ok(Some(Concern::Putting)),
        "Nothing in particular" => Ok(None),
        _ => Err(unknown(answer)),
    }
}

fn club_for(answer: &Answer) -> Result<Option<ClubSlot>, UnknownAnswerValue> {
    match answer.selected.as_str() {
        "Driver" => Ok(Some(ClubSlot::Driver)),
        "Iron" => Ok(Some(ClubSlot::Iron)),
        "Wedge" => Ok(Some(ClubSlot::Wedge)),
        "Putter" => Ok(Some(ClubSlot::Putter)),
        "None" => Ok(None),
        _ => Err(unknown(answer)),
    }
}

fn goal_for(answer: &Answer) -> Result<Option<GoalFocus>, UnknownAnswerValue> {
    match answer.selected.as_str() {
        "Lower my scores" => Ok(Some(GoalFocus::LowerScores)),
        "Enjoy my rounds" => Ok(Some(GoalFocus::EnjoyRounds)),
        "More distance" => Ok(Some(GoalFocus::MoreDistance)),
        "Improve with friends" => Ok(Some(GoalFocus::ImproveWithFriends)),
        "Nothing in particular" => Ok(None),
        _ => Err(unknown(answer)),
    }
}

fn budget_band_for(answer: &Answer) -> Result<BudgetBand, UnknownAnswerValue> {
    match answer.selected.as_str() {
        "Under ¥10,000" => Ok(BudgetBand::UnderTenThousand),
        "¥10,000-¥30,000" => Ok(BudgetBand::TenToThirtyThousand),
        "¥30,000-¥50,000" => Ok(BudgetBand::ThirtyToFiftyThousand),
        "¥50,000-¥100,000" => Ok(BudgetBand::FiftyToHundredThousand),
        "¥100,000 or more" => Ok(BudgetBand::OverHundredThousand),
        "Not decided yet" => Ok(BudgetBand::Undecided),
        _ => Err(unknown(answer)),
    }
}

fn unknown(answer: &Answer) -> UnknownAnswerValue {
    UnknownAnswerValue {
        question: answer.question,
        value: answer.selected.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn answer(question: QuestionId, selected: &str) -> Answer {
        Answer {
            question,
            selected: selected.to_string(),
            answered_at: Utc::now(),
        }
    }

    #[test]
    fn full_answer_set_normalizes() {
        let answers = vec![
            answer(QuestionId::Experience, "1-3 years"),
            answer(QuestionId::ScoreRange, "90-99"),
            answer(QuestionId::PrimaryConcern, "Direction"),
            answer(QuestionId::ConfidentClub, "Iron"),
            answer(QuestionId::StrugglingClub, "Driver"),
            answer(QuestionId::Goal, "Lower my scores"),
            answer(QuestionId::Budget, "¥30,000-¥50,000"),
        ];

        let profile = profile_from_answers(&answers).expect("answers normalize");
        assert_eq!(profile.skill_tier, SkillTier::Intermediate);
        assert_eq!(profile.score_band, Some(ScoreBand::NinetyToNinetyNine));
        assert_eq!(profile.primary_concern, Some(Concern::Direction));
        assert_eq!(profile.confident_club, Some(ClubSlot::Iron));
        assert_eq!(profile.struggling_club, Some(ClubSlot::Driver));
        assert_eq!(profile.goal, Some(GoalFocus::LowerScores));
        assert_eq!(profile.budget, BudgetBand::ThirtyToFiftyThousand);
    }

    #[test]
    fn partial_answers_keep_placeholders() {
        let answers = vec![answer(QuestionId::PrimaryConcern, "Putting")];

        let profile = profile_from_answers(&answers).expect("partial set normalizes");
        assert_eq!(profile.skill_tier, SkillTier::Unknown);
        assert_eq!(profile.primary_concern, Some(Concern::Putting));
        assert_eq!(profile.budget, BudgetBand::Undecided);
    }

    #[test]
    fn empty_answers_yield_the_default_profile() {
        let profile = profile_from_answers(&[]).expect("empty set normalizes");
        assert_eq!(profile, GolferProfile::default());
    }

    #[test]
    fn unsure_duration_defers_to_score_band() {
        let answers = vec![
            answer(QuestionId::Experience, "Not sure"),
            answer(QuestionId::ScoreRange, "80-89"),
        ];

        let profile = profile_from_answers(&answers).expect("answers normalize");
        assert_eq!(profile.skill_tier, SkillTier::Advanced);
    }

    #[test]
    fn unsure_duration_without_score_stays_beginner() {
        let answers = vec![
            answer(QuestionId::Experience, "Not sure"),
            answer(QuestionId::ScoreRange, "Not sure"),
        ];

        let profile = profile_from_answers(&answers).expect("answers normalize");
        assert_eq!(profile.skill_tier, SkillTier::Beginner);
        assert_eq!(profile.score_band, None);
    }

    #[test]
    fn sentinel_options_map_to_none() {
        let answers = vec![
            answer(QuestionId::ConfidentClub, "None"),
            answer(QuestionId::StrugglingClub, "None"),
            answer(QuestionId::PrimaryConcern, "Nothing in particular"),
            answer(QuestionId::Goal, "Nothing in particular"),
        ];

        let profile = profile_from_answers(&answers).expect("answers normalize");
        assert_eq!(profile.confident_club, None);
        assert_eq!(profile.struggling_club, None);
        assert_eq!(profile.primary_concern, None);
        assert_eq!(profile.goal, None);
    }

    #[test]
    fn drifted_answer_is_a_fatal_mapping_error() {
        let answers = vec![answer(QuestionId::Budget, "whatever it takes")];

        let error = profile_from_answers(&answers).expect_err("drifted value rejected");
        assert_eq!(error.question, QuestionId::Budget);
        assert_eq!(error.value, "whatever it takes");
    }
}
