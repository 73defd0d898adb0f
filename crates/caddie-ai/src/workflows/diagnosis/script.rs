use super::domain::{Question, QuestionId};

/// The ordered question list driving a diagnosis session.
///
/// The standard script is linear; a future script could branch on collected
/// answers without the flow engine changing shape.
#[derive(Debug, Clone)]
pub struct DiagnosisScript {
    questions: Vec<Question>,
}

impl DiagnosisScript {
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question_at(&self, position: usize) -> Option<&Question> {
        self.questions.get(position)
    }

    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

fn standard_questions() -> Vec<Question> {
    let prompts = [
        (
            QuestionId::Experience,
            "How long have you been playing golf?",
            vec!["Under 6 months", "1-3 years", "3+ years", "Not sure"],
        ),
        (
            QuestionId::ScoreRange,
            "Which range do your scores usually land in?",
            vec![
                "120 or more",
                "110-119",
                "100-109",
                "90-99",
                "80-89",
                "70-79",
                "69 or less",
                "Not sure",
            ],
        ),
        (
            QuestionId::PrimaryConcern,
            "What bothers you most about your game right now?",
            vec![
                "Direction",
                "Distance",
                "Consistency",
                "Approach",
                "Putting",
                "Nothing in particular",
            ],
        ),
        (
            QuestionId::ConfidentClub,
            "Which club do you trust the most on the course or at the range?",
            vec!["Driver", "Iron", "Wedge", "Putter", "None"],
        ),
        (
            QuestionId::StrugglingClub,
            "Which club has been missing the most lately?",
            vec!["Driver", "Iron", "Wedge", "Putter", "None"],
        ),
        (
            QuestionId::Goal,
            "What kind of golf are you aiming for?",
            vec![
                "Lower my scores",
                "Enjoy my rounds",
                "More distance",
                "Improve with friends",
                "Nothing in particular",
            ],
        ),
        (
            QuestionId::Budget,
            "What budget are you considering for new clubs?",
            vec![
                "Under ¥10,000",
                "¥10,000-¥30,000",
                "¥30,000-¥50,000",
                "¥50,000-¥100,000",
                "¥100,000 or more",
                "Not decided yet",
            ],
        ),
    ];

    prompts
        .into_iter()
        .enumerate()
        .map(|(position, (id, prompt, options))| Question {
            id,
            prompt,
            options,
            position,
        })
        .collect()
}
