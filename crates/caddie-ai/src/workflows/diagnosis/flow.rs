use chrono::Utc;

use super::domain::{Answer, Question, QuestionId};
use super::script::DiagnosisScript;

/// Validation errors raised by the flow engine; both are user-recoverable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error("option '{given}' is not offered by question '{}'", .question.label())]
    InvalidOption { question: QuestionId, given: String },
    #[error("the diagnosis is already complete")]
    AlreadyComplete,
}

/// Sequential questionnaire state machine.
///
/// Position and answers move in lockstep: `position == answers.len()` at all
/// times, `advance` is the only way forward, `retreat` its exact inverse.
#[derive(Debug, Clone)]
pub struct DiagnosisFlow {
    script: DiagnosisScript,
    answers: Vec<Answer>,
    position: usize,
}

impl DiagnosisFlow {
    pub fn new(script: DiagnosisScript) -> Self {
        Self {
            script,
            answers: Vec::new(),
            position: 0,
        }
    }

    pub fn standard() -> Self {
        Self::new(DiagnosisScript::standard())
    }

    pub fn script(&self) -> &DiagnosisScript {
        &self.script
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total(&self) -> usize {
        self.script.len()
    }

    pub fn is_complete(&self) -> bool {
        self.position == self.script.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.script.question_at(self.position)
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Record the selected option for the current question and move forward.
    ///
    /// Fails without touching state when the option is not offered or the
    /// flow is already past its last question.
    pub fn advance(&mut self, option: &str) -> Result<&Answer, FlowError> {
        let question = self.current_question().ok_or(FlowError::AlreadyComplete)?;
        if !question.offers(option) {
            return Err(FlowError::InvalidOption {
                question: question.id,
                given: option.to_string(),
            });
        }

        let answer = Answer {
            question: question.id,
            selected: option.to_string(),
            answered_at: Utc::now(),
        };

        // One answer per question id: a re-visit after retreat replaces, never duplicates.
        self.answers.retain(|existing| existing.question != answer.question);
        self.answers.push(answer);
        self.position = (self.position + 1).min(self.script.len());

        Ok(self.answers.last().expect("answer just recorded"))
    }

    /// Remove the most recent answer and step back; no-op at the start.
    pub fn retreat(&mut self) -> Option<Answer> {
        if self.position == 0 || self.answers.is_empty() {
            return None;
        }

        let removed = self.answers.pop();
        self.position -= 1;
        removed
    }

    /// Drop all collected answers and return to the first question.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.position = 0;
    }
}
