use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::SessionId;
use super::flow::DiagnosisFlow;

/// One golfer's in-progress or completed questionnaire plus derived state.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub session_id: SessionId,
    pub flow: DiagnosisFlow,
}

impl SessionRecord {
    pub fn state_view(&self) -> FlowStateView {
        FlowStateView {
            session_id: self.session_id.clone(),
            position: self.flow.position(),
            total: self.flow.total(),
            complete: self.flow.is_complete(),
            current_question: self.flow.current_question().map(|question| QuestionView {
                id: question.id.label(),
                prompt: question.prompt,
                options: question.options.clone(),
                position: question.position,
            }),
        }
    }
}

/// Sanitized flow snapshot for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct FlowStateView {
    pub session_id: SessionId,
    pub position: usize,
    pub total: usize,
    pub complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_question: Option<QuestionView>,
}

/// Presentation shape of a question; generated from the same script the
/// normalizer consumes, so option sets cannot drift between the two.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: Vec<&'static str>,
    pub position: usize,
}

/// Storage abstraction keyed by session identity; hosts running many
/// concurrent sessions isolate them behind this trait.
pub trait SessionRepository: Send + Sync {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError>;
    fn update(&self, record: SessionRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("session already exists")]
    Conflict,
    #[error("session not found")]
    NotFound,
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook forwarding accepted answers to a collection backend.
///
/// Strictly fire-and-forget: the flow never waits on or fails with the sink.
pub trait SubmissionSink: Send + Sync {
    fn forward(&self, event: AnswerForwarded) -> Result<(), SinkError>;
}

/// Payload handed to the submission sink after each accepted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerForwarded {
    pub session_id: SessionId,
    pub question: &'static str,
    pub selected: String,
    pub answered_at: DateTime<Utc>,
}

/// Sink dispatch error; logged by the service, never propagated.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("submission transport unavailable: {0}")]
    Transport(String),
}
