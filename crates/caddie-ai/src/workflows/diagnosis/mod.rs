//! Diagnosis questionnaire: script, flow state machine, profile
//! normalization, and the session-facing service with its HTTP router.
//!
//! All state lives in one `SessionRecord` per golfer; every operation takes
//! the session identity explicitly so hosts can run any number of isolated
//! sessions on top of the same service.

pub mod domain;
pub mod flow;
pub mod profile;
pub mod repository;
pub mod router;
pub mod script;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Answer, BudgetBand, ClubSlot, Concern, GoalFocus, GolferProfile, Question, QuestionId,
    ScoreBand, SessionId, SkillTier,
};
pub use flow::{DiagnosisFlow, FlowError};
pub use profile::{profile_from_answers, UnknownAnswerValue};
pub use repository::{
    AnswerForwarded, FlowStateView, QuestionView, RepositoryError, SessionRecord,
    SessionRepository, SinkError, SubmissionSink,
};
pub use router::diagnosis_router;
pub use script::DiagnosisScript;
pub use service::{DiagnosisService, DiagnosisServiceError, RankingView};
