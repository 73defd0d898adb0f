use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use crate::workflows::recommendation::catalog::{CatalogError, CatalogProvider};
use crate::workflows::recommendation::domain::MatchResult;
use crate::workflows::recommendation::engine::MatchingEngine;

use super::domain::{GolferProfile, SessionId};
use super::flow::{DiagnosisFlow, FlowError};
use super::profile::{profile_from_answers, UnknownAnswerValue};
use super::repository::{
    AnswerForwarded, FlowStateView, RepositoryError, SessionRecord, SessionRepository,
    SubmissionSink,
};

/// Service composing the flow engine, profile normalizer, matching engine,
/// and catalog provider behind the host-facing operations.
pub struct DiagnosisService<R, S> {
    repository: Arc<R>,
    sink: Arc<S>,
    engine: MatchingEngine,
    catalog: Arc<dyn CatalogProvider>,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("fit-{id:06}"))
}

/// Ranking payload: best-effort against a partial profile until completion.
#[derive(Debug, Clone, Serialize)]
pub struct RankingView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<SessionId>,
    pub complete: bool,
    pub profile: GolferProfile,
    pub results: Vec<MatchResult>,
}

impl<R, S> DiagnosisService<R, S>
where
    R: SessionRepository + 'static,
    S: SubmissionSink + 'static,
{
    pub fn new(
        repository: Arc<R>,
        sink: Arc<S>,
        engine: MatchingEngine,
        catalog: Arc<dyn CatalogProvider>,
    ) -> Self {
        Self {
            repository,
            sink,
            engine,
            catalog,
        }
    }

    /// Open a fresh session positioned at the first question.
    pub fn start_session(&self) -> Result<FlowStateView, DiagnosisServiceError> {
        let record = SessionRecord {
            session_id: next_session_id(),
            flow: DiagnosisFlow::standard(),
        };

        let stored = self.repository.insert(record)?;
        Ok(stored.state_view())
    }

    /// Current position and question for an existing session.
    pub fn current_state(
        &self,
        session_id: &SessionId,
    ) -> Result<FlowStateView, DiagnosisServiceError> {
        let record = self.fetch(session_id)?;
        Ok(record.state_view())
    }

    /// Record an answer for the session's current question and advance.
    pub fn submit_answer(
        &self,
        session_id: &SessionId,
        option: &str,
    ) -> Result<FlowStateView, DiagnosisServiceError> {
        let mut record = self.fetch(session_id)?;

        let answer = record.flow.advance(option)?;
        let event = AnswerForwarded {
            session_id: record.session_id.clone(),
            question: answer.question.label(),
            selected: answer.selected.clone(),
            answered_at: answer.answered_at,
        };

        self.repository.update(record.clone())?;

        // Forwarding is fire-and-forget; a dead sink must never fail the flow.
        if let Err(error) = self.sink.forward(event) {
            warn!(%error, session = %record.session_id.0, "answer forwarding failed");
        }

        Ok(record.state_view())
    }

    /// Undo the most recent answer; identity at the first question.
    pub fn go_back(&self, session_id: &SessionId) -> Result<FlowStateView, DiagnosisServiceError> {
        let mut record = self.fetch(session_id)?;
        record.flow.retreat();
        self.repository.update(record.clone())?;
        Ok(record.state_view())
    }

    /// Drop every answer and restart the session from the first question.
    pub fn reset_session(
        &self,
        session_id: &SessionId,
    ) -> Result<FlowStateView, DiagnosisServiceError> {
        let mut record = self.fetch(session_id)?;
        record.flow.reset();
        self.repository.update(record.clone())?;
        Ok(record.state_view())
    }

    /// Rank the catalog against the session's profile, partial or complete.
    pub fn ranking(&self, session_id: &SessionId) -> Result<RankingView, DiagnosisServiceError> {
        let record = self.fetch(session_id)?;
        let profile = profile_from_answers(record.flow.answers())?;
        let catalog = self.catalog.fetch_catalog()?;
        let results = self.engine.rank(&profile, &catalog);

        Ok(RankingView {
            session_id: Some(record.session_id),
            complete: record.flow.is_complete(),
            profile,
            results,
        })
    }

    /// Stateless replay for alternate presentation adapters: the same flow
    /// engine validates the options, no session is created.
    pub fn preview(&self, options: &[String]) -> Result<RankingView, DiagnosisServiceError> {
        let mut flow = DiagnosisFlow::standard();
        for option in options {
            flow.advance(option)?;
        }

        let profile = profile_from_answers(flow.answers())?;
        let catalog = self.catalog.fetch_catalog()?;
        let results = self.engine.rank(&profile, &catalog);

        Ok(RankingView {
            session_id: None,
            complete: flow.is_complete(),
            profile,
            results,
        })
    }

    fn fetch(&self, session_id: &SessionId) -> Result<SessionRecord, DiagnosisServiceError> {
        let record = self
            .repository
            .fetch(session_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the diagnosis service.
#[derive(Debug, thiserror::Error)]
pub enum DiagnosisServiceError {
    #[error(transparent)]
    Flow(#[from] FlowError),
    #[error(transparent)]
    Schema(#[from] UnknownAnswerValue),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
