use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::diagnosis::domain::SessionId;
use crate::workflows::diagnosis::repository::{
    AnswerForwarded, RepositoryError, SessionRecord, SessionRepository, SinkError, SubmissionSink,
};
use crate::workflows::diagnosis::service::DiagnosisService;
use crate::workflows::recommendation::catalog::{CatalogError, CatalogProvider, StaticCatalog};
use crate::workflows::recommendation::domain::Bundle;
use crate::workflows::recommendation::engine::MatchingEngine;

pub(super) const FULL_WALK: [&str; 7] = [
    "Under 6 months",
    "100-109",
    "Direction",
    "Driver",
    "Iron",
    "Lower my scores",
    "¥30,000-¥50,000",
];

#[derive(Default)]
pub(super) struct MemoryRepository {
    records: Mutex<HashMap<SessionId, SessionRecord>>,
}

impl SessionRepository for MemoryRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.session_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.session_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: SessionRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.session_id) {
            guard.insert(record.session_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct UnavailableRepository;

impl SessionRepository for UnavailableRepository {
    fn insert(&self, _record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("store down".to_string()))
    }

    fn update(&self, _record: SessionRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store down".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store down".to_string()))
    }
}

#[derive(Default)]
pub(super) struct MemorySink {
    events: Mutex<Vec<AnswerForwarded>>,
}

impl MemorySink {
    pub(super) fn events(&self) -> Vec<AnswerForwarded> {
        self.events.lock().expect("sink mutex poisoned").clone()
    }
}

impl SubmissionSink for MemorySink {
    fn forward(&self, event: AnswerForwarded) -> Result<(), SinkError> {
        let mut guard = self.events.lock().expect("sink mutex poisoned");
        guard.push(event);
        Ok(())
    }
}

pub(super) struct FailingSink;

impl SubmissionSink for FailingSink {
    fn forward(&self, _event: AnswerForwarded) -> Result<(), SinkError> {
        Err(SinkError::Transport("collector offline".to_string()))
    }
}

pub(super) struct OfflineCatalog;

impl CatalogProvider for OfflineCatalog {
    fn fetch_catalog(&self) -> Result<Vec<Bundle>, CatalogError> {
        Err(CatalogError::Unavailable("feed timed out".to_string()))
    }
}

pub(super) struct EmptyCatalog;

impl CatalogProvider for EmptyCatalog {
    fn fetch_catalog(&self) -> Result<Vec<Bundle>, CatalogError> {
        Ok(Vec::new())
    }
}

pub(super) fn build_service() -> (
    Arc<DiagnosisService<MemoryRepository, MemorySink>>,
    Arc<MemoryRepository>,
    Arc<MemorySink>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let sink = Arc::new(MemorySink::default());
    let service = Arc::new(DiagnosisService::new(
        repository.clone(),
        sink.clone(),
        MatchingEngine::default(),
        Arc::new(StaticCatalog::standard()),
    ));
    (service, repository, sink)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is json")
}
