use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use caddie_ai::error::AppError;
use caddie_ai::workflows::diagnosis::{
    AnswerForwarded, RepositoryError, SessionId, SessionRecord, SessionRepository, SinkError,
    SubmissionSink,
};
use caddie_ai::workflows::recommendation::{CatalogImporter, StaticCatalog};
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySessionRepository {
    records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl SessionRepository for InMemorySessionRepository {
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

/// Answer forwarding stub: the production collector is an external system,
/// so the default sink just records the handoff in the logs.
#[derive(Default, Clone)]
pub(crate) struct LoggingSubmissionSink;

impl SubmissionSink for LoggingSubmissionSink {
    fn forward(&self, event: AnswerForwarded) -> Result<(), SinkError> {
        info!(
            session = %event.session_id.0,
            question = event.question,
            selected = %event.selected,
            "answer forwarded"
        );
        Ok(())
    }
}

pub(crate) fn load_catalog(csv_path: Option<&Path>) -> Result<StaticCatalog, AppError> {
    match csv_path {
        Some(path) => {
            let bundles = CatalogImporter::from_path(path)?;
            info!(count = bundles.len(), path = %path.display(), "catalog imported");
            Ok(StaticCatalog::new(bundles))
        }
        None => Ok(StaticCatalog::standard()),
    }
}
