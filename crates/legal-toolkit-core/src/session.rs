//! A form session: state, its persistence, and generation

use crate::composer::{self, DateStamp};
use crate::form::{Action, FieldBundle};
use crate::snapshot::{Snapshot, SnapshotStore};
use legal_datasets::ReferenceLookup;

/// Owns the form state for one user and keeps its snapshot current
pub struct Session<S: SnapshotStore> {
    state: FieldBundle,
    store: S,
}

impl<S: SnapshotStore> Session<S> {
    /// Restore from `store` (or defaults) and write the result back once
    pub fn open(store: S) -> Self {
        let saved = store.load();
        let state = Snapshot::restore(saved.as_deref());
        let mut session = Self { state, store };
        session.persist();
        session
    }

    pub fn state(&self) -> &FieldBundle {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn dispatch(&mut self, action: Action) {
        self.state.apply(action);
        self.persist();
    }

    /// Compose the selected document and store it as the output
    pub fn generate(&mut self, lookup: &impl ReferenceLookup, date: &DateStamp) -> &str {
        let text = composer::compose(self.state.document_type, &self.state, lookup, date);
        self.dispatch(Action::Generate(text));
        &self.state.generated
    }

    /// Best effort: failures are logged and the in-memory state is kept
    fn persist(&mut self) {
        let result = Snapshot::encode(&self.state).and_then(|text| self.store.save(&text));
        if let Err(err) = result {
            tracing::warn!(%err, "failed to persist form state");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentType;
    use crate::form::{FieldUpdate, TextField};
    use crate::snapshot::{MemoryStore, SnapshotError};
    use legal_datasets::Datasets;

    struct FailingStore;

    impl SnapshotStore for FailingStore {
        fn load(&self) -> Option<String> {
            None
        }

        fn save(&mut self, _snapshot: &str) -> Result<(), SnapshotError> {
            Err(SnapshotError::Storage("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_open_writes_initial_snapshot() {
        let session = Session::open(MemoryStore::new());
        let saved = session.store().saved().unwrap();
        assert!(saved.contains("\"documentType\":\"FOIA Request\""));
    }

    #[test]
    fn test_open_discards_corrupt_snapshot() {
        let session = Session::open(MemoryStore::with_saved("{{{"));
        assert_eq!(session.state(), &FieldBundle::default());
    }

    #[test]
    fn test_dispatch_persists_every_change() {
        let mut session = Session::open(MemoryStore::new());
        session.dispatch(Action::Set(FieldUpdate::Text(
            TextField::Agency,
            "NASA".to_string(),
        )));
        assert!(session.store().saved().unwrap().contains("\"agency\":\"NASA\""));
    }

    #[test]
    fn test_generate_stores_output_but_not_in_snapshot() {
        let mut session = Session::open(MemoryStore::new());
        session.dispatch(Action::Set(FieldUpdate::DocumentType(
            DocumentType::SubpoenaDucesTecum,
        )));
        let date = DateStamp::new("1/2/2025");
        let text = session.generate(&Datasets, &date).to_string();

        assert!(text.starts_with("SUBPOENA DUCES TECUM"));
        assert_eq!(session.state().generated, text);
        assert!(!session.store().saved().unwrap().contains("SUBPOENA"));

        let reopened = Session::open(session.store().clone());
        assert_eq!(reopened.state().document_type, DocumentType::SubpoenaDucesTecum);
        assert_eq!(reopened.state().generated, "");
    }

    #[test]
    fn test_storage_failure_keeps_state() {
        let mut session = Session::open(FailingStore);
        session.dispatch(Action::Set(FieldUpdate::Text(
            TextField::Recipient,
            "Acme".to_string(),
        )));
        assert_eq!(session.state().recipient, "Acme");
    }
}
