//! Persisted form snapshots
//!
//! The form state is saved as JSON after every change, with the generated
//! output cleared. On startup the snapshot is read once; anything that fails
//! to parse is discarded and the defaults are used.

use crate::form::{Action, FieldBundle, FieldPatch};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to parse saved state: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Snapshot storage error: {0}")]
    Storage(String),
}

/// Backing store for the single saved snapshot
pub trait SnapshotStore {
    /// Raw saved text, if any
    fn load(&self) -> Option<String>;

    fn save(&mut self, snapshot: &str) -> Result<(), SnapshotError>;
}

/// In-process store, used by tests and non-browser callers
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_saved(snapshot: impl Into<String>) -> Self {
        Self {
            saved: Some(snapshot.into()),
        }
    }

    pub fn saved(&self) -> Option<&str> {
        self.saved.as_deref()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.saved.clone()
    }

    fn save(&mut self, snapshot: &str) -> Result<(), SnapshotError> {
        self.saved = Some(snapshot.to_string());
        Ok(())
    }
}

pub struct Snapshot;

impl Snapshot {
    /// JSON projection of the form with the output slot cleared
    pub fn encode(bundle: &FieldBundle) -> Result<String, SnapshotError> {
        let projection = FieldBundle {
            generated: String::new(),
            ..bundle.clone()
        };
        serde_json::to_string(&projection).map_err(SnapshotError::Serialize)
    }

    /// Fails only when `text` is not a JSON object; bad values inside it
    /// are skipped key by key
    pub fn decode(text: &str) -> Result<FieldPatch, SnapshotError> {
        let mut patch: FieldPatch = serde_json::from_str(text).map_err(SnapshotError::Parse)?;
        // Output never survives a reload, even from a hand-edited snapshot
        patch.generated = Some(String::new());
        Ok(patch)
    }

    /// Defaults hydrated from `saved`; a malformed snapshot is logged and ignored
    pub fn restore(saved: Option<&str>) -> FieldBundle {
        let mut state = FieldBundle::default();
        if let Some(text) = saved {
            match Self::decode(text) {
                Ok(patch) => state.apply(Action::Hydrate(patch)),
                Err(err) => tracing::warn!(%err, "discarding saved form state"),
            }
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DocumentType, ViolationType};
    use crate::form::{FieldUpdate, TextField};
    use legal_datasets::StateCode;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_encode_clears_generated() {
        let mut state = FieldBundle::new();
        state.apply(Action::Generate("secret output".to_string()));
        let text = Snapshot::encode(&state).unwrap();
        assert!(!text.contains("secret output"));
        assert!(text.contains("\"generated\":\"\""));
    }

    #[test]
    fn test_round_trip_keeps_fields_drops_output() {
        let mut state = FieldBundle::new();
        state.apply(Action::Set(FieldUpdate::DocumentType(DocumentType::DiscoveryRequest)));
        state.apply(Action::Set(FieldUpdate::SelectedState(Some(StateCode::GA))));
        state.apply(Action::Set(FieldUpdate::Text(TextField::CaseNumber, "A-1".to_string())));
        state.apply(Action::Generate("DISCOVERY REQUEST ...".to_string()));

        let restored = Snapshot::restore(Some(&Snapshot::encode(&state).unwrap()));
        assert_eq!(
            restored,
            FieldBundle {
                generated: String::new(),
                ..state
            }
        );
    }

    #[test]
    fn test_decode_clears_generated_from_foreign_snapshot() {
        let patch = Snapshot::decode(r#"{"generated": "stale", "agency": "EPA"}"#).unwrap();
        let mut state = FieldBundle::new();
        state.apply(Action::Generate("current".to_string()));
        state.apply(Action::Hydrate(patch));
        assert_eq!(state.generated, "");
        assert_eq!(state.agency, "EPA");
    }

    #[test]
    fn test_malformed_snapshot_yields_defaults() {
        assert_eq!(Snapshot::restore(Some("{not json")), FieldBundle::default());
        assert_eq!(Snapshot::restore(Some("[1, 2, 3]")), FieldBundle::default());
        assert_eq!(Snapshot::restore(Some("\"agency\"")), FieldBundle::default());
        assert_eq!(Snapshot::restore(None), FieldBundle::default());
    }

    #[test]
    fn test_bad_value_keeps_the_rest_of_the_snapshot() {
        let restored = Snapshot::restore(Some(
            r#"{"agency":"EPA","incident":"long narrative","violationType":"stalking"}"#,
        ));
        assert_eq!(restored.agency, "EPA");
        assert_eq!(restored.incident, "long narrative");
        assert_eq!(restored.violation_type, ViolationType::default());

        let restored = Snapshot::restore(Some(
            r#"{"documentType":"Eviction","agency":42,"damages":"Lost wages","selectedState":"TX"}"#,
        ));
        assert_eq!(restored.document_type, DocumentType::FoiaRequest);
        assert_eq!(restored.agency, "");
        assert_eq!(restored.damages, "Lost wages");
        assert_eq!(restored.selected_state, Some(StateCode::TX));
    }

    #[test]
    fn test_decode_error_is_parse() {
        assert!(matches!(Snapshot::decode("nope"), Err(SnapshotError::Parse(_))));
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load(), None);
        store.save("{}").unwrap();
        assert_eq!(store.saved(), Some("{}"));
        assert_eq!(MemoryStore::with_saved("x").load().as_deref(), Some("x"));
    }
}
