//! Legal document toolkit core
//!
//! Form state, the document composer, and snapshot persistence. Reference
//! data comes from `legal-datasets`; nothing here touches a browser API.

pub mod calendar;
pub mod composer;
pub mod config;
pub mod document;
pub mod form;
pub mod rights_card;
pub mod session;
pub mod snapshot;

pub use composer::{compose, compose_tag, DateStamp, NO_STATE_INFORMATION, UNRECOGNIZED_DOCUMENT};
pub use config::{ConfigError, ToolkitConfig};
pub use document::{ClaimType, DocumentType, UnknownVariant, ViolationType};
pub use form::{reduce, Action, FieldBundle, FieldError, FieldPatch, FieldUpdate, TextField};
pub use session::Session;
pub use snapshot::{MemoryStore, Snapshot, SnapshotError, SnapshotStore};

pub use legal_datasets::{
    Datasets, ReferenceLookup, ReferencePanel, ReferenceRecord, ReferenceTable, StateCode,
};
