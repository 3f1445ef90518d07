//! Static per-state legal reference data
//!
//! Five tables keyed by [`StateCode`]: public records, stop-and-identify,
//! cannabis, hostile states, and government notice rules. Tables are partial;
//! a missing entry is a normal answer, not an error.

pub mod jurisdiction;
pub mod record;
mod tables;

pub use jurisdiction::{ParseError, StateCode};
pub use record::{ReferencePanel, ReferenceRecord, ReferenceTable, TableInfo};

/// Read access to reference tables
///
/// The document composer depends on this rather than on the static tables
/// directly so callers can substitute their own data.
pub trait ReferenceLookup {
    fn lookup(&self, table: ReferenceTable, state: StateCode) -> Option<&ReferenceRecord>;
}

/// The built-in reference tables
#[derive(Debug, Clone, Copy, Default)]
pub struct Datasets;

impl Datasets {
    pub fn new() -> Self {
        Self
    }

    /// Listing of every table, in resource-page order
    pub fn tables(&self) -> Vec<TableInfo> {
        ReferenceTable::ALL.into_iter().map(TableInfo::from).collect()
    }

    /// States with an entry in `table`, in selector order
    pub fn covered_states(&self, table: ReferenceTable) -> Vec<StateCode> {
        let entries = tables::table(table);
        StateCode::ALL
            .iter()
            .copied()
            .filter(|state| entries.contains_key(state))
            .collect()
    }
}

impl ReferenceLookup for Datasets {
    fn lookup(&self, table: ReferenceTable, state: StateCode) -> Option<&ReferenceRecord> {
        tables::table(table).get(&state)
    }
}

/// Look up one record in the built-in tables
pub fn lookup(table: ReferenceTable, state: StateCode) -> Option<&'static ReferenceRecord> {
    tables::table(table).get(&state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lookup_present_entry() {
        let record = lookup(ReferenceTable::StopAndId, StateCode::NV).unwrap();
        assert_eq!(record.citation, "NRS 171.123");
        assert!(record.url.starts_with("https://"));
    }

    #[test]
    fn test_lookup_absent_entry_is_none() {
        // Idaho has no stop-and-identify statute entry
        assert!(lookup(ReferenceTable::StopAndId, StateCode::ID).is_none());
        assert!(lookup(ReferenceTable::HostileStates, StateCode::WY).is_none());
    }

    #[test]
    fn test_every_table_has_gaps_and_entries() {
        let data = Datasets::new();
        for table in ReferenceTable::ALL {
            let covered = data.covered_states(table);
            assert!(!covered.is_empty(), "{:?} is empty", table);
            assert!(covered.len() < StateCode::ALL.len(), "{:?} is total", table);
        }
    }

    #[test]
    fn test_tables_listing() {
        let tables = Datasets::new().tables();
        assert_eq!(tables.len(), 5);
        assert_eq!(tables[0].title, "Public Records Laws");
        assert_eq!(
            tables[2].description,
            "Comprehensive information about marijuana laws in each state"
        );
        assert!(tables.iter().all(|t| !t.description.is_empty()));
    }

    #[test]
    fn test_covered_states_in_selector_order() {
        let covered = Datasets::new().covered_states(ReferenceTable::HostileStates);
        let mut sorted = covered.clone();
        sorted.sort_by_key(|s| StateCode::ALL.iter().position(|x| x == s));
        assert_eq!(covered, sorted);
    }

    #[test]
    fn test_trait_and_free_function_agree() {
        let data = Datasets::new();
        for table in ReferenceTable::ALL {
            for state in StateCode::ALL {
                assert_eq!(data.lookup(table, state), lookup(table, state));
            }
        }
    }

    #[test]
    fn test_panel_prompt_without_selection() {
        let panel = ReferencePanel::for_selection(&Datasets, ReferenceTable::StopAndId, None);
        assert_eq!(
            panel,
            ReferencePanel::Prompt {
                message: "Select a state to view its stop and identification laws."
            }
        );
    }

    #[test]
    fn test_panel_entry_and_no_data() {
        let panel =
            ReferencePanel::for_selection(&Datasets, ReferenceTable::Cannabis, Some(StateCode::CO));
        match panel {
            ReferencePanel::Entry {
                state_name,
                citation_line,
                ..
            } => {
                assert_eq!(state_name, "Colorado");
                assert_eq!(
                    citation_line.as_deref(),
                    Some("Legal Citation: Colo. Const. art. XVIII, § 16")
                );
            }
            other => panic!("expected entry, got {:?}", other),
        }

        let panel = ReferencePanel::for_selection(
            &Datasets,
            ReferenceTable::HostileStates,
            Some(StateCode::WY),
        );
        assert!(matches!(panel, ReferencePanel::NoData { state: StateCode::WY, .. }));
    }
}
