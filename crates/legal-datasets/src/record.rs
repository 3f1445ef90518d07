//! Reference records and the five tables they are grouped into

use crate::jurisdiction::StateCode;
use serde::Serialize;

/// A single legal-reference entry for one jurisdiction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceRecord {
    pub title: &'static str,
    pub summary: &'static str,
    /// Statute or constitutional citation; may be empty
    pub citation: &'static str,
    /// Primary source URL
    pub url: &'static str,
}

impl ReferenceRecord {
    pub const fn new(
        title: &'static str,
        summary: &'static str,
        citation: &'static str,
        url: &'static str,
    ) -> Self {
        Self {
            title,
            summary,
            citation,
            url,
        }
    }

    /// The "Legal Citation: ..." line shown under a record, if it has a citation
    pub fn citation_line(&self) -> Option<String> {
        if self.citation.is_empty() {
            None
        } else {
            Some(format!("Legal Citation: {}", self.citation))
        }
    }
}

/// The five reference categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceTable {
    PublicRecords,
    StopAndId,
    Cannabis,
    HostileStates,
    NoticeRules,
}

impl ReferenceTable {
    pub const ALL: [ReferenceTable; 5] = [
        ReferenceTable::PublicRecords,
        ReferenceTable::StopAndId,
        ReferenceTable::Cannabis,
        ReferenceTable::HostileStates,
        ReferenceTable::NoticeRules,
    ];

    /// Identifier used on the wire, matching the serialized form
    pub fn key(&self) -> &'static str {
        match self {
            ReferenceTable::PublicRecords => "public_records",
            ReferenceTable::StopAndId => "stop_and_id",
            ReferenceTable::Cannabis => "cannabis",
            ReferenceTable::HostileStates => "hostile_states",
            ReferenceTable::NoticeRules => "notice_rules",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReferenceTable::PublicRecords => "Public Records Laws",
            ReferenceTable::StopAndId => "Stop and ID Laws",
            ReferenceTable::Cannabis => "Cannabis Laws",
            ReferenceTable::HostileStates => "Hostile States Information",
            ReferenceTable::NoticeRules => "Notice Requirements",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ReferenceTable::PublicRecords => "Information about public records laws in each state",
            ReferenceTable::StopAndId => {
                "Details about identification requirements during police encounters"
            }
            ReferenceTable::Cannabis => {
                "Comprehensive information about marijuana laws in each state"
            }
            ReferenceTable::HostileStates => {
                "Information about states that are problematic for auditors and journalists"
            }
            ReferenceTable::NoticeRules => {
                "State-specific notice requirements for legal actions against government entities"
            }
        }
    }

    /// Prompt shown while no state is selected
    pub fn empty_prompt(&self) -> &'static str {
        match self {
            ReferenceTable::PublicRecords => "Select a state to view its public records law.",
            ReferenceTable::StopAndId => {
                "Select a state to view its stop and identification laws."
            }
            ReferenceTable::Cannabis => "Select a state to view its marijuana/cannabis laws.",
            ReferenceTable::HostileStates => "Select a state to view hostile-state information.",
            ReferenceTable::NoticeRules => {
                "Select a state to view its government notice requirements."
            }
        }
    }
}

/// A table's listing entry: key, heading, and one-line description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableInfo {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub empty_prompt: &'static str,
}

impl From<ReferenceTable> for TableInfo {
    fn from(table: ReferenceTable) -> Self {
        Self {
            key: table.key(),
            title: table.title(),
            description: table.description(),
            empty_prompt: table.empty_prompt(),
        }
    }
}

/// What a state-lookup view should display for the current selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReferencePanel {
    /// A record exists for the selected state
    Entry {
        state: StateCode,
        state_name: &'static str,
        record: ReferenceRecord,
        citation_line: Option<String>,
    },
    /// A state is selected but the table has nothing for it
    NoData { state: StateCode, message: String },
    /// Nothing selected yet
    Prompt { message: &'static str },
}

impl ReferencePanel {
    pub fn for_selection(
        lookup: &impl crate::ReferenceLookup,
        table: ReferenceTable,
        selection: Option<StateCode>,
    ) -> Self {
        let Some(state) = selection else {
            return ReferencePanel::Prompt {
                message: table.empty_prompt(),
            };
        };

        match lookup.lookup(table, state) {
            Some(record) => ReferencePanel::Entry {
                state,
                state_name: state.name(),
                record: *record,
                citation_line: record.citation_line(),
            },
            None => ReferencePanel::NoData {
                state,
                message: format!(
                    "No {} information available for {}.",
                    table.title().to_lowercase(),
                    state.name()
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_citation_line_omitted_when_empty() {
        let record = ReferenceRecord::new("t", "s", "", "https://example.gov");
        assert_eq!(record.citation_line(), None);

        let record = ReferenceRecord::new("t", "s", "RCW 42.56", "https://example.gov");
        assert_eq!(
            record.citation_line().as_deref(),
            Some("Legal Citation: RCW 42.56")
        );
    }

    #[test]
    fn test_every_table_has_copy() {
        for table in ReferenceTable::ALL {
            assert!(!table.title().is_empty());
            assert!(!table.description().is_empty());
            assert!(table.empty_prompt().starts_with("Select a state"));
        }
    }

    #[test]
    fn test_table_info_serializes_camel_case() {
        let info = TableInfo::from(ReferenceTable::NoticeRules);
        let json = serde_json::to_value(info).unwrap();
        assert_eq!(json["key"], "notice_rules");
        assert_eq!(json["title"], "Notice Requirements");
        assert_eq!(
            json["emptyPrompt"],
            "Select a state to view its government notice requirements."
        );
    }

    #[test]
    fn test_key_matches_serialized_form() {
        for table in ReferenceTable::ALL {
            let json = serde_json::to_string(&table).unwrap();
            assert_eq!(json, format!("\"{}\"", table.key()));
        }
    }
}
