//! Form state and its reducer
//!
//! [`FieldBundle`] holds everything the user has entered or selected.
//! It changes only through [`Action`]s, and every action is accepted: the
//! reducer has no error or terminal state.

use crate::document::{ClaimType, DocumentType, UnknownVariant, ViolationType};
use legal_datasets::StateCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The full form state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldBundle {
    pub document_type: DocumentType,
    pub agency: String,
    #[serde(with = "state_or_empty")]
    pub selected_state: Option<StateCode>,
    pub jurisdiction: String,
    pub incident: String,
    pub recipient: String,
    pub damages: String,
    pub violation_type: ViolationType,
    pub claim_type: ClaimType,
    pub plaintiff_name: String,
    pub defendant_name: String,
    pub case_number: String,
    pub court_name: String,
    /// Reserved; no template reads it
    pub time_limit: String,
    /// Reserved; no template reads it
    pub statute: String,
    /// Output of the last generation
    pub generated: String,
}

/// Free-text fields, addressable by their camelCase key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Agency,
    Jurisdiction,
    Incident,
    Recipient,
    Damages,
    PlaintiffName,
    DefendantName,
    CaseNumber,
    CourtName,
    TimeLimit,
    Statute,
}

impl TextField {
    pub const ALL: [TextField; 11] = [
        TextField::Agency,
        TextField::Jurisdiction,
        TextField::Incident,
        TextField::Recipient,
        TextField::Damages,
        TextField::PlaintiffName,
        TextField::DefendantName,
        TextField::CaseNumber,
        TextField::CourtName,
        TextField::TimeLimit,
        TextField::Statute,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TextField::Agency => "agency",
            TextField::Jurisdiction => "jurisdiction",
            TextField::Incident => "incident",
            TextField::Recipient => "recipient",
            TextField::Damages => "damages",
            TextField::PlaintiffName => "plaintiffName",
            TextField::DefendantName => "defendantName",
            TextField::CaseNumber => "caseNumber",
            TextField::CourtName => "courtName",
            TextField::TimeLimit => "timeLimit",
            TextField::Statute => "statute",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.key() == key)
    }
}

/// A single-field replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    DocumentType(DocumentType),
    SelectedState(Option<StateCode>),
    ViolationType(ViolationType),
    ClaimType(ClaimType),
    Text(TextField, String),
}

/// Rejected string-keyed update from a front end
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error(transparent)]
    InvalidValue(#[from] UnknownVariant),

    #[error(transparent)]
    InvalidState(#[from] legal_datasets::ParseError),
}

impl FieldUpdate {
    /// Build an update from a camelCase key and a raw value
    ///
    /// An empty `selectedState` clears the selection.
    pub fn from_key_value(key: &str, value: &str) -> Result<Self, FieldError> {
        match key {
            "documentType" => Ok(FieldUpdate::DocumentType(value.parse()?)),
            "violationType" => Ok(FieldUpdate::ViolationType(value.parse()?)),
            "claimType" => Ok(FieldUpdate::ClaimType(value.parse()?)),
            "selectedState" if value.is_empty() => Ok(FieldUpdate::SelectedState(None)),
            "selectedState" => Ok(FieldUpdate::SelectedState(Some(value.parse()?))),
            _ => TextField::from_key(key)
                .map(|field| FieldUpdate::Text(field, value.to_string()))
                .ok_or_else(|| FieldError::UnknownField(key.to_string())),
        }
    }
}

/// A partial snapshot merged over the current state
///
/// Keys that are absent, `null`, or hold a value of the wrong shape leave
/// their field untouched; the remaining keys still apply. Unknown keys are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldPatch {
    #[serde(deserialize_with = "lenient::field")]
    pub document_type: Option<DocumentType>,
    #[serde(deserialize_with = "lenient::field")]
    pub agency: Option<String>,
    #[serde(deserialize_with = "state_or_empty::deserialize_patch")]
    pub selected_state: Option<Option<StateCode>>,
    #[serde(deserialize_with = "lenient::field")]
    pub jurisdiction: Option<String>,
    #[serde(deserialize_with = "lenient::field")]
    pub incident: Option<String>,
    #[serde(deserialize_with = "lenient::field")]
    pub recipient: Option<String>,
    #[serde(deserialize_with = "lenient::field")]
    pub damages: Option<String>,
    #[serde(deserialize_with = "lenient::field")]
    pub violation_type: Option<ViolationType>,
    #[serde(deserialize_with = "lenient::field")]
    pub claim_type: Option<ClaimType>,
    #[serde(deserialize_with = "lenient::field")]
    pub plaintiff_name: Option<String>,
    #[serde(deserialize_with = "lenient::field")]
    pub defendant_name: Option<String>,
    #[serde(deserialize_with = "lenient::field")]
    pub case_number: Option<String>,
    #[serde(deserialize_with = "lenient::field")]
    pub court_name: Option<String>,
    #[serde(deserialize_with = "lenient::field")]
    pub time_limit: Option<String>,
    #[serde(deserialize_with = "lenient::field")]
    pub statute: Option<String>,
    #[serde(deserialize_with = "lenient::field")]
    pub generated: Option<String>,
}

/// Reducer actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Set(FieldUpdate),
    Hydrate(FieldPatch),
    Generate(String),
    Reset,
}

impl FieldBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Agency => &self.agency,
            TextField::Jurisdiction => &self.jurisdiction,
            TextField::Incident => &self.incident,
            TextField::Recipient => &self.recipient,
            TextField::Damages => &self.damages,
            TextField::PlaintiffName => &self.plaintiff_name,
            TextField::DefendantName => &self.defendant_name,
            TextField::CaseNumber => &self.case_number,
            TextField::CourtName => &self.court_name,
            TextField::TimeLimit => &self.time_limit,
            TextField::Statute => &self.statute,
        }
    }

    fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Agency => &mut self.agency,
            TextField::Jurisdiction => &mut self.jurisdiction,
            TextField::Incident => &mut self.incident,
            TextField::Recipient => &mut self.recipient,
            TextField::Damages => &mut self.damages,
            TextField::PlaintiffName => &mut self.plaintiff_name,
            TextField::DefendantName => &mut self.defendant_name,
            TextField::CaseNumber => &mut self.case_number,
            TextField::CourtName => &mut self.court_name,
            TextField::TimeLimit => &mut self.time_limit,
            TextField::Statute => &mut self.statute,
        }
    }

    /// Apply one action in place
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Set(update) => self.set(update),
            Action::Hydrate(patch) => self.hydrate(patch),
            Action::Generate(text) => self.generated = text,
            Action::Reset => *self = Self::default(),
        }
    }

    fn set(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::DocumentType(doc) => self.document_type = doc,
            FieldUpdate::SelectedState(state) => self.selected_state = state,
            FieldUpdate::ViolationType(v) => self.violation_type = v,
            FieldUpdate::ClaimType(c) => self.claim_type = c,
            FieldUpdate::Text(field, value) => *self.text_mut(field) = value,
        }
    }

    fn hydrate(&mut self, patch: FieldPatch) {
        fn merge<T>(slot: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *slot = value;
            }
        }

        merge(&mut self.document_type, patch.document_type);
        merge(&mut self.agency, patch.agency);
        merge(&mut self.selected_state, patch.selected_state);
        merge(&mut self.jurisdiction, patch.jurisdiction);
        merge(&mut self.incident, patch.incident);
        merge(&mut self.recipient, patch.recipient);
        merge(&mut self.damages, patch.damages);
        merge(&mut self.violation_type, patch.violation_type);
        merge(&mut self.claim_type, patch.claim_type);
        merge(&mut self.plaintiff_name, patch.plaintiff_name);
        merge(&mut self.defendant_name, patch.defendant_name);
        merge(&mut self.case_number, patch.case_number);
        merge(&mut self.court_name, patch.court_name);
        merge(&mut self.time_limit, patch.time_limit);
        merge(&mut self.statute, patch.statute);
        merge(&mut self.generated, patch.generated);
    }
}

/// Pure reducer: `(state, action) -> state`
pub fn reduce(mut state: FieldBundle, action: Action) -> FieldBundle {
    state.apply(action);
    state
}

/// `selectedState` is stored as a postal code, or `""` when nothing is selected
mod state_or_empty {
    use legal_datasets::StateCode;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<StateCode>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(state) => state.serialize(s),
            None => s.serialize_str(""),
        }
    }

    /// Unrecognized codes read as "no selection"
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<StateCode>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        Ok(raw.as_deref().and_then(StateCode::parse_code))
    }

    /// Strings (including unknown codes) replace the selection; anything else is skipped
    pub fn deserialize_patch<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<Option<StateCode>>, D::Error> {
        match serde_json::Value::deserialize(d)? {
            serde_json::Value::String(code) => Ok(Some(StateCode::parse_code(&code))),
            _ => Ok(None),
        }
    }
}

/// Per-key decoding for [`FieldPatch`]: a value that does not fit is dropped
mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};

    pub fn field<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = serde_json::Value::deserialize(d)?;
        if value.is_null() {
            return Ok(None);
        }
        match serde_json::from_value(value) {
            Ok(parsed) => Ok(Some(parsed)),
            Err(err) => {
                tracing::warn!(%err, "skipping saved field");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> FieldBundle {
        let mut state = FieldBundle::new();
        for field in TextField::ALL {
            state.apply(Action::Set(FieldUpdate::Text(field, format!("{}-value", field.key()))));
        }
        state.apply(Action::Set(FieldUpdate::DocumentType(DocumentType::NoticeOfClaim)));
        state.apply(Action::Set(FieldUpdate::SelectedState(Some(StateCode::OR))));
        state.apply(Action::Set(FieldUpdate::ViolationType(ViolationType::Privacy)));
        state.apply(Action::Set(FieldUpdate::ClaimType(ClaimType::Medical)));
        state.apply(Action::Generate("output".to_string()));
        state
    }

    #[test]
    fn test_defaults_are_empty_strings() {
        let state = FieldBundle::new();
        for field in TextField::ALL {
            assert_eq!(state.text(field), "");
        }
        assert_eq!(state.document_type, DocumentType::FoiaRequest);
        assert_eq!(state.selected_state, None);
        assert_eq!(state.generated, "");
    }

    #[test]
    fn test_set_changes_only_one_field() {
        let before = FieldBundle::new();
        let after = reduce(
            before.clone(),
            Action::Set(FieldUpdate::Text(TextField::Agency, "X".to_string())),
        );
        assert_eq!(after.agency, "X");
        assert_eq!(FieldBundle { agency: String::new(), ..after }, before);
    }

    #[test]
    fn test_reset_restores_defaults() {
        assert_eq!(reduce(filled(), Action::Reset), FieldBundle::default());
    }

    #[test]
    fn test_empty_hydrate_is_noop() {
        let state = filled();
        assert_eq!(reduce(state.clone(), Action::Hydrate(FieldPatch::default())), state);

        let patch: FieldPatch = serde_json::from_str("{}").unwrap();
        assert_eq!(reduce(state.clone(), Action::Hydrate(patch)), state);
    }

    #[test]
    fn test_hydrate_ignores_unknown_and_null_keys() {
        let patch: FieldPatch = serde_json::from_str(
            r#"{"agency": "DOJ", "favoriteColor": "green", "incident": null}"#,
        )
        .unwrap();
        let state = reduce(filled(), Action::Hydrate(patch));
        assert_eq!(state.agency, "DOJ");
        assert_eq!(state.incident, "incident-value");
    }

    #[test]
    fn test_hydrate_selected_state() {
        let patch: FieldPatch = serde_json::from_str(r#"{"selectedState": ""}"#).unwrap();
        assert_eq!(patch.selected_state, Some(None));
        assert_eq!(reduce(filled(), Action::Hydrate(patch)).selected_state, None);

        let patch: FieldPatch = serde_json::from_str(r#"{"selectedState": "MN"}"#).unwrap();
        assert_eq!(
            reduce(FieldBundle::new(), Action::Hydrate(patch)).selected_state,
            Some(StateCode::MN)
        );
    }

    #[test]
    fn test_hydrate_null_selected_state_keeps_selection() {
        let mut state = FieldBundle::new();
        state.apply(Action::Set(FieldUpdate::SelectedState(Some(StateCode::CO))));

        let patch: FieldPatch = serde_json::from_str(r#"{"selectedState": null}"#).unwrap();
        assert_eq!(patch.selected_state, None);
        assert_eq!(reduce(state.clone(), Action::Hydrate(patch)).selected_state, Some(StateCode::CO));

        let patch: FieldPatch = serde_json::from_str(r#"{"selectedState": 12}"#).unwrap();
        assert_eq!(reduce(state, Action::Hydrate(patch)).selected_state, Some(StateCode::CO));
    }

    #[test]
    fn test_patch_skips_only_invalid_keys() {
        let patch: FieldPatch = serde_json::from_str(
            r#"{
                "agency": "EPA",
                "incident": "long narrative",
                "violationType": "stalking",
                "claimType": 7,
                "damages": ["not", "text"],
                "documentType": "Eviction Notice"
            }"#,
        )
        .unwrap();
        assert_eq!(patch.agency.as_deref(), Some("EPA"));
        assert_eq!(patch.incident.as_deref(), Some("long narrative"));
        assert_eq!(patch.violation_type, None);
        assert_eq!(patch.claim_type, None);
        assert_eq!(patch.damages, None);
        assert_eq!(patch.document_type, None);

        let state = reduce(filled(), Action::Hydrate(patch));
        assert_eq!(state.agency, "EPA");
        assert_eq!(state.violation_type, ViolationType::Privacy);
        assert_eq!(state.damages, "damages-value");
        assert_eq!(state.document_type, DocumentType::NoticeOfClaim);
    }

    #[test]
    fn test_generate_only_touches_output() {
        let state = filled();
        let after = reduce(state.clone(), Action::Generate("new".to_string()));
        assert_eq!(after.generated, "new");
        assert_eq!(FieldBundle { generated: "output".to_string(), ..after }, state);
    }

    #[test]
    fn test_from_key_value() {
        assert_eq!(
            FieldUpdate::from_key_value("plaintiffName", "Jane"),
            Ok(FieldUpdate::Text(TextField::PlaintiffName, "Jane".to_string()))
        );
        assert_eq!(
            FieldUpdate::from_key_value("documentType", "Pre-Suit Notice"),
            Ok(FieldUpdate::DocumentType(DocumentType::PreSuitNotice))
        );
        assert_eq!(
            FieldUpdate::from_key_value("selectedState", ""),
            Ok(FieldUpdate::SelectedState(None))
        );
        assert_eq!(
            FieldUpdate::from_key_value("selectedState", "ohio"),
            Ok(FieldUpdate::SelectedState(Some(StateCode::OH)))
        );
        assert!(matches!(
            FieldUpdate::from_key_value("generated", "x"),
            Err(FieldError::UnknownField(_))
        ));
        assert!(matches!(
            FieldUpdate::from_key_value("claimType", "criminal"),
            Err(FieldError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_serialized_keys_are_camel_case() {
        let json = serde_json::to_value(FieldBundle::new()).unwrap();
        assert_eq!(json["documentType"], "FOIA Request");
        assert_eq!(json["selectedState"], "");
        assert_eq!(json["violationType"], "harassment");
        assert_eq!(json["plaintiffName"], "");
    }
}
