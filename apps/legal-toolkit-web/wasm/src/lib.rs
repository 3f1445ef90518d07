//! Legal Toolkit - browser bindings
//!
//! Wraps a form [`Session`] persisted to localStorage and exposes document
//! generation, reference lookups, and the export actions to JavaScript.
//!
//! ```js
//! import init, { LegalToolkit } from "./pkg/legal_toolkit_wasm.js";
//! await init();
//! const toolkit = new LegalToolkit({ dateLocale: "en-US" });
//! toolkit.setField("documentType", "Notice of Claim");
//! toolkit.setField("recipient", "City of Springfield");
//! const text = toolkit.generate();
//! toolkit.copyGenerated();
//! ```

use legal_datasets::{Datasets, ReferencePanel, ReferenceTable, StateCode};
use legal_toolkit_core::{
    calendar, compose_tag, rights_card, Action, ClaimType, DateStamp, DocumentType, FieldBundle,
    FieldUpdate, Session, Snapshot, ToolkitConfig, ViolationType,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

pub mod export;
pub mod logging;
pub mod storage;

use storage::LocalStorageStore;

#[wasm_bindgen]
extern "C" {
    /// JS `Date`, bound for the argument-free `toLocaleDateString()`
    #[wasm_bindgen(js_name = Date)]
    type BrowserDate;

    #[wasm_bindgen(constructor, js_class = "Date")]
    fn new() -> BrowserDate;

    #[wasm_bindgen(method, js_class = "Date", js_name = toLocaleDateString)]
    fn to_locale_date_string(this: &BrowserDate) -> String;
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    tracing::info!("Legal Toolkit WASM initialized");
}

/// Selector entry for a state dropdown
#[derive(Serialize)]
struct StateOption {
    code: &'static str,
    name: &'static str,
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_table(name: &str) -> Result<ReferenceTable, JsValue> {
    ReferenceTable::ALL
        .into_iter()
        .find(|table| table.key() == name)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown reference table: {}", name)))
}

/// `""` means no selection; anything else must name a state
fn parse_selection(state: &str) -> Result<Option<StateCode>, JsValue> {
    if state.is_empty() {
        return Ok(None);
    }
    state
        .parse::<StateCode>()
        .map(Some)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The form session as seen from JavaScript
#[wasm_bindgen]
pub struct LegalToolkit {
    session: Session<LocalStorageStore>,
    config: ToolkitConfig,
}

#[wasm_bindgen]
impl LegalToolkit {
    /// Restore the saved form (if any) using an optional config object
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<LegalToolkit, JsValue> {
        let config: ToolkitConfig = if config.is_undefined() || config.is_null() {
            ToolkitConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        let store = LocalStorageStore::new(config.storage_key.clone());
        Ok(Self {
            session: Session::open(store),
            config,
        })
    }

    /// Replace one field by its camelCase key
    #[wasm_bindgen(js_name = setField)]
    pub fn set_field(&mut self, key: &str, value: &str) -> Result<(), JsValue> {
        let update =
            FieldUpdate::from_key_value(key, value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.session.dispatch(Action::Set(update));
        Ok(())
    }

    /// Merge a JSON snapshot over the current form; bad JSON is rejected
    #[wasm_bindgen]
    pub fn hydrate(&mut self, json: &str) -> Result<(), JsValue> {
        let patch = Snapshot::decode(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.session.dispatch(Action::Hydrate(patch));
        Ok(())
    }

    /// Compose the selected document, store it, and return it
    #[wasm_bindgen]
    pub fn generate(&mut self) -> String {
        let date = self.date_stamp();
        self.session.generate(&Datasets, &date).to_string()
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.session.dispatch(Action::Reset);
    }

    #[wasm_bindgen(getter)]
    pub fn generated(&self) -> String {
        self.session.state().generated.clone()
    }

    /// The whole form as a JS object with camelCase keys
    #[wasm_bindgen(getter)]
    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(self.session.state())
    }

    #[wasm_bindgen(getter)]
    pub fn config(&self) -> Result<JsValue, JsValue> {
        to_js(&self.config)
    }

    /// Panel for a reference table (`public_records`, `stop_and_id`,
    /// `cannabis`, `hostile_states`, `notice_rules`) and a state code or `""`
    #[wasm_bindgen(js_name = referencePanel)]
    pub fn reference_panel(&self, table: &str, state: &str) -> Result<JsValue, JsValue> {
        let table = parse_table(table)?;
        let selection = parse_selection(state)?;
        to_js(&ReferencePanel::for_selection(&Datasets, table, selection))
    }

    /// Panel for the currently selected state
    #[wasm_bindgen(js_name = selectedPanel)]
    pub fn selected_panel(&self, table: &str) -> Result<JsValue, JsValue> {
        let table = parse_table(table)?;
        let selection = self.session.state().selected_state;
        to_js(&ReferencePanel::for_selection(&Datasets, table, selection))
    }

    /// Plain text of the rights card for the current name
    #[wasm_bindgen(js_name = cardText)]
    pub fn card_text(&self) -> String {
        rights_card::card_text(&self.session.state().plaintiff_name)
    }

    #[wasm_bindgen(js_name = copyGenerated)]
    pub fn copy_generated(&self) {
        export::copy_text(self.session.state().generated.clone());
    }

    #[wasm_bindgen(js_name = copyCardText)]
    pub fn copy_card_text(&self) {
        export::copy_text(self.card_text());
    }

    #[wasm_bindgen(js_name = downloadGenerated)]
    pub fn download_generated(&self) -> Result<(), JsValue> {
        export::download_text(
            &self.config.document_filename,
            &self.session.state().generated,
        )
    }

    #[wasm_bindgen(js_name = downloadCardPng)]
    pub fn download_card_png(&self, element: HtmlElement) {
        export::download_card_png(element, self.config.card_png_filename.clone());
    }

    #[wasm_bindgen(js_name = downloadCardPdf)]
    pub fn download_card_pdf(&self, element: HtmlElement) {
        export::download_card_pdf(element, self.config.card_pdf_filename.clone());
    }
}

impl LegalToolkit {
    /// Short date in the configured locale, or the browser default
    fn date_stamp(&self) -> DateStamp {
        let rendered = match &self.config.date_locale {
            Some(locale) => String::from(
                js_sys::Date::new_0().to_locale_date_string(locale, &JsValue::UNDEFINED),
            ),
            None => BrowserDate::new().to_locale_date_string(),
        };
        DateStamp::new(rendered)
    }
}

/// Compose a document from a tag and a JSON form, without touching any session
///
/// Unknown tags produce "Document type not recognized.".
#[wasm_bindgen(js_name = composeDocument)]
pub fn compose_document(tag: &str, fields_json: &str, date: &str) -> Result<String, JsValue> {
    let fields: FieldBundle =
        serde_json::from_str(fields_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(compose_tag(tag, &fields, &Datasets, &DateStamp::new(date)))
}

/// States in selector order, as `{ code, name }`
#[wasm_bindgen(js_name = listStates)]
pub fn list_states() -> Result<JsValue, JsValue> {
    let states: Vec<StateOption> = StateCode::ALL
        .iter()
        .map(|state| StateOption {
            code: state.code(),
            name: state.name(),
        })
        .collect();
    to_js(&states)
}

/// States with an entry in `table`
#[wasm_bindgen(js_name = coveredStates)]
pub fn covered_states(table: &str) -> Result<JsValue, JsValue> {
    let table = parse_table(table)?;
    to_js(&Datasets.covered_states(table))
}

/// The nine document tags, in menu order
#[wasm_bindgen(js_name = documentTypes)]
pub fn document_types() -> Vec<String> {
    DocumentType::ALL
        .iter()
        .map(|doc| doc.as_str().to_string())
        .collect()
}

/// Violation selector values
#[wasm_bindgen(js_name = violationTypes)]
pub fn violation_types() -> Vec<String> {
    ViolationType::ALL
        .iter()
        .map(|v| v.as_str().to_string())
        .collect()
}

/// Claim selector values
#[wasm_bindgen(js_name = claimTypes)]
pub fn claim_types() -> Vec<String> {
    ClaimType::ALL.iter().map(|c| c.as_str().to_string()).collect()
}

/// The five reference tables as `{ key, title, description, emptyPrompt }`,
/// for the resources listing
#[wasm_bindgen(js_name = referenceTables)]
pub fn reference_tables() -> Result<JsValue, JsValue> {
    to_js(&Datasets.tables())
}

/// `YYYY-MM-DD` plus `days` weekdays; `None` for an unparseable date
#[wasm_bindgen(js_name = addBusinessDays)]
pub fn add_business_days(start: &str, days: u32) -> Option<String> {
    let start = chrono::NaiveDate::parse_from_str(start, "%Y-%m-%d").ok()?;
    calendar::add_business_days(start, days).map(|date| date.format("%Y-%m-%d").to_string())
}

#[wasm_bindgen(js_name = printPage)]
pub fn print_page() -> Result<(), JsValue> {
    export::print_page()
}

#[wasm_bindgen(js_name = openUrl)]
pub fn open_url(url: &str) -> Result<(), JsValue> {
    export::open_url(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_business_days_iso() {
        // Friday + 1 lands on Monday
        assert_eq!(
            add_business_days("2024-03-08", 1).as_deref(),
            Some("2024-03-11")
        );
        assert_eq!(add_business_days("03/08/2024", 1), None);
    }

    #[test]
    fn test_document_types_in_menu_order() {
        let tags = document_types();
        assert_eq!(tags.len(), 9);
        assert_eq!(tags[0], "FOIA Request");
        assert_eq!(tags[8], "Marijuana Law Lookup");
    }

    #[test]
    fn test_selector_values_round_trip_through_set_field() {
        for value in violation_types() {
            assert!(FieldUpdate::from_key_value("violationType", &value).is_ok());
        }
        for value in claim_types() {
            assert!(FieldUpdate::from_key_value("claimType", &value).is_ok());
        }
        assert_eq!(claim_types(), ["general", "government", "medical"]);
    }

    #[test]
    fn test_reference_tables_listing_keys_resolve() {
        let tables = Datasets.tables();
        assert_eq!(tables.len(), ReferenceTable::ALL.len());
        for info in tables {
            let table = parse_table(info.key).ok().unwrap();
            assert_eq!(info.description, table.description());
        }
    }

    #[test]
    fn test_parse_table_keys() {
        for table in ReferenceTable::ALL {
            assert_eq!(parse_table(table.key()).ok(), Some(table));
        }
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("").ok(), Some(None));
        assert_eq!(parse_selection("wa").ok(), Some(Some(StateCode::WA)));
    }

    #[test]
    fn test_compose_document_unrecognized() {
        let text = compose_document("Lease Agreement", "{}", "1/1/2025").ok();
        assert_eq!(text.as_deref(), Some("Document type not recognized."));
    }
}
