//! Browser tests, run with `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use legal_toolkit_core::{SnapshotStore, ToolkitConfig};
use legal_toolkit_wasm::storage::LocalStorageStore;
use legal_toolkit_wasm::LegalToolkit;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn config(key: &str) -> JsValue {
    let config = ToolkitConfig {
        storage_key: key.to_string(),
        date_locale: Some("en-US".to_string()),
        ..ToolkitConfig::default()
    };
    serde_wasm_bindgen::to_value(&config).unwrap()
}

fn clear(key: &str) {
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.remove_item(key).unwrap();
}

#[wasm_bindgen_test]
fn local_storage_round_trip() {
    clear("ltp-test-store");
    let mut store = LocalStorageStore::new("ltp-test-store");
    assert_eq!(store.load(), None);
    store.save(r#"{"agency":"EPA"}"#).unwrap();
    assert_eq!(store.load().as_deref(), Some(r#"{"agency":"EPA"}"#));
}

#[wasm_bindgen_test]
fn toolkit_persists_fields_but_not_output() {
    clear("ltp-test-session");
    let mut toolkit = LegalToolkit::new(config("ltp-test-session")).unwrap();
    toolkit.set_field("documentType", "Notice of Claim").unwrap();
    toolkit.set_field("recipient", "City of Springfield").unwrap();
    let text = toolkit.generate();
    assert!(text.starts_with("NOTICE OF CLAIM"));
    assert!(text.contains("To: City of Springfield"));

    let reopened = LegalToolkit::new(config("ltp-test-session")).unwrap();
    assert_eq!(reopened.generated(), "");
    let saved = LocalStorageStore::new("ltp-test-session").load().unwrap();
    assert!(saved.contains("City of Springfield"));
    assert!(!saved.contains("NOTICE OF CLAIM"));
}

#[wasm_bindgen_test]
fn toolkit_rejects_unknown_field() {
    clear("ltp-test-fields");
    let mut toolkit = LegalToolkit::new(config("ltp-test-fields")).unwrap();
    assert!(toolkit.set_field("favoriteColor", "green").is_err());
    assert!(toolkit.set_field("selectedState", "Atlantis").is_err());
    assert!(toolkit.set_field("selectedState", "").is_ok());
}

#[wasm_bindgen_test]
fn corrupt_snapshot_falls_back_to_defaults() {
    clear("ltp-test-corrupt");
    LocalStorageStore::new("ltp-test-corrupt")
        .save("{not json")
        .unwrap();
    let toolkit = LegalToolkit::new(config("ltp-test-corrupt")).unwrap();
    assert_eq!(toolkit.card_text().lines().next(), Some("RIGHT TO REMAIN SILENT"));
    assert_eq!(toolkit.generated(), "");
}

#[wasm_bindgen_test]
fn date_stamp_ends_generated_text() {
    clear("ltp-test-date");
    let mut toolkit = LegalToolkit::new(config("ltp-test-date")).unwrap();
    let text = toolkit.generate();
    let last = text.lines().last().unwrap();
    assert!(last.starts_with("Date: "));
    assert!(last.len() > "Date: ".len());
}
