//! Browser side effects: clipboard, downloads, printing, and card export
//!
//! The rights card is rasterized by the host page's `htmlToImage` global and
//! wrapped into a PDF by the `jspdf` global (the UMD builds of html-to-image
//! and jsPDF). Async exports are fire-and-forget: failures go to the console
//! and never reach the caller.

use js_sys::{Array, Function, Promise, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, HtmlElement, Url};

const TEXT_MIME: &str = "text/plain;charset=utf-8";

/// Options object passed to `new jsPDF(...)`
///
/// One portrait page sized to the rendered card, in CSS pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PdfPageOptions {
    pub orientation: &'static str,
    pub unit: &'static str,
    pub format: [f64; 2],
}

impl PdfPageOptions {
    pub fn for_element(width: f64, height: f64) -> Self {
        Self {
            orientation: "portrait",
            unit: "px",
            format: [width, height],
        }
    }

    pub fn width(&self) -> f64 {
        self.format[0]
    }

    pub fn height(&self) -> f64 {
        self.format[1]
    }
}

/// Copy `text` to the clipboard in the background
pub fn copy_text(text: String) {
    spawn_local(async move {
        if let Err(err) = write_clipboard(&text).await {
            web_sys::console::error_2(&"Failed to copy to clipboard".into(), &err);
        }
    });
}

async fn write_clipboard(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("No window")?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await?;
    Ok(())
}

/// Save `contents` as a plain-text file
pub fn download_text(filename: &str, contents: &str) -> Result<(), JsValue> {
    let parts = Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type(TEXT_MIME);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;

    let url = Url::create_object_url_with_blob(&blob)?;
    let clicked = click_link(&url, filename);
    Url::revoke_object_url(&url)?;
    clicked
}

pub fn print_page() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("No window")?;
    window.print()
}

/// Open an external reference in a new tab
pub fn open_url(url: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("No window")?;
    window.open_with_url_and_target(url, "_blank")?;
    Ok(())
}

/// Rasterize `element` and download it as a PNG, in the background
pub fn download_card_png(element: HtmlElement, filename: String) {
    spawn_local(async move {
        let result = async {
            let data_url = to_png(&element).await?;
            click_link(&data_url, &filename)
        }
        .await;
        if let Err(err) = result {
            web_sys::console::error_2(&"Failed to download ID card".into(), &err);
        }
    });
}

/// Rasterize `element` onto a single PDF page and save it, in the background
pub fn download_card_pdf(element: HtmlElement, filename: String) {
    spawn_local(async move {
        if let Err(err) = save_pdf(&element, &filename).await {
            web_sys::console::error_2(&"Failed to download ID card as PDF".into(), &err);
        }
    });
}

async fn save_pdf(element: &HtmlElement, filename: &str) -> Result<(), JsValue> {
    let data_url = to_png(element).await?;
    let page = PdfPageOptions::for_element(
        f64::from(element.offset_width()),
        f64::from(element.offset_height()),
    );
    let options = serde_wasm_bindgen::to_value(&page)?;

    let jspdf = host_global("jspdf")?;
    let constructor: Function = method(&jspdf, "jsPDF")?;
    let pdf = Reflect::construct(&constructor, &Array::of1(&options))?;

    let add_image: Function = method(&pdf, "addImage")?;
    let args: Array = [
        JsValue::from_str(&data_url),
        JsValue::from_str("PNG"),
        JsValue::from_f64(0.0),
        JsValue::from_f64(0.0),
        JsValue::from_f64(page.width()),
        JsValue::from_f64(page.height()),
    ]
    .iter()
    .collect();
    Reflect::apply(&add_image, &pdf, &args)?;

    let save: Function = method(&pdf, "save")?;
    save.call1(&pdf, &JsValue::from_str(filename))?;
    Ok(())
}

/// `htmlToImage.toPng(element)`, resolved to a data URL
async fn to_png(element: &HtmlElement) -> Result<String, JsValue> {
    let library = host_global("htmlToImage")?;
    let to_png: Function = method(&library, "toPng")?;
    let promise: Promise = to_png.call1(&library, element)?.dyn_into()?;
    JsFuture::from(promise)
        .await?
        .as_string()
        .ok_or_else(|| "toPng did not return a data URL".into())
}

fn host_global(name: &str) -> Result<JsValue, JsValue> {
    let value = Reflect::get(&js_sys::global(), &JsValue::from_str(name))?;
    if value.is_undefined() {
        return Err(JsValue::from_str(&format!("{} is not loaded", name)));
    }
    Ok(value)
}

fn method(target: &JsValue, name: &str) -> Result<Function, JsValue> {
    Reflect::get(target, &JsValue::from_str(name))?
        .dyn_into::<Function>()
        .map_err(|_| JsValue::from_str(&format!("{} is not a function", name)))
}

/// Click a detached `<a download>` pointing at `href`
fn click_link(href: &str, filename: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document")?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(href);
    anchor.set_download(filename);
    anchor.click();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_options_match_jspdf_shape() {
        let options = PdfPageOptions::for_element(340.0, 214.0);
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "orientation": "portrait",
                "unit": "px",
                "format": [340.0, 214.0]
            })
        );
        assert_eq!(options.width(), 340.0);
        assert_eq!(options.height(), 214.0);
    }
}
