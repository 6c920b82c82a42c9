//! Browser download of generated reports.

use js_sys::Array;
use log::info;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlElement, Url};
use wheel_offset::report::ReportFormat;
use wheel_offset::{InputSet, Mode, ResultSet};

/// Render the report and hand it to the browser as a file download.
pub fn download_report(
    format: ReportFormat,
    inputs: &InputSet,
    results: &ResultSet,
    mode: Mode,
) -> Result<(), JsValue> {
    let body = format
        .render(inputs, results, mode)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let file_name = format.file_name(mode);
    save_text_as_file(&file_name, &body, format.mime_type())?;
    info!("Exported {} ({} bytes)", file_name, body.len());
    Ok(())
}

fn save_text_as_file(file_name: &str, text: &str, mime_type: &str) -> Result<(), JsValue> {
    let document = gloo_utils::document();
    let parts = Array::new();
    parts.push(&JsValue::from_str(text));

    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor = document.create_element("a")?.dyn_into::<HtmlElement>()?;
    anchor.set_attribute("href", &url)?;
    anchor.set_attribute("download", file_name)?;
    anchor.click();
    Url::revoke_object_url(&url)
}
