//! Hands a downloaded report to the browser as a file download.

use invoiceblaze_workflow::{ApiError, ApiResult, Artifact, XLSX_MEDIA_TYPE};
use js_sys::{Array, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

fn save_error(context: &'static str) -> impl Fn(JsValue) -> ApiError {
    move |e| ApiError::Save(format!("{}: {:?}", context, e))
}

/// Trigger a browser download of `artifact` under its file name.
///
/// Goes through a temporary object URL on a hidden anchor, revoked once
/// the click was dispatched.
pub fn save_artifact(artifact: &Artifact) -> ApiResult<()> {
    let parts = Array::new();
    parts.push(&Uint8Array::from(artifact.bytes.as_slice()));

    let options = BlobPropertyBag::new();
    options.set_type(XLSX_MEDIA_TYPE);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(save_error("Failed to create Blob"))?;

    let url = Url::create_object_url_with_blob(&blob).map_err(save_error("Failed to create object URL"))?;

    let anchor: HtmlAnchorElement = gloo_utils::document()
        .create_element("a")
        .map_err(save_error("Failed to create link"))?
        .dyn_into()
        .map_err(|_| ApiError::Save("Created element is not a link".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(&artifact.file_name);

    let body = gloo_utils::body();
    let clicked = body
        .append_child(&anchor)
        .map(|_| anchor.click())
        .map_err(save_error("Failed to attach link"));
    anchor.remove();
    let _ = Url::revoke_object_url(&url);
    clicked?;

    log::info!("📥 Saved {} ({} bytes)", artifact.file_name, artifact.bytes.len());
    Ok(())
}
