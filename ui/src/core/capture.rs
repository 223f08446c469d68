//! Client-side capture of the score region.
//!
//! The browser has no direct "element to bitmap" call, so the capture runs
//! the blob → image → canvas pipeline: serialize the live element into an
//! SVG `foreignObject`, decode that through an `HtmlImageElement`, and draw
//! it onto a fresh canvas. The caller decides what to do with the canvas;
//! the share flow attaches it to the document body.

/// Wraps already-serialized markup in an SVG document sized to the source
/// element's client box. `foreignObject` makes the browser lay the subtree
/// out again when the image decodes.
pub fn snapshot_svg(width: u32, height: u32, markup: &str) -> String {
    format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{width}' height='{height}' viewBox='0 0 {width} {height}'>\n  <foreignObject width='100%' height='100%'>\n    <div xmlns='http://www.w3.org/1999/xhtml'>{markup}</div>\n  </foreignObject>\n</svg>"
    )
}

/// Rasterizes the element with the given id and appends the resulting canvas
/// to the document body.
///
/// Cross-origin content (avatar images) may taint the canvas; that is fine
/// here since the canvas is only attached to the page, never read back.
#[cfg(target_arch = "wasm32")]
pub async fn append_capture(id: &str) -> Result<(), String> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{
        Blob, BlobPropertyBag, CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, Url,
    };

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("document unavailable")?;
    let target = document
        .get_element_by_id(id)
        .ok_or("capture region missing")?;

    let width = target.client_width().max(1) as u32;
    let height = target.client_height().max(1) as u32;
    let svg_markup = snapshot_svg(width, height, &target.outer_html());

    let mut opts = BlobPropertyBag::new();
    opts.type_("image/svg+xml");
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(&svg_markup));
    let blob = Blob::new_with_str_sequence_and_options(&parts, &opts)
        .map_err(|_| "Unable to build SVG blob".to_string())?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Unable to create capture URL".to_string())?;

    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|_| "Unable to create canvas")?
        .dyn_into()
        .map_err(|_| "Canvas cast failed")?;
    canvas.set_width(width);
    canvas.set_height(height);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|_| "Canvas context unavailable")?
        .ok_or("Canvas context missing")?
        .dyn_into()
        .map_err(|_| "Context cast failed")?;

    let image = HtmlImageElement::new().map_err(|_| "Unable to create image")?;
    let decode = image.decode();
    image.set_src(&url);
    JsFuture::from(decode)
        .await
        .map_err(|_| "Image decode failed")?;

    context
        .draw_image_with_html_image_element(&image, 0.0, 0.0)
        .map_err(|_| "Unable to draw capture")?;
    Url::revoke_object_url(&url).ok();

    document
        .body()
        .ok_or("missing body")?
        .append_child(&canvas)
        .map_err(|_| "Unable to attach capture")?;

    Ok(())
}
