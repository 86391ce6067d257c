use crate::core::section::CONTAINER_CLASS;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Window inner size in CSS pixels.
pub fn window_inner_size(window: &web::Window) -> (u32, u32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w.max(0.0) as u32, h.max(0.0) as u32)
}

/// Resize the canvas backing store to `width x height` CSS pixels at the device pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, width: u32, height: u32) {
    let dpr = web::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0);
    canvas.set_width(((width as f64 * dpr) as u32).max(1));
    canvas.set_height(((height as f64 * dpr) as u32).max(1));
}

/// Find the drawing surface, creating and appending it to `parent` when absent.
pub fn ensure_canvas(
    document: &web::Document,
    parent: &web::Element,
    id: &str,
    style: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    if let Some(el) = document.get_element_by_id(id) {
        return el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", id, e));
    }
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_id(id);
    _ = canvas.style().set_css_text(style);
    parent
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

/// Move the children of `element` into `<section class><div class="container">`.
pub fn wrap_in_section(
    document: &web::Document,
    element: &web::Element,
    class_name: Option<&str>,
) -> anyhow::Result<web::Element> {
    let err = |e: wasm_bindgen::JsValue| anyhow::anyhow!("{:?}", e);
    let section = document.create_element("section").map_err(err)?;
    if let Some(class) = class_name.filter(|c| !c.is_empty()) {
        section.set_class_name(class);
    }
    let container = document.create_element("div").map_err(err)?;
    container.set_class_name(CONTAINER_CLASS);
    while let Some(child) = element.first_child() {
        container.append_child(&child).map_err(err)?;
    }
    section.append_child(&container).map_err(err)?;
    element.append_child(&section).map_err(err)?;
    Ok(section)
}
