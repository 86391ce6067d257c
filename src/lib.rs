#![cfg(target_arch = "wasm32")]
use crate::core::{EffectChain, Experience, SurfaceLifecycle, LAYERS};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;

thread_local! {
    // One rendering root per page; survives canvas remounts.
    static LIFECYCLE: Rc<RefCell<SurfaceLifecycle>> = Rc::new(RefCell::new(SurfaceLifecycle::new()));
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("parallax-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let lifecycle = LIFECYCLE.with(|l| l.clone());
    let canvas = canvas::Canvas::mount(&window, &document, lifecycle)?;
    let viewport = canvas.camera.borrow().viewport();
    let experience = Experience::new(viewport)?;

    // Textures resolve before any GPU object that samples them is built
    let names: Vec<&str> = LAYERS.iter().map(|spec| spec.texture).collect();
    let images = render::textures::fetch_all(&window, constants::ASSET_BASE, &names).await?;

    let gpu = frame::init_gpu(&canvas.element, &experience, &images, EffectChain::scene_default())
        .await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        experience,
        gpu,
        canvas,
        last_instant: Instant::now(),
        viewport,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

/// Markup for `children` wrapped in a section and a centered container.
#[wasm_bindgen(js_name = "sectionMarkup")]
pub fn section_markup(children: &str, class_name: Option<String>) -> String {
    crate::core::section::render(children, class_name.as_deref())
}

/// Wrap the current children of `#element_id` in a section/container pair.
#[wasm_bindgen(js_name = "mountSection")]
pub fn mount_section(element_id: &str, class_name: Option<String>) -> Result<(), JsValue> {
    let document =
        dom::window_document().ok_or_else(|| JsValue::from_str("no document available"))?;
    let element = document
        .get_element_by_id(element_id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{}", element_id)))?;
    dom::wrap_in_section(&document, &element, class_name.as_deref())
        .map(|_| ())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
