//! Drawing-surface owner: root lifecycle, resize subscription and pointer wiring.

use crate::constants::{CANVAS_ELEMENT_ID, CANVAS_STYLE, ROOT_ELEMENT_ID};
use crate::core::{OrthoCamera, PointerState, SurfaceLifecycle};
use crate::dom;
use crate::events::{pointer, EventListener};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

pub struct Canvas {
    pub element: web::HtmlCanvasElement,
    pub camera: Rc<RefCell<OrthoCamera>>,
    pub pointer: Rc<RefCell<PointerState>>,
    lifecycle: Rc<RefCell<SurfaceLifecycle>>,
    _resize: EventListener<dyn FnMut()>,
    _pointer: pointer::PointerListener,
}

impl Canvas {
    /// Mount the surface inside `#root`. The rendering root is created on the
    /// first mount only; later mounts re-render into the existing root.
    pub fn mount(
        window: &web::Window,
        document: &web::Document,
        lifecycle: Rc<RefCell<SurfaceLifecycle>>,
    ) -> anyhow::Result<Self> {
        let root = document
            .get_element_by_id(ROOT_ELEMENT_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", ROOT_ELEMENT_ID))?;
        let element = dom::ensure_canvas(document, &root, CANVAS_ELEMENT_ID, CANVAS_STYLE)?;

        let (width, height) = dom::window_inner_size(window);
        let created = lifecycle.borrow_mut().mount(width, height)?;
        if created {
            log::info!("[canvas] root created {}x{}", width, height);
        } else {
            log::info!("[canvas] remounted into existing root");
        }
        dom::sync_canvas_backing_size(&element, width, height);

        let camera = Rc::new(RefCell::new(OrthoCamera::new(width as f32, height as f32)));
        let pointer_state = Rc::new(RefCell::new(PointerState::default()));
        let pointer_listener = pointer::connect(&root, camera.clone(), pointer_state.clone())?;

        let resize = {
            let lifecycle = lifecycle.clone();
            let camera = camera.clone();
            let canvas = element.clone();
            let closure = Closure::wrap(Box::new(move || {
                let Some(window) = web::window() else {
                    return;
                };
                let (w, h) = dom::window_inner_size(&window);
                if let Some(size) = lifecycle.borrow_mut().resize(w, h) {
                    dom::sync_canvas_backing_size(&canvas, size.width, size.height);
                    camera
                        .borrow_mut()
                        .set_size(size.width as f32, size.height as f32);
                }
            }) as Box<dyn FnMut()>);
            EventListener::register(window, "resize", closure)?
        };

        Ok(Self {
            element,
            camera,
            pointer: pointer_state,
            lifecycle,
            _resize: resize,
            _pointer: pointer_listener,
        })
    }
}

impl Drop for Canvas {
    fn drop(&mut self) {
        // The root itself stays alive for the page; only updates stop.
        self.lifecycle.borrow_mut().unmount();
        log::info!("[canvas] unmounted");
    }
}
