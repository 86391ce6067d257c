use super::EventListener;
use crate::core::{OrthoCamera, PointerState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

pub type PointerListener = EventListener<dyn FnMut(web::PointerEvent)>;

/// Intercept pointer moves on `root` and keep `pointer` in normalized device
/// coordinates of the current surface size, with a fresh picking ray.
pub fn connect(
    root: &web::Element,
    camera: Rc<RefCell<OrthoCamera>>,
    pointer: Rc<RefCell<PointerState>>,
) -> anyhow::Result<PointerListener> {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let cam = camera.borrow();
        pointer
            .borrow_mut()
            .compute(ev.client_x() as f32, ev.client_y() as f32, &cam);
    }) as Box<dyn FnMut(_)>);
    EventListener::register(root, "pointermove", closure)
}
