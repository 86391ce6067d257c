use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::JsCast;
use web_sys as web;

pub mod pointer;

/// A DOM listener that is removed from its target when dropped.
pub struct EventListener<F: ?Sized + WasmClosure> {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<F>,
}

impl<F: ?Sized + WasmClosure> EventListener<F> {
    pub fn register(
        target: &web::EventTarget,
        event: &'static str,
        closure: Closure<F>,
    ) -> anyhow::Result<Self> {
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl<F: ?Sized + WasmClosure> Drop for EventListener<F> {
    fn drop(&mut self) {
        if self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("[events] failed to remove {} listener", self.event);
        }
    }
}
