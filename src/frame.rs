use crate::canvas::Canvas;
use crate::constants::MAX_FRAME_DELTA_SEC;
use crate::core::{EffectChain, Experience, Viewport};
use crate::render;
use crate::render::textures::DecodedImage;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub experience: Experience,
    pub gpu: Option<render::GpuState>,
    pub canvas: Canvas,
    pub last_instant: Instant,
    pub viewport: Viewport,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32().min(MAX_FRAME_DELTA_SEC);

        let camera = *self.canvas.camera.borrow();
        let viewport = camera.viewport();
        if viewport != self.viewport {
            self.viewport = viewport;
            self.experience.resize(viewport);
        }

        let pointer = self.canvas.pointer.borrow().ndc;
        self.experience.update(pointer, dt_sec);

        if let Some(g) = &mut self.gpu {
            let w = self.canvas.element.width();
            let h = self.canvas.element.height();
            g.resize_if_needed(w, h);
            match g.render(&self.experience, &camera) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                    g.reconfigure()
                }
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    experience: &Experience,
    images: &[(String, DecodedImage)],
    chain: EffectChain,
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas.clone(), experience, images, chain).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
