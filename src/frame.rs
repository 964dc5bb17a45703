use crate::core::{CursorController, Schedule};
use crate::render::CanvasPainter;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub controller: Rc<RefCell<CursorController>>,
    pub painter: CanvasPainter,
}

impl FrameContext {
    pub fn frame(&mut self, timestamp: f64) -> Schedule {
        let out = self.controller.borrow_mut().render_frame(timestamp);
        self.painter.paint(&out.commands);
        out.schedule
    }
}

/// Run one frame per display refresh until the controller reports `Done`.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        match frame_ctx.borrow_mut().frame(timestamp) {
            Schedule::Next => request_frame(&tick_clone),
            Schedule::Done => {
                log::info!("[frame] loop finished");
                // freed once this invocation returns
                drop(tick_clone.borrow_mut().take());
            }
        }
    }) as Box<dyn FnMut(f64)>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
