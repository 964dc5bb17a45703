//! Input listener wiring.
//!
//! Every listener is owned by a `Listener` so teardown can remove exactly the
//! function that was registered.

use crate::core::CursorController;
use crate::dom;
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn attach(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", kind, e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }

    pub fn detach(self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

pub struct InputWiring {
    pub controller: Rc<RefCell<CursorController>>,
    pub canvas: web::HtmlCanvasElement,
    pub window: web::Window,
    pub document: web::Document,
}

pub fn wire_input_handlers(w: &InputWiring) -> anyhow::Result<Vec<Listener>> {
    let doc_target: &web::EventTarget = w.document.as_ref();
    let win_target: &web::EventTarget = w.window.as_ref();

    let c = w.controller.clone();
    let pointerdown = Listener::attach(doc_target, "pointerdown", move |_| {
        c.borrow_mut().on_pointer_down();
    })?;

    let c = w.controller.clone();
    let pointerup = Listener::attach(doc_target, "pointerup", move |_| {
        c.borrow_mut().on_pointer_up();
    })?;

    let c = w.controller.clone();
    let document = w.document.clone();
    let mousemove = Listener::attach(win_target, "mousemove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let pos = DVec2::new(ev.client_x() as f64, ev.client_y() as f64);
        let hits = dom::elements_at(&document, pos);
        c.borrow_mut().on_mouse_move(pos, &hits);
    })?;

    let c = w.controller.clone();
    let canvas = w.canvas.clone();
    let resize = Listener::attach(win_target, "resize", move |_| {
        let size = dom::sync_canvas_to_viewport(&canvas);
        c.borrow_mut().on_resize(size.x, size.y);
    })?;

    let c = w.controller.clone();
    let touchstart = Listener::attach(win_target, "touchstart", move |ev| {
        c.borrow_mut().on_touch_start(first_touch(&ev));
    })?;

    let c = w.controller.clone();
    let touchmove = Listener::attach(win_target, "touchmove", move |ev| {
        if let Some(pos) = first_touch(&ev) {
            c.borrow_mut().on_touch_move(pos);
        }
    })?;

    let c = w.controller.clone();
    let touchend = Listener::attach(win_target, "touchend", move |_| {
        c.borrow_mut().on_touch_end();
    })?;

    Ok(vec![
        pointerdown,
        pointerup,
        mousemove,
        resize,
        touchstart,
        touchmove,
        touchend,
    ])
}

fn first_touch(ev: &web::Event) -> Option<DVec2> {
    let touch = ev.dyn_ref::<web::TouchEvent>()?.touches().get(0)?;
    Some(DVec2::new(touch.client_x() as f64, touch.client_y() as f64))
}
