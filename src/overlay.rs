//! The `#[wasm_bindgen]` surface: create/attach the overlay canvas, drive it,
//! tear it down.

use crate::constants::{HIDDEN_CURSOR, OVERLAY_BLEND_MODE, OVERLAY_Z_INDEX};
use crate::core::{CursorController, CursorOptions, Schedule};
use crate::dom;
use crate::events::{self, InputWiring, Listener};
use crate::frame::{self, FrameContext};
use crate::render::CanvasPainter;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Hide the native pointer and pin the canvas over the page.
pub fn apply_overlay_style(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<()> {
    let set = |style: &web::CssStyleDeclaration, name: &str, value: &str| {
        style
            .set_property(name, value)
            .map_err(|e| anyhow::anyhow!("set {}: {:?}", name, e))
    };
    if let Some(body) = document.body() {
        set(&body.style(), "cursor", HIDDEN_CURSOR)?;
    }
    let style = canvas.style();
    set(&style, "pointer-events", "none")?;
    set(&style, "position", "fixed")?;
    set(&style, "mix-blend-mode", OVERLAY_BLEND_MODE)?;
    set(&style, "left", "0px")?;
    set(&style, "top", "0px")?;
    set(&style, "z-index", OVERLAY_Z_INDEX)?;
    Ok(())
}

fn options_from_js(config: &JsValue) -> anyhow::Result<CursorOptions> {
    if config.is_undefined() || config.is_null() {
        return Ok(CursorOptions::default());
    }
    let json: String = js_sys::JSON::stringify(config)
        .map_err(|e| anyhow::anyhow!("config is not serialisable: {:?}", e))?
        .into();
    Ok(CursorOptions::from_json(&json)?)
}

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", e))
}

/// A running cursor overlay. Dropping it detaches its listeners.
#[wasm_bindgen]
pub struct CursorOverlay {
    canvas: web::HtmlCanvasElement,
    controller: Rc<RefCell<CursorController>>,
    frame_ctx: Rc<RefCell<FrameContext>>,
    listeners: Vec<Listener>,
    loop_started: bool,
}

#[wasm_bindgen]
impl CursorOverlay {
    /// Kick the animation-frame loop. Further calls are no-ops.
    pub fn start(&mut self) {
        if self.loop_started || !self.controller.borrow().lifecycle().is_active() {
            return;
        }
        self.loop_started = true;
        frame::start_loop(self.frame_ctx.clone());
    }

    /// Draw a single frame at `timestamp` (ms) without scheduling another.
    /// Returns whether the instance is still running.
    #[wasm_bindgen(js_name = renderFrame)]
    pub fn render_frame(&self, timestamp: f64) -> bool {
        self.frame_ctx.borrow_mut().frame(timestamp) == Schedule::Next
    }

    /// Detach all listeners and stop the loop. The canvas stays where it is.
    pub fn deinit(&mut self) {
        for listener in self.listeners.drain(..) {
            listener.detach();
        }
        self.controller.borrow_mut().stop();
    }

    #[wasm_bindgen(getter)]
    pub fn canvas(&self) -> web::HtmlCanvasElement {
        self.canvas.clone()
    }

    #[wasm_bindgen(getter, js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.controller.borrow().lifecycle().is_active()
    }
}

impl Drop for CursorOverlay {
    fn drop(&mut self) {
        self.deinit();
    }
}

fn init_with_canvas(
    canvas: web::HtmlCanvasElement,
    config: &JsValue,
) -> anyhow::Result<CursorOverlay> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = options_from_js(config)?.resolve()?;
    dom::warn_invalid_selectors(&document, &config.selector);
    let rule_count = config.selector.len();

    apply_overlay_style(&document, &canvas)?;
    let viewport = dom::sync_canvas_to_viewport(&canvas);
    let ctx = dom::context_2d(&canvas)?;

    let controller = Rc::new(RefCell::new(CursorController::new(config, viewport)));
    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        controller: controller.clone(),
        painter: CanvasPainter::new(ctx),
    }));
    let listeners = events::wire_input_handlers(&InputWiring {
        controller: controller.clone(),
        canvas: canvas.clone(),
        window,
        document,
    })?;

    log::info!(
        "[cursor] initialised {}x{} with {} selector rules",
        viewport.x,
        viewport.y,
        rule_count
    );
    Ok(CursorOverlay {
        canvas,
        controller,
        frame_ctx,
        listeners,
        loop_started: false,
    })
}

/// Turn an existing canvas into the cursor overlay.
#[wasm_bindgen(js_name = initCursorWithCanvas)]
pub fn init_cursor_with_canvas(
    canvas: web::HtmlCanvasElement,
    config: JsValue,
) -> Result<CursorOverlay, JsValue> {
    init_with_canvas(canvas, &config).map_err(to_js)
}

/// Create an overlay canvas inside `parent`.
#[wasm_bindgen(js_name = initCursor)]
pub fn init_cursor(parent: &web::HtmlElement, config: JsValue) -> Result<CursorOverlay, JsValue> {
    let run = || -> anyhow::Result<CursorOverlay> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let canvas = dom::create_canvas(&document)?;
        let overlay = init_with_canvas(canvas.clone(), &config)?;
        parent
            .append_child(&canvas)
            .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;
        Ok(overlay)
    };
    run().map_err(to_js)
}
