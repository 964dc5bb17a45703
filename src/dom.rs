use crate::core::SelectorRuleSet;
use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Viewport size in CSS pixels; zero when there is no window.
pub fn viewport_size() -> DVec2 {
    let Some(w) = web::window() else {
        return DVec2::ZERO;
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    DVec2::new(width, height)
}

/// Match the canvas backing store to the viewport and return the new size.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> DVec2 {
    let size = viewport_size();
    canvas.set_width(size.x as u32);
    canvas.set_height(size.y as u32);
    size
}

pub fn create_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("getContext: {:?}", e))?
        .ok_or(crate::core::CursorError::MissingContext)?;
    ctx.dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| crate::core::CursorError::MissingContext.into())
}

/// Log rules the browser cannot parse; they simply never match.
pub fn warn_invalid_selectors(document: &web::Document, rules: &SelectorRuleSet) {
    for rule in rules.iter() {
        if document.query_selector(&rule.selector).is_err() {
            log::warn!("[cursor] invalid selector {:?} will never match", rule.selector);
        }
    }
}

/// Hit-test element adapter for the resolver.
pub struct DomElement(pub web::Element);

impl crate::core::HitElement for DomElement {
    fn matches(&self, selector: &str) -> bool {
        self.0.matches(selector).unwrap_or(false)
    }
}

/// Elements under the point, topmost first.
pub fn elements_at(document: &web::Document, point: DVec2) -> Vec<DomElement> {
    document
        .elements_from_point(point.x as f32, point.y as f32)
        .iter()
        .filter_map(|v| v.dyn_into::<web::Element>().ok())
        .map(DomElement)
        .collect()
}
