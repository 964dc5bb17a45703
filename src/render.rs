//! Canvas2d painter for the core's draw commands.

use crate::core::{DrawCommand, ImageCache};
use crate::images::BrowserImageLoader;
use std::f64::consts::TAU;
use web_sys as web;

pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
    images: ImageCache<BrowserImageLoader>,
}

impl CanvasPainter {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            images: ImageCache::new(BrowserImageLoader),
        }
    }

    pub fn paint(&mut self, commands: &[DrawCommand]) {
        for cmd in commands {
            if let Err(e) = self.paint_one(cmd) {
                log::error!("[render] {:?} failed: {:?}", cmd, e);
            }
        }
    }

    fn paint_one(&mut self, cmd: &DrawCommand) -> Result<(), wasm_bindgen::JsValue> {
        let ctx = &self.ctx;
        match cmd {
            DrawCommand::Clear { size } => ctx.clear_rect(0.0, 0.0, size.x, size.y),
            DrawCommand::Composite(mode) => ctx.set_global_composite_operation(mode.composite_op())?,
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => {
                ctx.begin_path();
                ctx.arc(center.x, center.y, *radius, 0.0, TAU)?;
                ctx.set_fill_style_str(color.as_str());
                ctx.fill();
                ctx.close_path();
            }
            DrawCommand::Image { src, center, size } => {
                // still loading or failed: nothing this frame
                let Some(el) = self.images.ready(src).and_then(|img| img.element()) else {
                    return Ok(());
                };
                let half = size / 2.0;
                ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    el,
                    center.x - half,
                    center.y - half,
                    *size,
                    *size,
                )?;
            }
            DrawCommand::Ellipse {
                center,
                radius_x,
                radius_y,
                rotation,
                color,
            } => {
                ctx.begin_path();
                ctx.ellipse(center.x, center.y, *radius_x, *radius_y, *rotation, 0.0, TAU)?;
                ctx.set_fill_style_str(color.as_str());
                ctx.fill();
                ctx.close_path();
            }
        }
        Ok(())
    }
}
