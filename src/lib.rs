//! Animated canvas cursor overlay: a dot plus a lagging trail ellipse that
//! restyle themselves depending on what is under the pointer.
//!
//! `core` holds the platform-free animation logic and builds on any target.
//! The DOM glue and the JS entry points only exist on `wasm32`.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod images;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
pub use overlay::{init_cursor, init_cursor_with_canvas, CursorOverlay};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cursor-trail loaded");
}
