//! The cursor controller: input handlers plus the per-frame step.
//!
//! Handlers mutate `AnimationState` from host events; `render_frame` eases
//! the displayed values toward the active config and returns the draw
//! commands for that frame. Nothing here touches the DOM, so the whole
//! animation can be driven with synthetic hit-test lists and timestamps.

use super::config::{Color, CursorConfig, VisualConfig};
use super::constants::TRAIL_FADE_EPSILON;
use super::damp::{clamp_speed, damp, damp_vec, rotation_axis, trail_speed};
use super::lifecycle::{Lifecycle, Schedule};
use super::resolver::{config_for, resolve, HitElement, Resolution};
use super::state::{AnimationState, Smoothed};
use glam::DVec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
    Difference,
    Normal,
}

impl BlendMode {
    pub fn for_config(config: &VisualConfig) -> Self {
        if config.blend_disabled {
            BlendMode::Normal
        } else {
            BlendMode::Difference
        }
    }

    /// Canvas `globalCompositeOperation` value.
    pub fn composite_op(self) -> &'static str {
        match self {
            BlendMode::Difference => "difference",
            BlendMode::Normal => "source-over",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear {
        size: DVec2,
    },
    Composite(BlendMode),
    Circle {
        center: DVec2,
        radius: f64,
        color: Color,
    },
    /// Image centred on `center`, scaled to a `size` x `size` box.
    Image {
        src: String,
        center: DVec2,
        size: f64,
    },
    Ellipse {
        center: DVec2,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        color: Color,
    },
}

pub type DrawList = SmallVec<[DrawCommand; 4]>;

#[derive(Clone, Debug, PartialEq)]
pub struct FrameOutput {
    pub commands: DrawList,
    pub schedule: Schedule,
}

pub struct CursorController {
    config: CursorConfig,
    state: AnimationState,
    lifecycle: Lifecycle,
}

impl CursorController {
    pub fn new(config: CursorConfig, viewport: DVec2) -> Self {
        let initial = Smoothed {
            cursor_radius: config.cursor.size,
            trail_radius: config.cursor.trail_size,
        };
        Self {
            config,
            state: AnimationState::new(initial, viewport),
            lifecycle: Lifecycle::Active,
        }
    }

    pub fn config(&self) -> &CursorConfig {
        &self.config
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn resolution(&self) -> Resolution {
        self.state.active
    }

    pub fn active_config(&self) -> &VisualConfig {
        config_for(
            self.state.active,
            &self.config.selector,
            &self.config.cursor,
            &self.config.mouse_down,
        )
    }

    pub fn on_pointer_down(&mut self) {
        if !self.lifecycle.is_active() {
            return;
        }
        self.state.button_down = true;
        self.apply(Resolution::MouseDown);
    }

    pub fn on_pointer_up(&mut self) {
        if !self.lifecycle.is_active() {
            return;
        }
        self.state.button_down = false;
        self.apply(Resolution::Default);
    }

    /// Mouse moved to `pos`; `hits` are the elements under it, topmost first.
    pub fn on_mouse_move<E: HitElement>(&mut self, pos: DVec2, hits: &[E]) {
        if !self.lifecycle.is_active() {
            return;
        }
        self.state.pointer = pos;
        if !self.state.has_pointer {
            self.state.trail = pos;
            self.state.has_pointer = true;
        }
        let resolution = resolve(&self.config.selector, hits, self.state.button_down);
        self.apply(resolution);
        self.state.is_touch = false;
    }

    pub fn on_touch_start(&mut self, pos: Option<DVec2>) {
        if !self.lifecycle.is_active() {
            return;
        }
        self.state.is_touch = true;
        if let Some(p) = pos {
            self.jump_to(p);
        }
        self.apply(Resolution::MouseDown);
    }

    /// Touch drags move the trail with the finger, no lag and no re-resolution.
    pub fn on_touch_move(&mut self, pos: DVec2) {
        if !self.lifecycle.is_active() {
            return;
        }
        self.jump_to(pos);
    }

    pub fn on_touch_end(&mut self) {
        if !self.lifecycle.is_active() {
            return;
        }
        self.state.is_touch = false;
        self.apply(Resolution::Default);
    }

    pub fn on_resize(&mut self, width: f64, height: f64) {
        if !self.lifecycle.is_active() {
            return;
        }
        self.state.viewport = DVec2::new(width, height);
    }

    /// Stop the instance. Returns false if it was already stopped.
    pub fn stop(&mut self) -> bool {
        let stopped = self.lifecycle.stop();
        if stopped {
            log::info!("[cursor] stopped");
        }
        stopped
    }

    /// Advance the animation to `timestamp` (ms, monotonic) and emit the frame.
    pub fn render_frame(&mut self, timestamp: f64) -> FrameOutput {
        let dt = (timestamp - self.state.last_timestamp).max(0.0);
        if timestamp.is_finite() {
            self.state.last_timestamp = timestamp;
        }

        let damping = self.config.damping;
        let cfg = config_for(
            self.state.active,
            &self.config.selector,
            &self.config.cursor,
            &self.config.mouse_down,
        );
        let st = &mut self.state;
        let mut commands = DrawList::new();

        commands.push(DrawCommand::Clear { size: st.viewport });
        commands.push(DrawCommand::Composite(BlendMode::for_config(cfg)));

        st.smoothed.cursor_radius =
            damp(st.smoothed.cursor_radius, cfg.size, damping.cursor_radius, dt);
        let radius = st.smoothed.cursor_radius;
        commands.push(match &cfg.image {
            Some(src) => DrawCommand::Image {
                src: src.clone(),
                center: st.pointer,
                size: radius * 2.0,
            },
            None => DrawCommand::Circle {
                center: st.pointer,
                radius,
                color: cfg.color.clone(),
            },
        });

        if cfg.trail_size != 0.0 {
            st.smoothed.trail_radius =
                damp(st.smoothed.trail_radius, cfg.trail_size, damping.trail_radius, dt);
            st.trail = damp_vec(
                st.trail,
                st.pointer,
                damping.trail_position * cfg.trail_speed,
                dt,
            );
            commands.push(trail_ellipse(st, dt, &cfg.trail_color));
        } else {
            // fade out from the previous size instead of popping
            st.smoothed.trail_radius =
                damp(st.smoothed.trail_radius, 0.0, damping.trail_radius, dt);
            if st.smoothed.trail_radius > TRAIL_FADE_EPSILON {
                commands.push(trail_ellipse(st, dt, &cfg.trail_color));
            }
        }

        FrameOutput {
            commands,
            schedule: self.lifecycle.schedule(),
        }
    }

    fn jump_to(&mut self, pos: DVec2) {
        self.state.pointer = pos;
        self.state.trail = pos;
        self.state.has_pointer = true;
    }

    fn apply(&mut self, resolution: Resolution) {
        let matched = resolution.is_selector();
        if self.state.had_match && !matched {
            // leaving a hot element: don't sweep the trail across the page
            self.state.trail = self.state.pointer;
        }
        self.state.had_match = matched;
        if self.state.active != resolution {
            log::debug!("[cursor] active config {:?} -> {:?}", self.state.active, resolution);
            self.state.active = resolution;
        }
    }
}

fn trail_ellipse(st: &AnimationState, dt: f64, color: &Color) -> DrawCommand {
    let rotation = rotation_axis(st.trail, st.pointer);
    let distance = (st.pointer - st.trail).length();
    let speed = clamp_speed(trail_speed(distance, dt));
    let r = st.smoothed.trail_radius;
    DrawCommand::Ellipse {
        center: st.trail,
        radius_x: r / speed,
        radius_y: r * speed,
        rotation: -rotation,
        color: color.clone(),
    }
}
