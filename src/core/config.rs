//! Cursor configuration model.
//!
//! The host hands over a loosely-typed options object (`CursorOptions`) whose
//! sections are all partial. `CursorOptions::resolve` merges every partial over
//! the documented defaults and validates the numbers, yielding the immutable
//! `CursorConfig` the controller animates toward.

use super::constants::*;
use super::error::{CursorError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// CSS colour value, passed through to the canvas `fillStyle` untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub String);

impl Color {
    pub fn new(css: impl Into<String>) -> Self {
        Self(css.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self(DEFAULT_COLOR.to_string())
    }
}

/// Fully specified look of the cursor and its trail.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualConfig {
    pub size: f64,
    pub color: Color,
    pub trail_speed: f64,
    pub trail_size: f64,
    pub trail_color: Color,
    pub image: Option<String>,
    pub blend_disabled: bool,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            color: Color::default(),
            trail_speed: DEFAULT_TRAIL_SPEED,
            trail_size: DEFAULT_TRAIL_SIZE,
            trail_color: Color::default(),
            image: None,
            blend_disabled: false,
        }
    }
}

/// A config section as written by the user; anything missing falls back to a base.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PartialConfig {
    pub size: Option<f64>,
    #[serde(alias = "colour")]
    pub color: Option<Color>,
    #[serde(alias = "trailSpeed")]
    pub trail_speed: Option<f64>,
    #[serde(alias = "trailSize")]
    pub trail_size: Option<f64>,
    #[serde(alias = "trail_colour", alias = "trailColor")]
    pub trail_color: Option<Color>,
    pub image: Option<String>,
    #[serde(alias = "blendDisabled")]
    pub blend_disabled: Option<bool>,
}

impl PartialConfig {
    pub fn merge_over(&self, base: &VisualConfig) -> VisualConfig {
        VisualConfig {
            size: self.size.unwrap_or(base.size),
            color: self.color.clone().unwrap_or_else(|| base.color.clone()),
            trail_speed: self.trail_speed.unwrap_or(base.trail_speed),
            trail_size: self.trail_size.unwrap_or(base.trail_size),
            trail_color: self
                .trail_color
                .clone()
                .unwrap_or_else(|| base.trail_color.clone()),
            image: self.image.clone().or_else(|| base.image.clone()),
            blend_disabled: self.blend_disabled.unwrap_or(base.blend_disabled),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectorRule {
    pub selector: String,
    pub config: VisualConfig,
}

/// Selector overrides, checked in order against each hit-tested element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectorRuleSet {
    rules: Vec<SelectorRule>,
}

impl SelectorRuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, selector: impl Into<String>, config: VisualConfig) {
        self.rules.push(SelectorRule {
            selector: selector.into(),
            config,
        });
    }

    pub fn get(&self, index: usize) -> Option<&SelectorRule> {
        self.rules.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectorRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Per-field damping rates (λ, per millisecond).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Damping {
    pub cursor_radius: f64,
    pub trail_radius: f64,
    /// Multiplied by the active `trail_speed` before use.
    pub trail_position: f64,
}

impl Default for Damping {
    fn default() -> Self {
        Self {
            cursor_radius: CURSOR_RADIUS_LAMBDA,
            trail_radius: TRAIL_RADIUS_LAMBDA,
            trail_position: TRAIL_POSITION_LAMBDA,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DampingOptions {
    #[serde(alias = "cursorRadius")]
    pub cursor_radius: Option<f64>,
    #[serde(alias = "trailRadius")]
    pub trail_radius: Option<f64>,
    #[serde(alias = "trailPosition")]
    pub trail_position: Option<f64>,
}

/// The initialization options object, straight from the host.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CursorOptions {
    pub cursor: PartialConfig,
    #[serde(alias = "mouseDown")]
    pub mouse_down: PartialConfig,
    pub selector: BTreeMap<String, PartialConfig>,
    pub damping: DampingOptions,
}

impl CursorOptions {
    /// Parse options from JSON. Blank input, `null` and `undefined` mean "all defaults".
    pub fn from_json(json: &str) -> Result<Self> {
        match json.trim() {
            "" | "null" | "undefined" => Ok(Self::default()),
            s => Ok(serde_json::from_str(s)?),
        }
    }

    pub fn resolve(&self) -> Result<CursorConfig> {
        let defaults = VisualConfig::default();
        let cursor = validated("cursor", self.cursor.merge_over(&defaults))?;
        let mouse_down = validated("mouse_down", self.mouse_down.merge_over(&defaults))?;

        let mut selector = SelectorRuleSet::new();
        for (sel, partial) in &self.selector {
            let config = validated(&format!("selector[{sel}]"), partial.merge_over(&defaults))?;
            selector.push(sel.clone(), config);
        }

        let base = Damping::default();
        let damping = Damping {
            cursor_radius: non_negative(
                "damping.cursor_radius",
                self.damping.cursor_radius.unwrap_or(base.cursor_radius),
            )?,
            trail_radius: non_negative(
                "damping.trail_radius",
                self.damping.trail_radius.unwrap_or(base.trail_radius),
            )?,
            trail_position: non_negative(
                "damping.trail_position",
                self.damping.trail_position.unwrap_or(base.trail_position),
            )?,
        };

        Ok(CursorConfig {
            cursor,
            mouse_down,
            selector,
            damping,
        })
    }
}

/// Resolved, validated configuration owned by a controller.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CursorConfig {
    pub cursor: VisualConfig,
    pub mouse_down: VisualConfig,
    pub selector: SelectorRuleSet,
    pub damping: Damping,
}

fn validated(section: &str, config: VisualConfig) -> Result<VisualConfig> {
    non_negative(&format!("{section}.size"), config.size)?;
    non_negative(&format!("{section}.trail_speed"), config.trail_speed)?;
    non_negative(&format!("{section}.trail_size"), config.trail_size)?;
    Ok(config)
}

fn non_negative(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CursorError::InvalidValue {
            field: field.to_string(),
            value,
        })
    }
}
