//! Decides which `VisualConfig` is active for a pointer position.

use super::config::{SelectorRuleSet, VisualConfig};

/// An element reported by the host's hit-test at the pointer position.
pub trait HitElement {
    fn matches(&self, selector: &str) -> bool;
}

/// Which configuration won, without cloning it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Index into the selector rule set.
    Selector(usize),
    MouseDown,
    Default,
}

impl Resolution {
    pub fn is_selector(self) -> bool {
        matches!(self, Resolution::Selector(_))
    }
}

/// Walk the hit elements topmost-first; the first element with any matching
/// rule wins. Without a match, a held button selects the mouse-down config.
pub fn resolve<E: HitElement>(
    rules: &SelectorRuleSet,
    hits: &[E],
    button_down: bool,
) -> Resolution {
    for el in hits {
        if let Some(index) = rules.iter().position(|r| el.matches(&r.selector)) {
            return Resolution::Selector(index);
        }
    }
    if button_down {
        Resolution::MouseDown
    } else {
        Resolution::Default
    }
}

/// Look up the config a resolution refers to.
pub fn config_for<'a>(
    resolution: Resolution,
    rules: &'a SelectorRuleSet,
    default: &'a VisualConfig,
    mouse_down: &'a VisualConfig,
) -> &'a VisualConfig {
    match resolution {
        Resolution::Selector(i) => rules.get(i).map(|r| &r.config).unwrap_or(default),
        Resolution::MouseDown => mouse_down,
        Resolution::Default => default,
    }
}
