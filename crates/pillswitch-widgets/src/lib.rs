//! Animated toggle switch for the pillswitch widget framework.
//!
//! A [`ToggleSwitch`] has three built-in looks ([`ToggleStyle`]), moves its
//! knob with an eased animation advanced once per frame, and renders through
//! a pure [`render::build`] step into a [`render::RenderPlan`].

pub mod config;
pub mod render;
pub mod style;
pub mod toggle;

pub use config::{AnimationConfig, ConfigError, ToggleConfig};
pub use render::{DisabledOverlay, RenderInput, RenderPlan};
pub use style::{resolve, StyleBundle, StyleColors, StyleError, ToggleStyle};
pub use toggle::{StyleChanged, ToggleSwitch, Toggled};
