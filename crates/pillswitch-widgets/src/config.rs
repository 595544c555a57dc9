//! YAML configuration for toggle switches.

use crate::style::{StyleError, ToggleStyle};
use crate::toggle::ToggleSwitch;
use pillswitch_core::{Easing, ToggleAnimation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a switch configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid YAML for this schema.
    #[error("invalid toggle configuration: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// The style name is not a built-in style.
    #[error(transparent)]
    InvalidStyle(#[from] StyleError),

    /// The animation step would never finish a transition.
    #[error("animation step must be finite and positive, got {0}")]
    InvalidStep(f64),
}

/// Animation settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Progress advanced per tick
    pub step: f64,
    /// Knob easing curve
    pub easing: Easing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            step: ToggleAnimation::DEFAULT_STEP,
            easing: Easing::default(),
        }
    }
}

/// Declarative description of a toggle switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    /// Default style name or alias, restored by `reset_style`
    pub style: String,
    /// Initial state
    pub on: bool,
    /// Whether the switch accepts clicks
    pub enabled: bool,
    /// Label drawn right of the track
    pub label: String,
    /// Animation settings
    pub animation: AnimationConfig,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            style: ToggleStyle::default().name().to_string(),
            on: false,
            enabled: true,
            label: String::new(),
            animation: AnimationConfig::default(),
        }
    }
}

impl ToggleConfig {
    /// Parse a configuration from YAML and validate it.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check the style name and animation step.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.parsed_style()?;
        let step = self.animation.step;
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::InvalidStep(step));
        }
        Ok(())
    }

    /// The configured style.
    pub fn parsed_style(&self) -> Result<ToggleStyle, StyleError> {
        self.style.parse()
    }
}

impl ToggleSwitch {
    /// Build a switch from a configuration, validating it first.
    pub fn from_config(config: &ToggleConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let style = config.parsed_style()?;
        log::debug!(
            "building toggle switch from config: style {style}, on {}",
            config.on
        );
        Ok(Self::with_state(config.on)
            .default_style(style)
            .label(config.label.clone())
            .step(config.animation.step)
            .easing(config.animation.easing)
            .enabled(config.enabled))
    }
}
