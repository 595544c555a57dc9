//! Built-in toggle switch styles and the parameters they resolve to.

use pillswitch_core::{Color, Size};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error raised for style identifiers outside the built-in set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// The identifier does not name a built-in style.
    #[error("'{0}' is not a built-in toggle style")]
    InvalidStyle(String),
}

/// The three built-in looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleStyle {
    /// Flat outlined pill with a hollow knob when on (`win10`).
    #[serde(alias = "win10")]
    Fluent,
    /// Filled pill with a large close-fitting knob (`ios`).
    #[default]
    #[serde(alias = "ios")]
    Cupertino,
    /// Thin floating track under an oversized knob (`android`).
    #[serde(alias = "android")]
    Material,
}

impl ToggleStyle {
    /// Every built-in style, in id order.
    pub const ALL: [Self; 3] = [Self::Fluent, Self::Cupertino, Self::Material];

    /// Numeric id (`0`, `1`, `2`).
    #[must_use]
    pub const fn id(self) -> i32 {
        match self {
            Self::Fluent => 0,
            Self::Cupertino => 1,
            Self::Material => 2,
        }
    }

    /// Lowercase canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fluent => "fluent",
            Self::Cupertino => "cupertino",
            Self::Material => "material",
        }
    }

    /// Look up a style by numeric id.
    pub fn from_id(id: i32) -> Result<Self, StyleError> {
        Self::ALL
            .into_iter()
            .find(|style| style.id() == id)
            .ok_or_else(|| StyleError::InvalidStyle(id.to_string()))
    }
}

impl fmt::Display for ToggleStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToggleStyle {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fluent" | "win10" => Ok(Self::Fluent),
            "cupertino" | "ios" => Ok(Self::Cupertino),
            "material" | "android" => Ok(Self::Material),
            _ => Err(StyleError::InvalidStyle(s.to_string())),
        }
    }
}

impl TryFrom<i32> for ToggleStyle {
    type Error = StyleError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        Self::from_id(id)
    }
}

/// The three color roles of a switch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleColors {
    /// Track color while on
    pub on: Color,
    /// Track color while off
    pub off: Color,
    /// Knob color
    pub handle: Color,
}

impl StyleColors {
    /// Every role with its saturation quartered.
    #[must_use]
    pub fn desaturated(&self) -> Self {
        Self {
            on: self.on.desaturate(),
            off: self.off.desaturate(),
            handle: self.handle.desaturate(),
        }
    }

    /// Every role with its saturation quadrupled.
    #[must_use]
    pub fn saturated(&self) -> Self {
        Self {
            on: self.on.saturate(),
            off: self.off.saturate(),
            handle: self.handle.saturate(),
        }
    }
}

/// Visual parameters resolved from a [`ToggleStyle`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleBundle {
    /// Color roles
    pub colors: StyleColors,
    /// Knob shows the host background while on instead of its own color
    pub handle_uses_background_when_on: bool,
    /// Horizontal travel of the knob, in pixels
    pub track_width: u32,
    /// Track height and end-cap diameter, in pixels
    pub track_radius: u32,
}

impl StyleBundle {
    /// Minimum widget size for a label of the given length.
    ///
    /// Width is `track_width + 2 * track_radius + 10 * chars`, height is
    /// `track_radius + 2`.
    #[must_use]
    pub fn min_size(&self, label: &str) -> Size {
        let chars = label.chars().count() as f32;
        Size::new(
            chars.mul_add(10.0, (self.track_width + 2 * self.track_radius) as f32),
            (self.track_radius + 2) as f32,
        )
    }
}

/// Resolve a style to its visual parameters.
#[must_use]
pub fn resolve(style: ToggleStyle) -> StyleBundle {
    match style {
        ToggleStyle::Fluent => StyleBundle {
            colors: StyleColors {
                on: Color::from_rgb8(0, 116, 208),
                off: Color::from_rgb8(0, 0, 0),
                handle: Color::from_rgb8(255, 255, 255),
            },
            handle_uses_background_when_on: true,
            track_width: 35,
            track_radius: 26,
        },
        ToggleStyle::Cupertino => StyleBundle {
            colors: StyleColors {
                on: Color::from_rgb8(73, 208, 96),
                off: Color::from_rgb8(250, 250, 250),
                handle: Color::from_rgb8(255, 255, 255),
            },
            handle_uses_background_when_on: false,
            track_width: 21,
            track_radius: 29,
        },
        ToggleStyle::Material => StyleBundle {
            colors: StyleColors {
                on: Color::from_rgb8(0, 150, 136),
                off: Color::from_rgb8(255, 255, 255),
                handle: Color::from_rgb8(255, 255, 255),
            },
            handle_uses_background_when_on: true,
            track_width: 35,
            track_radius: 26,
        },
    }
}
