//! Draw commands for vector rendering.
//!
//! All rendering reduces to these primitives. Angles are in degrees,
//! counter-clockwise, with 0° at three o'clock.

use crate::widget::TextStyle;
use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// Stroke style for outlines and lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f32,
    /// Line cap style
    pub cap: LineCap,
    /// Line join style
    pub join: LineJoin,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
        }
    }
}

impl StrokeStyle {
    /// A solid one-pixel pen with the default caps.
    #[must_use]
    pub fn solid(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// A one-pixel pen with round caps and joins.
    #[must_use]
    pub fn rounded(color: Color) -> Self {
        Self {
            color,
            width: 1.0,
            cap: LineCap::Round,
            join: LineJoin::Round,
        }
    }
}

/// Line cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineCap {
    /// Flat cap at endpoint
    #[default]
    Butt,
    /// Rounded cap
    Round,
}

/// Line join style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineJoin {
    /// Sharp corner
    #[default]
    Miter,
    /// Rounded corner
    Round,
}

/// What a closed shape is filled with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Brush {
    /// A solid color
    Solid(Color),
    /// Whatever the host paints behind the widget
    Background,
}

/// Fill and outline for closed shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Fill (None = no fill)
    pub fill: Option<Brush>,
    /// Stroke style (None = no stroke)
    pub stroke: Option<StrokeStyle>,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            fill: Some(Brush::Solid(Color::WHITE)),
            stroke: None,
        }
    }
}

impl BoxStyle {
    /// Create a box with both a fill and an outline.
    #[must_use]
    pub fn filled_and_stroked(brush: Brush, stroke: StrokeStyle) -> Self {
        Self {
            fill: Some(brush),
            stroke: Some(stroke),
        }
    }

    /// Solid fill color, if any.
    #[must_use]
    pub fn fill_color(&self) -> Option<Color> {
        match self.fill {
            Some(Brush::Solid(color)) => Some(color),
            _ => None,
        }
    }
}

/// 2D transformation matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// Matrix elements [a, b, c, d, e, f]
    /// | a c e |
    /// | b d f |
    /// | 0 0 1 |
    pub matrix: [f32; 6],
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    /// Identity transformation.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        }
    }

    /// Create a translation transform.
    #[must_use]
    pub const fn translate(x: f32, y: f32) -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }
}

/// Drawing primitive - all rendering reduces to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Draw a straight line
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
        /// Stroke style
        style: StrokeStyle,
    },

    /// Draw an axis-aligned rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Box style
        style: BoxStyle,
    },

    /// Draw an ellipse inscribed in `bounds`
    Ellipse {
        /// Bounding box
        bounds: Rect,
        /// Box style
        style: BoxStyle,
    },

    /// Draw an elliptical arc outline
    Arc {
        /// Bounding box of the full ellipse
        bounds: Rect,
        /// Start angle in degrees
        start_angle: f32,
        /// Sweep in degrees
        span_angle: f32,
        /// Stroke style
        style: StrokeStyle,
    },

    /// Draw an arc closed by its chord
    Chord {
        /// Bounding box of the full ellipse
        bounds: Rect,
        /// Start angle in degrees
        start_angle: f32,
        /// Sweep in degrees
        span_angle: f32,
        /// Box style
        style: BoxStyle,
    },

    /// Draw text
    Text {
        /// Text content
        content: String,
        /// Baseline position
        position: Point,
        /// Text style
        style: TextStyle,
    },

    /// Group of commands with transform
    Group {
        /// Child commands
        children: Vec<DrawCommand>,
        /// Transform to apply
        transform: Transform2D,
    },

    /// Apply opacity
    Opacity {
        /// Alpha value (0.0 - 1.0)
        alpha: f32,
        /// Child command
        child: Box<DrawCommand>,
    },
}

impl DrawCommand {
    /// Create a line between two points.
    #[must_use]
    pub fn line(from: Point, to: Point, style: StrokeStyle) -> Self {
        Self::Line { from, to, style }
    }

    /// Number of leaf primitives in this command tree.
    #[must_use]
    pub fn primitive_count(&self) -> usize {
        match self {
            Self::Group { children, .. } => children.iter().map(Self::primitive_count).sum(),
            Self::Opacity { child, .. } => child.primitive_count(),
            _ => 1,
        }
    }
}
