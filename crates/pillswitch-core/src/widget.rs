//! Widget trait and related types.
//!
//! Widgets follow a measure-layout-paint cycle:
//!
//! 1. **Measure**: Compute intrinsic size given constraints
//! 2. **Layout**: Store the bounds allocated by the host
//! 3. **Paint**: Generate draw calls against a [`Canvas`]
//!
//! Input arrives through [`Widget::event`], which may return a message for
//! the host to route.
//!
//! # Examples
//!
//! ```
//! use pillswitch_core::{TextStyle, TypeId};
//!
//! let style = TextStyle::default();
//! assert_eq!(style.size, 16.0);
//! assert_ne!(TypeId::of::<String>(), TypeId::of::<i32>());
//! ```

use crate::constraints::Constraints;
use crate::draw::{BoxStyle, StrokeStyle, Transform2D};
use crate::event::Event;
use crate::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Type identifier for widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait that all UI elements implement.
pub trait Widget: Send + Sync {
    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Compute intrinsic size constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Position self within allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Generate draw calls for rendering.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle input events.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Check if this widget is interactive (can receive events).
    fn is_interactive(&self) -> bool {
        false
    }

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rasterizing backend, which owns
/// antialiasing and the actual pixel work.
pub trait Canvas {
    /// Draw a rectangle.
    fn draw_rect(&mut self, rect: Rect, style: &BoxStyle);

    /// Draw an ellipse inscribed in `bounds`.
    fn draw_ellipse(&mut self, bounds: Rect, style: &BoxStyle);

    /// Draw an arc closed by its chord.
    fn draw_chord(&mut self, bounds: Rect, start_angle: f32, span_angle: f32, style: &BoxStyle);

    /// Draw an open arc outline.
    fn draw_arc(&mut self, bounds: Rect, start_angle: f32, span_angle: f32, style: &StrokeStyle);

    /// Draw a line between two points.
    fn draw_line(&mut self, from: Point, to: Point, style: &StrokeStyle);

    /// Draw text.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Push a transform.
    fn push_transform(&mut self, transform: Transform2D);

    /// Pop the transform.
    fn pop_transform(&mut self);

    /// Push an opacity layer composited over everything drawn until the pop.
    fn push_opacity(&mut self, alpha: f32);

    /// Pop the opacity layer.
    fn pop_opacity(&mut self);
}

/// Text style for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: crate::Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: crate::Color::BLACK,
        }
    }
}
