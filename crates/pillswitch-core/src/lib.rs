//! Core types and traits for the pillswitch widget toolkit.
//!
//! This crate provides the primitives the toggle switch is built from:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`] with 8-bit and HSV helpers
//! - Layout constraints: [`Constraints`]
//! - Draw commands and the [`Canvas`] abstraction, with [`RecordingCanvas`]
//! - Input [`Event`]s and the [`Widget`] trait
//! - Easing curves and the [`ToggleAnimation`] progress driver

pub mod animation;
mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
pub mod widget;

pub use animation::{Direction, Easing, ToggleAnimation};
pub use canvas::RecordingCanvas;
pub use color::{Color, Hsv};
pub use constraints::Constraints;
pub use draw::{BoxStyle, Brush, DrawCommand, LineCap, LineJoin, StrokeStyle, Transform2D};
pub use event::{Event, MouseButton};
pub use geometry::{Point, Rect, Size};
pub use widget::{Canvas, LayoutResult, TextStyle, TypeId, Widget};
