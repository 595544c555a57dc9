//! Canvas implementations for rendering.

use crate::draw::{BoxStyle, DrawCommand, StrokeStyle, Transform2D};
use crate::widget::{Canvas, TextStyle};
use crate::{Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq)]
enum LayerKind {
    Transform(Transform2D),
    Opacity(f32),
}

#[derive(Debug)]
struct Layer {
    kind: LayerKind,
    commands: Vec<DrawCommand>,
}

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// Transforms and opacity layers are recorded as nested
/// [`DrawCommand::Group`] / [`DrawCommand::Opacity`] commands once popped.
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (hand commands to a rasterizer)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    layers: Vec<Layer>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded top-level draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Get the number of recorded top-level commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of layers pushed but not yet popped.
    #[must_use]
    pub fn layer_depth(&self) -> usize {
        self.layers.len()
    }

    /// Add a raw draw command to the innermost open layer.
    pub fn add_command(&mut self, command: DrawCommand) {
        match self.layers.last_mut() {
            Some(layer) => layer.commands.push(command),
            None => self.commands.push(command),
        }
    }

    fn pop_layer(&mut self, matches: impl Fn(&LayerKind) -> bool) {
        if !self.layers.last().is_some_and(|layer| matches(&layer.kind)) {
            return;
        }
        let Some(layer) = self.layers.pop() else {
            return;
        };
        let wrapped = match layer.kind {
            LayerKind::Transform(transform) => DrawCommand::Group {
                children: layer.commands,
                transform,
            },
            LayerKind::Opacity(alpha) => DrawCommand::Opacity {
                alpha,
                child: Box::new(DrawCommand::Group {
                    children: layer.commands,
                    transform: Transform2D::identity(),
                }),
            },
        };
        self.add_command(wrapped);
    }
}

impl Canvas for RecordingCanvas {
    fn draw_rect(&mut self, rect: Rect, style: &BoxStyle) {
        self.add_command(DrawCommand::Rect {
            bounds: rect,
            style: style.clone(),
        });
    }

    fn draw_ellipse(&mut self, bounds: Rect, style: &BoxStyle) {
        self.add_command(DrawCommand::Ellipse {
            bounds,
            style: style.clone(),
        });
    }

    fn draw_chord(&mut self, bounds: Rect, start_angle: f32, span_angle: f32, style: &BoxStyle) {
        self.add_command(DrawCommand::Chord {
            bounds,
            start_angle,
            span_angle,
            style: style.clone(),
        });
    }

    fn draw_arc(&mut self, bounds: Rect, start_angle: f32, span_angle: f32, style: &StrokeStyle) {
        self.add_command(DrawCommand::Arc {
            bounds,
            start_angle,
            span_angle,
            style: style.clone(),
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, style: &StrokeStyle) {
        self.add_command(DrawCommand::line(from, to, style.clone()));
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.add_command(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
        });
    }

    fn push_transform(&mut self, transform: Transform2D) {
        self.layers.push(Layer {
            kind: LayerKind::Transform(transform),
            commands: Vec::new(),
        });
    }

    fn pop_transform(&mut self) {
        self.pop_layer(|kind| matches!(kind, LayerKind::Transform(_)));
    }

    fn push_opacity(&mut self, alpha: f32) {
        self.layers.push(Layer {
            kind: LayerKind::Opacity(alpha.clamp(0.0, 1.0)),
            commands: Vec::new(),
        });
    }

    fn pop_opacity(&mut self) {
        self.pop_layer(|kind| matches!(kind, LayerKind::Opacity(_)));
    }
}
