//! Turns switch state into the primitives a host draws.
//!
//! [`build`] is pure: the same [`RenderInput`] always yields the same
//! [`RenderPlan`]. Coordinates are local to the widget's top-left corner;
//! the widget translates them to its bounds when painting.

use crate::style::{StyleBundle, StyleColors, ToggleStyle};
use pillswitch_core::{
    BoxStyle, Brush, Canvas, Color, DrawCommand, Point, Rect, StrokeStyle, TextStyle,
};
use serde::{Deserialize, Serialize};

/// Opacity applied to the whole switch while enabled.
pub const ENABLED_OPACITY: f32 = 1.0;

/// Opacity applied to the whole switch while disabled.
pub const DISABLED_OPACITY: f32 = 0.4;

/// Font size of the label text.
pub const LABEL_FONT_SIZE: f32 = 12.0;

/// Colors and opacity substituted while the switch is disabled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisabledOverlay {
    /// Desaturated color roles
    pub colors: StyleColors,
    /// Compositor opacity
    pub opacity: f32,
}

impl DisabledOverlay {
    /// Derive the overlay for a bundle. The bundle itself is left untouched.
    #[must_use]
    pub fn for_bundle(bundle: &StyleBundle) -> Self {
        Self {
            colors: bundle.colors.desaturated(),
            opacity: DISABLED_OPACITY,
        }
    }
}

/// Everything the builder needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    /// Active style
    pub style: ToggleStyle,
    /// Geometry and handle flag for the style
    pub bundle: &'a StyleBundle,
    /// Colors to draw with (the bundle's, or the disabled overlay's)
    pub colors: StyleColors,
    /// Whole-widget opacity
    pub opacity: f32,
    /// Current on/off state
    pub is_on: bool,
    /// Eased handle offset in pixels, `0..=track_width`
    pub offset: f32,
    /// Label drawn right of the track
    pub label: &'a str,
}

impl<'a> RenderInput<'a> {
    /// Input for an enabled or disabled switch, deriving disabled colors on the fly.
    #[must_use]
    pub fn new(
        style: ToggleStyle,
        bundle: &'a StyleBundle,
        is_on: bool,
        offset: f32,
        enabled: bool,
    ) -> Self {
        let input = Self {
            style,
            bundle,
            colors: bundle.colors,
            opacity: ENABLED_OPACITY,
            is_on,
            offset,
            label: "",
        };
        if enabled {
            input
        } else {
            input.with_overlay(&DisabledOverlay::for_bundle(bundle))
        }
    }

    /// Substitute a precomputed disabled overlay.
    #[must_use]
    pub const fn with_overlay(mut self, overlay: &DisabledOverlay) -> Self {
        self.colors = overlay.colors;
        self.opacity = overlay.opacity;
        self
    }

    /// Attach a label.
    #[must_use]
    pub const fn with_label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }
}

/// Ordered primitives plus the opacity the host composites them with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPlan {
    /// Primitives in paint order
    pub commands: Vec<DrawCommand>,
    /// Whole-widget opacity
    pub opacity: f32,
}

impl RenderPlan {
    /// Issue every primitive against a canvas, in order.
    pub fn replay(&self, canvas: &mut dyn Canvas) {
        for command in &self.commands {
            replay_command(command, canvas);
        }
    }

    /// The handle ellipse bounds, if present.
    #[must_use]
    pub fn handle_bounds(&self) -> Option<Rect> {
        self.commands.iter().rev().find_map(|command| match command {
            DrawCommand::Ellipse { bounds, .. } => Some(*bounds),
            _ => None,
        })
    }
}

fn replay_command(command: &DrawCommand, canvas: &mut dyn Canvas) {
    match command {
        DrawCommand::Line { from, to, style } => canvas.draw_line(*from, *to, style),
        DrawCommand::Rect { bounds, style } => canvas.draw_rect(*bounds, style),
        DrawCommand::Ellipse { bounds, style } => canvas.draw_ellipse(*bounds, style),
        DrawCommand::Arc {
            bounds,
            start_angle,
            span_angle,
            style,
        } => canvas.draw_arc(*bounds, *start_angle, *span_angle, style),
        DrawCommand::Chord {
            bounds,
            start_angle,
            span_angle,
            style,
        } => canvas.draw_chord(*bounds, *start_angle, *span_angle, style),
        DrawCommand::Text {
            content,
            position,
            style,
        } => canvas.draw_text(content, *position, style),
        DrawCommand::Group {
            children,
            transform,
        } => {
            canvas.push_transform(*transform);
            for child in children {
                replay_command(child, canvas);
            }
            canvas.pop_transform();
        }
        DrawCommand::Opacity { alpha, child } => {
            canvas.push_opacity(*alpha);
            replay_command(child, canvas);
            canvas.pop_opacity();
        }
    }
}

/// Integer track metrics shared by every recipe.
#[derive(Debug, Clone, Copy)]
struct Track {
    r: f32,
    w: f32,
    half: f32,
    quarter: f32,
}

impl Track {
    fn new(bundle: &StyleBundle) -> Self {
        Self {
            r: bundle.track_radius as f32,
            w: bundle.track_width as f32,
            half: (bundle.track_radius / 2) as f32,
            quarter: (bundle.track_radius / 4) as f32,
        }
    }

    /// Full-height pill: two end chords and the connecting body.
    fn pill(&self, out: &mut Vec<DrawCommand>, style: &BoxStyle) {
        let Self { r, w, half, .. } = *self;
        out.push(chord(Rect::new(r, 1.0, r, r), 90.0, style));
        out.push(chord(Rect::new(r + w, 1.0, r, r), -90.0, style));
        out.push(DrawCommand::Rect {
            bounds: Rect::new(r + half, 1.0, w, r),
            style: style.clone(),
        });
    }

    /// Half-height pill floating in the middle of the track area.
    fn floating_pill(&self, out: &mut Vec<DrawCommand>, style: &BoxStyle) {
        let Self {
            r,
            w,
            half,
            quarter,
        } = *self;
        out.push(chord(Rect::new(r + quarter, 1.0 + quarter, half, half), 90.0, style));
        out.push(chord(
            Rect::new(r + w + quarter, 1.0 + quarter, half, half),
            -90.0,
            style,
        ));
        out.push(DrawCommand::Rect {
            bounds: Rect::new(r + half, 1.0 + quarter, w, half),
            style: style.clone(),
        });
    }

    /// Pill outline only: two end arcs joined by top and bottom lines.
    fn pill_outline(&self, out: &mut Vec<DrawCommand>, pen: &StrokeStyle) {
        let Self { r, w, half, .. } = *self;
        out.push(arc(Rect::new(r, 1.0, r, r), 90.0, pen));
        out.push(arc(Rect::new(r + w, 1.0, r, r), -90.0, pen));
        out.push(DrawCommand::line(
            Point::new(r + half, 1.0),
            Point::new(r + w + half, 1.0),
            pen.clone(),
        ));
        out.push(DrawCommand::line(
            Point::new(r + half, r + 1.0),
            Point::new(r + w + half, r + 1.0),
            pen.clone(),
        ));
    }

    /// Knob inset by `inset` pixels in total, shifted right by `offset`.
    fn inset_handle(&self, inset: f32, offset: f32) -> Rect {
        let r = self.r;
        Rect::new(r + inset / 2.0 + offset, 1.0 + inset / 2.0, r - inset, r - inset)
    }

    /// Knob covering the full track height, shifted right by `offset`.
    fn full_handle(&self, offset: f32) -> Rect {
        Rect::new(self.r + offset, 1.0, self.r, self.r)
    }
}

fn chord(bounds: Rect, start_angle: f32, style: &BoxStyle) -> DrawCommand {
    DrawCommand::Chord {
        bounds,
        start_angle,
        span_angle: 180.0,
        style: style.clone(),
    }
}

fn arc(bounds: Rect, start_angle: f32, pen: &StrokeStyle) -> DrawCommand {
    DrawCommand::Arc {
        bounds,
        start_angle,
        span_angle: 180.0,
        style: pen.clone(),
    }
}

fn ellipse(bounds: Rect, brush: Brush, pen: StrokeStyle) -> DrawCommand {
    DrawCommand::Ellipse {
        bounds,
        style: BoxStyle::filled_and_stroked(brush, pen),
    }
}

fn filled(color: Color, pen: StrokeStyle) -> BoxStyle {
    BoxStyle::filled_and_stroked(Brush::Solid(color), pen)
}

/// Fluent knob inset: 40% of the radius.
const FLUENT_INSET: f32 = 0.4;
/// Cupertino knob inset: 2.5% of the radius.
const CUPERTINO_INSET: f32 = 0.025;

/// Build the primitives for one frame.
#[must_use]
pub fn build(input: &RenderInput<'_>) -> RenderPlan {
    let track = Track::new(input.bundle);
    let colors = input.colors;
    let offset = input.offset;
    let mut commands = Vec::with_capacity(8);

    let handle_brush = if input.bundle.handle_uses_background_when_on {
        Brush::Background
    } else {
        Brush::Solid(colors.handle)
    };

    match (input.style, input.is_on) {
        (ToggleStyle::Fluent, true) => {
            let pen = StrokeStyle::rounded(colors.on);
            track.pill(&mut commands, &filled(colors.on, pen.clone()));
            let handle = track.inset_handle(track.r * FLUENT_INSET, offset);
            commands.push(ellipse(handle, handle_brush, pen));
        }
        (ToggleStyle::Fluent, false) => {
            let pen = StrokeStyle::rounded(colors.off);
            track.pill_outline(&mut commands, &pen);
            let handle = track.inset_handle(track.r * FLUENT_INSET, offset);
            commands.push(ellipse(handle, Brush::Solid(colors.off), pen));
        }
        (ToggleStyle::Cupertino, true) => {
            let pen = StrokeStyle::rounded(colors.on);
            track.pill(&mut commands, &filled(colors.on, pen.clone()));
            let handle = track.inset_handle(track.r * CUPERTINO_INSET, offset);
            commands.push(ellipse(handle, handle_brush, pen));
        }
        (ToggleStyle::Cupertino, false) => {
            let border = StrokeStyle::rounded(colors.off.darker(135));
            track.pill(&mut commands, &filled(colors.off, border));
            commands.push(DrawCommand::Rect {
                bounds: Rect::new(
                    track.r + track.half - 2.0,
                    2.0,
                    track.w + 4.0,
                    track.r - 2.0,
                ),
                style: filled(colors.off, StrokeStyle::solid(colors.off)),
            });
            let handle = track.inset_handle(track.r * CUPERTINO_INSET, offset);
            commands.push(ellipse(
                handle,
                handle_brush,
                StrokeStyle::solid(colors.handle.darker(160)),
            ));
        }
        (ToggleStyle::Material, true) => {
            let lit = colors.on.lighter(145);
            track.floating_pill(&mut commands, &filled(lit, StrokeStyle::rounded(lit)));
            commands.push(ellipse(
                track.full_handle(offset),
                Brush::Solid(colors.on),
                StrokeStyle::solid(colors.on),
            ));
        }
        (ToggleStyle::Material, false) => {
            let shade = colors.off.darker(130);
            track.floating_pill(&mut commands, &filled(shade, StrokeStyle::rounded(shade)));
            commands.push(ellipse(
                track.full_handle(offset),
                Brush::Solid(colors.off),
                StrokeStyle::solid(colors.off.darker(140)),
            ));
        }
    }

    if !input.label.is_empty() {
        commands.push(DrawCommand::Text {
            content: input.label.to_string(),
            position: label_position(input.bundle),
            style: TextStyle {
                size: LABEL_FONT_SIZE,
                color: Color::BLACK,
            },
        });
    }

    RenderPlan {
        commands,
        opacity: input.opacity,
    }
}

/// Where the label baseline starts for a bundle.
#[must_use]
pub fn label_position(bundle: &StyleBundle) -> Point {
    let r = bundle.track_radius;
    Point::new(
        (bundle.track_width + 2 * r + 10) as f32,
        (r / 2 + r / 4) as f32,
    )
}
