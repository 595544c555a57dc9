//! Animated toggle switch widget.

use crate::render::{self, DisabledOverlay, RenderInput, RenderPlan};
use crate::style::{resolve, StyleBundle, StyleError, ToggleStyle};
use pillswitch_core::{
    Canvas, Constraints, Easing, Event, LayoutResult, MouseButton, Rect, Size, ToggleAnimation,
    Transform2D, TypeId, Widget,
};
use std::any::Any;

/// Message emitted when the switch flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggled {
    /// The new state
    pub on: bool,
}

/// Message emitted when the active style changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleChanged {
    /// The new style
    pub style: ToggleStyle,
}

/// Toggle switch with three built-in looks and an eased knob.
#[derive(Debug, Clone)]
pub struct ToggleSwitch {
    on: bool,
    enabled: bool,
    label: String,
    style: ToggleStyle,
    default_style: ToggleStyle,
    bundle: StyleBundle,
    animation: ToggleAnimation,
    overlay: Option<DisabledOverlay>,
    test_id_value: Option<String>,
    bounds: Rect,
}

impl Default for ToggleSwitch {
    fn default() -> Self {
        let style = ToggleStyle::default();
        let bundle = resolve(style);
        Self {
            on: false,
            enabled: true,
            label: String::new(),
            style,
            default_style: style,
            bundle,
            animation: ToggleAnimation::settled(false, f64::from(bundle.track_width)),
            overlay: None,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }
}

impl ToggleSwitch {
    /// Create a switch in the off state with the default style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a switch resting in the given state.
    #[must_use]
    pub fn with_state(on: bool) -> Self {
        let mut switch = Self::default();
        switch.on = on;
        switch.animation = ToggleAnimation::settled(on, switch.span());
        switch
    }

    /// Set the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the default style and switch to it.
    #[must_use]
    pub fn default_style(mut self, style: ToggleStyle) -> Self {
        self.default_style = style;
        self.apply_style(style);
        self
    }

    /// Set whether the switch starts enabled.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.set_enabled(enabled);
        self
    }

    /// Set the animation progress step per frame.
    #[must_use]
    pub fn step(mut self, step: f64) -> Self {
        self.animation = self.animation.with_step(step);
        self
    }

    /// Set the knob easing curve.
    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.animation = self.animation.with_easing(easing);
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Current state.
    #[must_use]
    pub const fn is_toggled(&self) -> bool {
        self.on
    }

    /// Whether the switch accepts clicks.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The label.
    #[must_use]
    pub fn get_label(&self) -> &str {
        &self.label
    }

    /// Active style.
    #[must_use]
    pub const fn style(&self) -> ToggleStyle {
        self.style
    }

    /// Style restored by [`Self::reset_style`].
    #[must_use]
    pub const fn get_default_style(&self) -> ToggleStyle {
        self.default_style
    }

    /// Parameters of the active style. Never altered by enable/disable.
    #[must_use]
    pub const fn bundle(&self) -> &StyleBundle {
        &self.bundle
    }

    /// The knob animation.
    #[must_use]
    pub const fn animation(&self) -> &ToggleAnimation {
        &self.animation
    }

    /// The overlay in effect while disabled.
    #[must_use]
    pub const fn disabled_overlay(&self) -> Option<&DisabledOverlay> {
        self.overlay.as_ref()
    }

    /// Minimum size for the active style and label.
    #[must_use]
    pub fn min_size(&self) -> Size {
        self.bundle.min_size(&self.label)
    }

    /// Flip the state as a click would. Ignored while disabled.
    pub fn toggle(&mut self) -> Option<Toggled> {
        if !self.enabled {
            log::trace!("toggle ignored: switch disabled");
            return None;
        }
        Some(self.flip())
    }

    /// Set the state programmatically, regardless of the enabled flag.
    ///
    /// Returns `None` without animating when the state is unchanged.
    pub fn set_on(&mut self, on: bool) -> Option<Toggled> {
        if on == self.on {
            return None;
        }
        Some(self.flip())
    }

    fn flip(&mut self) -> Toggled {
        self.on = !self.on;
        self.animation.start(!self.on);
        log::debug!(
            "toggle switch {} (progress {:.3})",
            if self.on { "on" } else { "off" },
            self.animation.progress()
        );
        Toggled { on: self.on }
    }

    /// Switch to a style. Returns `None` when it is already active.
    pub fn set_style(&mut self, style: ToggleStyle) -> Option<StyleChanged> {
        if style == self.style {
            return None;
        }
        self.apply_style(style);
        Some(StyleChanged { style })
    }

    /// Switch to a style by numeric id, validating before any change.
    pub fn set_style_id(&mut self, id: i32) -> Result<Option<StyleChanged>, StyleError> {
        let style = ToggleStyle::from_id(id)?;
        Ok(self.set_style(style))
    }

    /// Switch to a style by name, validating before any change.
    pub fn set_style_name(&mut self, name: &str) -> Result<Option<StyleChanged>, StyleError> {
        let style: ToggleStyle = name.parse()?;
        Ok(self.set_style(style))
    }

    /// Re-apply the default style and return it.
    pub fn reset_style(&mut self) -> ToggleStyle {
        self.set_style(self.default_style);
        self.default_style
    }

    fn apply_style(&mut self, style: ToggleStyle) {
        self.style = style;
        self.bundle = resolve(style);
        self.animation.set_span(self.span());
        if self.overlay.is_some() {
            self.overlay = Some(DisabledOverlay::for_bundle(&self.bundle));
        }
        log::debug!(
            "toggle style -> {style}, min size {:?}",
            self.bundle.min_size(&self.label)
        );
    }

    /// Enable or disable interaction.
    ///
    /// Disabling swaps in desaturated colors at reduced opacity; enabling
    /// drops them, restoring the style's exact colors.
    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled == self.enabled {
            return;
        }
        self.enabled = enabled;
        self.overlay = if enabled {
            None
        } else {
            Some(DisabledOverlay::for_bundle(&self.bundle))
        };
        log::debug!(
            "toggle switch {}",
            if enabled { "enabled" } else { "disabled" }
        );
    }

    /// Whether the host should keep requesting frames.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        !self.animation.done()
    }

    /// Advance the knob animation by one frame.
    ///
    /// Returns true only on the frame that finishes the transition; ticks
    /// while already at rest return false.
    pub fn tick(&mut self) -> bool {
        let was_running = self.is_animating();
        self.animation.tick();
        let settled = was_running && !self.is_animating();
        if settled {
            log::trace!("toggle animation settled at {}", self.animation.current());
        }
        settled
    }

    /// Run one frame of the repaint cycle: tick, paint, and report whether
    /// another frame is needed.
    pub fn advance_frame(&mut self, canvas: &mut dyn Canvas) -> bool {
        self.tick();
        self.paint(canvas);
        self.is_animating()
    }

    /// Primitives for the current frame, in local coordinates.
    #[must_use]
    pub fn render_plan(&self) -> RenderPlan {
        let mut input = RenderInput::new(
            self.style,
            &self.bundle,
            self.on,
            self.animation.current() as f32,
            true,
        )
        .with_label(&self.label);
        if let Some(overlay) = &self.overlay {
            input = input.with_overlay(overlay);
        }
        render::build(&input)
    }

    fn span(&self) -> f64 {
        f64::from(self.bundle.track_width)
    }
}

impl Widget for ToggleSwitch {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.min_size())
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let plan = self.render_plan();
        canvas.push_transform(Transform2D::translate(self.bounds.x, self.bounds.y));
        canvas.push_opacity(plan.opacity);
        plan.replay(canvas);
        canvas.pop_opacity();
        canvas.pop_transform();
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if let Event::MouseDown {
            position,
            button: MouseButton::Left,
        } = event
        {
            if self.bounds.contains_point(position) {
                return self
                    .toggle()
                    .map(|msg| Box::new(msg) as Box<dyn Any + Send>);
            }
        }
        None
    }

    fn is_interactive(&self) -> bool {
        self.enabled
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
