//! End-to-end tests through the public facade.

use pillswitch::prelude::*;
use pillswitch::widgets::{resolve, DisabledOverlay};
use pillswitch::Direction;

fn run_to_rest(switch: &mut ToggleSwitch, canvas: &mut RecordingCanvas) -> usize {
    let mut frames = 1;
    while switch.advance_frame(canvas) {
        frames += 1;
        assert!(frames < 1000, "animation never settled");
    }
    frames
}

// ===== Construction Scenarios =====

#[test]
fn default_switch_animates_forward_to_track_width() {
    let mut switch = ToggleSwitch::new();
    assert_eq!(switch.style(), ToggleStyle::Cupertino);
    assert!(!switch.is_toggled());

    assert_eq!(switch.toggle(), Some(Toggled { on: true }));
    assert!(switch.is_toggled());
    assert_eq!(switch.animation().direction(), Direction::Forward);

    let mut canvas = RecordingCanvas::new();
    let frames = run_to_rest(&mut switch, &mut canvas);
    assert_eq!(frames, 16);
    assert!(switch.animation().done());
    assert_eq!(
        switch.animation().current(),
        f64::from(switch.bundle().track_width)
    );
}

#[test]
fn fluent_bundle_matches_published_values() {
    let bundle = resolve(ToggleStyle::Fluent);
    assert_eq!(bundle.colors.on.to_rgb8(), (0, 116, 208));
    assert_eq!(bundle.track_width, 35);
    assert_eq!(bundle.track_radius, 26);
    assert!(bundle.handle_uses_background_when_on);
}

#[test]
fn every_style_has_positive_dimensions() {
    for style in ToggleStyle::ALL {
        let bundle = resolve(style);
        assert!(bundle.track_width > 0, "{style}");
        assert!(bundle.track_radius > 0, "{style}");
    }
}

// ===== State Machine Scenarios =====

#[test]
fn toggling_twice_returns_to_off() {
    let mut switch = ToggleSwitch::new();
    switch.toggle();
    switch.toggle();
    assert!(!switch.is_toggled());
    let mut canvas = RecordingCanvas::new();
    run_to_rest(&mut switch, &mut canvas);
    assert_eq!(switch.animation().current(), 0.0);
}

#[test]
fn reversal_never_jumps_more_than_one_tick() {
    let mut switch = ToggleSwitch::new();
    switch.toggle();

    let mut previous = switch.animation().current();
    let mut largest_forward = 0.0f64;
    for _ in 0..6 {
        switch.tick();
        let now = switch.animation().current();
        largest_forward = largest_forward.max(now - previous);
        previous = now;
    }

    switch.toggle();
    assert_eq!(switch.animation().current(), previous);
    while switch.is_animating() {
        switch.tick();
        let now = switch.animation().current();
        assert!((previous - now).abs() <= largest_forward + 1e-9);
        previous = now;
    }
    assert_eq!(previous, 0.0);
}

#[test]
fn invalid_style_leaves_switch_untouched() {
    let mut switch = ToggleSwitch::new().default_style(ToggleStyle::Material);
    let before = *switch.bundle();

    let err = switch.set_style_id(42).unwrap_err();
    assert_eq!(err, StyleError::InvalidStyle("42".to_string()));
    assert!(switch.set_style_name("metro").is_err());

    assert_eq!(switch.style(), ToggleStyle::Material);
    assert_eq!(*switch.bundle(), before);
}

#[test]
fn style_notifications() {
    let mut switch = ToggleSwitch::new();
    assert_eq!(
        switch.set_style_id(0).unwrap(),
        Some(StyleChanged {
            style: ToggleStyle::Fluent
        })
    );
    assert_eq!(switch.set_style_name("win10").unwrap(), None);
    assert_eq!(switch.reset_style(), ToggleStyle::Cupertino);
}

// ===== Enable/Disable Scenarios =====

fn fill_colors(switch: &ToggleSwitch) -> Vec<Color> {
    switch
        .render_plan()
        .commands
        .iter()
        .filter_map(|command| match command {
            DrawCommand::Rect { style, .. }
            | DrawCommand::Ellipse { style, .. }
            | DrawCommand::Chord { style, .. } => style.fill_color(),
            _ => None,
        })
        .collect()
}

#[test]
fn disable_then_enable_restores_exact_colors() {
    let pristine = ToggleSwitch::with_state(true).default_style(ToggleStyle::Fluent);
    let mut switch = ToggleSwitch::with_state(true).default_style(ToggleStyle::Fluent);
    let expected = fill_colors(&pristine);
    assert_eq!(expected[0].to_rgb8(), (0, 116, 208));

    switch.set_enabled(false);
    let dimmed = fill_colors(&switch);
    assert_ne!(dimmed, expected);
    assert_eq!(dimmed[0].to_rgb8(), (157, 186, 208));
    assert_eq!(
        switch.disabled_overlay(),
        Some(&DisabledOverlay::for_bundle(switch.bundle()))
    );
    assert!(!switch.is_interactive());

    switch.set_enabled(true);
    assert_eq!(fill_colors(&switch), expected);
    assert_eq!(switch.render_plan(), pristine.render_plan());

    for _ in 0..3 {
        switch.set_enabled(false);
        switch.set_enabled(true);
    }
    assert_eq!(switch.render_plan(), pristine.render_plan());
}

#[test]
fn disabled_switch_paints_at_reduced_opacity() {
    let mut switch = ToggleSwitch::new().enabled(false);
    switch.layout(Rect::new(0.0, 0.0, 100.0, 40.0));
    let plan = switch.render_plan();
    assert_eq!(plan.opacity, 0.4);

    switch.set_enabled(true);
    assert_eq!(switch.render_plan().opacity, 1.0);
}

// ===== Widget Scenarios =====

#[test]
fn click_drives_full_repaint_cycle() {
    let mut switch = ToggleSwitch::new().label("Bluetooth");
    let size = switch.measure(Constraints::unbounded());
    assert_eq!(size, Size::new(79.0 + 90.0, 31.0));
    switch.layout(Rect::new(5.0, 5.0, size.width, size.height));

    let message = switch
        .event(&Event::MouseDown {
            position: Point::new(20.0, 15.0),
            button: MouseButton::Left,
        })
        .and_then(|m| m.downcast::<Toggled>().ok());
    assert_eq!(message.map(|m| *m), Some(Toggled { on: true }));

    let mut canvas = RecordingCanvas::new();
    run_to_rest(&mut switch, &mut canvas);
    let last = canvas.commands().last().unwrap();
    assert!(matches!(last, DrawCommand::Group { .. }));
    assert_eq!(last.primitive_count(), switch.render_plan().commands.len());
}

#[test]
fn config_yaml_builds_switch() {
    let config = ToggleConfig::from_yaml(
        "style: android\non: true\nlabel: Dark mode\nanimation:\n  easing: linear\n",
    )
    .unwrap();
    let mut switch = ToggleSwitch::from_config(&config).unwrap();
    assert_eq!(switch.style(), ToggleStyle::Material);
    assert!(switch.is_toggled());
    assert_eq!(switch.animation().easing(), Easing::Linear);

    switch.toggle();
    switch.tick();
    assert!((switch.animation().current() - 35.0 * 15.0 / 16.0).abs() < 1e-9);
}

#[test]
fn config_errors_are_reported() {
    assert!(matches!(
        ToggleConfig::from_yaml("style: metro\n"),
        Err(ConfigError::InvalidStyle(_))
    ));
    assert!(matches!(
        ToggleConfig::from_yaml("animation:\n  step: -1\n"),
        Err(ConfigError::InvalidStep(_))
    ));
}

#[test]
fn render_plan_serializes_to_json() {
    let switch = ToggleSwitch::with_state(true).label("x");
    let json = serde_json::to_value(switch.render_plan()).unwrap();
    assert_eq!(json["opacity"], 1.0);
    assert!(json["commands"].as_array().unwrap().len() >= 4);
}
