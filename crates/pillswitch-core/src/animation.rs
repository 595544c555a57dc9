//! Easing curves and the progress driver behind two-state transitions.
//!
//! [`ToggleAnimation`] is advanced cooperatively: the host calls
//! [`ToggleAnimation::tick`] once per frame from its repaint cycle and keeps
//! requesting frames until [`ToggleAnimation::done`] reports true.

use serde::{Deserialize, Serialize};

// =============================================================================
// Easing Functions
// =============================================================================

/// Easing curves mapping normalized time to normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Linear interpolation (no easing)
    Linear,
    /// Quadratic ease out
    QuadOut,
    /// Cubic ease out
    CubicOut,
    /// Circular ease out: `sqrt(1 - (t - 1)^2)`
    #[default]
    CircOut,
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    ///
    /// Inputs are clamped, so `apply(0) == 0` and `apply(1) == 1` for every curve.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadOut => (1.0 - t).mul_add(-(1.0 - t), 1.0),
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
            Self::CircOut => Self::circ_out(t),
        }
    }

    fn circ_out(t: f64) -> f64 {
        let u = t - 1.0;
        u.mul_add(-u, 1.0).max(0.0).sqrt()
    }
}

// =============================================================================
// ToggleAnimation - Forward/Reverse Progress Driver
// =============================================================================

/// Direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Progress increases towards 1
    Forward,
    /// Progress decreases towards 0
    Reverse,
}

impl Direction {
    /// Progress value at which travel in this direction stops.
    #[must_use]
    pub const fn terminal(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Reverse => 0.0,
        }
    }
}

/// Drives a single eased transition between two resting positions.
///
/// Restarting mid-flight flips the direction in place; progress is never
/// reset, so the animated offset stays continuous.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleAnimation {
    progress: f64,
    direction: Direction,
    running: bool,
    span: f64,
    step: f64,
    easing: Easing,
}

impl ToggleAnimation {
    /// Progress advanced per tick unless configured otherwise.
    pub const DEFAULT_STEP: f64 = 1.0 / 16.0;

    /// Create an animation resting at the terminal value for `on`.
    #[must_use]
    pub fn settled(on: bool, span: f64) -> Self {
        let direction = if on {
            Direction::Forward
        } else {
            Direction::Reverse
        };
        Self {
            progress: direction.terminal(),
            direction,
            running: false,
            span: span.max(0.0),
            step: Self::DEFAULT_STEP,
            easing: Easing::default(),
        }
    }

    /// Set the per-tick step.
    ///
    /// Non-finite, zero or negative steps would never reach a terminal value
    /// and fall back to [`Self::DEFAULT_STEP`]; steps above 1 are capped.
    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Self::sanitize_step(step);
        self
    }

    /// Set the easing curve.
    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Start (or redirect) the animation.
    ///
    /// Returns true when a repaint should be scheduled.
    pub fn start(&mut self, reverse: bool) -> bool {
        self.direction = if reverse {
            Direction::Reverse
        } else {
            Direction::Forward
        };
        self.running = true;
        true
    }

    /// Advance by one step. A no-op once stopped.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        let next = match self.direction {
            Direction::Forward => self.progress + self.step,
            Direction::Reverse => self.progress - self.step,
        };
        let clamped = next.clamp(0.0, 1.0);
        self.progress = clamped;
        if clamped != next || clamped == self.direction.terminal() {
            self.progress = self.direction.terminal();
            self.running = false;
        }
    }

    /// Pixel offset of the moving element: `ease(progress) * span`.
    #[must_use]
    pub fn current(&self) -> f64 {
        self.easing.apply(self.progress) * self.span
    }

    /// Whether the animation has stopped.
    #[must_use]
    pub const fn done(&self) -> bool {
        !self.running
    }

    /// Raw progress before easing.
    #[must_use]
    pub const fn progress(&self) -> f64 {
        self.progress
    }

    /// Current direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Distance travelled between the two resting positions.
    #[must_use]
    pub const fn span(&self) -> f64 {
        self.span
    }

    /// Change the travel distance, e.g. after a style switch.
    pub fn set_span(&mut self, span: f64) {
        self.span = span.max(0.0);
    }

    /// Per-tick progress step.
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Easing curve in use.
    #[must_use]
    pub const fn easing(&self) -> Easing {
        self.easing
    }

    fn sanitize_step(step: f64) -> f64 {
        if step.is_finite() && step > 0.0 {
            step.min(1.0)
        } else {
            Self::DEFAULT_STEP
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // -------------------------------------------------------------------------
    // Easing tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::QuadOut,
            Easing::CubicOut,
            Easing::CircOut,
        ] {
            assert!(easing.apply(0.0).abs() < 1e-12, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-12, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_circ_out_formula() {
        let t: f64 = 0.25;
        let expected = (1.0 - (t - 1.0).powi(2)).sqrt();
        assert!((Easing::CircOut.apply(t) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_circ_out_above_linear() {
        assert!(Easing::CircOut.apply(0.5) > 0.5);
    }

    #[test]
    fn test_easing_clamps_input() {
        assert_eq!(Easing::CircOut.apply(-1.0), 0.0);
        assert_eq!(Easing::CircOut.apply(2.0), 1.0);
    }

    #[test]
    fn test_easing_default_is_circ_out() {
        assert_eq!(Easing::default(), Easing::CircOut);
    }

    // -------------------------------------------------------------------------
    // ToggleAnimation tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_settled_off() {
        let anim = ToggleAnimation::settled(false, 21.0);
        assert!(anim.done());
        assert_eq!(anim.progress(), 0.0);
        assert_eq!(anim.current(), 0.0);
        assert_eq!(anim.direction(), Direction::Reverse);
    }

    #[test]
    fn test_settled_on() {
        let anim = ToggleAnimation::settled(true, 21.0);
        assert!(anim.done());
        assert_eq!(anim.current(), 21.0);
        assert_eq!(anim.direction(), Direction::Forward);
    }

    #[test]
    fn test_forward_reaches_span() {
        let mut anim = ToggleAnimation::settled(false, 35.0);
        assert!(anim.start(false));
        assert!(!anim.done());
        for _ in 0..16 {
            anim.tick();
        }
        assert!(anim.done());
        assert_eq!(anim.progress(), 1.0);
        assert_eq!(anim.current(), 35.0);
    }

    #[test]
    fn test_tick_after_stop_is_noop() {
        let mut anim = ToggleAnimation::settled(false, 10.0);
        anim.start(false);
        for _ in 0..100 {
            anim.tick();
        }
        let snapshot = anim.clone();
        anim.tick();
        assert_eq!(anim, snapshot);
    }

    #[test]
    fn test_reverse_mid_flight_continues_from_progress() {
        let mut anim = ToggleAnimation::settled(false, 10.0);
        anim.start(false);
        for _ in 0..4 {
            anim.tick();
        }
        let before = anim.progress();
        anim.start(true);
        assert_eq!(anim.progress(), before);
        assert_eq!(anim.direction(), Direction::Reverse);
        anim.tick();
        assert!(anim.progress() < before);
    }

    #[test]
    fn test_restart_same_direction_continues() {
        let mut anim = ToggleAnimation::settled(false, 10.0);
        anim.start(false);
        anim.tick();
        let before = anim.progress();
        anim.start(false);
        assert_eq!(anim.progress(), before);
    }

    #[test]
    fn test_step_guard() {
        let anim = ToggleAnimation::settled(false, 1.0);
        assert_eq!(anim.clone().with_step(0.0).step(), ToggleAnimation::DEFAULT_STEP);
        assert_eq!(anim.clone().with_step(-0.5).step(), ToggleAnimation::DEFAULT_STEP);
        assert_eq!(anim.clone().with_step(f64::NAN).step(), ToggleAnimation::DEFAULT_STEP);
        assert_eq!(anim.clone().with_step(5.0).step(), 1.0);
        assert_eq!(anim.with_step(0.25).step(), 0.25);
    }

    #[test]
    fn test_set_span_rescales_current() {
        let mut anim = ToggleAnimation::settled(true, 35.0);
        anim.set_span(21.0);
        assert_eq!(anim.current(), 21.0);
        anim.set_span(-3.0);
        assert_eq!(anim.span(), 0.0);
    }

    #[test]
    fn test_linear_easing_current() {
        let mut anim = ToggleAnimation::settled(false, 16.0)
            .with_step(0.25)
            .with_easing(Easing::Linear);
        anim.start(false);
        anim.tick();
        assert_eq!(anim.current(), 4.0);
        assert_eq!(anim.easing(), Easing::Linear);
    }

    proptest! {
        #[test]
        fn prop_easing_monotonic(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            for easing in [Easing::Linear, Easing::QuadOut, Easing::CubicOut, Easing::CircOut] {
                prop_assert!(easing.apply(lo) <= easing.apply(hi) + 1e-12);
            }
        }

        #[test]
        fn prop_easing_in_unit_range(t in -2.0f64..3.0) {
            let v = Easing::CircOut.apply(t);
            prop_assert!((0.0..=1.0).contains(&v));
        }

        #[test]
        fn prop_animation_terminates(step in 0.001f64..1.5, reverse in any::<bool>()) {
            let mut anim = ToggleAnimation::settled(reverse, 30.0).with_step(step);
            anim.start(reverse);
            let mut ticks = 0;
            while !anim.done() {
                anim.tick();
                ticks += 1;
                prop_assert!(ticks <= 1001);
            }
            prop_assert!((0.0..=1.0).contains(&anim.progress()));
        }

        #[test]
        fn prop_reversal_is_continuous(forward_ticks in 0usize..20) {
            let mut anim = ToggleAnimation::settled(false, 35.0);
            anim.start(false);
            for _ in 0..forward_ticks {
                anim.tick();
            }
            let before = anim.current();
            anim.start(true);
            prop_assert_eq!(anim.current(), before);
        }
    }
}
