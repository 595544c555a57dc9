//! Color representation with 8-bit and HSV conversions.
//!
//! Colors are stored as normalized RGBA floats. The HSV helpers work on the
//! integer channel model used by classic desktop toolkits: hue in whole
//! degrees `0..360` (or `-1` for achromatic colors), saturation and value in
//! `0..=255`. Hue is truncated, not rounded, to whole degrees.

use serde::{Deserialize, Serialize};

/// RGBA color with values in the range [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component [0.0, 1.0]
    pub r: f32,
    /// Green component [0.0, 1.0]
    pub g: f32,
    /// Blue component [0.0, 1.0]
    pub b: f32,
    /// Alpha component [0.0, 1.0]
    pub a: f32,
}

/// Integer HSV triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsv {
    /// Hue in degrees `0..360`, `-1` when the color is achromatic
    pub hue: i32,
    /// Saturation `0..=255`
    pub saturation: i32,
    /// Value `0..=255`
    pub value: i32,
}

impl Color {
    /// Create a new color, clamping values to [0.0, 1.0].
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Create an opaque color from RGB values.
    #[must_use]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create an opaque color from 8-bit channels.
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: 1.0,
        }
    }

    /// Quantize to 8-bit RGB channels.
    #[must_use]
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (
            Self::quantize(self.r),
            Self::quantize(self.g),
            Self::quantize(self.b),
        )
    }

    /// Return the same color with a different alpha.
    #[must_use]
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Convert to integer HSV.
    #[must_use]
    pub fn to_hsv(&self) -> Hsv {
        let (r, g, b) = self.to_rgb8();
        let (r, g, b) = (i32::from(r), i32::from(g), i32::from(b));
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let saturation = if max == 0 {
            0
        } else {
            (delta as f32 * 255.0 / max as f32).round() as i32
        };

        let hue = if delta == 0 {
            -1
        } else {
            let d = delta as f32;
            let (rf, gf, bf) = (r as f32, g as f32, b as f32);
            let sector = if max == r {
                (gf - bf) / d
            } else if max == g {
                (bf - rf) / d + 2.0
            } else {
                (rf - gf) / d + 4.0
            };
            // Hue is kept in centidegrees and truncated to whole degrees.
            let centidegrees = ((sector * 60.0).rem_euclid(360.0) * 100.0).round() as i32;
            (centidegrees / 100) % 360
        };

        Hsv {
            hue,
            saturation,
            value: max,
        }
    }

    /// Build an opaque color from integer HSV.
    ///
    /// Negative hue or zero saturation yields a gray of the given value.
    #[must_use]
    pub fn from_hsv(hsv: Hsv) -> Self {
        let s = hsv.saturation.clamp(0, 255) as f32 / 255.0;
        let v = hsv.value.clamp(0, 255) as f32 / 255.0;

        if hsv.hue < 0 || s == 0.0 {
            return Self::rgb(v, v, v).snapped();
        }

        let h = hsv.hue.rem_euclid(360) as f32 / 60.0;
        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * s.mul_add(-f, 1.0);
        let t = v * s.mul_add(f - 1.0, 1.0);

        let (r, g, b) = match sector as i32 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Self::rgb(r, g, b).snapped()
    }

    /// Quarter the saturation, keeping hue and value.
    ///
    /// Not an exact inverse of [`Color::saturate`]; cache the original color
    /// when it has to be restored.
    #[must_use]
    pub fn desaturate(&self) -> Self {
        self.map_saturation(|s| (s / 4).min(255))
    }

    /// Quadruple the saturation, clamped to 255.
    #[must_use]
    pub fn saturate(&self) -> Self {
        self.map_saturation(|s| (s * 4).min(255))
    }

    /// Lighten by `factor` percent (150 = 50% brighter).
    ///
    /// Value overflowing 255 is taken out of the saturation instead.
    #[must_use]
    pub fn lighter(&self, factor: i32) -> Self {
        if factor <= 0 {
            return *self;
        }
        let mut hsv = self.to_hsv();
        let value = hsv.value * factor / 100;
        if value > 255 {
            hsv.saturation = (hsv.saturation - (value - 255)).max(0);
            hsv.value = 255;
        } else {
            hsv.value = value;
        }
        Self::from_hsv(hsv).with_alpha(self.a)
    }

    /// Darken by `factor` percent (200 = half the value).
    #[must_use]
    pub fn darker(&self, factor: i32) -> Self {
        if factor <= 0 {
            return *self;
        }
        let mut hsv = self.to_hsv();
        hsv.value = hsv.value * 100 / factor;
        Self::from_hsv(hsv).with_alpha(self.a)
    }

    fn map_saturation(&self, f: impl FnOnce(i32) -> i32) -> Self {
        let hsv = self.to_hsv();
        Self::from_hsv(Hsv {
            hue: hsv.hue.max(0),
            saturation: f(hsv.saturation),
            value: hsv.value,
        })
        .with_alpha(self.a)
    }

    fn quantize(c: f32) -> u8 {
        (c.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    /// Round every channel onto the 8-bit grid.
    fn snapped(self) -> Self {
        let (r, g, b) = self.to_rgb8();
        Self::from_rgb8(r, g, b).with_alpha(self.a)
    }

    // Common colors
    /// Black color
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    /// White color
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}
