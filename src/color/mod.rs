//! Hue cycling and stroke color jitter for the motif renderer.
//!
//! The hue walks the `[0,1)` color wheel (colorsys convention, not
//! degrees) and only gets wrapped at conversion time, so callers are free
//! to accumulate it past 1.0 over many iterations.

pub use csscolorparser::Color as CssColor;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Wrap an accumulated hue back into `[0,1)`.
pub fn wrap_hue(h: f64) -> f64 {
    h.rem_euclid(1.0)
}

/// Stateless HSV to RGB conversion, all components in `[0,1]`.
/// Hue outside the unit range is wrapped first.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let h = wrap_hue(h);
    if s <= 0.0 {
        return (v, v, v);
    }
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match sector as i32 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Bounded multiplicative perturbation for a color channel. Each channel
/// gets an independent factor from `min..=max`, and the product is clamped
/// back into the valid channel range.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct JitterRange {
    pub min: f64,
    pub max: f64,
}

impl JitterRange {
    /// The wide tweak from the noisy motif variant.
    pub fn wide() -> Self {
        JitterRange { min: 0.7, max: 1.3 }
    }

    /// The gentle tweak; only ever darkens.
    pub fn gentle() -> Self {
        JitterRange { min: 0.8, max: 1.0 }
    }

    pub fn apply<R: Rng>(&self, rng: &mut R, channel: f64) -> f64 {
        (channel * rng.gen_range(self.min..=self.max)).clamp(0.0, 1.0)
    }
}

/// Compute the stroke color for one motif band: the wrapped hue at full
/// saturation and value, each channel optionally jittered.
pub fn stroke_color<R: Rng>(hue: f64, jitter: Option<&JitterRange>, rng: &mut R) -> CssColor {
    let (r, g, b) = hsv_to_rgb(hue, 1.0, 1.0);
    let (r, g, b) = match jitter {
        Some(range) => (
            range.apply(rng, r),
            range.apply(rng, g),
            range.apply(rng, b),
        ),
        None => (r, g, b),
    };
    CssColor::new(r as f32, g as f32, b as f32, 1.0)
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::prelude::{SeedableRng, SmallRng};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_primary_hues() {
        let (r, g, b) = hsv_to_rgb(0.0, 1.0, 1.0);
        assert!(close(r, 1.0) && close(g, 0.0) && close(b, 0.0));
        let (r, g, b) = hsv_to_rgb(1.0 / 3.0, 1.0, 1.0);
        assert!(close(r, 0.0) && close(g, 1.0) && close(b, 0.0));
        let (r, g, b) = hsv_to_rgb(2.0 / 3.0, 1.0, 1.0);
        assert!(close(r, 0.0) && close(g, 0.0) && close(b, 1.0));
    }

    #[test]
    fn test_hue_wraps() {
        assert!(close(wrap_hue(1.25), 0.25));
        assert!(close(wrap_hue(-0.25), 0.75));
        let a = hsv_to_rgb(0.6, 1.0, 1.0);
        let b = hsv_to_rgb(3.6, 1.0, 1.0);
        assert!(close(a.0, b.0) && close(a.1, b.1) && close(a.2, b.2));
    }

    #[test]
    fn test_zero_saturation_is_grey() {
        let (r, g, b) = hsv_to_rgb(0.42, 0.0, 0.5);
        assert!(close(r, 0.5) && close(g, 0.5) && close(b, 0.5));
    }

    #[test]
    fn test_jitter_stays_in_channel_range() {
        let mut rng = SmallRng::seed_from_u64(12345);
        let range = JitterRange::wide();
        for _ in 0..1000 {
            let v = range.apply(&mut rng, 0.9);
            assert!(v >= 0.0 && v <= 1.0);
        }
    }

    #[test]
    fn test_gentle_jitter_only_darkens() {
        let mut rng = SmallRng::seed_from_u64(6);
        let range = JitterRange::gentle();
        for _ in 0..1000 {
            let v = range.apply(&mut rng, 1.0);
            assert!(v >= 0.8 && v <= 1.0);
        }
    }

    #[test]
    fn test_stroke_color_without_jitter_is_pure() {
        let mut rng = SmallRng::seed_from_u64(1);
        let c = stroke_color(0.0, None, &mut rng);
        assert!((c.r - 1.0).abs() < 1e-6);
        assert!(c.g.abs() < 1e-6);
        assert!(c.b.abs() < 1e-6);
    }
}
