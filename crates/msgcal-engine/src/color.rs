//! Perceptual color interpolation.
//!
//! Mixing happens in Oklab (Björn Ottosson, 2020) so that equal alpha steps
//! look like equal brightness steps, which plain sRGB lerping does not give.

use msgcal_types::Rgb;

/// A color in the Oklab space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Oklab {
    pub fn from_rgb(color: Rgb) -> Self {
        let r = srgb_to_linear(color.r);
        let g = srgb_to_linear(color.g);
        let b = srgb_to_linear(color.b);

        let l = 0.4122214708 * r + 0.5363325363 * g + 0.0514459929 * b;
        let m = 0.2119034982 * r + 0.6806995451 * g + 0.1073969566 * b;
        let s = 0.0883024619 * r + 0.2817188376 * g + 0.6299787005 * b;

        let l_ = l.cbrt();
        let m_ = m.cbrt();
        let s_ = s.cbrt();

        Self {
            l: 0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
            a: 1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
            b: 0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
        }
    }

    /// Back to sRGB; out-of-gamut channels are clipped.
    pub fn to_rgb(self) -> Rgb {
        let l_ = self.l + 0.3963377774 * self.a + 0.2158037573 * self.b;
        let m_ = self.l - 0.1055613458 * self.a - 0.0638541728 * self.b;
        let s_ = self.l - 0.0894841775 * self.a - 1.2914855480 * self.b;

        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        let r = 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s;
        let g = -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s;
        let b = -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s;

        Rgb::new(linear_to_srgb(r), linear_to_srgb(g), linear_to_srgb(b))
    }

    pub fn lerp(self, other: Oklab, t: f64) -> Self {
        Self {
            l: self.l + (other.l - self.l) * t,
            a: self.a + (other.a - self.a) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }
}

/// Interpolate from `base` (alpha 0) to `active` (alpha 1) in Oklab.
pub fn mix(base: Rgb, active: Rgb, alpha: f64) -> Rgb {
    let t = if alpha.is_nan() {
        0.0
    } else {
        alpha.clamp(0.0, 1.0)
    };

    if t == 0.0 {
        return base;
    }
    if t == 1.0 {
        return active;
    }

    Oklab::from_rgb(base).lerp(Oklab::from_rgb(active), t).to_rgb()
}

fn srgb_to_linear(channel: u8) -> f64 {
    let c = channel as f64 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(value: f64) -> u8 {
    let v = value.clamp(0.0, 1.0);
    let c = if v <= 0.0031308 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    };
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: Rgb = Rgb::new(0x15, 0x1B, 0x23);
    const ACTIVE: Rgb = Rgb::new(0x56, 0xD3, 0x64);

    fn close(a: Rgb, b: Rgb) -> bool {
        a.r.abs_diff(b.r) <= 1 && a.g.abs_diff(b.g) <= 1 && a.b.abs_diff(b.b) <= 1
    }

    #[test]
    fn test_endpoints_are_exact() {
        assert_eq!(mix(BASE, ACTIVE, 0.0), BASE);
        assert_eq!(mix(BASE, ACTIVE, 1.0), ACTIVE);
    }

    #[test]
    fn test_out_of_range_alpha_is_clamped() {
        assert_eq!(mix(BASE, ACTIVE, -3.0), BASE);
        assert_eq!(mix(BASE, ACTIVE, 7.5), ACTIVE);
        assert_eq!(mix(BASE, ACTIVE, f64::NAN), BASE);
    }

    #[test]
    fn test_roundtrip_through_oklab() {
        for color in [BASE, ACTIVE, Rgb::new(255, 255, 255), Rgb::new(0, 0, 0), Rgb::new(200, 30, 90)] {
            assert!(close(Oklab::from_rgb(color).to_rgb(), color), "{}", color);
        }
    }

    #[test]
    fn test_black_white_midpoint_is_perceptual_gray() {
        // Oklab L = 0.5 is linear 0.125, i.e. sRGB ~99 rather than the 128 a
        // naive per-channel blend would give.
        let mid = mix(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255), 0.5);
        assert!(close(mid, Rgb::new(99, 99, 99)), "{}", mid);
    }

    #[test]
    fn test_lightness_increases_with_alpha() {
        let mut previous = Oklab::from_rgb(BASE).l;
        for step in 1..=10 {
            let l = Oklab::from_rgb(mix(BASE, ACTIVE, step as f64 / 10.0)).l;
            assert!(l >= previous, "step {}", step);
            previous = l;
        }
    }
}
