//! HSL sampling and conversion to 8-bit sRGB.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::ParseEnumError;

/// Governs the saturation/lightness ranges a color is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorStyle {
    #[default]
    Pastel,
    Vivid,
    Unique,
    /// Fixed S=80 L=60, only the hue varies.
    #[serde(rename = "default")]
    Fixed,
}

impl ColorStyle {
    /// Styles offered by the control bar, in cycling order.
    pub const SELECTABLE: [ColorStyle; 3] = [ColorStyle::Pastel, ColorStyle::Vivid, ColorStyle::Unique];

    pub fn name(self) -> &'static str {
        match self {
            ColorStyle::Pastel => "pastel",
            ColorStyle::Vivid => "vivid",
            ColorStyle::Unique => "unique",
            ColorStyle::Fixed => "default",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColorStyle::Pastel => "Pastel",
            ColorStyle::Vivid => "Vivid",
            ColorStyle::Unique => "Unique",
            ColorStyle::Fixed => "Default",
        }
    }

    /// Next selectable style. `Fixed` re-enters the cycle at `Pastel`.
    pub fn next(self) -> Self {
        match self {
            ColorStyle::Pastel => ColorStyle::Vivid,
            ColorStyle::Vivid => ColorStyle::Unique,
            ColorStyle::Unique | ColorStyle::Fixed => ColorStyle::Pastel,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ColorStyle::Pastel | ColorStyle::Fixed => ColorStyle::Unique,
            ColorStyle::Vivid => ColorStyle::Pastel,
            ColorStyle::Unique => ColorStyle::Vivid,
        }
    }
}

impl fmt::Display for ColorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorStyle {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pastel" => Ok(ColorStyle::Pastel),
            "vivid" => Ok(ColorStyle::Vivid),
            "unique" => Ok(ColorStyle::Unique),
            "default" => Ok(ColorStyle::Fixed),
            _ => Err(ParseEnumError::new(
                "color style",
                s,
                "pastel, vivid, unique, default",
            )),
        }
    }
}

/// Hue in whole degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    pub fn new(hue: u16, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    pub fn to_rgb(self) -> Rgb {
        let h = f64::from(self.hue).rem_euclid(360.0);
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let l = (self.lightness / 100.0).clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h {
            h if h < 60.0 => (c, x, 0.0),
            h if h < 120.0 => (x, c, 0.0),
            h if h < 180.0 => (0.0, c, x),
            h if h < 240.0 => (0.0, x, c),
            h if h < 300.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Rgb::new(channel(r + m), channel(g + m), channel(b + m))
    }
}

fn channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({},{}%,{}%)", self.hue, self.saturation, self.lightness)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Straight sRGB interpolation, `t` clamped to [0, 1].
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| {
            let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
            v.round() as u8
        };
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

/// Draw one color for `style`.
pub fn sample<R: Rng + ?Sized>(style: ColorStyle, rng: &mut R) -> Hsl {
    let mut hue: u16 = rng.random_range(0..360);
    let (saturation, lightness) = match style {
        ColorStyle::Pastel => (rng.random_range(60.0..80.0), rng.random_range(70.0..80.0)),
        ColorStyle::Vivid => (rng.random_range(80.0..100.0), rng.random_range(50.0..60.0)),
        ColorStyle::Unique => {
            let s = rng.random_range(40.0..100.0);
            let l = rng.random_range(40.0..80.0);
            hue = rng.random_range(0..360);
            (s, l)
        }
        ColorStyle::Fixed => (80.0, 60.0),
    };
    Hsl::new(hue, saturation, lightness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn assert_ranges(style: ColorStyle, s: (f64, f64), l: (f64, f64)) {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..5_000 {
            let c = sample(style, &mut rng);
            assert!(c.hue < 360, "{style}: hue {}", c.hue);
            assert!(
                c.saturation >= s.0 && c.saturation < s.1,
                "{style}: saturation {}",
                c.saturation
            );
            assert!(
                c.lightness >= l.0 && c.lightness < l.1,
                "{style}: lightness {}",
                c.lightness
            );
        }
    }

    #[test]
    fn test_pastel_ranges() {
        assert_ranges(ColorStyle::Pastel, (60.0, 80.0), (70.0, 80.0));
    }

    #[test]
    fn test_vivid_ranges() {
        assert_ranges(ColorStyle::Vivid, (80.0, 100.0), (50.0, 60.0));
    }

    #[test]
    fn test_unique_ranges() {
        assert_ranges(ColorStyle::Unique, (40.0, 100.0), (40.0, 80.0));
    }

    #[test]
    fn test_fixed_style_only_varies_hue() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut hues = std::collections::HashSet::new();
        for _ in 0..200 {
            let c = sample(ColorStyle::Fixed, &mut rng);
            assert_eq!(c.saturation, 80.0);
            assert_eq!(c.lightness, 60.0);
            hues.insert(c.hue);
        }
        assert!(hues.len() > 50);
    }

    #[test]
    fn test_hue_covers_the_circle() {
        let mut rng = StdRng::seed_from_u64(99);
        let hues: Vec<u16> = (0..10_000)
            .map(|_| sample(ColorStyle::Vivid, &mut rng).hue)
            .collect();
        assert!(hues.iter().any(|&h| h < 10));
        assert!(hues.iter().any(|&h| h >= 350));
    }

    #[test]
    fn test_display_format() {
        assert_eq!(Hsl::new(10, 70.0, 75.0).to_string(), "hsl(10,70%,75%)");
        assert_eq!(Hsl::new(212, 67.5, 73.25).to_string(), "hsl(212,67.5%,73.25%)");
    }

    #[test]
    fn test_hsl_to_rgb() {
        assert_eq!(Hsl::new(0, 100.0, 50.0).to_rgb(), Rgb::new(255, 0, 0));
        assert_eq!(Hsl::new(120, 100.0, 50.0).to_rgb(), Rgb::new(0, 255, 0));
        assert_eq!(Hsl::new(240, 100.0, 50.0).to_rgb(), Rgb::new(0, 0, 255));
        assert_eq!(Hsl::new(0, 0.0, 100.0).to_rgb(), Rgb::new(255, 255, 255));
        assert_eq!(Hsl::new(200, 0.0, 0.0).to_rgb(), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Rgb::new(0, 100, 200);
        let b = Rgb::new(200, 100, 0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Rgb::new(100, 100, 100));
        assert_eq!(a.lerp(b, 7.0), b);
    }

    #[test]
    fn test_parse_style() {
        assert_eq!("Vivid".parse::<ColorStyle>(), Ok(ColorStyle::Vivid));
        assert_eq!("default".parse::<ColorStyle>(), Ok(ColorStyle::Fixed));
        assert!("neon".parse::<ColorStyle>().is_err());
    }

    #[test]
    fn test_style_cycle() {
        let mut s = ColorStyle::Pastel;
        for _ in 0..3 {
            s = s.next();
        }
        assert_eq!(s, ColorStyle::Pastel);
        assert_eq!(ColorStyle::Fixed.next(), ColorStyle::Pastel);
        assert_eq!(ColorStyle::Pastel.prev(), ColorStyle::Unique);
    }
}
