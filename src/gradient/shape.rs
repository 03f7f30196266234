//! Typed gradients: the CSS value they print as, and the color they paint
//! at a given point of a box.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseEnumError;
use super::color::{Hsl, Rgb};

/// Which CSS gradient function a swatch uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientType {
    #[default]
    Linear,
    Radial,
    Conical,
}

impl GradientType {
    pub const ALL: [GradientType; 3] = [GradientType::Linear, GradientType::Radial, GradientType::Conical];

    pub fn name(self) -> &'static str {
        match self {
            GradientType::Linear => "linear",
            GradientType::Radial => "radial",
            GradientType::Conical => "conical",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GradientType::Linear => "Linear",
            GradientType::Radial => "Radial",
            GradientType::Conical => "Conical",
        }
    }

    pub fn next(self) -> Self {
        match self {
            GradientType::Linear => GradientType::Radial,
            GradientType::Radial => GradientType::Conical,
            GradientType::Conical => GradientType::Linear,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            GradientType::Linear => GradientType::Conical,
            GradientType::Radial => GradientType::Linear,
            GradientType::Conical => GradientType::Radial,
        }
    }
}

impl fmt::Display for GradientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GradientType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(GradientType::Linear),
            "radial" => Ok(GradientType::Radial),
            "conical" | "conic" => Ok(GradientType::Conical),
            _ => Err(ParseEnumError::new(
                "gradient type",
                s,
                "linear, radial, conical",
            )),
        }
    }
}

/// One hard-edged arc of a conic gradient, in whole degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConicStop {
    pub color: Hsl,
    pub start: u16,
    pub end: u16,
}

impl ConicStop {
    pub fn width(&self) -> u16 {
        self.end - self.start
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Gradient {
    Linear { angle: u16, from: Hsl, to: Hsl },
    Radial { from: Hsl, to: Hsl },
    Conic { stops: Vec<ConicStop> },
}

impl Gradient {
    pub fn gradient_type(&self) -> GradientType {
        match self {
            Gradient::Linear { .. } => GradientType::Linear,
            Gradient::Radial { .. } => GradientType::Radial,
            Gradient::Conic { .. } => GradientType::Conical,
        }
    }

    /// Color painted at `(x, y)` inside a `width` x `height` box, using CSS
    /// conventions: 0deg points up and angles grow clockwise, radial circles
    /// reach the farthest corner. Coordinates are sampled at pixel centers.
    pub fn color_at(&self, x: f64, y: f64, width: f64, height: f64) -> Rgb {
        let dx = x + 0.5 - width / 2.0;
        let dy = y + 0.5 - height / 2.0;

        match self {
            Gradient::Linear { angle, from, to } => {
                let rad = f64::from(*angle).to_radians();
                let (dir_x, dir_y) = (rad.sin(), -rad.cos());
                let length = (width * rad.sin()).abs() + (height * rad.cos()).abs();
                let t = if length > 0.0 {
                    (dx * dir_x + dy * dir_y) / length + 0.5
                } else {
                    0.0
                };
                from.to_rgb().lerp(to.to_rgb(), t)
            }
            Gradient::Radial { from, to } => {
                let radius = (width / 2.0).hypot(height / 2.0);
                let t = if radius > 0.0 { dx.hypot(dy) / radius } else { 0.0 };
                from.to_rgb().lerp(to.to_rgb(), t)
            }
            Gradient::Conic { stops } => {
                let deg = dx.atan2(-dy).to_degrees().rem_euclid(360.0);
                stops
                    .iter()
                    .find(|s| deg < f64::from(s.end))
                    .or(stops.last())
                    .map(|s| s.color.to_rgb())
                    .unwrap_or(Rgb::new(0, 0, 0))
            }
        }
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gradient::Linear { angle, from, to } => {
                write!(f, "linear-gradient({angle}deg, {from}, {to})")
            }
            Gradient::Radial { from, to } => write!(f, "radial-gradient(circle, {from}, {to})"),
            Gradient::Conic { stops } => {
                f.write_str("conic-gradient(")?;
                for (i, stop) in stops.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{} {}deg {}deg", stop.color, stop.start, stop.end)?;
                }
                f.write_str(")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Hsl = Hsl {
        hue: 0,
        saturation: 100.0,
        lightness: 50.0,
    };
    const BLUE: Hsl = Hsl {
        hue: 240,
        saturation: 100.0,
        lightness: 50.0,
    };

    #[test]
    fn test_css_values() {
        let linear = Gradient::Linear {
            angle: 90,
            from: Hsl::new(10, 70.0, 75.0),
            to: Hsl::new(200, 70.0, 75.0),
        };
        assert_eq!(
            linear.to_string(),
            "linear-gradient(90deg, hsl(10,70%,75%), hsl(200,70%,75%))"
        );

        let radial = Gradient::Radial {
            from: Hsl::new(1, 1.0, 1.0),
            to: Hsl::new(2, 2.0, 2.0),
        };
        assert_eq!(
            radial.to_string(),
            "radial-gradient(circle, hsl(1,1%,1%), hsl(2,2%,2%))"
        );

        let conic = Gradient::Conic {
            stops: vec![
                ConicStop { color: RED, start: 0, end: 120 },
                ConicStop { color: BLUE, start: 120, end: 240 },
                ConicStop { color: RED, start: 240, end: 360 },
            ],
        };
        assert_eq!(
            conic.to_string(),
            "conic-gradient(hsl(0,100%,50%) 0deg 120deg, hsl(240,100%,50%) 120deg 240deg, hsl(0,100%,50%) 240deg 360deg)"
        );
    }

    #[test]
    fn test_linear_to_right_runs_left_to_right() {
        let g = Gradient::Linear { angle: 90, from: RED, to: BLUE };
        let left = g.color_at(0.0, 5.0, 100.0, 10.0);
        let right = g.color_at(99.0, 5.0, 100.0, 10.0);
        assert!(left.r > 240 && left.b < 15, "{left:?}");
        assert!(right.b > 240 && right.r < 15, "{right:?}");
    }

    #[test]
    fn test_linear_zero_degrees_points_up() {
        let g = Gradient::Linear { angle: 0, from: RED, to: BLUE };
        let bottom = g.color_at(5.0, 99.0, 10.0, 100.0);
        let top = g.color_at(5.0, 0.0, 10.0, 100.0);
        assert!(bottom.r > 240);
        assert!(top.b > 240);
    }

    #[test]
    fn test_radial_center_and_corner() {
        let g = Gradient::Radial { from: RED, to: BLUE };
        let center = g.color_at(49.5, 49.5, 100.0, 100.0);
        assert_eq!(center, RED.to_rgb());
        let corner = g.color_at(-0.5, -0.5, 100.0, 100.0);
        assert_eq!(corner, BLUE.to_rgb());
    }

    #[test]
    fn test_conic_quadrants() {
        let green = Hsl::new(120, 100.0, 50.0);
        let g = Gradient::Conic {
            stops: vec![
                ConicStop { color: RED, start: 0, end: 90 },
                ConicStop { color: green, start: 90, end: 180 },
                ConicStop { color: BLUE, start: 180, end: 270 },
                ConicStop { color: RED, start: 270, end: 360 },
            ],
        };
        // upper right, lower right, lower left
        assert_eq!(g.color_at(70.0, 20.0, 100.0, 100.0), RED.to_rgb());
        assert_eq!(g.color_at(70.0, 80.0, 100.0, 100.0), green.to_rgb());
        assert_eq!(g.color_at(20.0, 80.0, 100.0, 100.0), BLUE.to_rgb());
    }

    #[test]
    fn test_parse_type() {
        assert_eq!("radial".parse::<GradientType>(), Ok(GradientType::Radial));
        assert_eq!("Conic".parse::<GradientType>(), Ok(GradientType::Conical));
        let err = "spiral".parse::<GradientType>().unwrap_err();
        assert!(err.to_string().contains("spiral"));
    }

    #[test]
    fn test_type_cycle() {
        for t in GradientType::ALL {
            assert_eq!(t.next().prev(), t);
        }
    }
}
