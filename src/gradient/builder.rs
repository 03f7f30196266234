//! Random gradient construction and the descriptor value object.

use rand::Rng;
use serde::Serialize;

use super::color::{ColorStyle, sample};
use super::shape::{ConicStop, Gradient, GradientType};

/// Descriptors generated per batch (initial load, refresh, each append).
pub const PAGE_SIZE: usize = 12;

/// A gradient together with its CSS value and the two copyable encodings.
/// The strings are derived once at construction; there are no setters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientDescriptor {
    #[serde(skip)]
    gradient: Gradient,
    #[serde(rename = "gradient")]
    value: String,
    css: String,
    tailwind: String,
}

impl GradientDescriptor {
    pub fn new(gradient: Gradient) -> Self {
        let value = gradient.to_string();
        Self {
            css: css_snippet(&value),
            tailwind: tailwind_snippet(&value),
            value,
            gradient,
        }
    }

    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    /// The bare CSS gradient value, e.g. `radial-gradient(circle, ...)`.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    pub fn tailwind(&self) -> &str {
        &self.tailwind
    }
}

pub fn css_snippet(value: &str) -> String {
    format!("background: {value};")
}

/// Arbitrary-value utility class: every run of whitespace becomes a single
/// underscore.
pub fn tailwind_snippet(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 4);
    out.push_str("bg-[");
    let mut in_space = false;
    for ch in value.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out.push(']');
    out
}

/// Draw one gradient of the given type.
pub fn generate<R: Rng + ?Sized>(ty: GradientType, style: ColorStyle, rng: &mut R) -> Gradient {
    match ty {
        GradientType::Linear => {
            let from = sample(style, rng);
            let to = sample(style, rng);
            let angle = rng.random_range(0..360);
            Gradient::Linear { angle, from, to }
        }
        GradientType::Radial => Gradient::Radial {
            from: sample(style, rng),
            to: sample(style, rng),
        },
        GradientType::Conical => {
            let count: u16 = rng.random_range(3..=5);
            let step = 360 / count;
            let stops = (0..count)
                .map(|i| ConicStop {
                    color: sample(style, rng),
                    start: i * step,
                    end: (i + 1) * step,
                })
                .collect();
            Gradient::Conic { stops }
        }
    }
}

pub fn build<R: Rng + ?Sized>(ty: GradientType, style: ColorStyle, rng: &mut R) -> GradientDescriptor {
    GradientDescriptor::new(generate(ty, style, rng))
}

pub fn build_many<R: Rng + ?Sized>(
    ty: GradientType,
    style: ColorStyle,
    count: usize,
    rng: &mut R,
) -> Vec<GradientDescriptor> {
    (0..count).map(|_| build(ty, style, rng)).collect()
}

/// One page worth of descriptors.
pub fn build_page<R: Rng + ?Sized>(
    ty: GradientType,
    style: ColorStyle,
    rng: &mut R,
) -> Vec<GradientDescriptor> {
    build_many(ty, style, PAGE_SIZE, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::color::Hsl;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_page_sizes() {
        let mut rng = StdRng::seed_from_u64(3);
        for ty in GradientType::ALL {
            for style in [ColorStyle::Pastel, ColorStyle::Vivid, ColorStyle::Unique, ColorStyle::Fixed] {
                let page = build_page(ty, style, &mut rng);
                assert_eq!(page.len(), PAGE_SIZE);
                assert!(page.iter().all(|d| d.gradient().gradient_type() == ty));
            }
        }
    }

    #[test]
    fn test_conic_stops_cover_full_circle() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            let Gradient::Conic { stops } = generate(GradientType::Conical, ColorStyle::Vivid, &mut rng)
            else {
                panic!("expected a conic gradient");
            };
            assert!((3..=5).contains(&stops.len()), "{} stops", stops.len());
            seen.insert(stops.len());

            let total: u16 = stops.iter().map(ConicStop::width).sum();
            assert_eq!(total, 360);
            assert_eq!(stops[0].start, 0);
            assert_eq!(stops.last().unwrap().end, 360);
            for pair in stops.windows(2) {
                assert_eq!(pair[0].end, pair[1].start);
                assert_eq!(pair[0].width(), pair[1].width());
            }
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_linear_angle_in_range() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1_000 {
            let Gradient::Linear { angle, .. } = generate(GradientType::Linear, ColorStyle::Pastel, &mut rng)
            else {
                panic!("expected a linear gradient");
            };
            assert!(angle < 360);
        }
    }

    #[test]
    fn test_same_seed_same_batch() {
        let a = build_page(GradientType::Conical, ColorStyle::Unique, &mut StdRng::seed_from_u64(42));
        let b = build_page(GradientType::Conical, ColorStyle::Unique, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_snippets() {
        let d = GradientDescriptor::new(Gradient::Linear {
            angle: 90,
            from: Hsl::new(10, 70.0, 75.0),
            to: Hsl::new(200, 70.0, 75.0),
        });
        assert_eq!(
            d.css(),
            "background: linear-gradient(90deg, hsl(10,70%,75%), hsl(200,70%,75%));"
        );
        assert_eq!(
            d.tailwind(),
            "bg-[linear-gradient(90deg,_hsl(10,70%,75%),_hsl(200,70%,75%))]"
        );
    }

    #[test]
    fn test_tailwind_replaces_whitespace_runs() {
        assert_eq!(
            tailwind_snippet("radial-gradient(circle, hsl(1,1%,1%), hsl(2,2%,2%))"),
            "bg-[radial-gradient(circle,_hsl(1,1%,1%),_hsl(2,2%,2%))]"
        );
        assert_eq!(tailwind_snippet("a  \t b\nc"), "bg-[a_b_c]");
        assert_eq!(tailwind_snippet(" x "), "bg-[_x_]");
    }

    #[test]
    fn test_json_shape() {
        let d = GradientDescriptor::new(Gradient::Radial {
            from: Hsl::new(1, 1.0, 1.0),
            to: Hsl::new(2, 2.0, 2.0),
        });
        let v = serde_json::to_value(&d).unwrap();
        assert_eq!(v["gradient"], "radial-gradient(circle, hsl(1,1%,1%), hsl(2,2%,2%))");
        assert_eq!(v["css"], "background: radial-gradient(circle, hsl(1,1%,1%), hsl(2,2%,2%));");
        assert!(v["tailwind"].as_str().unwrap().starts_with("bg-["));
    }
}
