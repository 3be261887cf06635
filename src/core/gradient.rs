//! Three-color scale in the manner of spreadsheet conditional formatting.

/// 8-bit sRGB color.
#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
#[display("rgb({r}, {g}, {b})")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation towards `to`, each channel rounded and clamped independently.
    #[must_use]
    pub fn lerp(self, to: Self, t: f64) -> Self {
        Self {
            r: lerp_channel(self.r, to.r, t),
            g: lerp_channel(self.g, to.g, t),
            b: lerp_channel(self.b, to.b, t),
        }
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    let from = f64::from(from);
    (from + t * (f64::from(to) - from)).round().clamp(0.0, 255.0) as u8
}

/// Two-segment gradient: `low` at the minimum, `mid` at the midpoint, and `high` at the maximum.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Gradient {
    pub low: Rgb,
    pub mid: Rgb,
    pub high: Rgb,
}

impl Gradient {
    /// Blue for the cheapest, near-white in the middle, red for the most expensive.
    pub const COST: Self = Self {
        low: Rgb::new(90, 138, 198),
        mid: Rgb::new(252, 252, 255),
        high: Rgb::new(248, 105, 107),
    };

    /// Pick the color for the value within the observed range.
    ///
    /// A degenerate segment (zero width) yields its starting color.
    #[must_use]
    pub fn color_for(&self, value: f64, min: f64, max: f64) -> Rgb {
        let midpoint = (min + max) / 2.0;
        if value <= midpoint {
            self.low.lerp(self.mid, fraction(value - min, midpoint - min))
        } else {
            self.mid.lerp(self.high, fraction(value - midpoint, max - midpoint))
        }
    }
}

fn fraction(offset: f64, width: f64) -> f64 {
    let t = offset / width;
    if t.is_finite() { t } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color_for(value: f64, min: f64, max: f64) -> Rgb {
        Gradient::COST.color_for(value, min, max)
    }

    #[test]
    fn test_anchors() {
        assert_eq!(color_for(0.1, 0.1, 0.3), Gradient::COST.low);
        assert_eq!(color_for(0.2, 0.1, 0.3), Gradient::COST.mid);
        assert_eq!(color_for(0.3, 0.1, 0.3), Gradient::COST.high);
        assert_eq!(color_for(16.0, 16.0, 18.0), Rgb::new(90, 138, 198));
        assert_eq!(color_for(18.0, 16.0, 18.0), Rgb::new(248, 105, 107));
        assert_eq!(color_for(17.0, 16.0, 18.0), Rgb::new(252, 252, 255));
    }

    #[test]
    fn test_interpolation() {
        // Quarter of the range is halfway through the lower segment.
        assert_eq!(color_for(1.0, 0.0, 4.0), Rgb::new(171, 195, 227));
        // Three quarters is halfway through the upper segment.
        assert_eq!(color_for(3.0, 0.0, 4.0), Rgb::new(250, 179, 181));
    }

    #[test]
    fn test_degenerate_range() {
        assert_eq!(color_for(5.0, 5.0, 5.0), Gradient::COST.low);
        assert_eq!(color_for(0.0, 0.0, 0.0), Gradient::COST.low);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(color_for(100.0, 0.0, 1.0), Rgb::new(0, 0, 0));
        assert_eq!(color_for(-100.0, 0.0, 1.0), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_non_finite_value() {
        assert_eq!(color_for(f64::NAN, 0.0, 1.0), Gradient::COST.mid);
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgb::new(90, 138, 198).to_string(), "rgb(90, 138, 198)");
    }
}
