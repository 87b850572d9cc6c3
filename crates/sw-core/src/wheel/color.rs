use std::fmt;

/// Golden-angle hue step for generated colors, degrees.
pub const GOLDEN_ANGLE_DEGREES: f64 = 137.508;

/// Curated palette for the first 24 sectors. The head of the table is
/// the classic 4-color rotation used by tiny wheels.
const PALETTE: [&str; 24] = [
    "#4285F4", "#34A853", "#FBBC04", "#EA4335", // base rotation
    "#673AB7", "#FF7043", "#00ACC1", "#D81B60", "#7CB342", "#5C6BC0", "#F4511E", "#00897B",
    "#8E24AA", "#FFB300", "#039BE5", "#C0CA33", "#E53935", "#3949AB", "#43A047", "#FB8C00",
    "#1E88E5", "#6D4C41", "#757575", "#546E7A",
];

const SATURATION_CYCLE: [u8; 3] = [70, 80, 90];
const LIGHTNESS_CYCLE: [u8; 4] = [45, 50, 55, 60];

/// Fill color for one sector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentColor {
    /// Curated hex value from the fixed palette.
    Palette(&'static str),
    /// Golden-angle generated HSL, used past the palette.
    Generated { hue: f64, saturation: u8, lightness: u8 },
}

impl fmt::Display for SegmentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Palette(hex) => f.write_str(hex),
            Self::Generated {
                hue,
                saturation,
                lightness,
            } => write!(f, "hsl({hue:.3}, {saturation}%, {lightness}%)"),
        }
    }
}

/// Fill color for sector `index`.
///
/// Indices 0..=4 cycle the 4-color base rotation so small wheels keep
/// the familiar look; 5..24 walk the full curated palette; beyond that
/// colors are generated with golden-angle hue spacing so arbitrarily
/// many neighbors stay perceptually separated.
pub fn segment_color(index: usize) -> SegmentColor {
    if index <= 4 {
        SegmentColor::Palette(PALETTE[index % 4])
    } else if index < PALETTE.len() {
        SegmentColor::Palette(PALETTE[index])
    } else {
        SegmentColor::Generated {
            hue: (index as f64 * GOLDEN_ANGLE_DEGREES) % 360.0,
            saturation: SATURATION_CYCLE[index % SATURATION_CYCLE.len()],
            lightness: LIGHTNESS_CYCLE[index % LIGHTNESS_CYCLE.len()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_wheels_cycle_four_base_colors() {
        assert_eq!(segment_color(0), SegmentColor::Palette("#4285F4"));
        assert_eq!(segment_color(3), SegmentColor::Palette("#EA4335"));
        // Index 4 wraps back to the first base color.
        assert_eq!(segment_color(4), SegmentColor::Palette("#4285F4"));
    }

    #[test]
    fn mid_range_uses_full_palette() {
        assert_eq!(segment_color(5), SegmentColor::Palette("#FF7043"));
        assert_eq!(segment_color(23), SegmentColor::Palette("#546E7A"));
    }

    #[test]
    fn generated_colors_follow_golden_angle() {
        let SegmentColor::Generated {
            hue,
            saturation,
            lightness,
        } = segment_color(24)
        else {
            panic!("index 24 must be generated");
        };
        assert!((hue - (24.0 * GOLDEN_ANGLE_DEGREES) % 360.0).abs() < 1e-9);
        assert_eq!(saturation, SATURATION_CYCLE[24 % 3]);
        assert_eq!(lightness, LIGHTNESS_CYCLE[24 % 4]);
    }

    #[test]
    fn generated_hue_stays_in_range() {
        for index in 24..2000 {
            let SegmentColor::Generated { hue, .. } = segment_color(index) else {
                panic!("index {index} must be generated");
            };
            assert!((0.0..360.0).contains(&hue), "hue {hue} out of range");
        }
    }

    #[test]
    fn display_formats_css_values() {
        assert_eq!(segment_color(0).to_string(), "#4285F4");
        let generated = segment_color(25).to_string();
        assert!(generated.starts_with("hsl("), "{generated}");
    }
}
