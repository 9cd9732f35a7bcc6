//! Density to color mapping.

use image::Rgb;

/// Color used when the grid holds no density at all.
pub const NEUTRAL: Rgb<u8> = Rgb([255, 255, 255]);

/// Ramp stops at 0, 0.25, 0.5, 0.75 and 1.0: blue, cyan, green, yellow, red.
const RAMP: [[f64; 3]; 5] = [
    [0.0, 0.0, 255.0],
    [0.0, 255.0, 255.0],
    [0.0, 255.0, 0.0],
    [255.0, 255.0, 0.0],
    [255.0, 0.0, 0.0],
];

const SEGMENT: f64 = 0.25;

/// Map a density to a color relative to the grid maximum.
///
/// Low densities are blue, the maximum is red. A zero maximum yields
/// [`NEUTRAL`].
pub fn density_to_color(density: f64, max_density: f64) -> Rgb<u8> {
    if max_density == 0.0 {
        return NEUTRAL;
    }

    let normalized = (density / max_density).clamp(0.0, 1.0);
    let segment = ((normalized / SEGMENT) as usize).min(RAMP.len() - 2);
    let t = (normalized - segment as f64 * SEGMENT) / SEGMENT;

    let from = RAMP[segment];
    let to = RAMP[segment + 1];
    Rgb(std::array::from_fn(|c| {
        let value = (from[c] + t * (to[c] - from[c])) as i64;
        value.clamp(0, 255) as u8
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ramp_endpoints() {
        assert_eq!(density_to_color(0.0, 10.0), Rgb([0, 0, 255]));
        assert_eq!(density_to_color(10.0, 10.0), Rgb([255, 0, 0]));
    }

    #[test]
    fn test_zero_max_is_neutral() {
        assert_eq!(density_to_color(0.0, 0.0), NEUTRAL);
        assert_eq!(density_to_color(5.0, 0.0), NEUTRAL);
    }

    #[test]
    fn test_breakpoints() {
        assert_eq!(density_to_color(0.25, 1.0), Rgb([0, 255, 255]));
        assert_eq!(density_to_color(0.5, 1.0), Rgb([0, 255, 0]));
        assert_eq!(density_to_color(0.75, 1.0), Rgb([255, 255, 0]));
    }

    #[test]
    fn test_interpolation_truncates() {
        // Halfway through the first segment: g = 127.5 -> 127.
        assert_eq!(density_to_color(0.125, 1.0), Rgb([0, 127, 255]));
        // Halfway through the last segment: g = 127.5 -> 127.
        assert_eq!(density_to_color(0.875, 1.0), Rgb([255, 127, 0]));
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(density_to_color(20.0, 10.0), Rgb([255, 0, 0]));
        assert_eq!(density_to_color(-1.0, 10.0), Rgb([0, 0, 255]));
    }

    proptest! {
        #[test]
        fn prop_one_channel_saturated(d in 0.0f64..100.0, max in 0.001f64..100.0) {
            let Rgb([r, g, b]) = density_to_color(d, max);
            // Every ramp color keeps at least one channel at full strength.
            prop_assert!(r == 255 || g == 255 || b == 255);
        }
    }
}
