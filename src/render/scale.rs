//! Mapping trajectory coordinates into pixel space.

/// Scale coordinates into `[margin, dimension - margin]` per axis.
///
/// Each axis is min-max normalized independently and truncated to integer
/// pixel positions. An axis with zero range is treated as having unit range.
pub fn scale(
    xs: &[f64],
    ys: &[f64],
    width: u32,
    height: u32,
    margin: u32,
) -> (Vec<i64>, Vec<i64>) {
    (
        scale_axis(xs, width, margin),
        scale_axis(ys, height, margin),
    )
}

/// Scale one axis into `[margin, extent - margin]`.
pub fn scale_axis(values: &[f64], extent: u32, margin: u32) -> Vec<i64> {
    let Some((min, max)) = value_range(values) else {
        return Vec::new();
    };

    let mut range = max - min;
    if range == 0.0 {
        log::debug!("degenerate axis range at {min}, substituting unit range");
        range = 1.0;
    }

    let margin = margin as f64;
    let effective = extent as f64 - 2.0 * margin;

    values
        .iter()
        .map(|&v| (margin + (v - min) / range * effective) as i64)
        .collect()
}

/// Minimum and maximum of a slice, or `None` when empty.
fn value_range(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}
