//! Radius-weighted density splatting.
//!
//! Every in-bounds point adds `1 - distance / radius` to each cell within
//! `radius` of it. Contributions accumulate, so dense regions of the
//! attractor end up with large cell values.

/// Per-pixel density accumulator, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityGrid {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<f64>,
}

impl DensityGrid {
    /// Zeroed grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0.0; width * height],
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.cells[y * self.width + x]
    }

    /// Largest cell value, scanning the whole grid (0 for an empty grid).
    pub fn max(&self) -> f64 {
        self.cells.iter().copied().fold(0.0, f64::max)
    }

    /// Signed-coordinate lookup; `None` outside the grid.
    #[inline]
    pub fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }
}

/// Weight a point contributes to a cell at `distance`.
///
/// Decays linearly from 1 at the point to 0 at `radius`, and is 0 beyond.
/// A zero radius only weights the point's own cell.
#[inline]
pub fn splat_weight(distance: f64, radius: usize) -> f64 {
    if radius == 0 {
        return if distance == 0.0 { 1.0 } else { 0.0 };
    }
    let radius = radius as f64;
    if distance > radius {
        0.0
    } else {
        1.0 - distance / radius
    }
}

/// Precomputed cell offsets and weights within the splat radius.
///
/// Offsets are limited to what can connect two cells of the grid, so the
/// tap count is bounded by the grid size rather than the radius.
#[derive(Debug, Clone)]
struct Stencil {
    taps: Vec<(i64, i64, f64)>,
}

impl Stencil {
    fn new(radius: usize, width: usize, height: usize) -> Self {
        let reach_x = radius.min(width.saturating_sub(1)) as i64;
        let reach_y = radius.min(height.saturating_sub(1)) as i64;
        let span = |reach: i64| 2 * reach as usize + 1;
        let mut taps = Vec::with_capacity(span(reach_x) * span(reach_y));
        for dy in -reach_y..=reach_y {
            for dx in -reach_x..=reach_x {
                let distance = (dx as f64).hypot(dy as f64);
                if distance <= radius as f64 {
                    taps.push((dx, dy, splat_weight(distance, radius)));
                }
            }
        }
        Self { taps }
    }
}

/// Build a density grid of `width x height` from scaled points.
///
/// Points outside the grid are ignored; their neighborhoods are clipped at
/// the grid edges.
pub fn density(
    xs: &[i64],
    ys: &[i64],
    width: usize,
    height: usize,
    radius: usize,
) -> DensityGrid {
    let mut grid = DensityGrid::new(width, height);
    let stencil = Stencil::new(radius, width, height);

    for (&x, &y) in xs.iter().zip(ys.iter()) {
        if grid.index_of(x, y).is_none() {
            continue;
        }
        for &(dx, dy, weight) in &stencil.taps {
            if let Some(i) = grid.index_of(x + dx, y + dy) {
                grid.cells[i] += weight;
            }
        }
    }

    grid
}
