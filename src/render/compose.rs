//! Pixel buffer composition.

use image::{Rgb, RgbImage};

use super::color::density_to_color;
use super::density::density;
use super::scale::scale;
use crate::schema::{Attractor, RenderConfig};

/// Draw scaled points onto a fresh buffer.
///
/// The buffer is `config.width x config.height`, filled with the background.
/// Each in-bounds point gets the foreground color, or a density color when
/// `config.density` is set. Out-of-bounds points are skipped.
pub fn compose(xs: &[i64], ys: &[i64], config: &RenderConfig) -> RgbImage {
    let mut img = RgbImage::from_pixel(config.width, config.height, Rgb(config.background));
    let (width, height) = (config.width as i64, config.height as i64);
    let in_bounds = |x: i64, y: i64| (0..width).contains(&x) && (0..height).contains(&y);

    match &config.density {
        Some(density_config) => {
            let grid = density(
                xs,
                ys,
                config.width as usize,
                config.height as usize,
                density_config.radius,
            );
            let max_density = grid.max();
            log::debug!(
                "density grid {}x{} radius {} max {:.3}",
                grid.width,
                grid.height,
                density_config.radius,
                max_density
            );

            for (&x, &y) in xs.iter().zip(ys.iter()) {
                if in_bounds(x, y) {
                    let color = density_to_color(grid.get(x as usize, y as usize), max_density);
                    img.put_pixel(x as u32, y as u32, color);
                }
            }
        }
        None => {
            let foreground = Rgb(config.foreground);
            for (&x, &y) in xs.iter().zip(ys.iter()) {
                if in_bounds(x, y) {
                    img.put_pixel(x as u32, y as u32, foreground);
                }
            }
        }
    }

    img
}

/// Scale and draw raw coordinates.
pub fn render_points(xs: &[f64], ys: &[f64], config: &RenderConfig) -> RgbImage {
    let (sx, sy) = scale(xs, ys, config.width, config.height, config.margin);
    compose(&sx, &sy, config)
}

/// Render an accepted attractor.
pub fn render(attractor: &Attractor, config: &RenderConfig) -> RgbImage {
    render_points(&attractor.xs(), &attractor.ys(), config)
}
