use crate::render::canvas::{Canvas, HEIGHT};
use image::Rgb;

pub fn solid(color: Rgb<u8>) -> Canvas {
    Canvas::solid(color)
}

/// Vertical two-color linear gradient, interpolated per row. Horizontal
/// position never affects color.
pub fn gradient(top: Rgb<u8>, bottom: Rgb<u8>) -> Canvas {
    let mut canvas = Canvas::solid(top);
    for y in 0..HEIGHT {
        let t = y as f32 / HEIGHT as f32;
        let color = Rgb([
            lerp(top[0], bottom[0], t),
            lerp(top[1], bottom[1], t),
            lerp(top[2], bottom[2], t),
        ]);
        canvas.fill_row(y, color);
    }
    canvas
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 * (1.0 - t) + b as f32 * t).round() as u8
}
