use crate::render::font::FontHandle;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut};
use imageproc::rect::Rect;

/// Cover dimensions. Fixed for every recipe.
pub const WIDTH: u32 = 1500;
pub const HEIGHT: u32 = 600;

/// The RGB pixel buffer one render call composes and then hands to the sink.
/// Never shared across render calls.
pub struct Canvas {
    pixels: RgbImage,
}

impl Canvas {
    pub fn solid(color: Rgb<u8>) -> Self {
        Self {
            pixels: RgbImage::from_pixel(WIDTH, HEIGHT, color),
        }
    }

    pub fn fill_row(&mut self, y: u32, color: Rgb<u8>) {
        if y >= HEIGHT {
            return;
        }
        for x in 0..WIDTH {
            self.pixels.put_pixel(x, y, color);
        }
    }

    /// Filled rectangle, clipped to the canvas bounds.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb<u8>) {
        if width == 0 || height == 0 {
            return;
        }
        draw_filled_rect_mut(
            &mut self.pixels,
            Rect::at(x, y).of_size(width, height),
            color,
        );
    }

    /// Stamp `text` with its top-left corner at (x, y).
    ///
    /// A real face is rasterized glyph by glyph; the builtin fallback
    /// color-fills one cell per visible character so layout stays legible
    /// even without any font files on disk.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, font: &FontHandle, color: Rgb<u8>) {
        match font {
            FontHandle::Glyph { font, scale } => {
                draw_text_mut(&mut self.pixels, color, x, y, *scale, font, text);
            }
            FontHandle::Builtin { size } => {
                let advance = size * 0.6;
                let cell_width = (advance - 2.0).max(1.0) as u32;
                let cell_height = *size as u32;
                for (i, c) in text.chars().enumerate() {
                    if c.is_whitespace() {
                        continue;
                    }
                    let cell_x = x + (i as f32 * advance) as i32 + 1;
                    self.fill_rect(cell_x, y, cell_width, cell_height, color);
                }
            }
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        *self.pixels.get_pixel(x, y)
    }

    pub fn into_image(self) -> RgbImage {
        self.pixels
    }
}
