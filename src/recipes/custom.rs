use crate::config::Dirs;
use crate::error::CoverError;
use crate::layout::{self, TextBlock};
use crate::render::{background, font};
use crate::sink;
use crate::theme::{self, Theme};
use std::path::PathBuf;

const WRAP_WIDTH: usize = 40;
const LINE_HEIGHT: i32 = 55;

/// User-supplied text on a soft themed gradient, block centered
/// vertically.
pub fn render(text: &str, theme: Theme, dirs: &Dirs) -> Result<PathBuf, CoverError> {
    let palette = theme::motivational(theme);

    let mut canvas = background::gradient(palette.top, palette.bottom);

    let text_font = font::load(&dirs.fonts, font::SERIF, 36.0);
    let block = TextBlock::new(text, text_font, WRAP_WIDTH, LINE_HEIGHT);
    let start_y = layout::center_block_y(block.total_height(), 0);
    block.draw(&mut canvas, start_y, palette.text);

    sink::save_png(
        canvas,
        &dirs.output,
        &format!("motivational_text_{theme}.png"),
    )
}
