use crate::config::Dirs;
use crate::content::{self, Picker};
use crate::error::CoverError;
use crate::layout::{self, TextBlock};
use crate::render::{background, font};
use crate::sink;
use crate::theme::{self, Theme};
use std::path::PathBuf;

const WRAP_WIDTH: usize = 60;
const LINE_HEIGHT: i32 = 50;
const ATTRIBUTION_GAP: i32 = 30;

/// Random stoic quote on a solid themed background, block centered
/// vertically, with an attribution line beneath.
pub fn render(picker: &mut impl Picker, theme: Theme, dirs: &Dirs) -> Result<PathBuf, CoverError> {
    let quotes = content::load_stoic_quotes(&dirs.data)?;
    let quote = content::pick(picker, &quotes, "stoic quotes")?;
    let palette = theme::stoic(theme);

    let mut canvas = background::solid(palette.background);

    let quote_font = font::load(&dirs.fonts, font::SERIF, 32.0);
    let attr_font = font::load(&dirs.fonts, font::SANS_LIGHT, 18.0);

    let block = TextBlock::new(quote, quote_font, WRAP_WIDTH, LINE_HEIGHT);
    let start_y = layout::center_block_y(block.total_height(), 0);
    let end_y = block.draw(&mut canvas, start_y, palette.text);

    layout::draw_centered_line(
        &mut canvas,
        "— Stoic Philosophy",
        &attr_font,
        end_y + ATTRIBUTION_GAP,
        palette.accent,
    );

    sink::save_png(canvas, &dirs.output, &format!("stoic_quote_{theme}.png"))
}
