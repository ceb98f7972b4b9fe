use crate::config::Dirs;
use crate::content::{self, Picker};
use crate::error::CoverError;
use crate::layout::{self, TextBlock};
use crate::render::{background, font};
use crate::sink;
use image::Rgb;
use std::path::PathBuf;

// The one theme-less recipe: a fixed night-sky gradient.
const BACKGROUND_TOP: Rgb<u8> = Rgb([20, 25, 40]);
const BACKGROUND_BOTTOM: Rgb<u8> = Rgb([40, 45, 70]);
const QUOTE_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
const CHARACTER_COLOR: Rgb<u8> = Rgb([255, 200, 100]);
const TITLE_COLOR: Rgb<u8> = Rgb([200, 200, 200]);

const WRAP_WIDTH: usize = 50;
const LINE_HEIGHT: i32 = 45;
// Room kept under the quote block for the two caption lines
const TRAILING_ROOM: i32 = 100;

/// Random anime quote over a dark gradient, with the character name and
/// series title captioned below the quote block.
pub fn render(picker: &mut impl Picker, dirs: &Dirs) -> Result<PathBuf, CoverError> {
    let quotes = content::load_anime_quotes(&dirs.data)?;
    let record = content::pick(picker, &quotes, "anime quotes")?;

    let mut canvas = background::gradient(BACKGROUND_TOP, BACKGROUND_BOTTOM);

    let quote_font = font::load(&dirs.fonts, font::SANS_LIGHT, 28.0);
    let character_font = font::load(&dirs.fonts, font::SERIF, 20.0);
    let title_font = font::load(&dirs.fonts, font::SANS_LIGHT_ITALIC, 16.0);

    let block = TextBlock::new(&record.quote, quote_font, WRAP_WIDTH, LINE_HEIGHT);
    let start_y = layout::center_block_y(block.total_height(), TRAILING_ROOM);
    let end_y = block.draw(&mut canvas, start_y, QUOTE_COLOR);

    let character_y = end_y + 20;
    layout::draw_centered_line(
        &mut canvas,
        &format!("— {}", record.character),
        &character_font,
        character_y,
        CHARACTER_COLOR,
    );
    layout::draw_centered_line(
        &mut canvas,
        &record.anime,
        &title_font,
        character_y + 35,
        TITLE_COLOR,
    );

    sink::save_png(canvas, &dirs.output, "anime_quote.png")
}
