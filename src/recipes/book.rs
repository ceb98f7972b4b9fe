use crate::config::Dirs;
use crate::content::{self, Picker};
use crate::error::CoverError;
use crate::layout::{self, TextBlock};
use crate::render::{background, font};
use crate::sink;
use crate::theme::{self, Theme};
use std::path::PathBuf;

const TITLE_WRAP_WIDTH: usize = 30;
const TITLE_LINE_HEIGHT: i32 = 60;
// Label and title are pinned rather than centered as a block
const LABEL_Y: i32 = 150;
const TITLE_Y: i32 = 220;

/// Random book recommendation: label, wrapped title, author and year,
/// stacked from a fixed top offset.
pub fn render(picker: &mut impl Picker, theme: Theme, dirs: &Dirs) -> Result<PathBuf, CoverError> {
    let books = content::load_books(&dirs.data)?;
    let book = content::pick(picker, &books, "books")?;
    let palette = theme::book(theme);

    let mut canvas = background::solid(palette.background);

    let label_font = font::load(&dirs.fonts, font::SANS_LIGHT, 20.0);
    let title_font = font::load(&dirs.fonts, font::SERIF, 48.0);
    let author_font = font::load(&dirs.fonts, font::SANS_LIGHT, 24.0);
    let year_font = font::load(&dirs.fonts, font::SANS_LIGHT_ITALIC, 18.0);

    layout::draw_centered_line(
        &mut canvas,
        "Book Recommendation",
        &label_font,
        LABEL_Y,
        palette.accent,
    );

    let title = TextBlock::new(&book.title, title_font, TITLE_WRAP_WIDTH, TITLE_LINE_HEIGHT);
    let title_end = title.draw(&mut canvas, TITLE_Y, palette.text);

    let author_y = title_end + 30;
    layout::draw_centered_line(
        &mut canvas,
        &format!("by {}", book.author),
        &author_font,
        author_y,
        palette.text,
    );
    layout::draw_centered_line(
        &mut canvas,
        &format!("Published: {}", book.year),
        &year_font,
        author_y + 40,
        palette.accent,
    );

    sink::save_png(
        canvas,
        &dirs.output,
        &format!("book_recommendation_{theme}.png"),
    )
}
