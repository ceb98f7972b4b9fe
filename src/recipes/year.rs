use crate::config::Dirs;
use crate::error::CoverError;
use crate::layout;
use crate::progress::{self, ProgressBar};
use crate::render::{background, font};
use crate::sink;
use crate::theme::{self, Theme};
use chrono::Local;
use std::path::PathBuf;

const BAR_WIDTH: u32 = 600;
const BAR_HEIGHT: u32 = 20;
const BAR_Y: i32 = 350;

/// How much of the current year has passed: big percentage, caption,
/// progress bar and a day count, all pinned to fixed rows.
pub fn render(theme: Theme, dirs: &Dirs) -> Result<PathBuf, CoverError> {
    let today = Local::now().date_naive();
    let stats = progress::year_progress(today);
    let palette = theme::year(theme);

    let mut canvas = background::solid(palette.background);

    let percent_font = font::load(&dirs.fonts, font::SERIF_BOLD, 72.0);
    let caption_font = font::load(&dirs.fonts, font::SANS_LIGHT, 24.0);

    layout::draw_centered_line(
        &mut canvas,
        &format!("{}%", stats.percentage),
        &percent_font,
        200,
        palette.text,
    );
    layout::draw_centered_line(
        &mut canvas,
        &format!("of year {} completed", stats.year),
        &caption_font,
        290,
        palette.text,
    );

    ProgressBar::centered(BAR_Y, BAR_WIDTH, BAR_HEIGHT, stats.percentage)
        .draw(&mut canvas, &palette);

    layout::draw_centered_line(
        &mut canvas,
        &format!("{} of {} days", stats.days_passed, stats.days_in_year),
        &caption_font,
        400,
        palette.text,
    );

    sink::save_png(canvas, &dirs.output, &format!("year_progress_{theme}.png"))
}
