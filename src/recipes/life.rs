use crate::config::Dirs;
use crate::error::CoverError;
use crate::layout;
use crate::progress::{self, ProgressBar};
use crate::render::{background, font};
use crate::sink;
use crate::theme::{self, Theme};
use chrono::{Datelike, Local};
use std::path::PathBuf;

const BAR_WIDTH: u32 = 600;
const BAR_HEIGHT: u32 = 25;
const BAR_Y: i32 = 330;

/// Life progress from a birth year and estimated expectancy.
///
/// Parameters are validated before any canvas work, so a rejected call
/// produces no output file.
pub fn render(
    birth_year: i32,
    life_expectancy: i32,
    theme: Theme,
    dirs: &Dirs,
) -> Result<PathBuf, CoverError> {
    let current_year = Local::now().year();
    let stats = progress::life_progress(birth_year, life_expectancy, current_year)?;
    let palette = theme::life(theme);

    let mut canvas = background::solid(palette.background);

    let percent_font = font::load(&dirs.fonts, font::SERIF, 60.0);
    let caption_font = font::load(&dirs.fonts, font::SANS_LIGHT, 22.0);
    let footnote_font = font::load(&dirs.fonts, font::SANS_LIGHT_ITALIC, 18.0);

    layout::draw_centered_line(&mut canvas, "Life Progress", &caption_font, 150, palette.text);
    layout::draw_centered_line(
        &mut canvas,
        &format!("{}%", stats.percentage),
        &percent_font,
        200,
        palette.text,
    );
    layout::draw_centered_line(
        &mut canvas,
        &format!("Age {} of {} years", stats.current_age, stats.life_expectancy),
        &caption_font,
        280,
        palette.text,
    );

    ProgressBar::centered(BAR_Y, BAR_WIDTH, BAR_HEIGHT, stats.percentage)
        .draw(&mut canvas, &palette);

    layout::draw_centered_line(
        &mut canvas,
        &format!("{} years remaining (estimated)", stats.years_left),
        &footnote_font,
        380,
        palette.text,
    );

    sink::save_png(canvas, &dirs.output, &format!("life_progress_{theme}.png"))
}
