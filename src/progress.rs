//! Progress derivations and the bar primitive they feed.

use crate::error::CoverError;
use crate::render::canvas::{Canvas, WIDTH};
use crate::theme::Palette;
use chrono::{Datelike, NaiveDate};

/// A background rectangle with a foreground fill proportional to
/// `fraction`. The fraction is clamped to [0, 1] at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressBar {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub fraction: f32,
}

impl ProgressBar {
    pub fn new(x: i32, y: i32, width: u32, height: u32, fraction: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fraction: fraction.clamp(0.0, 1.0),
        }
    }

    /// Horizontally centered bar driven by a whole-number percentage.
    pub fn centered(y: i32, width: u32, height: u32, percentage: u32) -> Self {
        let x = (WIDTH as i32 - width as i32) / 2;
        Self::new(x, y, width, height, percentage as f32 / 100.0)
    }

    pub fn filled_width(&self) -> u32 {
        (self.width as f32 * self.fraction).round() as u32
    }

    pub fn draw(&self, canvas: &mut Canvas, palette: &Palette) {
        canvas.fill_rect(self.x, self.y, self.width, self.height, palette.bar_background);
        canvas.fill_rect(self.x, self.y, self.filled_width(), self.height, palette.progress);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearProgress {
    pub year: i32,
    pub days_passed: u32,
    pub days_in_year: u32,
    pub percentage: u32,
}

/// How far `today`'s year has advanced. Day counting starts at zero on
/// Jan 1. Leap years are every fourth year; the Gregorian century
/// exception is deliberately left out.
pub fn year_progress(today: NaiveDate) -> YearProgress {
    let year = today.year();
    let days_passed = today.ordinal0();
    let days_in_year: u32 = if year % 4 == 0 { 366 } else { 365 };
    YearProgress {
        year,
        days_passed,
        days_in_year,
        percentage: days_passed * 100 / days_in_year,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeProgress {
    pub current_age: i32,
    pub life_expectancy: i32,
    pub years_left: i32,
    pub percentage: u32,
}

/// Life progress from a birth year and an estimated expectancy.
///
/// A birth year in the future or a non-positive expectancy is rejected.
/// An age at or past the expectancy is not: the expectancy is bumped to
/// age + 10 and the render proceeds.
pub fn life_progress(
    birth_year: i32,
    life_expectancy: i32,
    current_year: i32,
) -> Result<LifeProgress, CoverError> {
    if birth_year > current_year {
        return Err(CoverError::InvalidParameter(format!(
            "birth year {birth_year} is in the future"
        )));
    }
    if life_expectancy <= 0 {
        return Err(CoverError::InvalidParameter(
            "life expectancy must be positive".to_string(),
        ));
    }

    let current_age = current_year - birth_year;
    let life_expectancy = if current_age >= life_expectancy {
        current_age + 10
    } else {
        life_expectancy
    };

    Ok(LifeProgress {
        current_age,
        life_expectancy,
        years_left: life_expectancy - current_age,
        percentage: (current_age * 100 / life_expectancy) as u32,
    })
}
