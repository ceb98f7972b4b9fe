//! Text layout: character-count word wrapping, per-line horizontal
//! centering against measured pixel widths, and vertical stacking of
//! line sequences.
//!
//! Wrapping is measured in characters rather than rendered pixels, so a
//! wide face can overflow the margins; wrap widths and font sizes are
//! chosen together per recipe so lines fit in practice.

use crate::render::canvas::{Canvas, HEIGHT, WIDTH};
use crate::render::font::FontHandle;
use image::Rgb;

/// Greedy word wrap bounded by a character count.
///
/// Words are split on whitespace and packed onto lines while the running
/// count (words plus single separating spaces) stays within `max_chars`.
/// A single word longer than the limit stands alone, unsplit. Empty
/// input yields a single empty line.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    lines.push(current);
    lines
}

/// Horizontal origin that centers a line of measured width `line_width`.
pub fn center_x(line_width: f32) -> i32 {
    ((WIDTH as f32 - line_width) / 2.0).round() as i32
}

/// Vertical origin of the zero-based `index`th line in a stacked block.
pub fn stack_y(start_y: i32, line_height: i32, index: usize) -> i32 {
    start_y + index as i32 * line_height
}

/// Start offset that centers a block of `total_height` vertically,
/// reserving `extra_trailing` pixels of room below it.
pub fn center_block_y(total_height: i32, extra_trailing: i32) -> i32 {
    (HEIGHT as i32 - total_height - extra_trailing) / 2
}

/// Measure and stamp a single line centered on the canvas width.
pub fn draw_centered_line(
    canvas: &mut Canvas,
    text: &str,
    font: &FontHandle,
    y: i32,
    color: Rgb<u8>,
) {
    let (width, _) = font.measure(text);
    canvas.draw_text(center_x(width), y, text, font, color);
}

/// A wrapped paragraph bound to one font and line height. Immutable once
/// built; rebuilt if the source text or wrap width changes.
pub struct TextBlock {
    pub lines: Vec<String>,
    pub font: FontHandle,
    pub line_height: i32,
}

impl TextBlock {
    pub fn new(text: &str, font: FontHandle, wrap_width: usize, line_height: i32) -> Self {
        Self {
            lines: wrap(text, wrap_width),
            font,
            line_height,
        }
    }

    pub fn total_height(&self) -> i32 {
        self.lines.len() as i32 * self.line_height
    }

    /// Draw every line ragged-centered starting at `start_y`, one line
    /// height apart. Returns the y just past the block.
    pub fn draw(&self, canvas: &mut Canvas, start_y: i32, color: Rgb<u8>) -> i32 {
        for (i, line) in self.lines.iter().enumerate() {
            let (width, _) = self.font.measure(line);
            let y = stack_y(start_y, self.line_height, i);
            canvas.draw_text(center_x(width), y, line, &self.font, color);
        }
        start_y + self.total_height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_character_limit() {
        let text = "the quick brown fox jumps over the lazy dog again and again";
        for max_chars in [10, 20, 35] {
            for line in wrap(text, max_chars) {
                assert!(
                    line.chars().count() <= max_chars,
                    "line '{line}' exceeds {max_chars} chars"
                );
            }
        }
    }

    #[test]
    fn test_wrap_round_trips_normalized_text() {
        let text = "  spaced   out\twords\nacross   lines  ";
        let rejoined = wrap(text, 12).join(" ");
        assert_eq!(rejoined, "spaced out words across lines");
    }

    #[test]
    fn test_wrap_keeps_oversize_word_whole() {
        let lines = wrap("a Honorificabilitudinitatibus b", 10);
        assert!(lines.contains(&"Honorificabilitudinitatibus".to_string()));
        for line in &lines {
            assert!(!line.contains('-'), "words must never be split");
        }
    }

    #[test]
    fn test_wrap_empty_input_yields_one_empty_line() {
        assert_eq!(wrap("", 40), vec![String::new()]);
        assert_eq!(wrap("   ", 40), vec![String::new()]);
    }

    #[test]
    fn test_wrap_counts_the_separating_space() {
        // "abc def" is exactly 7 chars; limit 6 must break it
        assert_eq!(wrap("abc def", 7), vec!["abc def"]);
        assert_eq!(wrap("abc def", 6), vec!["abc", "def"]);
    }

    #[test]
    fn test_short_quote_stays_on_one_line() {
        assert_eq!(wrap("Test quote.", 60), vec!["Test quote."]);
    }

    #[test]
    fn test_center_x_splits_the_margin() {
        assert_eq!(center_x(100.0), 700);
        assert_eq!(center_x(0.0), 750);
        assert_eq!(center_x(WIDTH as f32), 0);
    }

    #[test]
    fn test_center_x_midpoint_lands_on_canvas_center() {
        for width in [13.0, 100.0, 333.3, 1499.0] {
            let x = center_x(width) as f32;
            let midpoint = x + width / 2.0;
            assert!(
                (midpoint - WIDTH as f32 / 2.0).abs() <= 1.0,
                "midpoint {midpoint} too far from center for width {width}"
            );
        }
    }

    #[test]
    fn test_stack_y_spaces_lines_evenly() {
        assert_eq!(stack_y(275, 50, 0), 275);
        assert_eq!(stack_y(275, 50, 1), 325);
        assert_eq!(stack_y(275, 50, 4), 475);
    }

    #[test]
    fn test_center_block_y_single_line() {
        // One line at height 50 on a 600-tall canvas starts at 275
        assert_eq!(center_block_y(50, 0), 275);
    }

    #[test]
    fn test_center_block_y_reserves_trailing_room() {
        assert_eq!(center_block_y(90, 100), 205);
    }

    #[test]
    fn test_text_block_total_height() {
        let font = FontHandle::Builtin { size: 32.0 };
        let block = TextBlock::new("one two three four five six seven", font, 12, 45);
        assert_eq!(block.total_height(), block.lines.len() as i32 * 45);
        assert!(block.lines.len() > 1);
    }

    #[test]
    fn test_text_block_draw_returns_y_past_block() {
        let font = FontHandle::Builtin { size: 32.0 };
        let block = TextBlock::new("Test quote.", font, 60, 50);
        assert_eq!(block.lines.len(), 1);

        let mut canvas = Canvas::solid(Rgb([0, 0, 0]));
        let start_y = center_block_y(block.total_height(), 0);
        let end_y = block.draw(&mut canvas, start_y, Rgb([255, 255, 255]));
        assert_eq!(start_y, 275);
        assert_eq!(end_y, 325);
    }

    #[test]
    fn test_drawn_line_is_horizontally_symmetric() {
        let font = FontHandle::Builtin { size: 32.0 };
        let (width, _) = font.measure("Test quote.");
        let x = center_x(width) as f32;
        assert!((x + width / 2.0 - 750.0).abs() <= 1.0);
    }
}
