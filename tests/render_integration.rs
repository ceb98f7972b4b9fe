use covergen::content::FixedPicker;
use covergen::recipes;
use covergen::theme::{self, Theme};
use covergen::{CoverError, Dirs};
use image::Rgb;
use std::fs;
use std::path::PathBuf;

fn scratch_dirs(name: &str) -> Dirs {
    let root = std::env::temp_dir().join(format!("covergen_it_{name}"));
    let _ = fs::remove_dir_all(&root);
    let dirs = Dirs {
        data: root.join("data"),
        fonts: root.join("fonts"),
        output: root.join("output"),
    };
    fs::create_dir_all(&dirs.data).unwrap();
    dirs
}

fn write_sample_data(dirs: &Dirs) {
    fs::write(
        dirs.data.join("stoic_quotes.json"),
        r#"["Test quote."]"#,
    )
    .unwrap();
    fs::write(
        dirs.data.join("anime_quotes.json"),
        r#"[{"quote": "Believe in yourself.", "character": "Kamina", "anime": "Gurren Lagann"}]"#,
    )
    .unwrap();
    fs::write(
        dirs.data.join("books.json"),
        r#"[{"title": "Meditations", "author": "Marcus Aurelius", "year": 180}]"#,
    )
    .unwrap();
}

fn cleanup(dirs: &Dirs) {
    let _ = fs::remove_dir_all(dirs.data.parent().unwrap());
}

#[test]
fn end_to_end_stoic_quote() {
    let dirs = scratch_dirs("stoic");
    write_sample_data(&dirs);

    let path = recipes::stoic::render(&mut FixedPicker(0), Theme::Dark, &dirs)
        .expect("stoic render should succeed");
    assert_eq!(path, dirs.output.join("stoic_quote_dark.png"));

    let image = image::open(&path).unwrap().to_rgb8();
    assert_eq!(image.dimensions(), (1500, 600));

    // Corners show the solid themed background
    let background = theme::stoic(Theme::Dark).background;
    assert_eq!(*image.get_pixel(0, 0), background);
    assert_eq!(*image.get_pixel(1499, 599), background);

    // A single short quote line sits centered around row 275, so some
    // text pixels must differ from the background near the middle
    let row = 290;
    let touched = (600..900).any(|x| *image.get_pixel(x, row) != background);
    assert!(touched, "expected text pixels near the canvas center");

    cleanup(&dirs);
}

#[test]
fn end_to_end_anime_quote_gradient() {
    let dirs = scratch_dirs("anime");
    write_sample_data(&dirs);

    let path = recipes::anime::render(&mut FixedPicker(0), &dirs)
        .expect("anime render should succeed");
    assert_eq!(path, dirs.output.join("anime_quote.png"));

    let image = image::open(&path).unwrap().to_rgb8();
    // Top row carries the exact gradient start color
    assert_eq!(*image.get_pixel(0, 0), Rgb([20, 25, 40]));
    // Bottom corner has shifted toward the gradient end color
    let bottom = *image.get_pixel(0, 599);
    assert!(bottom[0] > 30 && bottom[2] > 55, "gradient should darken downward");

    cleanup(&dirs);
}

#[test]
fn end_to_end_book_recommendation() {
    let dirs = scratch_dirs("book");
    write_sample_data(&dirs);

    let path = recipes::book::render(&mut FixedPicker(0), Theme::Light, &dirs).unwrap();
    assert_eq!(path, dirs.output.join("book_recommendation_light.png"));
    assert!(path.exists());

    cleanup(&dirs);
}

#[test]
fn end_to_end_year_and_custom() {
    let dirs = scratch_dirs("year_custom");
    write_sample_data(&dirs);

    let year = recipes::year::render(Theme::Dark, &dirs).unwrap();
    assert_eq!(year, dirs.output.join("year_progress_dark.png"));

    let custom = recipes::custom::render("Keep going.", Theme::Light, &dirs).unwrap();
    assert_eq!(custom, dirs.output.join("motivational_text_light.png"));

    let image = image::open(&custom).unwrap().to_rgb8();
    assert_eq!(image.dimensions(), (1500, 600));

    cleanup(&dirs);
}

#[test]
fn life_progress_renders_despite_exceeded_expectancy() {
    let dirs = scratch_dirs("life_ok");

    let path = recipes::life::render(1900, 80, Theme::Dark, &dirs)
        .expect("exceeded expectancy must degrade gracefully, not fail");
    assert_eq!(path, dirs.output.join("life_progress_dark.png"));

    cleanup(&dirs);
}

#[test]
fn invalid_life_parameters_produce_no_output_file() {
    let dirs = scratch_dirs("life_invalid");

    let result = recipes::life::render(3000, 80, Theme::Light, &dirs);
    assert!(matches!(result, Err(CoverError::InvalidParameter(_))));
    assert!(
        !dirs.output.exists(),
        "a rejected call must not create partial output"
    );

    let result = recipes::life::render(1990, 0, Theme::Light, &dirs);
    assert!(matches!(result, Err(CoverError::InvalidParameter(_))));
    assert!(!dirs.output.exists());

    cleanup(&dirs);
}

#[test]
fn empty_collection_fails_instead_of_rendering_blank() {
    let dirs = scratch_dirs("empty");
    fs::write(dirs.data.join("stoic_quotes.json"), "[]").unwrap();

    let result = recipes::stoic::render(&mut FixedPicker(0), Theme::Light, &dirs);
    assert!(matches!(result, Err(CoverError::ContentUnavailable(_))));
    assert!(!dirs.output.join("stoic_quote_light.png").exists());

    cleanup(&dirs);
}

#[test]
fn missing_font_directory_is_not_fatal() {
    let dirs = Dirs {
        data: scratch_dirs("no_fonts").data,
        fonts: PathBuf::from("/nonexistent/fonts"),
        output: std::env::temp_dir().join("covergen_it_no_fonts/output"),
    };
    write_sample_data(&dirs);

    let result = recipes::custom::render("Fonts are optional.", Theme::Dark, &dirs);
    assert!(result.is_ok(), "font fallback must be silent: {result:?}");

    cleanup(&dirs);
}
