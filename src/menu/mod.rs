//! Interactive terminal menu driving the recipes. All user input is
//! gathered here before a render call starts; the rendering path itself
//! never blocks on input.

mod parser;

pub use parser::parse_choice;

use crate::config::Dirs;
use crate::content::RandomPicker;
use crate::error::CoverError;
use crate::recipes;
use crate::theme::Theme;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    StoicQuote(Theme),
    AnimeQuote,
    BookRecommendation(Theme),
    YearProgress(Theme),
    LifeProgress { force_dark: bool },
    CustomText { force_dark: bool },
    OpenOutputFolder,
    Exit,
    Unknown(String),
}

/// Run the menu loop until the user exits. Render errors are reported
/// and the loop continues; only terminal I/O failures end it early.
pub fn run() -> io::Result<()> {
    let dirs = Dirs::default();
    let mut picker = RandomPicker::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    print_banner();

    loop {
        print_menu();
        let choice = match prompt(&mut input, "Enter your choice (0-12): ") {
            Ok(choice) => choice,
            // Exhausted stdin ends the session like an explicit exit
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                farewell(&dirs);
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        let rendered = match parse_choice(&choice) {
            MenuCommand::Exit => {
                farewell(&dirs);
                return Ok(());
            }
            MenuCommand::StoicQuote(theme) => {
                report(recipes::stoic::render(&mut picker, theme, &dirs));
                true
            }
            MenuCommand::AnimeQuote => {
                report(recipes::anime::render(&mut picker, &dirs));
                true
            }
            MenuCommand::BookRecommendation(theme) => {
                report(recipes::book::render(&mut picker, theme, &dirs));
                true
            }
            MenuCommand::YearProgress(theme) => {
                report(recipes::year::render(theme, &dirs));
                true
            }
            MenuCommand::LifeProgress { force_dark } => {
                let birth_year = prompt_i32(&mut input, "Enter your birth year (e.g., 1990): ")?;
                let expectancy =
                    prompt_i32(&mut input, "Enter your estimated life expectancy (e.g., 80): ")?;
                let theme = prompt_theme(&mut input, force_dark)?;
                report(recipes::life::render(birth_year, expectancy, theme, &dirs));
                true
            }
            MenuCommand::CustomText { force_dark } => {
                let text = prompt_nonempty(&mut input, "Enter your motivational text: ")?;
                let theme = prompt_theme(&mut input, force_dark)?;
                report(recipes::custom::render(&text, theme, &dirs));
                true
            }
            MenuCommand::OpenOutputFolder => {
                open_output_folder(&dirs.output);
                false
            }
            MenuCommand::Unknown(other) => {
                println!("Invalid choice '{other}'. Please pick a number between 0 and 12.");
                false
            }
        };

        if rendered {
            let answer = prompt(&mut input, "Generate another image? (y/n) [default: y]: ")
                .unwrap_or_else(|_| "n".to_string());
            if !wants_another(&answer) {
                farewell(&dirs);
                return Ok(());
            }
        }
        println!();
    }
}

fn farewell(dirs: &Dirs) {
    println!(
        "Thanks for using the cover generator. Images are in '{}'.",
        dirs.output.display()
    );
}

/// Anything but an explicit no keeps the session going.
fn wants_another(answer: &str) -> bool {
    !matches!(answer.trim().to_ascii_lowercase().as_str(), "n" | "no")
}

fn print_banner() {
    println!("{}", "=".repeat(60));
    println!("COVER IMAGE GENERATOR");
    println!("{}", "=".repeat(60));
    println!("Generate 1500x600 cover images, fully offline.");
    println!();
}

fn print_menu() {
    println!("Available options:");
    println!("  1. Stoic quote (dark)");
    println!("  2. Stoic quote (light)");
    println!("  3. Anime quote");
    println!("  4. Book recommendation (light)");
    println!("  5. Book recommendation (dark)");
    println!("  6. Year progress (light)");
    println!("  7. Year progress (dark)");
    println!("  8. Life progress");
    println!("  9. Life progress (dark)");
    println!(" 10. Custom motivational text");
    println!(" 11. Custom motivational text (dark)");
    println!(" 12. Open output folder");
    println!("  0. Exit");
    println!();
}

fn report(result: Result<PathBuf, CoverError>) {
    match result {
        Ok(path) => println!("Saved: {}", path.display()),
        Err(err) => println!("Generation failed: {err}"),
    }
}

fn prompt(input: &mut impl BufRead, message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    // A zero-byte read means the input is exhausted; surfacing it as an
    // error keeps the retry loops from spinning on an empty answer.
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "end of input",
        ));
    }
    Ok(line.trim().to_string())
}

fn prompt_nonempty(input: &mut impl BufRead, message: &str) -> io::Result<String> {
    loop {
        let line = prompt(input, message)?;
        if !line.is_empty() {
            return Ok(line);
        }
        println!("This field cannot be empty. Please try again.");
    }
}

fn prompt_i32(input: &mut impl BufRead, message: &str) -> io::Result<i32> {
    loop {
        let line = prompt_nonempty(input, message)?;
        match line.parse::<i32>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Invalid input. Please enter a whole number."),
        }
    }
}

fn prompt_theme(input: &mut impl BufRead, force_dark: bool) -> io::Result<Theme> {
    let line = prompt(input, "Choose theme (light/dark) [default: light]: ")?;
    let theme = line.parse::<Theme>().unwrap_or(Theme::Light);
    Ok(if force_dark { Theme::Dark } else { theme })
}

/// Best-effort: hand the folder to the platform opener and report the
/// path either way.
fn open_output_folder(output_dir: &Path) {
    let opener = if cfg!(target_os = "windows") {
        "explorer"
    } else if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    };

    match std::process::Command::new(opener).arg(output_dir).spawn() {
        Ok(_) => println!("Opened output folder: {}", output_dir.display()),
        Err(err) => {
            println!("Could not open the folder automatically: {err}");
            println!("Your images are saved in: {}", output_dir.display());
        }
    }
}
