use super::MenuCommand;
use crate::theme::Theme;

/// Parse a menu choice into a command
///
/// Supports:
/// - `0` → Exit
/// - `1`/`2` → Stoic quote (dark/light)
/// - `3` → Anime quote
/// - `4`/`5` → Book recommendation (light/dark)
/// - `6`/`7` → Year progress (light/dark)
/// - `8`/`9` → Life progress (themed prompt / forced dark)
/// - `10`/`11` → Custom text (themed prompt / forced dark)
/// - `12` → Open output folder
/// - Anything else → Unknown
pub fn parse_choice(input: &str) -> MenuCommand {
    match input.trim() {
        "0" => MenuCommand::Exit,
        "1" => MenuCommand::StoicQuote(Theme::Dark),
        "2" => MenuCommand::StoicQuote(Theme::Light),
        "3" => MenuCommand::AnimeQuote,
        "4" => MenuCommand::BookRecommendation(Theme::Light),
        "5" => MenuCommand::BookRecommendation(Theme::Dark),
        "6" => MenuCommand::YearProgress(Theme::Light),
        "7" => MenuCommand::YearProgress(Theme::Dark),
        "8" => MenuCommand::LifeProgress { force_dark: false },
        "9" => MenuCommand::LifeProgress { force_dark: true },
        "10" => MenuCommand::CustomText { force_dark: false },
        "11" => MenuCommand::CustomText { force_dark: true },
        "12" => MenuCommand::OpenOutputFolder,
        other => MenuCommand::Unknown(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse_choice("0"), MenuCommand::Exit);
    }

    #[test]
    fn test_parse_themed_choices() {
        assert_eq!(parse_choice("1"), MenuCommand::StoicQuote(Theme::Dark));
        assert_eq!(parse_choice("2"), MenuCommand::StoicQuote(Theme::Light));
        assert_eq!(parse_choice("4"), MenuCommand::BookRecommendation(Theme::Light));
        assert_eq!(parse_choice("7"), MenuCommand::YearProgress(Theme::Dark));
    }

    #[test]
    fn test_parse_prompting_choices() {
        assert_eq!(parse_choice("8"), MenuCommand::LifeProgress { force_dark: false });
        assert_eq!(parse_choice("9"), MenuCommand::LifeProgress { force_dark: true });
        assert_eq!(parse_choice("11"), MenuCommand::CustomText { force_dark: true });
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_choice("  3 "), MenuCommand::AnimeQuote);
        assert_eq!(parse_choice(" 12\n"), MenuCommand::OpenOutputFolder);
    }

    #[test]
    fn test_parse_rejects_out_of_range_and_garbage() {
        assert!(matches!(parse_choice("13"), MenuCommand::Unknown(_)));
        assert!(matches!(parse_choice("-1"), MenuCommand::Unknown(_)));
        assert!(matches!(parse_choice("abc"), MenuCommand::Unknown(_)));
        assert!(matches!(parse_choice(""), MenuCommand::Unknown(_)));
    }
}
