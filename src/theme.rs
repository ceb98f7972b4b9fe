use image::Rgb;
use std::fmt;
use std::str::FromStr;

/// Theme token selecting one of the two palettes every recipe ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// Immutable color set for one recipe/theme pair, chosen once per render.
///
/// Quote-style recipes ignore the bar colors; progress recipes use all five.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb<u8>,
    pub text: Rgb<u8>,
    pub accent: Rgb<u8>,
    pub progress: Rgb<u8>,
    pub bar_background: Rgb<u8>,
}

/// Gradient backdrop colors plus the text color drawn over them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientPalette {
    pub top: Rgb<u8>,
    pub bottom: Rgb<u8>,
    pub text: Rgb<u8>,
}

const STOIC_DARK: Palette = Palette {
    background: Rgb([30, 30, 40]),
    text: Rgb([255, 255, 255]),
    accent: Rgb([180, 180, 180]),
    progress: Rgb([180, 180, 180]),
    bar_background: Rgb([30, 30, 40]),
};

const STOIC_LIGHT: Palette = Palette {
    background: Rgb([245, 245, 250]),
    text: Rgb([50, 50, 50]),
    accent: Rgb([100, 100, 100]),
    progress: Rgb([100, 100, 100]),
    bar_background: Rgb([245, 245, 250]),
};

const BOOK_DARK: Palette = Palette {
    background: Rgb([25, 25, 35]),
    text: Rgb([255, 255, 255]),
    accent: Rgb([200, 200, 200]),
    progress: Rgb([200, 200, 200]),
    bar_background: Rgb([25, 25, 35]),
};

const BOOK_LIGHT: Palette = Palette {
    background: Rgb([250, 248, 240]),
    text: Rgb([40, 40, 40]),
    accent: Rgb([80, 80, 80]),
    progress: Rgb([80, 80, 80]),
    bar_background: Rgb([250, 248, 240]),
};

const YEAR_DARK: Palette = Palette {
    background: Rgb([20, 20, 30]),
    text: Rgb([255, 255, 255]),
    accent: Rgb([255, 255, 255]),
    progress: Rgb([100, 200, 100]),
    bar_background: Rgb([60, 60, 70]),
};

const YEAR_LIGHT: Palette = Palette {
    background: Rgb([248, 248, 252]),
    text: Rgb([40, 40, 40]),
    accent: Rgb([40, 40, 40]),
    progress: Rgb([50, 150, 50]),
    bar_background: Rgb([200, 200, 210]),
};

const LIFE_DARK: Palette = Palette {
    background: Rgb([25, 25, 35]),
    text: Rgb([255, 255, 255]),
    accent: Rgb([255, 255, 255]),
    progress: Rgb([150, 100, 200]),
    bar_background: Rgb([60, 60, 70]),
};

const LIFE_LIGHT: Palette = Palette {
    background: Rgb([252, 248, 248]),
    text: Rgb([40, 40, 40]),
    accent: Rgb([40, 40, 40]),
    progress: Rgb([120, 80, 160]),
    bar_background: Rgb([210, 200, 200]),
};

const MOTIVATIONAL_DARK: GradientPalette = GradientPalette {
    top: Rgb([30, 35, 50]),
    bottom: Rgb([50, 55, 70]),
    text: Rgb([255, 255, 255]),
};

const MOTIVATIONAL_LIGHT: GradientPalette = GradientPalette {
    top: Rgb([240, 245, 250]),
    bottom: Rgb([250, 250, 255]),
    text: Rgb([50, 50, 50]),
};

pub fn stoic(theme: Theme) -> Palette {
    match theme {
        Theme::Light => STOIC_LIGHT,
        Theme::Dark => STOIC_DARK,
    }
}

pub fn book(theme: Theme) -> Palette {
    match theme {
        Theme::Light => BOOK_LIGHT,
        Theme::Dark => BOOK_DARK,
    }
}

pub fn year(theme: Theme) -> Palette {
    match theme {
        Theme::Light => YEAR_LIGHT,
        Theme::Dark => YEAR_DARK,
    }
}

pub fn life(theme: Theme) -> Palette {
    match theme {
        Theme::Light => LIFE_LIGHT,
        Theme::Dark => LIFE_DARK,
    }
}

pub fn motivational(theme: Theme) -> GradientPalette {
    match theme {
        Theme::Light => MOTIVATIONAL_LIGHT,
        Theme::Dark => MOTIVATIONAL_DARK,
    }
}
