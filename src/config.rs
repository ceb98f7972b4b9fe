// Directory layout for data, fonts and generated images.
// All paths are relative to the working directory by default.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct Dirs {
    /// JSON quote and book collections
    pub data: PathBuf,

    /// TrueType/OpenType font files; a missing file triggers the builtin
    /// metrics fallback rather than an error
    pub fonts: PathBuf,

    /// Where finished PNG covers land
    pub output: PathBuf,
}

impl Default for Dirs {
    fn default() -> Self {
        Self {
            data: PathBuf::from("data"),
            fonts: PathBuf::from("fonts"),
            output: PathBuf::from("output"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dirs_are_relative() {
        let dirs = Dirs::default();
        assert!(dirs.data.is_relative());
        assert!(dirs.fonts.is_relative());
        assert_eq!(dirs.output, PathBuf::from("output"));
    }
}
