use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

/// Serif face for quotes and titles
pub const SERIF: &str = "NewYork.ttf";
/// Bold serif face for large percentage figures
pub const SERIF_BOLD: &str = "NewYork-Bold.ttf";
/// Light sans face for body text and labels
pub const SANS_LIGHT: &str = "Helvetica-Neue-Pro-Light.ttf";
/// Italic sans face for secondary captions
pub const SANS_LIGHT_ITALIC: &str = "Helvetica-Neue-Pro-Light-Italic.ttf";

/// Per-character advance of the builtin metrics table, as a fraction of
/// the font size. Roughly the average advance of a text face.
const BUILTIN_ADVANCE: f32 = 0.6;
const BUILTIN_HEIGHT: f32 = 1.2;

lazy_static! {
    // Loaded faces are immutable for the run, so the cache is populated
    // lazily and never invalidated.
    static ref FONT_CACHE: Mutex<HashMap<(String, u32), FontHandle>> = Mutex::new(HashMap::new());
}

/// A font ready for measurement and stamping.
///
/// Either a real parsed face at a fixed pixel scale, or a builtin
/// fixed-advance table standing in when the font file cannot be found.
#[derive(Debug, Clone)]
pub enum FontHandle {
    Glyph { font: FontArc, scale: PxScale },
    Builtin { size: f32 },
}

impl FontHandle {
    /// Measured pixel width and height of `text` at this handle's size.
    pub fn measure(&self, text: &str) -> (f32, f32) {
        match self {
            FontHandle::Glyph { font, scale } => {
                let scaled = font.as_scaled(*scale);
                let width = text
                    .chars()
                    .map(|c| scaled.h_advance(font.glyph_id(c)))
                    .sum();
                (width, scaled.height())
            }
            FontHandle::Builtin { size } => (
                text.chars().count() as f32 * size * BUILTIN_ADVANCE,
                size * BUILTIN_HEIGHT,
            ),
        }
    }

    pub fn size(&self) -> f32 {
        match self {
            FontHandle::Glyph { scale, .. } => scale.y,
            FontHandle::Builtin { size } => *size,
        }
    }
}

/// Resolve `family` at `size` pixels against `fonts_dir`.
///
/// Fails soft: a missing or unparsable font file yields the builtin
/// metrics fallback, silently. Handles are cached per (family, size)
/// for the process lifetime.
pub fn load(fonts_dir: &Path, family: &str, size: f32) -> FontHandle {
    let key = (family.to_string(), (size * 10.0) as u32);

    if let Ok(cache) = FONT_CACHE.lock() {
        if let Some(handle) = cache.get(&key) {
            return handle.clone();
        }
    }

    let handle = load_font_file(&fonts_dir.join(family))
        .map(|font| FontHandle::Glyph {
            font,
            scale: PxScale::from(size),
        })
        .unwrap_or(FontHandle::Builtin { size });

    if let Ok(mut cache) = FONT_CACHE.lock() {
        cache.insert(key, handle.clone());
    }
    handle
}

fn load_font_file(path: &Path) -> Option<FontArc> {
    std::fs::read(path)
        .ok()
        .and_then(|bytes| FontArc::try_from_vec(bytes).ok())
}
