//! Bitmap fonts and the provider chain used to pick one at startup.
//!
//! A font is a fixed-size grid of on/off dots per glyph; each glyph row is a bitmask whose most
//! significant used bit is the leftmost column. Providers are tried in order and the first one
//! that loads wins. `BlockFontProvider` never fails, so a chain ending in it always resolves.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

pub trait Font {
    fn name(&self) -> &str;
    fn glyph_width(&self) -> u32;
    fn glyph_height(&self) -> u32;
    fn glyph_rows(&self, ch: char) -> &[u8];

    /// Horizontal distance between glyph origins, in dots.
    fn advance(&self) -> u32 {
        self.glyph_width() + 1
    }

    /// Vertical distance between lines, in dots.
    fn line_advance(&self) -> u32 {
        self.glyph_height() + 1
    }
}

#[derive(Debug, Error)]
pub enum FontError {
    #[error("failed to read font sheet {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse font sheet {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid font sheet {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

// ── Built-in block font ─────────────────────────────────────────────

/// A tiny 3x5 block font with no external assets.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockFont;

impl Font for BlockFont {
    fn name(&self) -> &str {
        "block-3x5"
    }

    fn glyph_width(&self) -> u32 {
        3
    }

    fn glyph_height(&self) -> u32 {
        5
    }

    fn glyph_rows(&self, ch: char) -> &[u8] {
        block_glyph(ch)
    }
}

fn block_glyph(ch: char) -> &'static [u8] {
    match ch.to_ascii_uppercase() {
        '0' => &[0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => &[0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => &[0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => &[0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => &[0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => &[0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => &[0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => &[0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => &[0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => &[0b111, 0b101, 0b111, 0b001, 0b111],

        'A' => &[0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => &[0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => &[0b111, 0b100, 0b100, 0b100, 0b111],
        'D' => &[0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => &[0b111, 0b100, 0b111, 0b100, 0b111],
        'F' => &[0b111, 0b100, 0b111, 0b100, 0b100],
        'G' => &[0b111, 0b100, 0b101, 0b101, 0b111],
        'H' => &[0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => &[0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => &[0b111, 0b001, 0b001, 0b101, 0b010],
        'K' => &[0b101, 0b110, 0b100, 0b110, 0b101],
        'L' => &[0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => &[0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => &[0b101, 0b111, 0b111, 0b111, 0b101],
        'O' => &[0b111, 0b101, 0b101, 0b101, 0b111],
        'P' => &[0b111, 0b101, 0b111, 0b100, 0b100],
        'Q' => &[0b111, 0b101, 0b101, 0b111, 0b001],
        'R' => &[0b111, 0b101, 0b111, 0b110, 0b101],
        'S' => &[0b111, 0b100, 0b111, 0b001, 0b111],
        'T' => &[0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => &[0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => &[0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => &[0b101, 0b101, 0b111, 0b111, 0b101],
        'X' => &[0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => &[0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => &[0b111, 0b001, 0b010, 0b100, 0b111],

        ' ' => &[0b000, 0b000, 0b000, 0b000, 0b000],
        '.' => &[0b000, 0b000, 0b000, 0b000, 0b010],
        ',' => &[0b000, 0b000, 0b000, 0b010, 0b100],
        ':' => &[0b000, 0b010, 0b000, 0b010, 0b000],
        '-' => &[0b000, 0b000, 0b111, 0b000, 0b000],
        '_' => &[0b000, 0b000, 0b000, 0b000, 0b111],
        '|' => &[0b010, 0b010, 0b010, 0b010, 0b010],
        '(' => &[0b010, 0b100, 0b100, 0b100, 0b010],
        ')' => &[0b010, 0b001, 0b001, 0b001, 0b010],
        '!' => &[0b010, 0b010, 0b010, 0b000, 0b010],
        '/' => &[0b001, 0b001, 0b010, 0b100, 0b100],
        '+' => &[0b000, 0b010, 0b111, 0b010, 0b000],
        '\'' => &[0b010, 0b010, 0b000, 0b000, 0b000],

        _ => &[0b111, 0b001, 0b010, 0b000, 0b010], // '?'
    }
}

// ── Glyph sheets ────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct GlyphSheetFile {
    name: Option<String>,
    glyph_width: u32,
    glyph_height: u32,
    glyphs: HashMap<String, Vec<u8>>,
}

/// A bitmap font loaded from a JSON glyph sheet.
///
/// ```json
/// { "name": "chunky", "glyph_width": 5, "glyph_height": 7,
///   "glyphs": { "A": [14, 17, 17, 31, 17, 17, 17] } }
/// ```
///
/// Lookups fall back to the uppercase glyph, then to `?`, then to a blank cell.
#[derive(Debug, Clone)]
pub struct GlyphSheet {
    name: String,
    glyph_width: u32,
    glyph_height: u32,
    glyphs: HashMap<char, Vec<u8>>,
    blank: Vec<u8>,
}

impl GlyphSheet {
    pub fn from_json(path: &Path, text: &str) -> Result<Self, FontError> {
        let raw: GlyphSheetFile =
            serde_json::from_str(text).map_err(|source| FontError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        let invalid = |reason: String| FontError::Invalid {
            path: path.to_path_buf(),
            reason,
        };

        if raw.glyph_width == 0 || raw.glyph_width > 8 {
            return Err(invalid(format!(
                "glyph_width must be 1..=8, got {}",
                raw.glyph_width
            )));
        }
        if raw.glyph_height == 0 {
            return Err(invalid("glyph_height must be > 0".to_string()));
        }

        let mut glyphs = HashMap::with_capacity(raw.glyphs.len());
        for (key, rows) in raw.glyphs {
            let mut chars = key.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                return Err(invalid(format!("glyph key {key:?} is not a single character")));
            };
            if rows.len() != raw.glyph_height as usize {
                return Err(invalid(format!(
                    "glyph {key:?} has {} rows, expected {}",
                    rows.len(),
                    raw.glyph_height
                )));
            }
            glyphs.insert(ch, rows);
        }

        Ok(Self {
            name: raw.name.unwrap_or_else(|| path.display().to_string()),
            glyph_width: raw.glyph_width,
            glyph_height: raw.glyph_height,
            glyphs,
            blank: vec![0u8; raw.glyph_height as usize],
        })
    }
}

impl Font for GlyphSheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn glyph_width(&self) -> u32 {
        self.glyph_width
    }

    fn glyph_height(&self) -> u32 {
        self.glyph_height
    }

    fn glyph_rows(&self, ch: char) -> &[u8] {
        self.glyphs
            .get(&ch)
            .or_else(|| self.glyphs.get(&ch.to_ascii_uppercase()))
            .or_else(|| (ch != ' ').then(|| self.glyphs.get(&'?')).flatten())
            .unwrap_or(&self.blank)
    }
}

// ── Providers ───────────────────────────────────────────────────────

pub trait FontProvider {
    fn describe(&self) -> String;
    fn load(&self) -> Result<Box<dyn Font>, FontError>;
}

/// Loads a `GlyphSheet` from disk.
#[derive(Debug, Clone)]
pub struct GlyphSheetProvider {
    path: PathBuf,
}

impl GlyphSheetProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FontProvider for GlyphSheetProvider {
    fn describe(&self) -> String {
        format!("glyph sheet {}", self.path.display())
    }

    fn load(&self) -> Result<Box<dyn Font>, FontError> {
        let text = fs::read_to_string(&self.path).map_err(|source| FontError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(Box::new(GlyphSheet::from_json(&self.path, &text)?))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BlockFontProvider;

impl FontProvider for BlockFontProvider {
    fn describe(&self) -> String {
        "built-in block font".to_string()
    }

    fn load(&self) -> Result<Box<dyn Font>, FontError> {
        Ok(Box::new(BlockFont))
    }
}

/// Ordered font providers; the first one that loads is used.
#[derive(Default)]
pub struct FontChain {
    providers: Vec<Box<dyn FontProvider>>,
}

impl FontChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Glyph sheets in the given order, ending in the built-in block font.
    pub fn from_sheets<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut chain = Self::new();
        for path in paths {
            chain = chain.with_provider(GlyphSheetProvider::new(path));
        }
        chain.with_provider(BlockFontProvider)
    }

    pub fn with_provider(mut self, provider: impl FontProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Tries each provider in order. Falls back to `BlockFont` if every provider fails.
    pub fn resolve(&self) -> Box<dyn Font> {
        for provider in &self.providers {
            match provider.load() {
                Ok(font) => {
                    info!(font = font.name(), source = %provider.describe(), "font loaded");
                    return font;
                }
                Err(err) => {
                    warn!(source = %provider.describe(), error = %err, "font unavailable, trying next");
                }
            }
        }
        Box::new(BlockFont)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl FontProvider for Failing {
        fn describe(&self) -> String {
            "always fails".to_string()
        }

        fn load(&self) -> Result<Box<dyn Font>, FontError> {
            Err(FontError::Invalid {
                path: PathBuf::from("nowhere"),
                reason: "test".to_string(),
            })
        }
    }

    const SHEET: &str = r#"{
        "name": "wide",
        "glyph_width": 4,
        "glyph_height": 2,
        "glyphs": { "A": [15, 9], "?": [6, 6] }
    }"#;

    #[test]
    fn block_font_is_case_insensitive_with_question_mark_fallback() {
        let font = BlockFont;
        assert_eq!(font.glyph_rows('a'), font.glyph_rows('A'));
        assert_eq!(font.glyph_rows('~'), &[0b111, 0b001, 0b010, 0b000, 0b010]);
        assert_eq!(font.glyph_rows(' '), &[0, 0, 0, 0, 0]);
    }

    #[test]
    fn glyph_sheet_parses_and_falls_back() {
        let sheet = GlyphSheet::from_json(Path::new("wide.json"), SHEET).expect("valid sheet");
        assert_eq!(sheet.name(), "wide");
        assert_eq!(sheet.glyph_width(), 4);
        assert_eq!(sheet.glyph_rows('a'), &[15, 9]);
        assert_eq!(sheet.glyph_rows('z'), &[6, 6]);
        assert_eq!(sheet.glyph_rows(' '), &[0, 0]);
    }

    #[test]
    fn glyph_sheet_rejects_wrong_row_count() {
        let bad = r#"{ "glyph_width": 3, "glyph_height": 5, "glyphs": { "A": [1, 2] } }"#;
        let err = GlyphSheet::from_json(Path::new("bad.json"), bad).unwrap_err();
        assert!(matches!(err, FontError::Invalid { .. }), "got {err:?}");
    }

    #[test]
    fn chain_skips_failing_providers_in_order() {
        let chain = FontChain::new()
            .with_provider(Failing)
            .with_provider(GlyphSheetProvider::new("/definitely/missing/font.json"))
            .with_provider(BlockFontProvider);
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.resolve().name(), "block-3x5");
    }

    #[test]
    fn empty_chain_still_resolves_to_block_font() {
        assert_eq!(FontChain::new().resolve().name(), "block-3x5");
    }

    #[test]
    fn from_sheets_ends_with_block_font() {
        let chain = FontChain::from_sheets(["/missing/a.json", "/missing/b.json"]);
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.resolve().name(), "block-3x5");
    }
}
