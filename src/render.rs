//! Reference glyph rendering used to build templates.
//!
//! The classifier only needs a gray image per (character, font family, size);
//! how it is produced is up to the implementor of [`GlyphRenderer`]. Closures
//! with the matching signature implement the trait, and
//! [`DirectoryGlyphRenderer`] serves glyphs rendered ahead of time.
use crate::error::{Error, Result};
use crate::image::io::load_grayscale_image;
use crate::image::GrayImageU8;
use log::debug;
use std::path::{Path, PathBuf};

/// Font families the kana glyph sets are commonly rendered with.
pub const FONT_FAMILIES: &[&str] = &[
    "Baekmuk Batang",
    "IPAGothic",
    "IPAMincho",
    "NanumMyeongjo",
    "RyuminStd-Bold-KO",
    "RyuminStd-Heavy-KO",
    "MidashiMinPr5-MA31",
];

/// Family rendered when a configuration names none; one of [`FONT_FAMILIES`].
pub const DEFAULT_FONT_FAMILY: &str = FONT_FAMILIES[1];

pub const DEFAULT_FONT_SIZE: u32 = 24;

pub trait GlyphRenderer {
    /// Render `character` in `font_family` at `size` points as dark ink on a
    /// light background.
    fn render(&self, character: char, font_family: &str, size: u32) -> Result<GrayImageU8>;
}

impl<F> GlyphRenderer for F
where
    F: Fn(char, &str, u32) -> Result<GrayImageU8>,
{
    fn render(&self, character: char, font_family: &str, size: u32) -> Result<GrayImageU8> {
        self(character, font_family, size)
    }
}

/// Serves glyph images stored on disk, one directory per font family.
///
/// For `あ` (U+3042) in `IPAGothic` at size 24 the candidates are, in order:
/// `<root>/IPAGothic/24/U+3042.png`, `<root>/IPAGothic/U+3042.png` and
/// `<root>/IPAGothic/あ.png`.
#[derive(Clone, Debug)]
pub struct DirectoryGlyphRenderer {
    root: PathBuf,
}

impl DirectoryGlyphRenderer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File name stem used for `character`, e.g. `U+3042`.
    pub fn code_point_stem(character: char) -> String {
        format!("U+{:04X}", character as u32)
    }

    pub fn candidates(&self, character: char, font_family: &str, size: u32) -> Vec<PathBuf> {
        let font_dir = self.root.join(font_family);
        let stem = Self::code_point_stem(character);
        vec![
            font_dir.join(size.to_string()).join(format!("{stem}.png")),
            font_dir.join(format!("{stem}.png")),
            font_dir.join(format!("{character}.png")),
        ]
    }
}

impl GlyphRenderer for DirectoryGlyphRenderer {
    fn render(&self, character: char, font_family: &str, size: u32) -> Result<GrayImageU8> {
        let candidates = self.candidates(character, font_family, size);
        match candidates.iter().find(|p| p.is_file()) {
            Some(path) => {
                debug!(
                    "DirectoryGlyphRenderer::render {:?} font={} from {}",
                    character,
                    font_family,
                    path.display()
                );
                load_grayscale_image(path)
            }
            None => Err(Error::InvalidInput(format!(
                "no rendering of {:?} for font {} under {}",
                character,
                font_family,
                self.root.display()
            ))),
        }
    }
}
