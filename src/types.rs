use serde::Serialize;
use std::fmt;

/// Outcome of classifying one glyph cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "character")]
pub enum Recognition {
    /// Closest alphabet character.
    Glyph(char),
    /// The cell holds no ink at all (e.g. the gap between two characters).
    NoGlyph,
}

impl Recognition {
    pub fn character(&self) -> Option<char> {
        match self {
            Recognition::Glyph(c) => Some(*c),
            Recognition::NoGlyph => None,
        }
    }

    pub fn is_glyph(&self) -> bool {
        matches!(self, Recognition::Glyph(_))
    }
}

impl fmt::Display for Recognition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recognition::Glyph(c) => write!(f, "{c}"),
            Recognition::NoGlyph => f.write_str("<space>"),
        }
    }
}
