pub mod synthetic_glyph;
