use kana_pdc::image::GrayImageU8;
use kana_pdc::Result;

const STROKES: usize = 7;

/// Draws a block glyph made of up to seven strokes selected by the bits of
/// `pattern`: top, middle and bottom bars, left, centre and right posts, and
/// the main diagonal. Dark ink on white, `thickness` pixels wide.
pub fn stroke_glyph_u8(size: usize, pattern: u8, thickness: usize) -> Vec<u8> {
    assert!(size >= 8, "glyph canvas too small");
    assert!(thickness > 0, "stroke thickness must be positive");

    let margin = size / 8;
    let lo = margin;
    let hi = size - margin; // exclusive
    let mid = size / 2;
    let half_t = thickness / 2;
    let near = |v: usize, centre: usize| v + half_t >= centre && v < centre + thickness - half_t;

    let mut img = vec![255u8; size * size];
    for y in 0..size {
        for x in 0..size {
            let inside = (lo..hi).contains(&x) && (lo..hi).contains(&y);
            if !inside {
                continue;
            }
            let strokes = [
                y < lo + thickness,
                near(y, mid),
                y >= hi - thickness,
                x < lo + thickness,
                near(x, mid),
                x >= hi - thickness,
                x.abs_diff(y) < thickness.max(2),
            ];
            let ink = strokes
                .iter()
                .enumerate()
                .any(|(bit, &on)| on && pattern & (1 << bit) != 0);
            if ink {
                img[y * size + x] = 0;
            }
        }
    }
    img
}

/// Stroke pattern assigned to the `index`-th alphabet character.
pub fn pattern_for(index: usize) -> u8 {
    assert!(index + 1 < (1 << STROKES), "not enough stroke patterns");
    (index + 1) as u8
}

/// Renderer drawing `alphabet[i]` with [`pattern_for`]`(i)`. Families whose
/// name contains "Bold" use doubled strokes.
pub fn stroke_renderer(
    alphabet: &str,
) -> impl Fn(char, &str, u32) -> Result<GrayImageU8> + '_ {
    move |c: char, font: &str, size: u32| -> Result<GrayImageU8> {
        let index = alphabet
            .chars()
            .position(|x| x == c)
            .ok_or_else(|| kana_pdc::Error::InvalidInput(format!("no stroke glyph for {c:?}")))?;
        let size = size as usize;
        let thickness = (size / 12).max(1) * if font.contains("Bold") { 2 } else { 1 };
        Ok(GrayImageU8::new(
            size,
            size,
            stroke_glyph_u8(size, pattern_for(index), thickness),
        ))
    }
}
