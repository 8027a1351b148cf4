//! Foreground/background split of a gray image into a [`BinaryGrid`].
use super::{rescale, ImageU8, ImageView, ScaleFilter};
use crate::error::{Error, Result};
use crate::grid::BinaryGrid;
use serde::{Deserialize, Serialize};

/// Which intensity side counts as ink.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Polarity {
    /// Dark ink on a light page: `value < threshold` is foreground.
    #[default]
    DarkOnLight,
    /// Light ink on a dark page: `value >= threshold` is foreground.
    LightOnDark,
}

/// Options for turning an arbitrary glyph image into a square binary grid.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct BinarizeOptions {
    /// Intensity cut in `0..=255`.
    pub threshold: u8,
    pub polarity: Polarity,
    /// Resampling kernel applied before thresholding.
    pub filter: ScaleFilter,
}

impl Default for BinarizeOptions {
    fn default() -> Self {
        Self {
            threshold: 128,
            polarity: Polarity::DarkOnLight,
            filter: ScaleFilter::Triangle,
        }
    }
}

impl BinarizeOptions {
    #[inline]
    pub fn is_ink(&self, value: u8) -> bool {
        match self.polarity {
            Polarity::DarkOnLight => value < self.threshold,
            Polarity::LightOnDark => value >= self.threshold,
        }
    }
}

/// Threshold a square gray image into a grid of the same side length.
pub fn threshold(src: &ImageU8<'_>, options: &BinarizeOptions) -> Result<BinaryGrid> {
    if src.is_empty() || src.w != src.h {
        return Err(Error::InvalidInput(format!(
            "thresholding needs a non-empty square image, got {}x{}",
            src.w, src.h
        )));
    }
    let mut cells = Vec::with_capacity(src.w * src.h);
    for row in src.rows() {
        cells.extend(row.iter().map(|&v| options.is_ink(v)));
    }
    Ok(BinaryGrid::from_cells(src.w, cells))
}

/// Rescale to `size × size` and threshold in one step.
pub fn binarize(src: &ImageU8<'_>, size: usize, options: &BinarizeOptions) -> Result<BinaryGrid> {
    let scaled = rescale(src, size, size, options.filter)?;
    threshold(&scaled.as_view(), options)
}
