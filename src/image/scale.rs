//! Resampling of arbitrary-size glyph images to the descriptor resolution.
//!
//! Resampling is delegated to `image::imageops::resize`; the view is first
//! packed into a `GrayImage` so strided inputs are handled uniformly.
use super::{GrayImageU8, ImageU8, ImageView};
use crate::error::{Error, Result};
use image::imageops::{self, FilterType};
use image::GrayImage;
use serde::{Deserialize, Serialize};

/// Resampling kernel used when rescaling glyph images.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScaleFilter {
    Nearest,
    #[default]
    Triangle,
    CatmullRom,
}

impl From<ScaleFilter> for FilterType {
    fn from(f: ScaleFilter) -> Self {
        match f {
            ScaleFilter::Nearest => FilterType::Nearest,
            ScaleFilter::Triangle => FilterType::Triangle,
            ScaleFilter::CatmullRom => FilterType::CatmullRom,
        }
    }
}

/// Rescale `src` to `width × height`.
///
/// Fails with [`Error::InvalidInput`] when either the source or the target has
/// a zero dimension, or when the view does not cover its declared rows.
pub fn rescale(
    src: &ImageU8<'_>,
    width: usize,
    height: usize,
    filter: ScaleFilter,
) -> Result<GrayImageU8> {
    if src.is_empty() {
        return Err(Error::InvalidInput(format!(
            "image has zero dimension ({}x{})",
            src.w, src.h
        )));
    }
    if width == 0 || height == 0 {
        return Err(Error::InvalidInput(format!(
            "target size has zero dimension ({width}x{height})"
        )));
    }
    if !src.is_well_formed() {
        return Err(Error::InvalidInput(format!(
            "{}x{} view with stride {} is backed by only {} bytes",
            src.w,
            src.h,
            src.stride,
            src.data.len()
        )));
    }

    let mut packed = Vec::with_capacity(src.w * src.h);
    for row in src.rows() {
        packed.extend_from_slice(row);
    }
    if src.w == width && src.h == height {
        return Ok(GrayImageU8::new(width, height, packed));
    }

    let luma = GrayImage::from_raw(src.w as u32, src.h as u32, packed)
        .ok_or_else(|| Error::InvalidInput("failed to pack source image".to_string()))?;
    let resized = imageops::resize(&luma, width as u32, height as u32, filter.into());
    Ok(GrayImageU8::from_luma(resized))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rescale_rejects_empty_source() {
        let data: Vec<u8> = Vec::new();
        let view = ImageU8::packed(0, 7, &data);
        let err = rescale(&view, 64, 64, ScaleFilter::Triangle).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)), "got {err:?}");
    }

    #[test]
    fn rescale_handles_strided_view() {
        // 2x2 image padded to stride 3
        let data = [10u8, 20, 99, 30, 40, 99];
        let view = ImageU8 {
            w: 2,
            h: 2,
            stride: 3,
            data: &data,
        };
        let out = rescale(&view, 2, 2, ScaleFilter::Nearest).unwrap();
        assert_eq!(out.data(), &[10, 20, 30, 40]);
    }

    #[test]
    fn rescale_upsamples_uniform_image() {
        let src = GrayImageU8::filled(5, 3, 200);
        let out = rescale(&src.as_view(), 64, 64, ScaleFilter::Triangle).unwrap();
        assert_eq!((out.width(), out.height()), (64, 64));
        assert!(out.data().iter().all(|&v| (199..=201).contains(&v)));
    }

    #[test]
    fn rescale_rejects_truncated_buffer() {
        let data = [0u8; 5];
        let view = ImageU8::packed(3, 3, &data);
        assert!(rescale(&view, 8, 8, ScaleFilter::Nearest).is_err());
    }
}
