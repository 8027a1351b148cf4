//! Descriptor extraction: image → binary grid → scans → rays.
use super::descriptor::{Descriptor, PeripheralPoint};
use super::params::{PdcParams, ScanKind};
use super::rays::ray_lengths;
use super::scan::{diagonal_scan, scan};
use crate::error::Result;
use crate::grid::BinaryGrid;
use crate::image::{binarize, BinarizeOptions, ImageU8};
use log::debug;
use rayon::prelude::*;

/// Rescale and threshold `image`, then compute its descriptor.
pub fn extract(
    image: &ImageU8<'_>,
    params: &PdcParams,
    binarize_opts: &BinarizeOptions,
) -> Result<Descriptor> {
    let grid = binarize(image, params.scale_size, binarize_opts)?;
    Ok(extract_grid(grid, params))
}

/// Extract descriptors for several images in parallel, preserving order.
pub fn extract_batch(
    images: &[ImageU8<'_>],
    params: &PdcParams,
    binarize_opts: &BinarizeOptions,
) -> Result<Vec<Descriptor>> {
    images
        .par_iter()
        .map(|image| extract(image, params, binarize_opts))
        .collect()
}

/// Compute the descriptor of an already binarized grid.
///
/// Panics if the grid side differs from `params.scale_size` or if the
/// produced sequence breaks the length formula; both mean the scan
/// configuration itself is wrong.
pub fn extract_grid(grid: BinaryGrid, params: &PdcParams) -> Descriptor {
    assert_eq!(
        grid.size(),
        params.scale_size,
        "grid side does not match the configured scale size"
    );

    let mut peripherals: Vec<Option<usize>> = Vec::with_capacity(params.descriptor_len());
    for layer in 0..params.layers {
        for kind in ScanKind::LAYER_ORDER {
            let points = match kind {
                ScanKind::Cardinal { axis, traversal } => scan(&grid, layer, axis, traversal),
                ScanKind::Diagonal { corner } => diagonal_scan(&grid, layer, corner),
            };
            peripherals.extend(points);
        }
    }
    assert_eq!(
        peripherals.len(),
        params.descriptor_len(),
        "PDC scan produced {} points, layout requires {}",
        peripherals.len(),
        params.descriptor_len()
    );

    let points: Vec<Option<PeripheralPoint>> = peripherals
        .into_iter()
        .map(|p| {
            p.map(|index| PeripheralPoint {
                index,
                rays: ray_lengths(&grid, index),
            })
        })
        .collect();

    let descriptor = Descriptor::new(grid, *params, points);
    debug!(
        "pdc::extract size={} layers={} points={} present={}",
        params.scale_size,
        params.layers,
        descriptor.len(),
        descriptor.present_count()
    );
    descriptor
}
