//! Peripheral Direction Contributivity (PDC) descriptors.
//!
//! A glyph is rescaled to a fixed `S × S` binary grid and probed from the
//! outside in:
//!
//! - Cardinal scans walk every row (left→right, right→left) and every column
//!   (top→bottom, bottom→top) and record the leading edge of the `k`-th ink
//!   run, where `k` is the layer. Layer 0 is the outer contour; layer `k`
//!   skips `k` runs first.
//! - Diagonal scans do the same along 45° lines anchored at the four corners.
//!   Only the half of each corner edge adjacent to the corner seeds lines,
//!   which drops the near-empty diagonals that graze the opposite corners.
//! - For every recorded point the extractor measures eight ray lengths: the
//!   number of in-bounds cells from the point to the grid border along N, NE,
//!   E, SE, S, SW, W and NW.
//!
//! The concatenation of all points (present or absent) over all layers forms
//! a [`Descriptor`] whose length depends only on [`PdcParams`].
//!
//! Modules
//! - [`params`] – grid size, layer count and the descriptor layout.
//! - [`scan`] – cardinal and diagonal boundary scanners.
//! - [`rays`] – 8-way ray measurement.
//! - [`descriptor`] – the immutable descriptor record.
//! - [`extract`] – orchestration from image to descriptor.

pub mod descriptor;
pub mod extract;
pub mod params;
pub mod rays;
pub mod scan;

pub use descriptor::{Descriptor, PeripheralPoint};
pub use extract::{extract, extract_batch, extract_grid};
pub use params::{PdcParams, ScanKind, ScanSegment};
pub use rays::{ray_lengths, RayLengths, DIRECTION_COUNT, DIRECTION_DELTAS};
pub use scan::{diagonal_scan, scan, Axis, Corner, Traversal};
