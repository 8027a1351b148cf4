//! Immutable PDC descriptor record.
use super::params::{PdcParams, ScanSegment};
use super::rays::RayLengths;
use crate::grid::BinaryGrid;
use serde::Serialize;

/// A boundary cell found by one scan line together with its ray lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PeripheralPoint {
    /// Linear index into the descriptor's grid.
    pub index: usize,
    pub rays: RayLengths,
}

/// Fixed-shape feature record for one glyph.
///
/// `points` is laid out as [`PdcParams::layout`] describes; `None` marks a
/// scan line without ink at that layer. Present points always carry their
/// ray lengths, so the two parallel sequences of the classic formulation
/// cannot disagree.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptor {
    #[serde(skip)]
    grid: BinaryGrid,
    params: PdcParams,
    points: Vec<Option<PeripheralPoint>>,
}

impl Descriptor {
    pub(crate) fn new(grid: BinaryGrid, params: PdcParams, points: Vec<Option<PeripheralPoint>>) -> Self {
        Self {
            grid,
            params,
            points,
        }
    }

    /// The scaled, thresholded grid the descriptor was computed from.
    pub fn grid(&self) -> &BinaryGrid {
        &self.grid
    }

    pub fn params(&self) -> PdcParams {
        self.params
    }

    pub fn layers(&self) -> usize {
        self.params.layers
    }

    pub fn points(&self) -> &[Option<PeripheralPoint>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Ray lengths in layout order, `None` for absent points.
    pub fn ray_lengths(&self) -> impl Iterator<Item = Option<&RayLengths>> + '_ {
        self.points.iter().map(|p| p.as_ref().map(|p| &p.rays))
    }

    pub fn present_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_some()).count()
    }

    /// No scan at any layer touched ink: the glyph cell is empty.
    pub fn is_blank(&self) -> bool {
        self.points.iter().all(Option::is_none)
    }

    /// Points belonging to one layout segment.
    pub fn segment(&self, segment: &ScanSegment) -> &[Option<PeripheralPoint>] {
        &self.points[segment.offset..segment.offset + segment.len]
    }
}
