//! Descriptor geometry: grid side, layer count and the flat point layout.
use super::scan::{Axis, Corner, Traversal};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

const CARDINAL_SCANS: usize = 4;
const DIAGONAL_SCANS: usize = 4;

/// Shape parameters shared by every descriptor compared against each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdcParams {
    /// Side length `S` of the binary grid glyphs are rescaled to.
    pub scale_size: usize,
    /// Number of layers `L` probed by every scan.
    pub layers: usize,
}

impl Default for PdcParams {
    fn default() -> Self {
        Self {
            scale_size: 64,
            layers: 3,
        }
    }
}

/// One scan family within the flat descriptor sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScanKind {
    Cardinal { axis: Axis, traversal: Traversal },
    Diagonal { corner: Corner },
}

impl ScanKind {
    /// Scan order within one layer.
    pub const LAYER_ORDER: [ScanKind; CARDINAL_SCANS + DIAGONAL_SCANS] = [
        ScanKind::Cardinal {
            axis: Axis::Horizontal,
            traversal: Traversal::Forward,
        },
        ScanKind::Cardinal {
            axis: Axis::Horizontal,
            traversal: Traversal::Backward,
        },
        ScanKind::Cardinal {
            axis: Axis::Vertical,
            traversal: Traversal::Forward,
        },
        ScanKind::Cardinal {
            axis: Axis::Vertical,
            traversal: Traversal::Backward,
        },
        ScanKind::Diagonal {
            corner: Corner::TopLeft,
        },
        ScanKind::Diagonal {
            corner: Corner::TopRight,
        },
        ScanKind::Diagonal {
            corner: Corner::BottomLeft,
        },
        ScanKind::Diagonal {
            corner: Corner::BottomRight,
        },
    ];
}

/// Contiguous run of the descriptor produced by one scan at one layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSegment {
    pub layer: usize,
    pub kind: ScanKind,
    pub offset: usize,
    pub len: usize,
}

impl PdcParams {
    pub fn new(scale_size: usize, layers: usize) -> Self {
        Self { scale_size, layers }
    }

    /// Reject shapes that cannot produce a meaningful descriptor.
    pub fn validate(&self) -> Result<()> {
        if self.scale_size == 0 {
            return Err(Error::Config("scale_size must be positive".to_string()));
        }
        if self.layers == 0 {
            return Err(Error::Config("layers must be positive".to_string()));
        }
        Ok(())
    }

    /// Number of diagonal seeds taken from each corner edge, `⌈S/2⌉`.
    #[inline]
    pub fn diagonal_half(&self) -> usize {
        self.scale_size.div_ceil(2)
    }

    /// Points contributed by a single scan family.
    #[inline]
    pub fn scan_len(&self, kind: ScanKind) -> usize {
        match kind {
            ScanKind::Cardinal { .. } => self.scale_size,
            ScanKind::Diagonal { .. } => 2 * self.diagonal_half(),
        }
    }

    /// Points contributed by one layer.
    pub fn points_per_layer(&self) -> usize {
        self.scale_size * CARDINAL_SCANS + DIAGONAL_SCANS * 2 * self.diagonal_half()
    }

    /// Total descriptor length, `S·4·L + 4·L·2·⌈S/2⌉`.
    pub fn descriptor_len(&self) -> usize {
        self.points_per_layer() * self.layers
    }

    /// Ordered layout of the flat descriptor sequence.
    pub fn layout(&self) -> Vec<ScanSegment> {
        let mut segments = Vec::with_capacity(self.layers * ScanKind::LAYER_ORDER.len());
        let mut offset = 0;
        for layer in 0..self.layers {
            for kind in ScanKind::LAYER_ORDER {
                let len = self.scan_len(kind);
                segments.push(ScanSegment {
                    layer,
                    kind,
                    offset,
                    len,
                });
                offset += len;
            }
        }
        segments
    }
}
