use crate::pdc::{Descriptor, ScanKind};
use serde::Serialize;

/// Present/total points of one scan family at one layer.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanCoverage {
    pub layer: usize,
    pub kind: ScanKind,
    pub present: usize,
    pub total: usize,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptorSummary {
    pub scale_size: usize,
    pub layers: usize,
    pub total_points: usize,
    pub present_points: usize,
    pub foreground_cells: usize,
    pub scans: Vec<ScanCoverage>,
}

impl DescriptorSummary {
    pub fn from_descriptor(descriptor: &Descriptor) -> Self {
        let params = descriptor.params();
        let scans = params
            .layout()
            .iter()
            .map(|seg| ScanCoverage {
                layer: seg.layer,
                kind: seg.kind,
                present: descriptor.segment(seg).iter().filter(|p| p.is_some()).count(),
                total: seg.len,
            })
            .collect();
        Self {
            scale_size: params.scale_size,
            layers: params.layers,
            total_points: descriptor.len(),
            present_points: descriptor.present_count(),
            foreground_cells: descriptor.grid().count_foreground(),
            scans,
        }
    }
}
