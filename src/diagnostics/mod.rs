//! Serializable reports for tools and callers that want more than the answer.
//!
//! `ClassificationReport` is returned by
//! [`PdcClassifier::classify_with_diagnostics`](crate::PdcClassifier) and
//! carries the ranked candidates next to the stage timings.
//! `DescriptorSummary` condenses a descriptor into per-scan coverage counts.

pub mod classification;
pub mod descriptor;
pub mod timing;

pub use classification::{CandidateScore, ClassificationReport};
pub use descriptor::{DescriptorSummary, ScanCoverage};
pub use timing::{StageTiming, TimingBreakdown};
