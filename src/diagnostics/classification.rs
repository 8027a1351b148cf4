use super::timing::TimingBreakdown;
use crate::types::Recognition;
use serde::Serialize;

/// Distance of one alphabet character to the query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateScore {
    pub character: char,
    /// Position in the alphabet; breaks distance ties.
    pub alphabet_index: usize,
    /// Minimum over the character's templates.
    pub distance: u64,
}

/// Result of [`PdcClassifier::classify_with_diagnostics`](crate::PdcClassifier).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationReport {
    pub recognition: Recognition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_distance: Option<u64>,
    /// Best candidates, closest first. Empty for blank cells.
    pub candidates: Vec<CandidateScore>,
    pub present_points: usize,
    pub total_points: usize,
    pub timings: TimingBreakdown,
}

impl ClassificationReport {
    /// Distance gap between the winner and the runner-up, if both exist.
    pub fn margin(&self) -> Option<u64> {
        match self.candidates.as_slice() {
            [best, second, ..] => Some(second.distance - best.distance),
            _ => None,
        }
    }
}
