//! Query side of the classifier.
//!
//! Typical usage:
//! ```no_run
//! use kana_pdc::prelude::*;
//! use kana_pdc::render::DirectoryGlyphRenderer;
//!
//! # fn example(cell: ImageU8) -> kana_pdc::Result<()> {
//! let renderer = DirectoryGlyphRenderer::new("glyphs");
//! let classifier =
//!     PdcClassifier::build(Alphabet::hiragana(), &renderer, ClassifierParams::default())?;
//! match classifier.classify(&cell)? {
//!     Recognition::Glyph(c) => println!("read {c}"),
//!     Recognition::NoGlyph => println!("blank cell"),
//! }
//! # Ok(())
//! # }
//! ```
use super::distance::descriptor_distance;
use super::params::ClassifierParams;
use super::templates::{Template, TemplateLibrary};
use crate::alphabet::Alphabet;
use crate::diagnostics::{CandidateScore, ClassificationReport, TimingBreakdown};
use crate::error::{Error, Result};
use crate::image::ImageU8;
use crate::pdc::{extract, Descriptor, PdcParams};
use crate::render::GlyphRenderer;
use crate::types::Recognition;
use log::debug;
use rayon::prelude::*;

/// Nearest-neighbour classifier over a fixed [`TemplateLibrary`].
///
/// Holds no mutable state; a single instance can serve concurrent queries.
#[derive(Clone, Debug)]
pub struct PdcClassifier {
    library: TemplateLibrary,
}

impl PdcClassifier {
    /// Render templates for `alphabet` and wrap them in a classifier.
    pub fn build<R>(alphabet: Alphabet, renderer: &R, params: ClassifierParams) -> Result<Self>
    where
        R: GlyphRenderer + ?Sized,
    {
        TemplateLibrary::build(alphabet, renderer, params).map(Self::from_library)
    }

    pub fn from_library(library: TemplateLibrary) -> Self {
        Self { library }
    }

    pub fn library(&self) -> &TemplateLibrary {
        &self.library
    }

    pub fn params(&self) -> &ClassifierParams {
        self.library.params()
    }

    pub fn alphabet(&self) -> &Alphabet {
        self.library.alphabet()
    }

    /// Descriptor of `image` under this classifier's parameters.
    pub fn describe(&self, image: &ImageU8<'_>) -> Result<Descriptor> {
        let params = self.params();
        extract(image, &params.pdc, &params.binarize)
    }

    /// Classify a single pre-isolated glyph image of any size.
    pub fn classify(&self, image: &ImageU8<'_>) -> Result<Recognition> {
        let descriptor = self.describe(image)?;
        self.classify_descriptor(&descriptor)
    }

    /// Classify several glyph images in parallel. Results keep input order and
    /// a bad image only fails its own entry.
    pub fn classify_batch(&self, images: &[ImageU8<'_>]) -> Vec<Result<Recognition>> {
        images.par_iter().map(|image| self.classify(image)).collect()
    }

    /// Classify an already extracted descriptor. It must have been extracted
    /// with this classifier's [`PdcParams`].
    pub fn classify_descriptor(&self, descriptor: &Descriptor) -> Result<Recognition> {
        self.check_descriptor(descriptor)?;
        if descriptor.is_blank() {
            debug!("PdcClassifier::classify blank cell");
            return Ok(Recognition::NoGlyph);
        }
        let distances = self.template_distances(descriptor);
        let (best_index, best_distance) = nearest(&distances);
        let character = self.alphabet().chars()[best_index];
        debug!(
            "PdcClassifier::classify -> {:?} distance={} present={}",
            character,
            best_distance,
            descriptor.present_count()
        );
        Ok(Recognition::Glyph(character))
    }

    /// Every alphabet character with its distance, closest first; equal
    /// distances keep alphabet order.
    pub fn rank(&self, descriptor: &Descriptor) -> Result<Vec<CandidateScore>> {
        self.check_descriptor(descriptor)?;
        let chars = self.alphabet().chars();
        let mut scores: Vec<CandidateScore> = self
            .template_distances(descriptor)
            .into_iter()
            .enumerate()
            .map(|(alphabet_index, distance)| CandidateScore {
                character: chars[alphabet_index],
                alphabet_index,
                distance,
            })
            .collect();
        scores.sort_by_key(|s| (s.distance, s.alphabet_index));
        Ok(scores)
    }

    /// Classify and report the ranking and stage timings.
    pub fn classify_with_diagnostics(&self, image: &ImageU8<'_>) -> Result<ClassificationReport> {
        let mut timings = TimingBreakdown::default();
        let descriptor = timings.time("extract", || self.describe(image))?;
        let present_points = descriptor.present_count();
        let total_points = descriptor.len();

        if descriptor.is_blank() {
            return Ok(ClassificationReport {
                recognition: Recognition::NoGlyph,
                best_distance: None,
                candidates: Vec::new(),
                present_points,
                total_points,
                timings,
            });
        }

        let mut candidates = timings.time("match", || self.rank(&descriptor))?;
        let best = candidates[0];
        candidates.truncate(self.params().report_candidates.max(1));
        Ok(ClassificationReport {
            recognition: Recognition::Glyph(best.character),
            best_distance: Some(best.distance),
            candidates,
            present_points,
            total_points,
            timings,
        })
    }

    fn check_descriptor(&self, descriptor: &Descriptor) -> Result<()> {
        let expected: PdcParams = self.params().pdc;
        let actual = descriptor.params();
        if actual != expected {
            return Err(Error::InvalidInput(format!(
                "descriptor extracted with S={} L={}, classifier uses S={} L={}",
                actual.scale_size, actual.layers, expected.scale_size, expected.layers
            )));
        }
        Ok(())
    }

    /// Minimum distance to each character's templates, in alphabet order.
    fn template_distances(&self, descriptor: &Descriptor) -> Vec<u64> {
        let penalty = self.params().mismatch_penalty();
        self.library
            .templates()
            .par_iter()
            .map(|template| template_distance(template, descriptor, penalty))
            .collect()
    }
}

fn template_distance(template: &Template, descriptor: &Descriptor, penalty: u64) -> u64 {
    template
        .descriptors
        .iter()
        .map(|t| descriptor_distance(t, descriptor, penalty))
        .min()
        .unwrap_or(u64::MAX)
}

/// Index and value of the smallest distance; the earliest index wins ties.
fn nearest(distances: &[u64]) -> (usize, u64) {
    let mut best = (0, u64::MAX);
    for (i, &d) in distances.iter().enumerate() {
        if d < best.1 {
            best = (i, d);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_prefers_earliest_on_ties() {
        assert_eq!(nearest(&[5, 3, 3, 4]), (1, 3));
        assert_eq!(nearest(&[2, 2]), (0, 2));
        assert_eq!(nearest(&[9]), (0, 9));
    }
}
