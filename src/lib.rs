#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod alphabet;
pub mod classifier;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod render;
pub mod types;

// Descriptor internals – public for tooling and experiments.
pub mod grid;
pub mod pdc;

// Command-line tool configuration.
pub mod config;

// --- High-level re-exports -------------------------------------------------

pub use crate::alphabet::{Alphabet, AlphabetSpec};
pub use crate::classifier::{ClassifierParams, PdcClassifier, TemplateLibrary};
pub use crate::error::{Error, Result};
pub use crate::types::Recognition;

pub use crate::diagnostics::{ClassificationReport, DescriptorSummary};
pub use crate::pdc::{Descriptor, PdcParams};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use kana_pdc::prelude::*;
///
/// # fn main() -> kana_pdc::Result<()> {
/// let gray = vec![255u8; 40 * 40];
/// let img = ImageU8 { w: 40, h: 40, stride: 40, data: &gray };
///
/// let descriptor = kana_pdc::pdc::extract(&img, &PdcParams::default(), &Default::default())?;
/// assert!(descriptor.is_blank());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{GrayImageU8, ImageU8};
    pub use crate::{
        Alphabet, ClassifierParams, Descriptor, PdcClassifier, PdcParams, Recognition,
    };
}
