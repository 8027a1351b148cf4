//! Nearest-neighbour kana classifier over PDC descriptors.
//!
//! Overview
//! - [`TemplateLibrary`] renders every alphabet character in each configured
//!   font family once and stores the resulting descriptors.
//! - [`PdcClassifier`] extracts the query descriptor, short-circuits blank
//!   cells to [`Recognition::NoGlyph`](crate::types::Recognition), and
//!   otherwise returns the alphabet character with the smallest
//!   [`descriptor_distance`] to any of its templates.
//!
//! Ties resolve to the character listed first in the alphabet.

pub mod distance;
pub mod params;
mod pipeline;
pub mod templates;

pub use distance::{descriptor_distance, point_cost};
pub use params::ClassifierParams;
pub use pipeline::PdcClassifier;
pub use templates::{Template, TemplateLibrary};
