//! Gray image views, I/O and the binarization collaborator feeding PDC.
//!
//! - [`ImageU8`]: borrowed 8-bit view with an explicit row stride.
//! - [`io::GrayImageU8`]: owned 8-bit buffer, produced by decoding or rendering.
//! - [`scale`]: resampling to the fixed descriptor resolution.
//! - [`threshold`]: foreground/background split into a [`BinaryGrid`](crate::grid::BinaryGrid).
pub mod io;
pub mod scale;
pub mod threshold;
pub mod traits;
pub mod u8;

pub use self::io::GrayImageU8;
pub use self::scale::{rescale, ScaleFilter};
pub use self::threshold::{binarize, threshold, BinarizeOptions, Polarity};
pub use self::traits::{ImageView, Rows};
pub use self::u8::ImageU8;
