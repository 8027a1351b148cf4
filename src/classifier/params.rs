//! Parameters shared by template construction and query classification.
//!
//! Templates and queries must be described with the same [`PdcParams`] and
//! [`BinarizeOptions`]; the classifier keeps a single copy for both sides.
use crate::error::{Error, Result};
use crate::image::BinarizeOptions;
use crate::pdc::PdcParams;
use crate::render::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierParams {
    pub pdc: PdcParams,
    pub binarize: BinarizeOptions,
    /// Cost of a position present in one descriptor and absent in the other.
    /// `None` resolves to `4·S` for the configured `pdc.scale_size`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mismatch_penalty: Option<u64>,
    /// Font families rendered per character; each yields one template.
    pub fonts: Vec<String>,
    /// Point size requested from the glyph renderer.
    pub font_size: u32,
    /// Number of ranked candidates kept in diagnostic reports.
    pub report_candidates: usize,
}

impl Default for ClassifierParams {
    fn default() -> Self {
        Self {
            pdc: PdcParams::default(),
            binarize: BinarizeOptions::default(),
            mismatch_penalty: None,
            fonts: vec![DEFAULT_FONT_FAMILY.to_string()],
            font_size: DEFAULT_FONT_SIZE,
            report_candidates: 5,
        }
    }
}

/// Default present/absent penalty, `4·S`.
pub fn default_mismatch_penalty(pdc: &PdcParams) -> u64 {
    4 * pdc.scale_size as u64
}

impl ClassifierParams {
    pub fn with_fonts<I, S>(mut self, fonts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fonts = fonts.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the descriptor parameters. An explicit penalty is kept; the
    /// default one follows the new grid size.
    pub fn with_pdc(mut self, pdc: PdcParams) -> Self {
        self.pdc = pdc;
        self
    }

    pub fn with_mismatch_penalty(mut self, penalty: u64) -> Self {
        self.mismatch_penalty = Some(penalty);
        self
    }

    /// Effective present/absent penalty.
    pub fn mismatch_penalty(&self) -> u64 {
        self.mismatch_penalty
            .unwrap_or_else(|| default_mismatch_penalty(&self.pdc))
    }

    pub fn validate(&self) -> Result<()> {
        self.pdc.validate()?;
        if self.fonts.is_empty() {
            return Err(Error::Config("at least one font family is required".to_string()));
        }
        if self.font_size == 0 {
            return Err(Error::Config("font_size must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::FONT_FAMILIES;

    #[test]
    fn defaults_follow_grid_size() {
        let p = ClassifierParams::default();
        assert_eq!(p.mismatch_penalty(), 256);
        assert_eq!(p.font_size, 24);
        assert!(p.validate().is_ok());

        let small = p.with_pdc(PdcParams::new(16, 2));
        assert_eq!(small.mismatch_penalty(), 64);
    }

    #[test]
    fn json_grid_size_drives_default_penalty() {
        let p: ClassifierParams =
            serde_json::from_str(r#"{"pdc":{"scale_size":16}}"#).unwrap();
        assert_eq!(p.pdc.scale_size, 16);
        assert_eq!(p.mismatch_penalty(), 64);

        let explicit: ClassifierParams =
            serde_json::from_str(r#"{"pdc":{"scale_size":16},"mismatch_penalty":10}"#).unwrap();
        assert_eq!(explicit.mismatch_penalty(), 10);
    }

    #[test]
    fn explicit_penalty_survives_with_pdc() {
        let p = ClassifierParams::default()
            .with_mismatch_penalty(7)
            .with_pdc(PdcParams::new(32, 3));
        assert_eq!(p.mismatch_penalty(), 7);
    }

    #[test]
    fn default_font_is_a_known_family() {
        let p = ClassifierParams::default();
        assert!(p.fonts.iter().all(|f| FONT_FAMILIES.contains(&f.as_str())));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let p: ClassifierParams =
            serde_json::from_str(r#"{"fonts":["IPAMincho","IPAGothic"],"pdc":{"layers":2}}"#)
                .unwrap();
        assert_eq!(p.fonts.len(), 2);
        assert_eq!(p.pdc.layers, 2);
        assert_eq!(p.pdc.scale_size, 64);
        assert_eq!(p.binarize.threshold, 128);
    }

    #[test]
    fn empty_font_list_is_rejected() {
        let p = ClassifierParams::default().with_fonts(Vec::<String>::new());
        assert!(matches!(p.validate(), Err(Error::Config(_))));
    }
}
