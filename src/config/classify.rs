use crate::alphabet::AlphabetSpec;
use crate::classifier::ClassifierParams;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct ClassifyToolConfig {
    pub alphabet: AlphabetSpec,
    /// Root of the pre-rendered glyph tree served by `DirectoryGlyphRenderer`.
    pub glyph_dir: PathBuf,
    pub inputs: Vec<GlyphInput>,
    #[serde(default)]
    pub classifier: ClassifierParams,
    pub output: ClassifyOutputConfig,
}

/// One glyph cell image, optionally labelled for accuracy reporting.
#[derive(Debug, Deserialize)]
pub struct GlyphInput {
    pub path: PathBuf,
    #[serde(default)]
    pub expected: Option<char>,
}

#[derive(Debug, Deserialize)]
pub struct ClassifyOutputConfig {
    #[serde(rename = "report_json")]
    pub report_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<ClassifyToolConfig> {
    let config: ClassifyToolConfig = super::load_json(path)?;
    if config.inputs.is_empty() {
        return Err(Error::Config(format!(
            "{} lists no input images",
            path.display()
        )));
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labelled_inputs() {
        let cfg: ClassifyToolConfig = serde_json::from_str(
            r#"{
                "alphabet": "hiragana",
                "glyph_dir": "glyphs",
                "inputs": [
                    { "path": "cells/0.png", "expected": "あ" },
                    { "path": "cells/1.png" }
                ],
                "classifier": { "fonts": ["IPAMincho"] },
                "output": { "report_json": "out/report.json" }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.alphabet, AlphabetSpec::Hiragana);
        assert_eq!(cfg.inputs[0].expected, Some('あ'));
        assert_eq!(cfg.inputs[1].expected, None);
        assert_eq!(cfg.classifier.fonts, vec!["IPAMincho".to_string()]);
        assert_eq!(cfg.classifier.pdc.layers, 3);
    }
}
