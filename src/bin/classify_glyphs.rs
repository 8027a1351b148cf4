use kana_pdc::config::classify;
use kana_pdc::diagnostics::ClassificationReport;
use kana_pdc::image::io::{load_grayscale_image, write_json_file};
use kana_pdc::render::DirectoryGlyphRenderer;
use kana_pdc::PdcClassifier;
use serde::Serialize;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Instant;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = classify::load_config(Path::new(&config_path)).map_err(|e| e.to_string())?;

    let alphabet = config.alphabet.resolve().map_err(|e| e.to_string())?;
    let renderer = DirectoryGlyphRenderer::new(&config.glyph_dir);
    let build_start = Instant::now();
    let classifier = PdcClassifier::build(alphabet, &renderer, config.classifier)
        .map_err(|e| e.to_string())?;
    println!(
        "Built {} templates from {} in {:.1} ms",
        classifier.library().len(),
        config.glyph_dir.display(),
        build_start.elapsed().as_secs_f64() * 1000.0
    );

    let mut entries = Vec::with_capacity(config.inputs.len());
    let mut hits = 0usize;
    let mut labelled = 0usize;
    for input in &config.inputs {
        let outcome = load_grayscale_image(&input.path)
            .and_then(|gray| classifier.classify_with_diagnostics(&gray.as_view()));
        let entry = match outcome {
            Ok(report) => {
                let predicted = report.recognition.character();
                let hit = input.expected.map(|e| predicted == Some(e));
                if let Some(hit) = hit {
                    labelled += 1;
                    hits += usize::from(hit);
                }
                println!(
                    "Classify {} [{}]: {}",
                    input.path.display(),
                    input.expected.map(String::from).unwrap_or_else(|| "?".into()),
                    report.recognition
                );
                GlyphEntry {
                    path: input.path.clone(),
                    expected: input.expected,
                    hit,
                    report: Some(report),
                    error: None,
                }
            }
            Err(err) => {
                eprintln!("Skipping {}: {err}", input.path.display());
                GlyphEntry {
                    path: input.path.clone(),
                    expected: input.expected,
                    hit: None,
                    report: None,
                    error: Some(err.to_string()),
                }
            }
        };
        entries.push(entry);
    }

    let accuracy = (labelled > 0).then(|| hits as f64 / labelled as f64);
    if let Some(acc) = accuracy {
        println!("Hits: {hits} / {labelled} ({acc:.3})");
    }

    let summary = ClassifyRunReport {
        alphabet_size: classifier.alphabet().len(),
        fonts: classifier.params().fonts.clone(),
        hits,
        labelled,
        accuracy,
        glyphs: entries,
    };
    write_json_file(&config.output.report_json, &summary).map_err(|e| e.to_string())?;
    println!("Saved report to {}", config.output.report_json.display());
    Ok(())
}

fn usage() -> String {
    "Usage: classify_glyphs <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GlyphEntry {
    path: PathBuf,
    expected: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<ClassificationReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClassifyRunReport {
    alphabet_size: usize,
    fonts: Vec<String>,
    hits: usize,
    labelled: usize,
    accuracy: Option<f64>,
    glyphs: Vec<GlyphEntry>,
}
