use kana_pdc::config::describe;
use kana_pdc::diagnostics::DescriptorSummary;
use kana_pdc::image::io::{load_grayscale_image, save_grayscale_u8, write_json_file};
use kana_pdc::pdc::{extract, Descriptor};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = describe::load_config(Path::new(&config_path)).map_err(|e| e.to_string())?;
    config.pdc.validate().map_err(|e| e.to_string())?;

    let gray = load_grayscale_image(&config.input).map_err(|e| e.to_string())?;
    let descriptor =
        extract(&gray.as_view(), &config.pdc, &config.binarize).map_err(|e| e.to_string())?;
    let summary = DescriptorSummary::from_descriptor(&descriptor);

    save_grayscale_u8(&descriptor.grid().to_gray(), &config.output.grid_image)
        .map_err(|e| e.to_string())?;
    let report = DescribeReport {
        summary: &summary,
        descriptor: &descriptor,
    };
    write_json_file(&config.output.descriptor_json, &report).map_err(|e| e.to_string())?;

    println!(
        "Saved {}x{} binary grid to {}",
        summary.scale_size,
        summary.scale_size,
        config.output.grid_image.display()
    );
    println!(
        "Saved descriptor ({} of {} points present) to {}",
        summary.present_points,
        summary.total_points,
        config.output.descriptor_json.display()
    );
    Ok(())
}

fn usage() -> String {
    "Usage: describe_glyph <config.json>".to_string()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DescribeReport<'a> {
    summary: &'a DescriptorSummary,
    descriptor: &'a Descriptor,
}
