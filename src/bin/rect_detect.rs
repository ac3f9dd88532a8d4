use rect_detector::config::detect::{self, DetectConfig, OutputFormat};
use rect_detector::diagnostics::DetectionReport;
use rect_detector::grid::io::{save_mask_png, write_json_file};
use rect_detector::report::TextReport;
use rect_detector::RectDetector;
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
    let config = detect::load_config(Path::new(&config_path))?;

    let params = config.detector_params()?;
    let grid = config.load_grid()?;

    let mut detector = RectDetector::new(params);
    if let Some(path) = &config.output.mask_out {
        save_mask_png(&detector.binarize(&grid), path)?;
    }
    let report = detector
        .detect_with_diagnostics(&grid)
        .map_err(|e| e.to_string())?;

    if config.output.format.includes_text() {
        print_text_summary(&config, &report);
    }

    if config.output.format.includes_json() {
        if let Some(path) = &config.output.json_out {
            write_json_file(path, &report)?;
            if config.output.format.includes_text() {
                println!("\nJSON report written to {}", path.display());
            } else {
                println!("JSON report written to {}", path.display());
            }
        } else {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
            if config.output.format == OutputFormat::Both {
                println!("\nJSON report:\n{json}");
            } else {
                println!("{json}");
            }
        }
    }

    if let Some(path) = &config.output.mask_out {
        if config.output.format.includes_text() {
            println!("Mask written to {}", path.display());
        } else {
            eprintln!("Mask written to {}", path.display());
        }
    }

    Ok(())
}

fn print_text_summary(config: &DetectConfig, report: &DetectionReport) {
    let input = &report.trace.input;
    println!("Input {} ({}x{})", config.input.display(), input.width, input.height);
    println!(
        "  threshold: {:.4} grid units, bright cells: {}",
        input.min_luminance, input.bright_cells
    );
    println!();
    print!("{}", TextReport(&report.result));
    println!(
        "\nIterations: {} latency_ms={:.3}",
        report.result.iterations, report.result.latency_ms
    );
}

fn usage() -> String {
    "Usage: rect_detect <config.json>".to_string()
}
