//! Command-line interface for region_colors
//!
//! Analyzes an image into a 3x3 grid of dominant colors. Prints the nine
//! regional results as JSON on stdout and a human-readable summary on
//! stderr.

use region_colors::{
    generate_fallback_regions, load_pixel_buffer, AnalyzerConfig, RegionAnalyzer, RegionResult,
};
use std::{env, path::Path, process};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut fallback_mode = false;
    let mut config_path = None;
    let mut image_path_arg = None;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--fallback" => {
                fallback_mode = true;
            }
            "--config" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --config requires a file path");
                    process::exit(1);
                }
                config_path = Some(args[i + 1].clone());
                i += 1;
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if image_path_arg.is_none() {
                    image_path_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple image paths provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => match AnalyzerConfig::from_json_file(Path::new(&path)) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("Configuration failed: {}", error);
                eprintln!("Suggestion: {}", error.user_message());
                process::exit(1);
            }
        },
        None => AnalyzerConfig::default_analysis(),
    };

    let analyzer = match RegionAnalyzer::with_config(config) {
        Ok(analyzer) => analyzer,
        Err(error) => {
            eprintln!("Configuration failed: {}", error);
            eprintln!("Suggestion: {}", error.user_message());
            process::exit(1);
        }
    };

    if fallback_mode {
        print_results(&analyzer.fallback_regions());
        eprintln!("Note: synthetic fallback data, no image was analyzed.");
        return;
    }

    let image_path_str = match image_path_arg {
        Some(path) => path,
        None => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    let image_path = Path::new(&image_path_str);

    if !image_path.exists() {
        eprintln!("Error: File '{}' does not exist", image_path.display());
        process::exit(1);
    }

    if !region_colors::loader::has_supported_extension(image_path) {
        eprintln!(
            "Warning: '{}' does not look like a supported image format, attempting anyway",
            image_path.display()
        );
    }

    let buffer = match load_pixel_buffer(image_path) {
        Ok(buffer) => buffer,
        Err(error) => {
            eprintln!("Analysis failed: {}", error);
            if error.is_recoverable() {
                eprintln!("Suggestion: {}", error.user_message());
                eprintln!("Hint: run with --fallback to get placeholder results.");
            }
            process::exit(1);
        }
    };

    match analyzer.analyze(&buffer) {
        Ok(results) => print_results(&results),
        Err(error) => {
            eprintln!("Analysis failed: {}", error);
            if error.is_recoverable() {
                eprintln!("Suggestion: {}", error.user_message());
            }
            process::exit(1);
        }
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <image_path>", program_name);
    eprintln!();
    eprintln!("Analyze the regional dominant colors of an image.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --fallback       Emit synthetic placeholder results (no image needed)");
    eprintln!("  --config FILE    Load analysis settings from a JSON file");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} photo.jpg", program_name);
    eprintln!("  {} --config settings.json photo.png", program_name);
    eprintln!("  {} --fallback", program_name);
}

fn print_results(results: &[RegionResult]) {
    // JSON on stdout for programmatic use
    match serde_json::to_string_pretty(results) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing results: {}", e);
            process::exit(1);
        }
    }

    // Summary on stderr for human reading
    eprintln!();
    eprintln!("Regional Color Summary:");
    for result in results {
        eprintln!(
            "  {:<14} {} ({}, {}% of samples, {} contrast)",
            format!("{}:", result.position),
            result.dominant_color.hex,
            result.dominant_color.name,
            result.dominant_color.percentage,
            result.stats.contrast
        );
    }
}
