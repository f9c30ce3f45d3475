use std::fs;
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result, bail};
use clap::Parser as ClapParser;
use ffd::config::FFDConfig;
use ffd::io;
use ffd::io::cli::Cli;
use ffd::io::output::FFDOutput;
use log::{info, warn};
use marker_rs::io::export::export_result;
use marker_rs::io::import::import_request;
use marker_rs::io::svg::layout_to_svg;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            FFDConfig::default()
        }
        Some(config_file) => {
            let file = File::open(&config_file).with_context(|| {
                format!("could not open config file: {}", config_file.display())
            })?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    if let Some(strategy) = args.strategy {
        config.candidate_strategy = strategy;
    }

    info!("[MAIN] Successfully parsed FFDConfig: {config:?}");

    let Some(input_stem) = args.input_file.file_stem().and_then(|s| s.to_str()) else {
        bail!("invalid input file name: {}", args.input_file.display());
    };

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_request = io::read_request(&args.input_file)?;
    let request = import_request(&ext_request);
    let result = ffd::layout(&request, &config);

    let unplaced = result.unplaced(&request);
    if !unplaced.is_empty() {
        warn!(
            "[MAIN] {} pieces could not be placed: {}",
            unplaced.len(),
            unplaced.join(", ")
        );
    }

    {
        let output = FFDOutput {
            request: ext_request,
            result: export_result(&result),
            config,
        };
        let solution_path = args.solution_folder.join(format!("sol_{input_stem}.json"));
        io::write_json(&output, &solution_path)?;
    }

    {
        let svg_path = args.solution_folder.join(format!("sol_{input_stem}.svg"));
        let svg = layout_to_svg(&request, &result, config.svg_draw_options, input_stem);
        io::write_svg(&svg, &svg_path)?;
    }

    Ok(())
}
