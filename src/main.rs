use clap::Parser;
use serp_extract::{ExtractError, SerpExtractor};
use std::io::Read;

mod args;
use args::Args;

fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    if let Err(e) = run(&args) {
        ::log::error!("Extraction failed: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ExtractError> {
    let mut extractor = SerpExtractor::new();
    if let Some(path) = &args.config {
        ::log::info!("Loading configuration from {}", path.display());
        extractor = extractor.with_config_file(path)?;
    }

    // Command-line flags override the configuration file
    let mut config = extractor.config().clone();
    if let Some(hostname) = &args.hostname {
        config.hostname = Some(hostname.clone());
    }
    config.strict_related |= args.strict;
    extractor = extractor.with_config(config)?;

    let html = read_input(args)?;
    ::log::debug!("Read {} bytes of HTML", html.len());

    let data = extractor.extract(&html)?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&data)?
    } else {
        serde_json::to_string(&data)?
    };
    println!("{json}");

    Ok(())
}

fn read_input(args: &Args) -> Result<String, ExtractError> {
    match args.input_path() {
        Some(path) => {
            ::log::info!("Reading page from {}", path.display());
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            ::log::info!("Reading page from stdin");
            let mut html = String::new();
            std::io::stdin().read_to_string(&mut html)?;
            Ok(html)
        }
    }
}
