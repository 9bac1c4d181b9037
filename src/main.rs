use clap::Parser;
use regions::core::config::{RegionsConfig, load_config, resolve};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "regions", about = "Searchable single-select region picker")]
struct Args {
    /// Screen title shown in the top bar
    #[arg(short, long)]
    title: Option<String>,

    /// Search text to start with
    #[arg(short, long)]
    query: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to regions.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("regions.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Regions starting up");

    let config = load_config().unwrap_or_else(|e| {
        log::warn!("{e}, using defaults");
        eprintln!("Warning: {e}, using defaults");
        RegionsConfig::default()
    });
    let resolved = resolve(&config, args.title.as_deref(), args.query.as_deref());

    if let Some(region) = regions::tui::run(resolved)? {
        println!("{region}");
    }

    Ok(())
}
