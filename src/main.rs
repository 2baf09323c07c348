use clap::Parser;
use countries::core::config::{self, CliOverrides};
use countries::core::format::NumberLocale;
use countries::core::route::{Route, parse_route_arg};
use countries::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "countries", about = "Browse the world's countries from the terminal")]
struct Args {
    /// Path to open at start, e.g. "/" or "/country/FRA"
    #[arg(value_parser = parse_route_arg)]
    path: Option<Route>,

    /// Root URL of the REST Countries API
    #[arg(long)]
    base_url: Option<String>,

    /// Digit grouping used for population figures
    #[arg(short, long, value_enum)]
    locale: Option<NumberLocale>,

    /// Where to write the debug log
    #[arg(long, default_value = "countries.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // File logger: the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Countries starting up");

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        config::CountriesConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        CliOverrides {
            base_url: args.base_url,
            locale: args.locale,
            start_route: args.path,
        },
    );
    log::info!("Resolved config: {:?}", resolved);

    tui::run(resolved)
}
