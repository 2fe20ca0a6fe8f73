use clap::Parser;
use expo_guide::Screen;
use expo_guide::core::config::{self, CliOverrides, GuideConfig};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "expo-guide", about = "Terminal guide to the expo's participants, offers and news")]
struct Args {
    /// Backend origin, e.g. http://127.0.0.1:8000
    #[arg(short, long)]
    base_url: Option<String>,

    /// Tab to open on start
    #[arg(short, long, value_enum)]
    screen: Option<Screen>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to expo-guide.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("expo-guide.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {e}");
        GuideConfig::default()
    });
    let cli = CliOverrides {
        base_url: args.base_url,
        screen: args.screen,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Expo Guide starting up against {} (screen: {:?})",
        resolved.base_url,
        resolved.screen
    );

    expo_guide::tui::run(resolved)
}
