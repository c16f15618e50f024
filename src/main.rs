use relayview::core::config::Config;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let config = Config::from_env();

    // File logger: stdout and stderr belong to the terminal UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }

    log::info!("relayview starting up, source: {}", config.api_url);

    match relayview::tui::run(config) {
        Ok(()) => {
            log::info!("relayview exiting");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::warn!("relayview failed: {e}");
            eprintln!("Error running program: {e}");
            ExitCode::FAILURE
        }
    }
}
