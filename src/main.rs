use clap::Parser;
use std::io;
use std::path::Path;

use passgen::cli::{handlers, Args};
use passgen::core::config::Config;

fn main() {
    // Load environment variables
    let dotenv_loaded = Path::new(".env").exists() && dotenvy::dotenv().is_ok();

    let args = Args::parse();
    let (config, config_warnings) = Config::load();

    // Passwords go to stdout, so logs stay on stderr
    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .target(env_logger::Target::Stderr)
        .init();

    for warning in &config_warnings {
        log::warn!("{}", warning);
    }

    log::debug!("Loaded .env file: {}", dotenv_loaded);
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = handlers::run(&args, &config, &mut out) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}
