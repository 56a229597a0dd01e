use motopp_config::Config;
use std::env;
use std::process;
use tracing_subscriber::{EnvFilter, fmt};

fn parse_env_file() -> Option<String> {
    for arg in env::args().skip(1) {
        if let Some(path) = arg.strip_prefix("--env-file=") {
            return Some(path.to_string());
        }
    }
    None
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

fn main() {
    // Initialize tracing early so we can see logs from configuration loading
    init_tracing();

    let result = match parse_env_file() {
        Some(path) => Config::load_from(&path),
        None => Config::load(),
    };

    let config = match result {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if env::args().any(|arg| arg == "--json") {
        match serde_json::to_string_pretty(&config) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize configuration: {}", e);
                process::exit(1);
            }
        }
    } else {
        println!("{}", config.summary());
    }
}
