use std::process;

use server::{config::Config, run};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load configuration.");
            eprintln!("Details: {}.", e);
            process::exit(1);
        }
    };

    if let Err(e) = run::run(&config) {
        eprintln!("Error: Server stopped unexpectedly.");
        eprintln!("Details: {}.", e);
        process::exit(1);
    }
}
