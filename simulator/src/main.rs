use std::sync::Arc;

use colony::config::SimConfig;
use colony::reporter::ConsoleReporter;
use colony::runner::run_simulation;

const CONFIG_PATH: &str = "sim_config.json";

#[tokio::main]
async fn main() {
    let config = match SimConfig::load(CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => {
            println!("error while loading config at startup: {e}");
            SimConfig::new()
        }
    };

    println!(
        "Simulation started: {} colonies, {} steps each",
        config.colony_count, config.step_count
    );

    if let Err(e) = run_simulation(&config, Arc::new(ConsoleReporter)).await {
        eprintln!("simulation failed: {e:#}");
        std::process::exit(1);
    }

    println!("Simulation finished");
}
