//! Latency command - toggle simulated backend latency

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use super::get_data_dir;
use clientlink_core::config::Config;
use clientlink_core::services::Operation;

#[derive(Subcommand)]
pub enum LatencyCommands {
    /// Enable simulated latency
    #[command(name = "on")]
    On,
    /// Disable simulated latency
    #[command(name = "off")]
    Off,
    /// Show the delay used for each operation
    Status,
}

pub fn run(command: Option<LatencyCommands>) -> Result<()> {
    let data_dir = get_data_dir()?;
    std::fs::create_dir_all(&data_dir)?;
    let mut config = Config::load(&data_dir)?;

    match command {
        Some(LatencyCommands::On) => {
            config.enable_latency();
            config.save(&data_dir)?;
            println!("{}", "Simulated latency enabled".green());
        }
        Some(LatencyCommands::Off) => {
            config.disable_latency();
            config.save(&data_dir)?;
            println!("{}", "Simulated latency disabled".yellow());
        }
        Some(LatencyCommands::Status) | None => {
            if !config.simulate_latency {
                println!("Simulated latency is {}", "OFF".yellow());
                return Ok(());
            }
            println!("Simulated latency is {}", "ON".green());
            let latency = config.latency();
            for op in Operation::ALL {
                println!("  {:<20} {} ms", op.as_str(), latency.delay_for(op).as_millis());
            }
        }
    }

    Ok(())
}
