//! vibron command-line interface.
//!
//! Run fs-CARS / FAST-CARS simulations from TOML configuration files:
//! ```sh
//! vibron-cli run job.toml
//! vibron-cli validate job.toml
//! vibron-cli modes
//! ```

mod config;
mod runner;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vibron-cli")]
#[command(about = "vibron: time-domain fs-CARS / FAST-CARS simulator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation from a TOML configuration file.
    Run {
        /// Path to the job configuration file.
        config: PathBuf,
        /// Output directory (overrides config file setting).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a configuration file without running the simulation.
    Validate {
        /// Path to the job configuration file.
        config: PathBuf,
    },
    /// Display the built-in vibrational mode reference table.
    Modes,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, output } => {
            println!("vibron fs-CARS / FAST-CARS simulator");
            println!("====================================");
            let job = config::load_config(&config)?;
            println!("Configuration: {}", config.display());

            let bundle = runner::run_simulation(&job)?;

            let out_dir = output.unwrap_or_else(|| PathBuf::from(&job.output.directory));

            if job.output.save_spectra {
                runner::write_spectra_csv(&bundle, &out_dir.join("spectra.csv"), &job)?;
            }
            if job.output.save_interferogram {
                runner::write_interferogram_csv(&bundle, &out_dir.join("interferogram.csv"))?;
            }
            if job.output.save_pulses {
                runner::write_pulses_csv(&bundle, &out_dir.join("pulses.csv"))?;
            }
            if job.output.save_json {
                runner::write_bundle_json(&bundle, &out_dir.join("bundle.json"))?;
            }

            println!("Simulation complete.");
            Ok(())
        }
        Commands::Validate { config } => {
            let job = config::load_config(&config)?;
            let input = runner::build_input(&job);
            vibron_core::pipeline::validate(&input)?;
            println!("Configuration is valid: {}", config.display());
            Ok(())
        }
        Commands::Modes => {
            println!("Built-in reference modes (methane, CH₄):");
            println!();
            println!("  id  shift (cm⁻¹)  strength  T₂ (ps)");
            for m in vibron_core::library::methane_modes() {
                println!(
                    "  {:>2}  {:>12}  {:>8}  {:>7}",
                    m.id, m.raman_shift_cm1, m.strength, m.dephasing_time_ps
                );
            }
            println!();
            println!("  ν₁ 2917 — symmetric stretch");
            println!("  ν₃ 3019 — asymmetric stretch");
            println!("  ν₂ 1534 — bend");
            println!("  ν₄ 1306 — bend");
            Ok(())
        }
    }
}
