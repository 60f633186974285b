use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use cadenza_conf::CadenzaConfig;
use harmony::{generate_progressions, Progression, ProgressionLength};
use muse::{AssistedGenerator, MaintenanceSwitch, MuseClient};

#[derive(Parser)]
#[command(name = "cadenza", about = "Chord progression generation", version)]
struct Cli {
    /// Path to a config file (overrides ./cadenza.toml)
    #[arg(long, global = true, env = "CADENZA_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate chord progressions from a free-text prompt
    Generate {
        /// What you're looking for, e.g. "mellow intro in G minor"
        prompt: String,

        /// Chords per progression (4, 8 or 16)
        #[arg(long, default_value_t = 4)]
        chords: u8,

        /// Ask the configured model first, falling back to the
        /// deterministic generator on any failure
        #[arg(long)]
        assist: bool,

        /// Emit plain JSON instead of formatted cards
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CadenzaConfig::load_from(cli.config.as_deref())
        .context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.telemetry.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(log_level = %config.telemetry.log_level, "starting cadenza");

    match cli.command {
        Command::Generate {
            prompt,
            chords,
            assist,
            json,
        } => {
            let length = ProgressionLength::try_from(chords)?;

            let progressions = if assist {
                let client = MuseClient::from_config(&config.llm)
                    .context("failed to build model client")?;
                let generator = AssistedGenerator::new(client, MaintenanceSwitch::new());
                generator.generate(&prompt, length).await
            } else {
                generate_progressions(&prompt, length)
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&progressions)?);
            } else {
                render_cards(&prompt, &progressions);
            }
        }

        Command::Config => {
            print!("{}", config.to_toml());
        }
    }

    Ok(())
}

fn render_cards(prompt: &str, progressions: &[Progression]) {
    println!("{} {}", "Chord progressions:".bold(), prompt.italic());
    println!();

    for progression in progressions {
        let use_flats = progression.key.use_flats();

        println!("{}", progression.description.bright_magenta().bold());

        let symbols: Vec<String> = progression
            .chords
            .iter()
            .map(|c| c.symbol(use_flats))
            .collect();
        println!("  {}", symbols.join(" - ").bright_white());

        for chord in &progression.chords {
            println!(
                "    {:<6} {}",
                chord.symbol(use_flats).bright_cyan(),
                chord.note_names(use_flats).join(" ").dimmed()
            );
        }
        println!();
    }
}
