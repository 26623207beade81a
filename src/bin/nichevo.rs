//! Nichevo CLI - Command-line interface for niche-based text evolution runs.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nichevo::base::Ecosystem;
use nichevo::simulation::{Evolution, EvolutionConfig, Outcome};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

const DEFAULT_ECOSYSTEM: &str = "textual ecosystem to be inhabited simulating environment";
const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz ";

/// Nichevo - niche-based evolution of symbolic genomes
#[derive(Parser, Debug)]
#[command(name = "nichevo")]
#[command(author, version, about = "Niche-based text evolution simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run an evolutionary simulation
    Run {
        /// Reference sequence individuals are scored against
        #[arg(short, long, default_value = DEFAULT_ECOSYSTEM)]
        ecosystem: String,

        /// Symbol set used for generation and mutation
        #[arg(short, long, default_value = DEFAULT_ALPHABET)]
        alphabet: String,

        /// Target population after each selection step
        #[arg(short = 'n', long, default_value = "1000")]
        population_size: usize,

        /// Fixed genome length
        #[arg(short = 'l', long, default_value = "30")]
        genome_length: usize,

        /// Hard cap on simulated generations
        #[arg(short = 'g', long, default_value = "100")]
        generations: usize,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,

        /// Suppress the per-generation best-competitor line
        #[arg(short, long)]
        quiet: bool,

        /// Write the niche history as JSON to this path
        #[arg(long)]
        history_out: Option<PathBuf>,
    },

    /// List the ecosystem windows a genome can occupy
    Windows {
        /// Reference sequence
        #[arg(short, long, default_value = DEFAULT_ECOSYSTEM)]
        ecosystem: String,

        /// Fixed genome length
        #[arg(short = 'l', long, default_value = "30")]
        genome_length: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            ecosystem,
            alphabet,
            population_size,
            genome_length,
            generations,
            seed,
            quiet,
            history_out,
        } => {
            let config = EvolutionConfig::new(
                ecosystem,
                alphabet,
                population_size,
                genome_length,
                generations,
                seed,
            );
            run_simulation(config, quiet, history_out.as_ref())?;
        }
        Commands::Windows {
            ecosystem,
            genome_length,
        } => {
            list_windows(&ecosystem, genome_length)?;
        }
    }

    Ok(())
}

fn run_simulation(config: EvolutionConfig, quiet: bool, history_out: Option<&PathBuf>) -> Result<()> {
    let generation_limit = config.generation_limit;
    let mut evolution = Evolution::new(config).context("Invalid configuration")?;

    println!("Nichevo - niche-based text evolution");
    println!("Ecosystem: {}", evolution.ecosystem());
    println!(
        "Population: {} | Genome length: {} | Niches: {}",
        evolution.config().population_size,
        evolution.config().genome_length,
        evolution.niche_count(),
    );
    println!();

    let mut outcome = Outcome::Exhausted;
    for generation in 0..generation_limit {
        evolution.step();

        if !quiet {
            print_best_competitor(&evolution, generation)?;
        }

        if evolution.converged() {
            outcome = Outcome::Converged { generation };
            break;
        }
    }
    if !quiet {
        println!();
    }

    match outcome {
        Outcome::Converged { generation } => {
            println!("Converged at generation {generation}");
            if let Some((_, genome, niche)) = evolution.best() {
                println!("Winner: \"{genome}\" in niche {niche}");
            }
        }
        Outcome::Exhausted => {
            println!("Exhausted the generation budget ({generation_limit}) without convergence");
            if let Some((fitness, genome, niche)) = evolution.best() {
                println!("Best so far: \"{genome}\" (fitness {fitness}) in niche {niche}");
            }
        }
    }

    print_final_histogram(&evolution);

    if let Some(path) = history_out {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), evolution.history())
            .context("Failed to serialize niche history")?;
        println!("Niche history written to {}", path.display());
    }

    Ok(())
}

/// Overwriting status line: the best genome aligned under its niche.
fn print_best_competitor(evolution: &Evolution, generation: usize) -> Result<()> {
    let Some((_, genome, niche)) = evolution.best() else {
        return Ok(());
    };

    let genome_length = evolution.config().genome_length;
    let trailing = evolution.ecosystem().len() - niche - genome_length;
    print!(
        "\rGenome: {}{}{}   Generation: {}",
        "_".repeat(niche),
        genome,
        "_".repeat(trailing),
        generation,
    );
    io::stdout().flush().context("Failed to flush stdout")?;
    Ok(())
}

fn print_final_histogram(evolution: &Evolution) {
    let history = evolution.history();
    let last = history.len() - 1;
    let Some(counts) = history.histogram(last, evolution.niche_count()) else {
        return;
    };

    println!("\nNiche occupancy (generation {last}):");
    for (niche, count) in counts.iter().enumerate() {
        if *count > 0 {
            println!("  {niche:>4}: {:<50} {count}", "#".repeat((*count).min(50)));
        }
    }
}

fn list_windows(ecosystem: &str, genome_length: usize) -> Result<()> {
    let eco = Ecosystem::from_str(ecosystem);
    anyhow::ensure!(
        genome_length >= 1 && genome_length <= eco.len(),
        "Genome length {} does not fit an ecosystem of length {}",
        genome_length,
        eco.len()
    );
    println!(
        "{} windows of length {genome_length} in \"{eco}\":",
        eco.window_count(genome_length)
    );
    for w in 0..eco.window_count(genome_length) {
        let window: String = eco.window(w, genome_length).iter().collect();
        println!("  {w:>4}: {window}");
    }
    Ok(())
}
