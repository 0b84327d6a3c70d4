use anyhow::{Context, Result};
use clap::Parser;
use itemresist::{BlastScenario, ResistConfig, ScenarioEntity};
use itemresist_core::{DropFilter, Materials, TagLoader};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (default: itemresist.ron if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Scenario file to replay
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Override the blast power
    #[arg(long)]
    power: Option<f32>,

    /// RNG seed for the survival rolls
    #[arg(long)]
    seed: Option<u64>,

    /// Data directory holding tag files (repeatable, applied in order)
    #[arg(long = "data-dir")]
    data_dirs: Vec<PathBuf>,

    /// List known materials with their blast resistance
    #[arg(long)]
    list_materials: bool,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = ResistConfig::load(args.config.as_deref())?;

    // Initialize logging
    let default_filter = if args.verbose || config.debug.verbose_logging {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let materials = Materials::new();

    // Handle --list-materials flag
    if args.list_materials {
        for def in materials.iter() {
            println!("{:<20} {:>12.1}", def.name, def.blast_resistance);
        }
        return Ok(());
    }

    let data_dirs = if args.data_dirs.is_empty() {
        config.tags.data_dirs.clone()
    } else {
        args.data_dirs.clone()
    };
    let sets = TagLoader::new(data_dirs)
        .load(&materials)
        .context("Failed to load classification tags")?;
    let filter = DropFilter::new(&sets, &materials);

    let mut scenario = match &args.scenario {
        Some(path) => BlastScenario::from_file(path)?,
        None => default_scenario(&materials, config.blast.default_power),
    };
    if let Some(power) = args.power {
        scenario.power = Some(power);
    }

    let seed = args
        .seed
        .or(config.blast.seed)
        .unwrap_or_else(rand::random::<u64>);

    let result = scenario.run(&filter, &materials, seed)?;

    println!(
        "Scenario '{}' (power {}, seed {})",
        scenario.name, result.power, result.seed
    );
    for survivor in &result.survivors {
        println!("  kept  {:>4}  {}", survivor.id.0, survivor.label);
    }
    println!("{}", result.report);

    Ok(())
}

/// One stack of every known block, plus a mob and a plain item
fn default_scenario(materials: &Materials, power: f32) -> BlastScenario {
    let mut entities: Vec<ScenarioEntity> = materials
        .iter()
        .map(|def| ScenarioEntity::Block(def.name.clone(), 1))
        .collect();
    entities.push(ScenarioEntity::Item("stick".to_string(), 1));
    entities.push(ScenarioEntity::Entity("creeper".to_string()));

    BlastScenario {
        name: "all blocks".to_string(),
        description: "Every registered block caught in one blast".to_string(),
        power: Some(power),
        entities,
    }
}
