use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use balaena::{
    engine::{EngineBuilder, EngineSettings},
    scenario::ScenarioLoader,
    systems::{
        CalendarSystem, CalvingSystem, EncounterSystem, MortalitySystem, MovementSystem,
        NavigationSystem, SightingsSystem,
    },
    web,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Whale population simulation runner")]
struct Cli {
    /// Path to the scenario YAML file
    #[arg(long, default_value = "scenarios/open_sea.yaml")]
    scenario: PathBuf,

    /// Override tick count (uses scenario default when omitted)
    #[arg(long)]
    ticks: Option<u64>,

    /// Override snapshot interval in ticks
    #[arg(long)]
    snapshot_interval: Option<u64>,

    /// Directory for snapshots
    #[arg(long)]
    snapshot_dir: Option<PathBuf>,

    /// Serve the live state feed over HTTP instead of running headless
    #[arg(long)]
    serve: bool,

    /// Host for the state feed
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port for the state feed
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loader = ScenarioLoader::new(".");
    let scenario = loader.load(&cli.scenario)?;
    let ticks = scenario.ticks(cli.ticks);
    let snapshot_interval = cli
        .snapshot_interval
        .unwrap_or(scenario.snapshot_interval_ticks);
    let snapshot_dir = cli
        .snapshot_dir
        .unwrap_or_else(|| PathBuf::from("snapshots"));

    if cli.serve {
        let config = web::WebServerConfig {
            scenario,
            ticks,
            snapshot_interval,
            snapshot_dir,
            host: cli.host,
            port: cli.port,
        };
        let runtime = tokio::runtime::Runtime::new()?;
        return runtime.block_on(web::run(config));
    }

    let mut world = scenario.build_world();
    let settings = EngineSettings {
        scenario_name: scenario.name.clone(),
        seed: scenario.seed,
        snapshot_interval_ticks: snapshot_interval,
        snapshot_dir,
    };
    let mut engine = EngineBuilder::new(settings)
        .with_system(CalendarSystem::new())
        .with_system(EncounterSystem::new())
        .with_system(CalvingSystem::new())
        .with_system(MortalitySystem::new())
        .with_system(MovementSystem::new())
        .with_system(NavigationSystem::new())
        .with_system(SightingsSystem::new())
        .build();

    engine.run(&mut world, ticks)?;
    let calendar = world.calendar();
    println!(
        "Scenario '{}' completed after {} ticks: year {}, month {}, day {}; {} whales alive, {} sighted",
        scenario.name,
        ticks,
        calendar.year(),
        calendar.month(),
        calendar.day(),
        world.whale_count(),
        world.sighted_count()
    );
    Ok(())
}
