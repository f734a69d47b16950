use balaena::{
    engine::{EngineBuilder, EngineSettings},
    scenario::ScenarioLoader,
    systems::{
        CalendarSystem, CalvingSystem, EncounterSystem, MortalitySystem, MovementSystem,
        NavigationSystem, SightingsSystem,
    },
};
use tempfile::tempdir;

#[test]
fn engine_runs_hook_each_tick() {
    let loader = ScenarioLoader::new(env!("CARGO_MANIFEST_DIR"));
    let scenario = loader
        .load("scenarios/open_sea.yaml")
        .expect("scenario should load");
    let mut world = scenario.build_world();
    let temp = tempdir().expect("tempdir");
    let settings = EngineSettings {
        scenario_name: scenario.name.clone(),
        seed: scenario.seed,
        snapshot_interval_ticks: 0,
        snapshot_dir: temp.path().to_path_buf(),
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

    let mut ticks = Vec::new();
    engine
        .run_with_hook(&mut world, 6, |snapshot| ticks.push(snapshot.tick))
        .expect("run succeeds");

    assert_eq!(ticks.len(), 6);
    assert_eq!(ticks.first().copied(), Some(1));
    assert_eq!(ticks.last().copied(), Some(6));
}

#[test]
fn snapshots_land_on_the_configured_interval() {
    let loader = ScenarioLoader::new(env!("CARGO_MANIFEST_DIR"));
    let scenario = loader
        .load("scenarios/open_sea.yaml")
        .expect("scenario should load");
    let mut world = scenario.build_world();
    let temp = tempdir().expect("tempdir");
    let settings = EngineSettings {
        scenario_name: scenario.name.clone(),
        seed: scenario.seed,
        snapshot_interval_ticks: 5,
        snapshot_dir: temp.path().to_path_buf(),
    };
    let mut engine = EngineBuilder::new(settings)
        .with_system(CalendarSystem::new())
        .with_system(MovementSystem::new())
        .build();

    engine.run(&mut world, 12).expect("run succeeds");

    let mut frames: Vec<String> = std::fs::read_dir(temp.path())
        .expect("snapshot dir exists")
        .map(|entry| {
            entry
                .expect("dir entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    frames.sort();
    assert_eq!(frames, vec!["frame_00000005.json", "frame_00000010.json"]);
}
