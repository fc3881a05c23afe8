//! Integration tests for scene configuration files.

use swarmfield::prelude::*;

#[test]
fn test_save_and_load_scene() {
    let path = std::env::temp_dir().join(format!("swarmfield-scene-{}.json", std::process::id()));
    let config = SceneConfig {
        particle_grid_size: 12,
        mode: ForceFieldMode::PointRepel,
        drag_scale: 0.35,
        selected_mesh: Some(MeshId::B),
        timestep: 0.05,
    };

    config.save(&path).unwrap();
    let loaded = SceneConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, config);
}

#[test]
fn test_load_missing_file() {
    let path = std::env::temp_dir().join("swarmfield-does-not-exist.json");
    assert!(matches!(SceneConfig::load(&path), Err(ConfigError::Io(_))));
}

#[test]
fn test_scene_from_config() {
    let config = SceneConfig::from_json(r#"{ "particle_grid_size": 6, "drag_scale": 0.5, "timestep": 0.2 }"#).unwrap();
    let mut sim = SimulationState::from_config(config).unwrap();

    assert_eq!(sim.particles().len(), 36);
    assert_eq!(sim.time().delta(), 0.2);

    sim.set_target(Some(Vec3::new(2.5, 2.5, 1.0)));
    assert_eq!(sim.tick(), 36);
    assert!((sim.time().elapsed() - 0.2).abs() < 1e-6);
}

#[test]
fn test_scene_rejects_invalid_config() {
    let config = SceneConfig {
        timestep: -0.1,
        ..Default::default()
    };
    assert!(matches!(
        SimulationState::from_config(config),
        Err(ConfigError::InvalidTimestep(_))
    ));
}
