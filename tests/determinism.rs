use springbox::{NoOpStepObserver, SceneId, Simulation, Vec3};

fn run(id: SceneId, ticks: usize) -> Vec<Vec3<f32>> {
    let mut sim = Simulation::<f32>::new(id);
    for _ in 0..ticks {
        sim.tick(&mut NoOpStepObserver);
    }
    sim.positions()
}

#[test]
fn repeated_runs_match_bit_for_bit() {
    for id in [SceneId::Single, SceneId::Chain, SceneId::Cube] {
        assert_eq!(run(id, 500), run(id, 500), "{:?}", id);
    }
}

#[test]
fn replay_matches_fresh_run() {
    let mut sim = Simulation::<f32>::new(SceneId::Cube);
    for _ in 0..200 {
        sim.tick(&mut NoOpStepObserver);
    }
    sim.replay(&mut NoOpStepObserver);
    for _ in 0..99 {
        sim.tick(&mut NoOpStepObserver);
    }
    assert_eq!(sim.positions(), run(SceneId::Cube, 100));
}

#[test]
fn reselecting_scene_restarts_it() {
    let mut sim = Simulation::<f32>::new(SceneId::Chain);
    for _ in 0..300 {
        sim.tick(&mut NoOpStepObserver);
    }
    sim.select_scene(SceneId::Chain);
    for _ in 0..50 {
        sim.tick(&mut NoOpStepObserver);
    }
    assert_eq!(sim.positions(), run(SceneId::Chain, 50));
}
