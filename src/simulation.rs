//! The step driver: owns a scene and advances it one tick at a time.

use crate::config::SimulationConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::force::accumulate_spring_forces;
use crate::integrator::integrate;
use crate::observer::StepObserver;
use crate::scene::{Scene, SceneId};
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Simulation state: the live scene, its initial copy, the clock and the
/// play/pause flag.
///
/// A tick is `config.sub_steps` sub-steps, each of which accumulates spring
/// forces, integrates every mass, lets the scene's boundary policy correct the
/// result and clears the accumulated force.
pub struct Simulation<F: Float> {
    scene: Scene<F>,
    initial: Scene<F>,
    config: SimulationConfig<F>,
    elapsed: F,
    playing: bool,
}

impl<F: Float> Simulation<F> {
    /// Start paused on a preset scene with that scene's tunables.
    pub fn new(id: SceneId) -> Self {
        Self::with_scene(Scene::build(id), SimulationConfig::for_scene(id))
    }

    /// Start paused on a custom scene.
    pub fn with_scene(scene: Scene<F>, config: SimulationConfig<F>) -> Self {
        Simulation {
            initial: scene.clone(),
            scene,
            config,
            elapsed: F::zero(),
            playing: false,
        }
    }

    /// Replace the scene with a fresh build of `id` and reset the clock.
    pub fn select_scene(&mut self, id: SceneId) {
        log::info!("selecting scene {}", id.number());
        self.initial = Scene::build(id);
        self.scene = self.initial.clone();
        self.config = SimulationConfig::for_scene(id);
        self.elapsed = F::zero();
    }

    /// [`select_scene`](Self::select_scene) by preset number.
    pub fn select_scene_number(&mut self, n: u8) -> Result<(), PhysicsError> {
        let id = SceneId::try_from(n)?;
        self.select_scene(id);
        Ok(())
    }

    /// Advance to the next preset, wrapping around. Custom scenes go to the first preset.
    pub fn next_scene(&mut self) -> SceneId {
        let id = self.scene.id().map_or(SceneId::Single, SceneId::next);
        self.select_scene(id);
        id
    }

    /// Restart the current scene from its initial state and run one tick.
    pub fn replay<O: StepObserver>(&mut self, observer: &mut O) {
        log::debug!("replaying scene {:?}", self.scene.id());
        self.scene = self.initial.clone();
        self.elapsed = F::zero();
        observer.on_scene_built(self.scene.mass_count(), self.scene.spring_count());
        self.tick(observer);
    }

    pub fn play(&mut self) { self.playing = true; }
    pub fn pause(&mut self) { self.playing = false; }
    pub fn toggle_play(&mut self) { self.playing = !self.playing; }
    pub fn is_playing(&self) -> bool { self.playing }

    /// One external frame: ticks only while playing. Returns whether it ticked.
    pub fn frame<O: StepObserver>(&mut self, observer: &mut O) -> bool {
        if !self.playing {
            return false;
        }
        self.tick(observer);
        true
    }

    /// Run all sub-steps of one tick and advance the clock.
    pub fn tick<O: StepObserver>(&mut self, observer: &mut O) {
        for i in 0..self.config.sub_steps {
            self.sub_step_observed(observer);
            observer.on_sub_step(i);
        }
        self.elapsed = self.elapsed + self.config.tick_duration();
        log::trace!("tick complete at t = {:?}", self.elapsed);
        observer.on_tick_complete();
    }

    /// One force/integrate/resolve/clear cycle over the whole scene.
    pub fn sub_step(&mut self) {
        self.sub_step_observed(&mut crate::observer::NoOpStepObserver);
    }

    fn sub_step_observed<O: StepObserver>(&mut self, observer: &mut O) {
        let SimulationConfig { gravity, air_drag, dt, .. } = self.config;
        let (masses, springs, boundary) = self.scene.parts_mut();

        accumulate_spring_forces(springs, masses);
        observer.on_forces_accumulated();

        // In index order: later masses see earlier ones at their new positions.
        for i in 0..masses.len() {
            if !masses[i].fixed {
                let candidate = integrate(&masses[i], gravity, air_drag, dt);
                let step = boundary.resolve(i, candidate, masses, dt);
                masses[i].position = step.position;
                masses[i].velocity = step.velocity;
            }
            masses[i].clear_force();
        }
    }

    /// Simulated time since the scene was selected or replayed.
    pub fn elapsed(&self) -> F { self.elapsed }
    pub fn scene(&self) -> &Scene<F> { &self.scene }
    pub fn scene_mut(&mut self) -> &mut Scene<F> { &mut self.scene }
    pub fn config(&self) -> &SimulationConfig<F> { &self.config }
    pub fn positions(&self) -> AllocVec<Vec3<F>> { self.scene.positions() }

    pub fn spring_endpoints(&self) -> AllocVec<(Vec3<F>, Vec3<F>)> {
        self.scene.spring_endpoints()
    }

    pub fn total_energy(&self) -> F { self.scene.total_energy() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoOpStepObserver;

    #[derive(Default)]
    struct Counter {
        forces: usize,
        sub_steps: usize,
        ticks: usize,
        builds: usize,
    }

    impl StepObserver for Counter {
        fn on_forces_accumulated(&mut self) { self.forces += 1; }
        fn on_sub_step(&mut self, _index: usize) { self.sub_steps += 1; }
        fn on_tick_complete(&mut self) { self.ticks += 1; }
        fn on_scene_built(&mut self, _m: usize, _s: usize) { self.builds += 1; }
    }

    #[test]
    fn tick_runs_ten_sub_steps() {
        let mut sim = Simulation::<f32>::new(SceneId::Chain);
        let mut counter = Counter::default();
        sim.tick(&mut counter);
        assert_eq!(counter.forces, 10);
        assert_eq!(counter.sub_steps, 10);
        assert_eq!(counter.ticks, 1);
    }

    #[test]
    fn paused_frame_does_nothing() {
        let mut sim = Simulation::<f32>::new(SceneId::Single);
        let before = sim.positions();
        assert!(!sim.frame(&mut NoOpStepObserver));
        assert_eq!(sim.positions(), before);
        assert_eq!(sim.elapsed(), 0.0);
    }

    #[test]
    fn clock_advances_per_tick() {
        let mut sim = Simulation::<f64>::new(SceneId::Single);
        sim.play();
        assert!(sim.frame(&mut NoOpStepObserver));
        assert!(sim.frame(&mut NoOpStepObserver));
        // dt is widened from an f32 constant
        assert!((sim.elapsed() - 2e-3).abs() < 1e-9, "elapsed = {}", sim.elapsed());
    }

    #[test]
    fn replay_restores_and_ticks_once() {
        let mut sim = Simulation::<f32>::new(SceneId::Chain);
        for _ in 0..50 {
            sim.tick(&mut NoOpStepObserver);
        }
        let mut counter = Counter::default();
        sim.replay(&mut counter);
        assert_eq!(counter.builds, 1);
        assert_eq!(counter.ticks, 1);
        assert!((sim.elapsed() - 1e-3).abs() < 1e-7);

        let mut fresh = Simulation::<f32>::new(SceneId::Chain);
        fresh.tick(&mut NoOpStepObserver);
        assert_eq!(sim.positions(), fresh.positions());
    }

    #[test]
    fn scene_built_fires_only_on_replay() {
        let mut sim = Simulation::<f32>::new(SceneId::Single);
        let mut counter = Counter::default();
        sim.select_scene(SceneId::Cube);
        sim.next_scene();
        sim.tick(&mut counter);
        assert_eq!(counter.builds, 0);

        sim.replay(&mut counter);
        assert_eq!(counter.builds, 1);
        assert_eq!(counter.ticks, 2);
    }

    #[test]
    fn next_scene_cycles() {
        let mut sim = Simulation::<f32>::new(SceneId::Cube);
        assert_eq!(sim.next_scene(), SceneId::DrapedCloth);
        assert_eq!(sim.scene().mass_count(), 2500);
        assert_eq!(sim.config().air_drag, 0.2);
    }
}
