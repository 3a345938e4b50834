use springbox::config::MASS_WIDTH;
use springbox::render::{flatten, line_vertices, quad_vertices};
use springbox::{SceneId, Simulation, StepObserver};
use wasm_bindgen::prelude::*;

/// Counts what happened during the last frame, for the page's status line.
#[derive(Default)]
struct FrameStats {
    sub_steps: usize,
    ticks: usize,
}

impl StepObserver for FrameStats {
    fn on_sub_step(&mut self, _index: usize) {
        self.sub_steps += 1;
    }

    fn on_tick_complete(&mut self) {
        self.ticks += 1;
    }
}

// ---- Scene Demo ----

#[wasm_bindgen]
pub struct SceneDemo {
    sim: Simulation<f32>,
    stats: FrameStats,
}

#[wasm_bindgen]
impl SceneDemo {
    /// Starts paused on preset `scene` (1-5); anything else falls back to 1.
    #[wasm_bindgen(constructor)]
    pub fn new(scene: u8) -> Self {
        let id = SceneId::try_from(scene).unwrap_or(SceneId::Single);
        SceneDemo {
            sim: Simulation::new(id),
            stats: FrameStats::default(),
        }
    }

    /// Number key handler. Returns false and keeps the current scene for unknown keys.
    pub fn select_scene(&mut self, scene: u8) -> bool {
        self.sim.select_scene_number(scene).is_ok()
    }

    pub fn next_scene(&mut self) -> u8 {
        self.sim.next_scene().number()
    }

    pub fn scene_number(&self) -> u8 {
        self.sim.scene().id().map_or(0, SceneId::number)
    }

    pub fn toggle_play(&mut self) -> bool {
        self.sim.toggle_play();
        self.sim.is_playing()
    }

    pub fn replay(&mut self) {
        self.sim.replay(&mut self.stats);
    }

    /// Call once per animation frame. Returns whether the scene advanced.
    pub fn frame(&mut self) -> bool {
        self.sim.frame(&mut self.stats)
    }

    pub fn elapsed(&self) -> f32 {
        self.sim.elapsed()
    }

    pub fn ticks(&self) -> usize {
        self.stats.ticks
    }

    pub fn sub_steps(&self) -> usize {
        self.stats.sub_steps
    }

    /// Returns flat [x0, y0, z0, x1, y1, z1, ...] mass positions
    pub fn positions(&self) -> Vec<f32> {
        flatten(&self.sim.positions())
    }

    /// Six vertices (two triangles) per mass, flattened
    pub fn quads(&self) -> Vec<f32> {
        flatten(&quad_vertices(&self.sim.positions(), MASS_WIDTH))
    }

    /// Two vertices per spring, flattened
    pub fn lines(&self) -> Vec<f32> {
        flatten(&line_vertices(self.sim.scene()))
    }

    pub fn mass_count(&self) -> usize {
        self.sim.scene().mass_count()
    }

    pub fn spring_count(&self) -> usize {
        self.sim.scene().spring_count()
    }
}
