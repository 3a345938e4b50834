//! Simulation tunables.
//!
//! The constants are the fixed values the preset scenes run with. They are not
//! meant to be changed at runtime; [`SimulationConfig`] exists so custom scenes
//! and tests can pick their own.

use crate::float::Float;
use crate::scene::SceneId;
use crate::vec::Vec3;

/// Gravitational acceleration.
pub const GRAVITY: [f32; 3] = [0.0, -9.81, 0.0];
/// Air drag coefficient for every scene but the draped cloth.
pub const AIR_DRAG: f32 = 0.7;
/// Air drag coefficient for the draped cloth.
pub const CLOTH_AIR_DRAG: f32 = 0.2;
/// Sub-steps per animation tick.
pub const SUB_STEPS: usize = 10;
/// Sub-step duration for the spring, chain and cube scenes.
pub const SUB_STEP_DT: f32 = 1e-4;
/// Sub-step duration for the cloth scenes.
pub const GRID_SUB_STEP_DT: f32 = 1e-5;
/// Height of the cube scene's floor.
pub const GROUND_HEIGHT: f32 = -50.0;
/// Fraction of velocity kept after a floor bounce.
pub const GROUND_RESTITUTION: f32 = 0.5;
/// Rebounds slower than this come to rest on the floor.
pub const REST_SPEED: f32 = 1.0;
/// Height of the falling-cloth table.
pub const TABLE_HEIGHT: f32 = -30.0;
/// Edge length parameter of the falling-cloth table.
pub const TABLE_WIDTH: f32 = 50.0;
/// Half-width of the proximity box used for mass-to-mass collision.
pub const COLLISION_TOLERANCE: f32 = 0.005;
/// Side length of the quad drawn for each mass.
pub const MASS_WIDTH: f32 = 0.25;

/// Integration parameters for a [`Simulation`](crate::simulation::Simulation).
///
/// # Builder Pattern
/// ```
/// use springbox::config::SimulationConfig;
/// use springbox::vec::Vec3;
///
/// let config: SimulationConfig<f32> = SimulationConfig::new()
///     .with_gravity(Vec3::new(0.0, -9.81, 0.0))
///     .with_air_drag(0.7)
///     .with_dt(1e-4)
///     .with_sub_steps(10);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig<F: Float> {
    /// Gravity acceleration vector. Default: `(0, -9.81, 0)`.
    pub gravity: Vec3<F>,
    /// Linear air drag, force `-v * air_drag`. Default: 0.7.
    pub air_drag: F,
    /// Number of sub-steps per tick. Default: 10.
    pub sub_steps: usize,
    /// Duration of one sub-step. Default: 1e-4.
    pub dt: F,
}

impl<F: Float> SimulationConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SimulationConfig {
            gravity: Vec3::from_f32(GRAVITY[0], GRAVITY[1], GRAVITY[2]),
            air_drag: F::from_f32(AIR_DRAG),
            sub_steps: SUB_STEPS,
            dt: F::from_f32(SUB_STEP_DT),
        }
    }

    /// The tunables a preset scene runs with.
    pub fn for_scene(id: SceneId) -> Self {
        let config = Self::new();
        match id {
            SceneId::Single | SceneId::Chain | SceneId::Cube => config,
            SceneId::DrapedCloth => config
                .with_air_drag(F::from_f32(CLOTH_AIR_DRAG))
                .with_dt(F::from_f32(GRID_SUB_STEP_DT)),
            SceneId::FallingCloth => config.with_dt(F::from_f32(GRID_SUB_STEP_DT)),
        }
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec3<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the air drag coefficient.
    pub fn with_air_drag(mut self, air_drag: F) -> Self {
        self.air_drag = air_drag;
        self
    }

    /// Set the number of sub-steps per tick.
    pub fn with_sub_steps(mut self, sub_steps: usize) -> Self {
        self.sub_steps = sub_steps.max(1);
        self
    }

    /// Set the sub-step duration.
    pub fn with_dt(mut self, dt: F) -> Self {
        self.dt = dt;
        self
    }

    /// Simulated time covered by one tick.
    pub fn tick_duration(&self) -> F {
        self.dt * F::from_usize(self.sub_steps)
    }
}

impl<F: Float> Default for SimulationConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
