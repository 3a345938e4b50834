//! Per-scene boundary policies applied to integration candidates.
//!
//! A scene picks its policy once when it is built; the step driver hands it to
//! every sub-step instead of branching on which scene is active.

use crate::collision::find_contact;
use crate::config::{
    COLLISION_TOLERANCE, GROUND_HEIGHT, GROUND_RESTITUTION, REST_SPEED, TABLE_HEIGHT, TABLE_WIDTH,
};
use crate::float::Float;
use crate::integrator::Step;
use crate::mass::Mass;
use crate::vec::Vec3;

/// Boundary handling for a scene.
#[derive(Clone, Debug, PartialEq)]
pub enum Boundary<F: Float> {
    /// No boundary; masses fall freely.
    Free,
    /// Infinite horizontal floor with a lossy bounce.
    Ground(GroundPlane<F>),
    /// Rectangular tabletop plus mass-to-mass proximity collision.
    Table(TableLedge<F>),
}

/// A floor at `height`.
///
/// Crossing it reflects the vertical velocity and scales the whole velocity by
/// `restitution`. If the rebound is slower than `rest_speed` the mass is
/// parked on the floor instead.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GroundPlane<F: Float> {
    pub height: F,
    pub restitution: F,
    pub rest_speed: F,
}

/// A horizontal tabletop at `height` covering `[min_x, max_x] x [min_z, max_z]`.
///
/// Masses arriving on it stop dead. `tolerance` is the half-width of the box
/// used for the proximity pass between masses.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TableLedge<F: Float> {
    pub height: F,
    pub min_x: F,
    pub max_x: F,
    pub min_z: F,
    pub max_z: F,
    pub tolerance: F,
}

impl<F: Float> Default for GroundPlane<F> {
    fn default() -> Self {
        GroundPlane {
            height: F::from_f32(GROUND_HEIGHT),
            restitution: F::from_f32(GROUND_RESTITUTION),
            rest_speed: F::from_f32(REST_SPEED),
        }
    }
}

impl<F: Float> GroundPlane<F> {
    pub fn at(height: F) -> Self {
        GroundPlane { height, ..Self::default() }
    }

    pub fn resolve(&self, previous: &Mass<F>, candidate: Step<F>, dt: F) -> Step<F> {
        if candidate.position.y > self.height {
            return candidate;
        }
        let v = candidate.velocity;
        let reflected = Vec3::new(v.x, -v.y, v.z).scale(self.restitution);
        if reflected.y < self.rest_speed {
            Step {
                position: Vec3::new(candidate.position.x, self.height, candidate.position.z),
                velocity: Vec3::new(v.x, F::zero(), v.z),
            }
        } else {
            Step::drift(previous.position, reflected, dt)
        }
    }
}

impl<F: Float> Default for TableLedge<F> {
    fn default() -> Self {
        Self::square(F::from_f32(TABLE_HEIGHT), F::from_f32(TABLE_WIDTH))
    }
}

impl<F: Float> TableLedge<F> {
    /// The scene-5 table: x in `[width/2, width]`, z in `[-width, -width/2]`.
    pub fn square(height: F, width: F) -> Self {
        let half = width * F::half();
        TableLedge {
            height,
            min_x: half,
            max_x: width,
            min_z: -width,
            max_z: -half,
            tolerance: F::from_f32(COLLISION_TOLERANCE),
        }
    }

    /// Whether the horizontal footprint covers `p` (height is not checked).
    pub fn covers(&self, p: Vec3<F>) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.z >= self.min_z && p.z <= self.max_z
    }

    /// Proximity pass first, then the tabletop. A mass that lands on the table
    /// stops there even if it also touched another mass.
    pub fn resolve(
        &self,
        index: usize,
        previous: &Mass<F>,
        candidate: Step<F>,
        masses: &[Mass<F>],
        dt: F,
    ) -> Step<F> {
        let mut step = candidate;
        if let Some(other) = find_contact(index, step.position, masses, self.tolerance) {
            step = Step::drift(previous.position, masses[other].velocity, dt);
        }
        if step.position.y <= self.height && self.covers(step.position) {
            let p = previous.position;
            step = Step {
                position: Vec3::new(p.x, self.height, p.z),
                velocity: Vec3::zero(),
            };
        }
        step
    }
}

impl<F: Float> Boundary<F> {
    pub fn ground() -> Self {
        Boundary::Ground(GroundPlane::default())
    }

    pub fn table() -> Self {
        Boundary::Table(TableLedge::default())
    }

    /// Correct the candidate step of mass `index`.
    ///
    /// `masses` is the scene's mass list as it stands mid-sub-step: entries
    /// before `index` already hold this sub-step's positions.
    pub fn resolve(
        &self,
        index: usize,
        candidate: Step<F>,
        masses: &[Mass<F>],
        dt: F,
    ) -> Step<F> {
        let previous = &masses[index];
        match self {
            Boundary::Free => candidate,
            Boundary::Ground(ground) => ground.resolve(previous, candidate, dt),
            Boundary::Table(table) => table.resolve(index, previous, candidate, masses, dt),
        }
    }
}
