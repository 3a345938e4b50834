//! Hookean springs between two masses.

use crate::float::Float;
use crate::mass::Mass;
use crate::vec::Vec3;

/// Lengths below this are treated as coincident endpoints.
const DEGENERATE_LENGTH: f32 = 1e-10;

/// A spring joining masses `a` and `b`.
///
/// Endpoints are indices into the owning scene's mass list, so rebuilding or
/// reallocating that list cannot leave a spring pointing at stale storage.
///
/// `damping` is carried along with the topology but is not part of the force
/// model; motion is only damped by the global air drag in the integrator.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring<F: Float> {
    pub a: usize,
    pub b: usize,
    pub stiffness: F,
    pub rest_length: F,
    pub damping: F,
}

impl<F: Float> Spring<F> {
    pub fn new(a: usize, b: usize, stiffness: F, rest_length: F) -> Self {
        Spring { a, b, stiffness, rest_length, damping: F::zero() }
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Distance between the two endpoints.
    pub fn current_length(&self, masses: &[Mass<F>]) -> F {
        masses[self.b].position.distance(masses[self.a].position)
    }

    /// Force acting on endpoint `b`: `-k (L - rest) u`, with `u` the unit
    /// vector from `a` to `b`. Endpoint `a` receives the negation.
    ///
    /// Returns `None` when the endpoints coincide and the direction is undefined.
    pub fn force_on_b(&self, masses: &[Mass<F>]) -> Option<Vec3<F>> {
        let delta = masses[self.b].position - masses[self.a].position;
        let length = delta.length();
        if length.is_near_zero(F::from_f32(DEGENERATE_LENGTH)) {
            return None;
        }
        let unit = delta / length;
        Some(unit.scale(-self.stiffness * (length - self.rest_length)))
    }

    /// Elastic potential energy, `k (L - rest)^2 / 2`.
    pub fn potential_energy(&self, masses: &[Mass<F>]) -> F {
        let stretch = self.current_length(masses) - self.rest_length;
        F::half() * self.stiffness * stretch * stretch
    }
}
