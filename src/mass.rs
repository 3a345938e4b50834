//! Point masses.

use crate::float::Float;
use crate::vec::Vec3;

/// A point mass with explicit position and velocity.
///
/// `force` accumulates spring forces during a sub-step and is cleared once the
/// mass has been integrated. A `fixed` mass keeps its position and velocity no
/// matter what forces are accumulated on it.
#[derive(Clone, Debug, PartialEq)]
pub struct Mass<F: Float> {
    pub mass: F,
    pub position: Vec3<F>,
    pub velocity: Vec3<F>,
    pub force: Vec3<F>,
    pub fixed: bool,
}

impl<F: Float> Mass<F> {
    /// A free mass at rest.
    pub fn new(position: Vec3<F>, mass: F) -> Self {
        Mass {
            mass,
            position,
            velocity: Vec3::zero(),
            force: Vec3::zero(),
            fixed: false,
        }
    }

    /// An immovable anchor. `mass` is never used for integration and may be zero.
    pub fn fixed(position: Vec3<F>, mass: F) -> Self {
        Mass { fixed: true, ..Mass::new(position, mass) }
    }

    pub fn with_velocity(mut self, velocity: Vec3<F>) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn add_force(&mut self, force: Vec3<F>) {
        self.force += force;
    }

    pub fn clear_force(&mut self) {
        self.force = Vec3::zero();
    }

    /// Kinetic energy, `m v^2 / 2`. Zero for fixed masses.
    pub fn kinetic_energy(&self) -> F {
        if self.fixed {
            return F::zero();
        }
        F::half() * self.mass * self.velocity.length_sq()
    }
}
