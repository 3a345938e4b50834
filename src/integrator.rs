//! Explicit Euler integration of a single mass.

use crate::float::Float;
use crate::mass::Mass;
use crate::vec::Vec3;

/// A candidate position/velocity pair for one mass after one sub-step.
///
/// Boundary policies inspect and rewrite candidates before they are committed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Step<F: Float> {
    pub position: Vec3<F>,
    pub velocity: Vec3<F>,
}

impl<F: Float> Step<F> {
    /// The state a mass already has, i.e. no motion this sub-step.
    pub fn hold(mass: &Mass<F>) -> Self {
        Step { position: mass.position, velocity: mass.velocity }
    }

    /// Advance `from` by `velocity` over `dt` and keep that velocity.
    pub fn drift(from: Vec3<F>, velocity: Vec3<F>, dt: F) -> Self {
        Step { position: from + velocity.scale(dt), velocity }
    }
}

/// Semi-implicit Euler step under spring force, gravity and air drag.
///
/// `F = force + m g - v drag`, `a = F / m`, `v' = v + a dt`, `x' = x + v' dt`.
/// Fixed masses are held in place without evaluating the update, so an anchor
/// with zero mass never divides by zero.
pub fn integrate<F: Float>(mass: &Mass<F>, gravity: Vec3<F>, air_drag: F, dt: F) -> Step<F> {
    if mass.fixed {
        return Step::hold(mass);
    }
    let force = mass.force + gravity.scale(mass.mass) - mass.velocity.scale(air_drag);
    let acceleration = force / mass.mass;
    let velocity = mass.velocity + acceleration.scale(dt);
    Step::drift(mass.position, velocity, dt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_fall_from_rest() {
        let m = Mass::new(Vec3::<f32>::zero(), 2.0);
        let step = integrate(&m, Vec3::new(0.0, -10.0, 0.0), 0.0, 0.1);
        assert!((step.velocity.y + 1.0).abs() < 1e-6);
        // position uses the updated velocity
        assert!((step.position.y + 0.1).abs() < 1e-6);
    }

    #[test]
    fn drag_opposes_velocity() {
        let m = Mass::new(Vec3::<f32>::zero(), 1.0).with_velocity(Vec3::new(10.0, 0.0, 0.0));
        let step = integrate(&m, Vec3::zero(), 0.7, 0.01);
        assert!(step.velocity.x < 10.0);
        assert!(step.velocity.x > 9.9);
    }

    #[test]
    fn fixed_mass_is_held() {
        let mut m = Mass::fixed(Vec3::new(1.0f32, 2.0, 3.0), 0.0);
        m.add_force(Vec3::new(1000.0, 1000.0, 0.0));
        let step = integrate(&m, Vec3::new(0.0, -9.81, 0.0), 0.7, 0.1);
        assert_eq!(step, Step::hold(&m));
    }
}
