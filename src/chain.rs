//! Straight spring chains hanging from a fixed anchor.

use crate::boundary::Boundary;
use crate::float::Float;
use crate::mass::Mass;
use crate::scene::Scene;
use crate::spring::Spring;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// Configuration for a chain laid out along +X from the origin.
///
/// Mass 0 is a fixed anchor; masses `1..=links` are free and `spacing` apart.
pub struct ChainConfig<F: Float> {
    pub links: usize,
    pub spacing: F,
    pub stiffness: F,
    pub rest_length: F,
    pub anchor_mass: F,
    pub link_mass: F,
}

impl<F: Float> ChainConfig<F> {
    /// One spring holding a mass of 3 at its rest length.
    pub fn single() -> Self {
        ChainConfig {
            links: 1,
            spacing: F::from_f32(5.0),
            stiffness: F::from_f32(30.0),
            rest_length: F::from_f32(5.0),
            anchor_mass: F::zero(),
            link_mass: F::from_f32(3.0),
        }
    }

    /// Three springs, masses of 2.
    pub fn chain() -> Self {
        ChainConfig { links: 3, link_mass: F::from_f32(2.0), ..Self::single() }
    }

    pub fn build(&self) -> Scene<F> {
        let mut masses = AllocVec::with_capacity(self.links + 1);
        let mut springs = AllocVec::with_capacity(self.links);

        masses.push(Mass::fixed(Vec3::zero(), self.anchor_mass));
        for i in 1..=self.links {
            let x = F::from_usize(i) * self.spacing;
            masses.push(Mass::new(Vec3::new(x, F::zero(), F::zero()), self.link_mass));
        }

        for i in 0..self.links {
            springs.push(Spring::new(i, i + 1, self.stiffness, self.rest_length));
        }

        Scene::from_parts(masses, springs, Boundary::Free)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_spring_layout() {
        let scene = ChainConfig::<f32>::single().build();
        assert_eq!(scene.mass_count(), 2);
        assert_eq!(scene.spring_count(), 1);
        assert!(scene.mass(0).fixed);
        assert!(!scene.mass(1).fixed);
        assert_eq!(scene.mass(1).position, Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(scene.mass(1).mass, 3.0);
    }

    #[test]
    fn chain_links_are_consecutive() {
        let scene = ChainConfig::<f32>::chain().build();
        assert_eq!(scene.mass_count(), 4);
        for (i, s) in scene.springs().iter().enumerate() {
            assert_eq!((s.a, s.b), (i, i + 1));
            assert_eq!(s.stiffness, 30.0);
            assert_eq!(s.rest_length, 5.0);
        }
        assert_eq!(scene.mass(3).position.x, 15.0);
    }
}
