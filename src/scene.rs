//! Scenes: a mass list, the springs between them, and a boundary policy.

use crate::boundary::Boundary;
use crate::chain::ChainConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::grid::ClothConfig;
use crate::lattice::LatticeConfig;
use crate::mass::Mass;
use crate::spring::Spring;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// The preset scenes, numbered as the front-end presents them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SceneId {
    /// One spring from a fixed anchor.
    Single = 1,
    /// Three springs in a row from a fixed anchor.
    Chain = 2,
    /// 3x3x3 lattice bouncing on the ground.
    Cube = 3,
    /// 50x50 cloth hanging from its first row.
    DrapedCloth = 4,
    /// 50x50 cloth falling onto a table.
    FallingCloth = 5,
}

impl SceneId {
    pub const ALL: [SceneId; 5] = [
        SceneId::Single,
        SceneId::Chain,
        SceneId::Cube,
        SceneId::DrapedCloth,
        SceneId::FallingCloth,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    /// The following preset, wrapping from the last back to the first.
    pub fn next(self) -> SceneId {
        match self {
            SceneId::Single => SceneId::Chain,
            SceneId::Chain => SceneId::Cube,
            SceneId::Cube => SceneId::DrapedCloth,
            SceneId::DrapedCloth => SceneId::FallingCloth,
            SceneId::FallingCloth => SceneId::Single,
        }
    }
}

impl TryFrom<u8> for SceneId {
    type Error = PhysicsError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        SceneId::ALL
            .iter()
            .copied()
            .find(|id| id.number() == n)
            .ok_or(PhysicsError::UnknownScene(n))
    }
}

/// Masses, springs and the boundary policy that applies to them.
///
/// Springs refer to masses by index, so the two lists are only ever replaced
/// together.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene<F: Float> {
    masses: AllocVec<Mass<F>>,
    springs: AllocVec<Spring<F>>,
    boundary: Boundary<F>,
    id: Option<SceneId>,
}

impl<F: Float> Scene<F> {
    /// Build a preset scene. Deterministic: the same id always yields the same scene.
    pub fn build(id: SceneId) -> Self {
        let (scene, boundary) = match id {
            SceneId::Single => (ChainConfig::single().build(), Boundary::Free),
            SceneId::Chain => (ChainConfig::chain().build(), Boundary::Free),
            SceneId::Cube => (LatticeConfig::default().build(), Boundary::ground()),
            SceneId::DrapedCloth => (ClothConfig::draped().build(), Boundary::Free),
            SceneId::FallingCloth => (ClothConfig::falling().build(), Boundary::table()),
        };
        log::debug!(
            "built scene {:?}: {} masses, {} springs",
            id,
            scene.masses.len(),
            scene.springs.len()
        );
        Scene { id: Some(id), ..scene.with_boundary(boundary) }
    }

    /// Assemble a custom scene, checking every spring and every free mass.
    pub fn new(
        masses: AllocVec<Mass<F>>,
        springs: AllocVec<Spring<F>>,
        boundary: Boundary<F>,
    ) -> Result<Self, PhysicsError> {
        let count = masses.len();
        for (index, m) in masses.iter().enumerate() {
            if !m.fixed && !(m.mass > F::zero() && m.mass.is_finite()) {
                return Err(PhysicsError::InvalidMass { index });
            }
        }
        for (index, s) in springs.iter().enumerate() {
            for end in [s.a, s.b] {
                if end >= count {
                    return Err(PhysicsError::MassOutOfBounds { index: end, count });
                }
            }
            if s.a == s.b {
                return Err(PhysicsError::SelfSpring { index });
            }
        }
        Ok(Self::from_parts(masses, springs, boundary))
    }

    /// Unchecked assembly for the built-in builders.
    pub(crate) fn from_parts(
        masses: AllocVec<Mass<F>>,
        springs: AllocVec<Spring<F>>,
        boundary: Boundary<F>,
    ) -> Self {
        Scene { masses, springs, boundary, id: None }
    }

    pub fn with_boundary(mut self, boundary: Boundary<F>) -> Self {
        self.boundary = boundary;
        self
    }

    /// The preset this scene was built from, if any.
    pub fn id(&self) -> Option<SceneId> { self.id }
    pub fn boundary(&self) -> &Boundary<F> { &self.boundary }
    pub fn masses(&self) -> &[Mass<F>] { &self.masses }
    pub fn springs(&self) -> &[Spring<F>] { &self.springs }
    pub fn mass_count(&self) -> usize { self.masses.len() }
    pub fn spring_count(&self) -> usize { self.springs.len() }
    pub fn mass(&self, index: usize) -> &Mass<F> { &self.masses[index] }
    pub fn mass_mut(&mut self, index: usize) -> &mut Mass<F> { &mut self.masses[index] }

    pub(crate) fn parts_mut(&mut self) -> (&mut [Mass<F>], &[Spring<F>], &Boundary<F>) {
        (&mut self.masses, &self.springs, &self.boundary)
    }

    /// Mass positions in mass order.
    pub fn positions(&self) -> AllocVec<Vec3<F>> {
        self.masses.iter().map(|m| m.position).collect()
    }

    /// Endpoint positions of every spring, in spring order.
    pub fn spring_endpoints(&self) -> AllocVec<(Vec3<F>, Vec3<F>)> {
        self.springs
            .iter()
            .map(|s| (self.masses[s.a].position, self.masses[s.b].position))
            .collect()
    }

    /// Kinetic energy of the masses plus elastic energy of the springs.
    pub fn total_energy(&self) -> F {
        let kinetic = self.masses.iter().fold(F::zero(), |acc, m| acc + m.kinetic_energy());
        self.springs
            .iter()
            .fold(kinetic, |acc, s| acc + s.potential_energy(&self.masses))
    }

    /// False once any position or velocity has blown up to NaN or infinity.
    pub fn is_finite(&self) -> bool {
        self.masses.iter().all(|m| m.position.is_finite() && m.velocity.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn scene_numbers_round_trip() {
        for id in SceneId::ALL {
            assert_eq!(SceneId::try_from(id.number()), Ok(id));
        }
    }

    #[test]
    fn out_of_range_numbers_rejected() {
        assert_eq!(SceneId::try_from(0), Err(PhysicsError::UnknownScene(0)));
        assert_eq!(SceneId::try_from(6), Err(PhysicsError::UnknownScene(6)));
    }

    #[test]
    fn next_wraps_around() {
        assert_eq!(SceneId::FallingCloth.next(), SceneId::Single);
        assert_eq!(SceneId::Single.next(), SceneId::Chain);
    }

    #[test]
    fn boundary_follows_scene() {
        assert_eq!(*Scene::<f32>::build(SceneId::Single).boundary(), Boundary::Free);
        assert!(matches!(Scene::<f32>::build(SceneId::Cube).boundary(), Boundary::Ground(_)));
        assert!(matches!(Scene::<f32>::build(SceneId::FallingCloth).boundary(), Boundary::Table(_)));
    }

    #[test]
    fn rejects_spring_to_missing_mass() {
        let masses = vec![Mass::new(Vec3::<f32>::zero(), 1.0)];
        let springs = vec![Spring::new(0, 3, 1.0, 1.0)];
        assert_eq!(
            Scene::new(masses, springs, Boundary::Free),
            Err(PhysicsError::MassOutOfBounds { index: 3, count: 1 })
        );
    }

    #[test]
    fn rejects_self_spring() {
        let masses = vec![Mass::new(Vec3::<f32>::zero(), 1.0)];
        let springs = vec![Spring::new(0, 0, 1.0, 1.0)];
        assert_eq!(
            Scene::new(masses, springs, Boundary::Free),
            Err(PhysicsError::SelfSpring { index: 0 })
        );
    }

    #[test]
    fn rejects_massless_free_mass() {
        let masses = vec![
            Mass::fixed(Vec3::<f32>::zero(), 0.0),
            Mass::new(Vec3::new(1.0, 0.0, 0.0), 0.0),
        ];
        assert_eq!(
            Scene::new(masses, vec![], Boundary::Free),
            Err(PhysicsError::InvalidMass { index: 1 })
        );
    }

    #[test]
    fn spring_endpoints_follow_masses() {
        let scene = Scene::<f32>::build(SceneId::Chain);
        let ends = scene.spring_endpoints();
        assert_eq!(ends.len(), 3);
        assert_eq!(ends[2], (Vec3::new(10.0, 0.0, 0.0), Vec3::new(15.0, 0.0, 0.0)));
    }

    #[test]
    fn fresh_scene_has_no_energy() {
        let scene = Scene::<f32>::build(SceneId::Cube);
        assert!(scene.total_energy().abs() < 1e-6);
        assert!(scene.is_finite());
    }
}
