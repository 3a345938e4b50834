//! Mass-spring scenes with explicit Euler integration.
//!
//! `springbox` simulates point masses joined by Hookean springs and ships five
//! preset scenes: a single spring, a chain, a 3x3x3 soft cube bouncing on the
//! ground, a draped cloth and a cloth falling onto a table. It produces plain
//! position and vertex data; windowing, cameras and GPU upload are left to the
//! caller.
//!
//! # Features
//!
//! - **Semi-implicit Euler**: `v += a dt`, then `x += v dt`, with fixed sub-steps per tick
//! - **Index-based topology**: springs name masses by index, never by reference
//! - **Boundary policies**: ground bounce, table ledge and point proximity, chosen per scene
//! - **Observable**: Monitor ticks via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! # Example
//! ```
//! use springbox::{NoOpStepObserver, SceneId, Simulation};
//!
//! let mut sim: Simulation<f32> = Simulation::new(SceneId::Single);
//! sim.play();
//! for _ in 0..60 {
//!     sim.frame(&mut NoOpStepObserver);
//! }
//! assert!(sim.positions()[1].y < 0.0);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod mass;
pub mod spring;
pub mod force;
pub mod integrator;
pub mod collision;
pub mod boundary;
pub mod chain;
pub mod lattice;
pub mod grid;
pub mod scene;
pub mod simulation;
pub mod render;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec3;
pub use mass::Mass;
pub use spring::Spring;
pub use force::accumulate_spring_forces;
pub use integrator::{integrate, Step};
pub use collision::find_contact;
pub use boundary::{Boundary, GroundPlane, TableLedge};
pub use chain::ChainConfig;
pub use lattice::LatticeConfig;
pub use grid::{ClothConfig, ClothLayout};
pub use scene::{Scene, SceneId};
pub use simulation::Simulation;
pub use config::SimulationConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::PhysicsError;
