//! Step observer trait for monitoring simulation progress.

/// Trait for observing simulation ticks.
///
/// Implement this trait to monitor the step driver (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called after spring forces have been accumulated for a sub-step.
    fn on_forces_accumulated(&mut self) {}

    /// Called after every mass has been integrated in sub-step `index`.
    fn on_sub_step(&mut self, _index: usize) {}

    /// Called when all sub-steps of a tick are complete.
    fn on_tick_complete(&mut self) {}

    /// Called by [`Simulation::replay`](crate::simulation::Simulation::replay) once the
    /// initial scene has been restored, before its first tick.
    fn on_scene_built(&mut self, _mass_count: usize, _spring_count: usize) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
