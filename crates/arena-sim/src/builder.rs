//! Fluent builder for constructing a [`Simulation`].

use std::sync::Arc;

use arena_body::{BodyFactory, UniformBodyFactory};
use arena_core::SimParams;

use crate::driver::Simulation;
use crate::error::SimResult;
use crate::observer::{NoopStepObserver, StepObserver};

/// Fluent builder for [`Simulation`].
///
/// # Required inputs
///
/// - [`SimParams`] — arena geometry, physics constants, step interval, seed.
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default                                  |
/// |----------------|------------------------------------------|
/// | `.factory(f)`  | [`UniformBodyFactory`] built from params |
/// | `.observer(o)` | [`NoopStepObserver`]                     |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimulationBuilder::new(SimParams::default()).build()?;
/// sim.start(10, |position, body| { /* hand the handle to the consumer */ })?;
/// // ...
/// sim.stop()?;
/// ```
pub struct SimulationBuilder {
    params:   SimParams,
    factory:  Option<Arc<dyn BodyFactory>>,
    observer: Option<Arc<dyn StepObserver>>,
}

impl SimulationBuilder {
    pub fn new(params: SimParams) -> Self {
        Self { params, factory: None, observer: None }
    }

    /// Substitute the body factory (test doubles, per-body mass variation).
    pub fn factory(mut self, factory: Arc<dyn BodyFactory>) -> Self {
        self.factory = Some(factory);
        self
    }

    /// Attach a step observer.  Runs on the worker thread.
    pub fn observer(mut self, observer: Arc<dyn StepObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Validate the parameters and construct a `Created` simulation.
    ///
    /// All configuration errors surface here — before any thread exists or
    /// lock is taken.
    pub fn build(self) -> SimResult<Simulation> {
        self.params.validate()?;

        let factory = self
            .factory
            .unwrap_or_else(|| Arc::new(UniformBodyFactory::from_params(&self.params)));
        let observer = self.observer.unwrap_or_else(|| Arc::new(NoopStepObserver));

        Ok(Simulation::new(self.params, factory, observer))
    }
}
