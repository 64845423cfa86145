//! `arena-sim` — the simulation driver.
//!
//! # Step loop
//!
//! ```text
//! worker thread, every step_interval:
//!   ① Snapshot  — read (position, velocity) of every body via its guard.
//!   ② Pairs     — probe all unordered pairs; resolve overlaps on the
//!                 snapshot (elastic exchange + de-penetration).
//!   ③ Integrate — friction decay, minimum-speed cutoff, wall reflection.
//!   ④ Commit    — apply_step per body (position + velocity in one guard
//!                 acquisition); notifications fire outside every lock.
//! ```
//!
//! Exactly one logical writer exists per step: the worker thread.  External
//! consumers read body state and receive notifications concurrently, but
//! membership of the collection changes only in `start`/`stop`.
//!
//! # Lifecycle
//!
//! `Created → Running → Stopped`, restartable.  `stop()` joins the worker
//! before returning, so no background activity survives it.  Lifecycle
//! violations (double-stop, start-while-running) are explicit errors.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use arena_core::SimParams;
//! use arena_sim::SimulationBuilder;
//!
//! let mut sim = SimulationBuilder::new(SimParams::default()).build()?;
//! sim.start(10, |position, body| println!("spawned at {position}"))?;
//! std::thread::sleep(std::time::Duration::from_secs(1));
//! sim.stop()?;
//! ```

pub mod builder;
pub mod driver;
pub mod error;
pub mod observer;
pub mod step;


pub use builder::SimulationBuilder;
pub use driver::{LifecycleState, Simulation};
pub use error::{SimError, SimResult};
pub use observer::{NoopStepObserver, StepObserver};
pub use step::step;
