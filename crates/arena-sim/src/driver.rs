//! The `Simulation` driver: lifecycle, body ownership, and the worker thread.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use arena_body::{Body, BodyFactory};
use arena_core::{BodyId, SimParams, SimRng, Vec2};

use crate::error::{SimError, SimResult};
use crate::observer::StepObserver;
use crate::step::step;

/// Where a [`Simulation`] is in its life.
///
/// ```text
/// Created ──start──▶ Running ──stop──▶ Stopped
///                       ▲                 │
///                       └──────start──────┘
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LifecycleState {
    Created,
    Running,
    Stopped,
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LifecycleState::Created => "created",
            LifecycleState::Running => "running",
            LifecycleState::Stopped => "stopped",
        };
        f.write_str(s)
    }
}

/// The simulation driver.
///
/// Owns the collection of live bodies and the single worker thread that
/// advances them.  Individual bodies are shared with external consumers as
/// `Arc<Body>` handles (handed out through the creation callback); membership
/// of the collection is owned exclusively by the driver: populated by
/// [`start`](Simulation::start), cleared by [`stop`](Simulation::stop).
///
/// Create via [`SimulationBuilder`](crate::SimulationBuilder), which
/// validates the parameters first.
pub struct Simulation {
    params:   SimParams,
    factory:  Arc<dyn BodyFactory>,
    observer: Arc<dyn StepObserver>,
    rng:      SimRng,
    bodies:   Arc<Mutex<Vec<Arc<Body>>>>,
    shutdown: Arc<AtomicBool>,
    worker:   Option<JoinHandle<()>>,
    state:    LifecycleState,
}

impl Simulation {
    pub(crate) fn new(
        params:   SimParams,
        factory:  Arc<dyn BodyFactory>,
        observer: Arc<dyn StepObserver>,
    ) -> Self {
        let rng = SimRng::new(params.seed);
        Self {
            params,
            factory,
            observer,
            rng,
            bodies:   Arc::new(Mutex::new(Vec::new())),
            shutdown: Arc::new(AtomicBool::new(false)),
            worker:   None,
            state:    LifecycleState::Created,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Create `count` bodies and begin stepping.
    ///
    /// Valid from `Created` or `Stopped`; fails with
    /// [`SimError::InvalidState`] while `Running`.
    ///
    /// Each body spawns at a uniform random position inside the spawn region
    /// with a velocity of `initial_speed` under a uniform random angle, both
    /// drawn from the seeded RNG.  `on_body_created` is invoked synchronously
    /// for every body, in creation order, before this method returns: the
    /// consumer holds a complete set of handles by the time the first step
    /// runs.
    pub fn start(
        &mut self,
        count: usize,
        mut on_body_created: impl FnMut(Vec2, Arc<Body>),
    ) -> SimResult<()> {
        if self.state == LifecycleState::Running {
            return Err(SimError::InvalidState { operation: "start", state: self.state });
        }

        // ── Creation phase (no worker yet, no locks contended) ────────────
        let mut created = Vec::with_capacity(count);
        for i in 0..count {
            let position = self.rng.spawn_position(&self.params);
            let velocity = self.rng.spawn_velocity(&self.params);
            let body = self.factory.create(BodyId(i as u32), position, velocity);
            on_body_created(body.position(), Arc::clone(&body));
            created.push(body);
        }
        log::info!("simulation started with {count} bodies");

        *self.lock_bodies() = created;
        self.shutdown.store(false, Ordering::Release);

        // ── Worker ────────────────────────────────────────────────────────
        let bodies   = Arc::clone(&self.bodies);
        let shutdown = Arc::clone(&self.shutdown);
        let observer = Arc::clone(&self.observer);
        let params   = self.params.clone();

        let handle = thread::Builder::new()
            .name("arena-step".into())
            .spawn(move || {
                let mut step_index: u64 = 0;
                while !shutdown.load(Ordering::Acquire) {
                    let started = Instant::now();

                    // Membership snapshot: the collection lock is held only
                    // for this clone, never during physics or callbacks.
                    let live: Vec<Arc<Body>> = bodies
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .clone();

                    observer.on_step_start(step_index);
                    let collisions = step(&live, &params, observer.as_ref());
                    observer.on_step_end(step_index, collisions);
                    step_index += 1;

                    if let Some(remaining) = params.step_interval.checked_sub(started.elapsed())
                    {
                        thread::sleep(remaining);
                    }
                }
            })?;

        self.worker = Some(handle);
        self.state = LifecycleState::Running;
        Ok(())
    }

    /// Halt stepping, release every body, and transition to `Stopped`.
    ///
    /// Valid only from `Running`: stopping a `Created` or already-`Stopped`
    /// simulation is a lifecycle violation and fails with
    /// [`SimError::InvalidState`] rather than silently succeeding.
    ///
    /// On return the worker has been joined (its longest remaining wait is
    /// one `step_interval`), the body collection is empty, and no further
    /// position-changed notifications will be delivered.  Must not be called
    /// from inside a position-changed callback — that callback runs on the
    /// worker thread this method joins.
    pub fn stop(&mut self) -> SimResult<()> {
        if self.state != LifecycleState::Running {
            return Err(SimError::InvalidState { operation: "stop", state: self.state });
        }

        self.shutdown.store(true, Ordering::Release);
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::warn!("step worker panicked before shutdown");
            }
        }
        self.lock_bodies().clear();
        self.state = LifecycleState::Stopped;
        log::info!("simulation stopped");
        Ok(())
    }

    // ── Introspection ─────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Number of live bodies (0 outside a run).
    pub fn body_count(&self) -> usize {
        self.lock_bodies().len()
    }

    /// Handles to the current bodies, in creation order.
    pub fn bodies(&self) -> Vec<Arc<Body>> {
        self.lock_bodies().clone()
    }

    #[inline]
    pub fn params(&self) -> &SimParams {
        &self.params
    }

    // ── private ───────────────────────────────────────────────────────────

    fn lock_bodies(&self) -> std::sync::MutexGuard<'_, Vec<Arc<Body>>> {
        self.bodies.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for Simulation {
    /// A dropped running simulation still joins its worker — no background
    /// activity survives the driver.
    fn drop(&mut self) {
        if self.state == LifecycleState::Running {
            let _ = self.stop();
        }
    }
}
