//! Step observer trait for progress reporting and diagnostics.

use arena_core::BodyId;

/// Callbacks invoked by the step worker at key points in the loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The observer runs on the worker thread
/// and is shared behind an `Arc`, hence `Send + Sync` and `&self` receivers.
///
/// # Example — collision counter
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct CollisionStats(AtomicUsize);
///
/// impl StepObserver for CollisionStats {
///     fn on_step_end(&self, _step: u64, collisions: usize) {
///         self.0.fetch_add(collisions, Ordering::Relaxed);
///     }
/// }
/// ```
pub trait StepObserver: Send + Sync {
    /// Called before any physics of step `step` runs.
    fn on_step_start(&self, _step: u64) {}

    /// Called after step `step` has committed, with the number of body-body
    /// collisions resolved in it.
    fn on_step_end(&self, _step: u64, _collisions: usize) {}

    /// Called for every pair skipped because its centers coincide exactly
    /// (no collision normal exists).  Diagnostic only — the step continues.
    fn on_degenerate_pair(&self, _a: BodyId, _b: BodyId) {}
}

/// A [`StepObserver`] that does nothing.
pub struct NoopStepObserver;

impl StepObserver for NoopStepObserver {}
