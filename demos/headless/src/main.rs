//! headless — smallest runnable composition of the rust_arena core.
//!
//! Starts a simulation of a few bodies in the classic 400×400 arena, prints a
//! position sample for one tracked body once per second, and tears everything
//! down after a fixed run time.  This binary is the only place that chooses
//! the concrete factory and observer; everything else receives its
//! collaborators as arguments.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Result;

use arena_core::{SimParams, Vec2};
use arena_sim::{SimulationBuilder, StepObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const BODY_COUNT: usize = 6;
const SEED:       u64   = 42;
const RUN_SECS:   u64   = 5;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Tallies collisions across the whole run.
#[derive(Default)]
struct CollisionTally {
    steps:      AtomicUsize,
    collisions: AtomicUsize,
}

impl StepObserver for CollisionTally {
    fn on_step_end(&self, _step: u64, collisions: usize) {
        self.steps.fetch_add(1, Ordering::Relaxed);
        self.collisions.fetch_add(collisions, Ordering::Relaxed);
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let params = SimParams { seed: SEED, ..SimParams::default() };
    let tally = Arc::new(CollisionTally::default());

    let mut sim = SimulationBuilder::new(params)
        .observer(Arc::clone(&tally) as Arc<dyn StepObserver>)
        .build()?;

    // Track the first body's position through its notification channel.
    let mut tracked = None;
    sim.start(BODY_COUNT, |position, body| {
        log::info!("spawned {} at {position}", body.id());
        if tracked.is_none() {
            tracked = Some(body);
        }
    })?;

    let tracked = tracked.expect("at least one body was created");
    let last_seen = Arc::new(std::sync::Mutex::new(Vec2::ZERO));
    let sink = Arc::clone(&last_seen);
    let subscription = tracked.subscribe(move |position| {
        *sink.lock().unwrap() = position;
    });

    for second in 1..=RUN_SECS {
        thread::sleep(Duration::from_secs(1));
        println!(
            "t+{second}s  {}  position {}  velocity {}",
            tracked.id(),
            last_seen.lock().unwrap(),
            tracked.velocity(),
        );
    }

    subscription.cancel();
    sim.stop()?;

    println!(
        "ran {} steps, resolved {} collisions",
        tally.steps.load(Ordering::Relaxed),
        tally.collisions.load(Ordering::Relaxed),
    );
    Ok(())
}
