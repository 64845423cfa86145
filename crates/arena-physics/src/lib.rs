//! `arena-physics` — pure collision and integration math.
//!
//! Everything in this crate is a stateless function over plain values: no
//! locks, no entities, no allocation on the hot path.  The simulation driver
//! snapshots body state, runs these functions over the snapshot, and commits
//! the results back to the shared entities.
//!
//! | Module    | Contents                                            |
//! |-----------|-----------------------------------------------------|
//! | [`motion`]| Friction decay and minimum-speed cutoff             |
//! | [`walls`] | Arena-boundary reflection                           |
//! | [`pairs`] | Pairwise elastic collision and de-penetration       |

pub mod motion;
pub mod pairs;
pub mod walls;

pub use motion::decay_velocity;
pub use pairs::{resolve_pair, BodySnapshot, PairOutcome, DEPENETRATION_EPSILON};
pub use walls::{reflect_walls, WallOutcome};
