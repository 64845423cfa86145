//! `arena-core` — foundational types for the `rust_arena` simulation.
//!
//! This crate is a dependency of every other `arena-*` crate.  It has no
//! `arena-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                   |
//! |------------|--------------------------------------------|
//! | [`vec2`]   | `Vec2` immutable 2-D value type            |
//! | [`ids`]    | `BodyId`                                   |
//! | [`params`] | `SimParams` and its validation             |
//! | [`rng`]    | `SimRng` deterministic RNG, spawn sampling |
//! | [`error`]  | `CoreError`, `CoreResult`                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod params;
pub mod rng;
pub mod vec2;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::BodyId;
pub use params::SimParams;
pub use rng::SimRng;
pub use vec2::Vec2;
