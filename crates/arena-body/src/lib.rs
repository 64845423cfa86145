//! `arena-body` — the thread-safe body entity.
//!
//! A [`Body`] owns its `(position, velocity)` pair behind a single mutex (the
//! *motion guard*) and publishes position changes through an explicit
//! subscribe/unsubscribe event hub.  Bodies are shared as `Arc<Body>`: the
//! simulation driver is the sole writer while a run is active; external
//! consumers read positions and receive notifications.
//!
//! | Module      | Contents                                      |
//! |-------------|-----------------------------------------------|
//! | [`body`]    | `Body`, the motion guard, commit operations   |
//! | [`events`]  | `PositionEvents`, `Subscription` cancel token |
//! | [`factory`] | `BodyFactory` trait, `UniformBodyFactory`     |

pub mod body;
pub mod events;
pub mod factory;


pub use body::Body;
pub use events::{PositionEvents, Subscription};
pub use factory::{BodyFactory, UniformBodyFactory};
