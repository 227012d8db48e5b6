//! Deterministic game core
//!
//! All gameplay logic lives here:
//! - Integer positions, exact-cell collisions
//! - Seeded RNG only
//! - Stable iteration order (cast insertion order)
//! - No rendering or platform dependencies beyond the service traits

pub mod actor;
pub mod artifact;
pub mod cast;
pub mod director;
pub mod point;
pub mod setup;

pub use actor::{Actor, Color};
pub use artifact::{Artifact, Bomb, PointValue};
pub use cast::{Cast, CastMember};
pub use director::{Director, Phase};
pub use point::Point;
pub use setup::populate;
