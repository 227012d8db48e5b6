//! Artifact Catcher - a falling-object arcade game
//!
//! Core modules:
//! - `sim`: Deterministic game core (actors, cast, director loop)
//! - `platform`: Keyboard/video services the director drives
//! - `settings`: Data-driven game configuration

pub mod error;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::GameError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use crate::sim::Point;

    /// Default window dimensions (world units)
    pub const DEFAULT_WIDTH: i32 = 80;
    pub const DEFAULT_HEIGHT: i32 = 24;

    /// Target frames per second when no config overrides it
    pub const DEFAULT_FRAME_RATE: u32 = 12;

    /// Caught artifacts/bombs respawn at x in [0, RESPAWN_SPAN), y = 0
    pub const RESPAWN_SPAN: i32 = 600;

    /// Score reward for catching an artifact
    pub const ARTIFACT_POINTS: i32 = 100;
    /// Score penalty for catching a bomb
    pub const BOMB_POINTS: i32 = -50;

    /// Velocity every artifact and bomb starts with (one unit down per frame)
    pub const FALL_VELOCITY: Point = Point::new(0, 1);

    /// Cast group names
    pub const ROBOT_GROUP: &str = "robot";
    pub const BANNER_GROUP: &str = "banner";
    pub const ARTIFACT_GROUP: &str = "artifacts";
    pub const BOMB_GROUP: &str = "bombs";
}
