//! Scoring actors: artifacts reward the player, bombs penalize them

use serde::{Deserialize, Serialize};

use super::{Actor, Color, Point};
use crate::consts::{ARTIFACT_POINTS, BOMB_POINTS, FALL_VELOCITY};

/// Capability of carrying a fixed score adjustment
pub trait PointValue {
    fn points(&self) -> i32;
}

/// A falling item worth a positive reward when caught
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    actor: Actor,
    points: i32,
}

impl Artifact {
    pub fn new(points: i32) -> Self {
        Self {
            actor: Actor::new("*")
                .with_velocity(FALL_VELOCITY)
                .with_color(Color::YELLOW),
            points,
        }
    }

    pub fn at(mut self, position: Point) -> Self {
        self.actor.set_position(position);
        self
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn actor_mut(&mut self) -> &mut Actor {
        &mut self.actor
    }
}

impl Default for Artifact {
    fn default() -> Self {
        Self::new(ARTIFACT_POINTS)
    }
}

impl PointValue for Artifact {
    fn points(&self) -> i32 {
        self.points
    }
}

/// A falling hazard; its points are a penalty (normally negative)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bomb {
    actor: Actor,
    points: i32,
}

impl Bomb {
    pub fn new(points: i32) -> Self {
        Self {
            actor: Actor::new("o")
                .with_velocity(FALL_VELOCITY)
                .with_color(Color::RED),
            points,
        }
    }

    pub fn at(mut self, position: Point) -> Self {
        self.actor.set_position(position);
        self
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn actor_mut(&mut self) -> &mut Actor {
        &mut self.actor
    }
}

impl Default for Bomb {
    fn default() -> Self {
        Self::new(BOMB_POINTS)
    }
}

impl PointValue for Bomb {
    fn points(&self) -> i32 {
        self.points
    }
}
