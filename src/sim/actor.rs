//! Base actor: anything with a position, velocity and text on screen

use serde::{Deserialize, Serialize};

use super::Point;

/// RGB color a backend uses to draw an actor's text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const YELLOW: Color = Color::new(255, 255, 0);
    pub const RED: Color = Color::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// A visible entity in the game world.
///
/// Position and velocity are always defined and start at (0, 0). Setters do
/// no validation; `move_next` is what keeps the actor on screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    position: Point,
    velocity: Point,
    text: String,
    color: Color,
}

impl Actor {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    pub fn with_velocity(mut self, velocity: Point) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn velocity(&self) -> Point {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Point) {
        self.velocity = velocity;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Advance by one frame of velocity, wrapping around the screen edges.
    ///
    /// An actor leaving the right edge reappears at the left (and likewise
    /// vertically): `p' = (p + v) mod max` per axis.
    pub fn move_next(&mut self, max_x: i32, max_y: i32) {
        self.position = (self.position + self.velocity).wrapped(max_x, max_y);
    }
}
