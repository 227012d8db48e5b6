//! Platform abstraction layer
//!
//! The director only talks to these two services:
//! - `KeyboardService`: current direction input
//! - `VideoService`: window lifecycle, frame buffer, screen size
//!
//! Backends:
//! - `headless`: scripted input and a recording video buffer (tests, demo runs)
//! - `terminal`: crossterm raw-mode terminal

pub mod headless;
pub mod terminal;

pub use headless::{DrawnActor, HeadlessVideo, ScriptedKeyboard, VideoCall};
pub use terminal::{TerminalKeyboard, TerminalVideo};

use std::io;

use crate::sim::{Actor, Point};

/// Reads the player's direction input once per frame
pub trait KeyboardService {
    /// Velocity for the robot this frame; (0, 0) when nothing is pressed
    fn direction(&mut self) -> Point;
}

/// Window and frame buffer the director renders into.
///
/// `flush_buffer` is where a backend paces frames.
pub trait VideoService {
    fn open_window(&mut self) -> io::Result<()>;
    fn close_window(&mut self) -> io::Result<()>;
    fn is_window_open(&self) -> bool;
    fn width(&self) -> i32;
    fn height(&self) -> i32;
    fn clear_buffer(&mut self) -> io::Result<()>;
    /// Draw in sequence order; later actors render on top
    fn draw_actors(&mut self, actors: &[&Actor]) -> io::Result<()>;
    fn flush_buffer(&mut self) -> io::Result<()>;
}
