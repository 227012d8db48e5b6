//! Headless services: no window, no real keyboard
//!
//! `ScriptedKeyboard` replays a fixed list of directions and `HeadlessVideo`
//! stands in for the window, closing it after a set number of frames. Used to
//! drive the game from tests and `--headless`. Only the latest frame is kept
//! unless `with_recording` asks for the full frame and call history.

use std::collections::VecDeque;
use std::io;

use super::{KeyboardService, VideoService};
use crate::sim::{Actor, Color, Point};

/// Keyboard that yields queued directions, then (0, 0) forever
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeyboard {
    script: VecDeque<Point>,
}

impl ScriptedKeyboard {
    pub fn new(script: impl IntoIterator<Item = Point>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    pub fn push(&mut self, direction: Point) {
        self.script.push_back(direction);
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl KeyboardService for ScriptedKeyboard {
    fn direction(&mut self) -> Point {
        self.script.pop_front().unwrap_or(Point::ZERO)
    }
}

/// Every call the director made, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoCall {
    Open,
    Close,
    Clear,
    Draw { count: usize },
    Flush,
}

/// What one actor looked like when it was drawn
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnActor {
    pub text: String,
    pub position: Point,
    pub color: Color,
}

/// Video buffer that records frames instead of showing them
#[derive(Debug, Clone)]
pub struct HeadlessVideo {
    width: i32,
    height: i32,
    /// Close the window after this many flushes (`None` = never)
    frame_limit: Option<u64>,
    flushed: u64,
    record: bool,
    open: bool,
    closed: bool,
    buffer: Vec<DrawnActor>,
    frames: Vec<Vec<DrawnActor>>,
    calls: Vec<VideoCall>,
}

impl HeadlessVideo {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            frame_limit: None,
            flushed: 0,
            record: false,
            open: false,
            closed: false,
            buffer: Vec::new(),
            frames: Vec::new(),
            calls: Vec::new(),
        }
    }

    /// Report the window as closed once `frames` frames have been flushed
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.frame_limit = Some(frames);
        self
    }

    /// Keep every flushed frame and every service call
    pub fn with_recording(mut self) -> Self {
        self.record = true;
        self
    }

    /// Flushed frames, oldest first (only the latest unless recording)
    pub fn frames(&self) -> &[Vec<DrawnActor>] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&[DrawnActor]> {
        self.frames.last().map(Vec::as_slice)
    }

    /// Service calls in order (empty unless recording)
    pub fn calls(&self) -> &[VideoCall] {
        &self.calls
    }

    pub fn flushed(&self) -> u64 {
        self.flushed
    }

    fn log_call(&mut self, call: VideoCall) {
        if self.record {
            self.calls.push(call);
        }
    }

    /// True once `close_window` has been called
    pub fn was_closed(&self) -> bool {
        self.closed
    }
}

impl VideoService for HeadlessVideo {
    fn open_window(&mut self) -> io::Result<()> {
        self.log_call(VideoCall::Open);
        self.open = true;
        Ok(())
    }

    fn close_window(&mut self) -> io::Result<()> {
        self.log_call(VideoCall::Close);
        self.open = false;
        self.closed = true;
        Ok(())
    }

    fn is_window_open(&self) -> bool {
        self.open && self.frame_limit.is_none_or(|limit| self.flushed < limit)
    }

    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn clear_buffer(&mut self) -> io::Result<()> {
        self.log_call(VideoCall::Clear);
        self.buffer.clear();
        Ok(())
    }

    fn draw_actors(&mut self, actors: &[&Actor]) -> io::Result<()> {
        self.log_call(VideoCall::Draw {
            count: actors.len(),
        });
        self.buffer.extend(actors.iter().map(|a| DrawnActor {
            text: a.text().to_string(),
            position: a.position(),
            color: a.color(),
        }));
        Ok(())
    }

    fn flush_buffer(&mut self) -> io::Result<()> {
        self.log_call(VideoCall::Flush);
        if !self.record {
            self.frames.clear();
        }
        self.frames.push(std::mem::take(&mut self.buffer));
        self.flushed += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_keyboard_runs_dry_to_zero() {
        let mut keyboard = ScriptedKeyboard::new([Point::new(1, 0), Point::new(0, -1)]);
        assert_eq!(keyboard.direction(), Point::new(1, 0));
        assert_eq!(keyboard.direction(), Point::new(0, -1));
        assert_eq!(keyboard.remaining(), 0);
        assert_eq!(keyboard.direction(), Point::ZERO);

        keyboard.push(Point::new(-1, 0));
        assert_eq!(keyboard.direction(), Point::new(-1, 0));
    }

    #[test]
    fn test_window_closes_after_frame_limit() {
        let mut video = HeadlessVideo::new(80, 24).with_frame_limit(2).with_recording();
        assert!(!video.is_window_open());
        video.open_window().unwrap();
        assert!(video.is_window_open());

        for _ in 0..2 {
            video.clear_buffer().unwrap();
            video.flush_buffer().unwrap();
        }
        assert!(!video.is_window_open());
        assert_eq!(video.frames().len(), 2);
    }

    #[test]
    fn test_records_drawn_actors_in_order() {
        let mut video = HeadlessVideo::new(80, 24).with_recording();
        video.open_window().unwrap();
        let a = Actor::new("a").with_position(Point::new(1, 2));
        let b = Actor::new("b").with_position(Point::new(1, 2));

        video.clear_buffer().unwrap();
        video.draw_actors(&[&a, &b]).unwrap();
        video.flush_buffer().unwrap();

        let frame = video.last_frame().unwrap();
        assert_eq!(frame.len(), 2);
        assert_eq!(frame[1].text, "b");
        assert_eq!(
            video.calls(),
            &[
                VideoCall::Open,
                VideoCall::Clear,
                VideoCall::Draw { count: 2 },
                VideoCall::Flush,
            ]
        );
    }

    #[test]
    fn test_without_recording_only_last_frame_is_kept() {
        let mut video = HeadlessVideo::new(80, 24);
        video.open_window().unwrap();
        for i in 0..50 {
            let a = Actor::new("a").with_position(Point::new(i, 0));
            video.clear_buffer().unwrap();
            video.draw_actors(&[&a]).unwrap();
            video.flush_buffer().unwrap();
        }

        assert_eq!(video.flushed(), 50);
        assert_eq!(video.frames().len(), 1);
        assert_eq!(video.last_frame().unwrap()[0].position, Point::new(49, 0));
        assert!(video.calls().is_empty());
    }
}
