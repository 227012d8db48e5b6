//! The director: owns the score and runs the frame loop
//!
//! Every frame runs in a fixed order: input, then updates (banner, robot
//! movement, collisions, falling), then output. `step` runs exactly one frame
//! so tests can drive the game without a real window.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::{Cast, Point};
use crate::GameError;
use crate::consts::{ARTIFACT_GROUP, BANNER_GROUP, BOMB_GROUP, RESPAWN_SPAN, ROBOT_GROUP};
use crate::platform::{KeyboardService, VideoService};

/// Lifecycle of one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// `start_game` has not been called yet
    Uninitialized,
    /// Window open, frames running
    Running,
    /// Window closed; no further frames
    Closed,
}

/// Runs one game session against a keyboard and a video service
pub struct Director<K, V> {
    keyboard: K,
    video: V,
    score: i32,
    phase: Phase,
    frame: u64,
    respawn_span: i32,
    rng: Pcg32,
}

impl<K: KeyboardService, V: VideoService> Director<K, V> {
    /// Create a director with an entropy-seeded respawn RNG
    pub fn new(keyboard: K, video: V) -> Self {
        Self::with_seed(keyboard, video, rand::rng().random())
    }

    /// Create a director whose respawn positions are reproducible
    pub fn with_seed(keyboard: K, video: V, seed: u64) -> Self {
        Self {
            keyboard,
            video,
            score: 0,
            phase: Phase::Uninitialized,
            frame: 0,
            respawn_span: RESPAWN_SPAN,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Caught actors respawn at x in [0, span); span is at least 1
    pub fn with_respawn_span(mut self, span: i32) -> Self {
        self.respawn_span = span.max(1);
        self
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of completed frames
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn video(&self) -> &V {
        &self.video
    }

    /// Open the window, run frames until it closes, then close it.
    ///
    /// Fails before opening the window if the robot or banner is missing. A
    /// frame that fails still closes the window before the error is returned.
    pub fn start_game(&mut self, cast: &mut Cast) -> Result<(), GameError> {
        if self.phase != Phase::Uninitialized {
            return Err(GameError::AlreadyStarted);
        }
        for group in [ROBOT_GROUP, BANNER_GROUP] {
            if cast.first_actor(group).is_none() {
                return Err(GameError::missing(group));
            }
        }

        self.video.open_window()?;
        self.phase = Phase::Running;
        log::info!(
            "Game started: {} actors, {}x{} window",
            cast.len(),
            self.video.width(),
            self.video.height()
        );

        let mut result = Ok(());
        while self.video.is_window_open() {
            if let Err(e) = self.step(cast) {
                log::error!("Frame {} failed: {}", self.frame, e);
                result = Err(e);
                break;
            }
        }

        self.phase = Phase::Closed;
        if let Err(e) = self.video.close_window() {
            // A frame error is the real cause; don't let the close failure mask it
            if result.is_ok() {
                return Err(e.into());
            }
            log::warn!("Failed to close window after frame error: {}", e);
        }
        log::info!("Game over after {} frames, score {}", self.frame, self.score);
        result
    }

    /// Run a single frame: input, updates, output
    pub fn step(&mut self, cast: &mut Cast) -> Result<(), GameError> {
        self.get_inputs(cast)?;
        self.do_updates(cast)?;
        self.do_outputs(cast)?;
        self.frame += 1;
        log::trace!("Frame {} done, score {}", self.frame, self.score);
        Ok(())
    }

    /// Keyboard direction overwrites the robot's velocity
    fn get_inputs(&mut self, cast: &mut Cast) -> Result<(), GameError> {
        let direction = self.keyboard.direction();
        let robot = cast
            .first_actor_mut(ROBOT_GROUP)
            .ok_or_else(|| GameError::missing(ROBOT_GROUP))?;
        robot.actor_mut().set_velocity(direction);
        Ok(())
    }

    fn do_updates(&mut self, cast: &mut Cast) -> Result<(), GameError> {
        let banner = cast
            .first_actor_mut(BANNER_GROUP)
            .ok_or_else(|| GameError::missing(BANNER_GROUP))?;
        banner.actor_mut().set_text(self.score.to_string());

        let max_x = self.video.width();
        let max_y = self.video.height();

        let robot = cast
            .first_actor_mut(ROBOT_GROUP)
            .ok_or_else(|| GameError::missing(ROBOT_GROUP))?
            .actor_mut();
        robot.move_next(max_x, max_y);
        let robot_pos = robot.position();

        // Artifacts before bombs; a cell holding both scores both
        for group in [ARTIFACT_GROUP, BOMB_GROUP] {
            self.resolve_group(cast, group, robot_pos, max_x, max_y)?;
        }
        Ok(())
    }

    /// Catch-and-respawn every member at the robot's cell, then let all fall
    fn resolve_group(
        &mut self,
        cast: &mut Cast,
        group: &str,
        robot_pos: Point,
        max_x: i32,
        max_y: i32,
    ) -> Result<(), GameError> {
        for (index, member) in cast.actors_mut(group).iter_mut().enumerate() {
            if member.actor().position() == robot_pos {
                let points = member
                    .as_point_value()
                    .map(|p| p.points())
                    .ok_or_else(|| GameError::NotScoring {
                        group: group.to_string(),
                        index,
                    })?;
                self.score = self.score.saturating_add(points);

                let respawn = Point::new(self.rng.random_range(0..self.respawn_span), 0);
                member.actor_mut().set_position(respawn);
                log::debug!(
                    "Caught {} #{} at {} for {} points, score {}, respawn at {}",
                    group,
                    index,
                    robot_pos,
                    points,
                    self.score,
                    respawn
                );
            }
            member.actor_mut().move_next(max_x, max_y);
        }
        Ok(())
    }

    fn do_outputs(&mut self, cast: &Cast) -> Result<(), GameError> {
        let actors = cast.all_actors();
        self.video.clear_buffer()?;
        self.video.draw_actors(&actors)?;
        self.video.flush_buffer()?;
        Ok(())
    }
}
