//! Level population: builds the starting cast for a window size

use rand::Rng;

use super::{Actor, Artifact, Bomb, Cast, Point};
use crate::Settings;
use crate::consts::{ARTIFACT_GROUP, BANNER_GROUP, BOMB_GROUP, ROBOT_GROUP};

/// Build a cast with banner, robot, artifacts and bombs.
///
/// The banner sits at (1, 0), the robot at the middle of the bottom row, and
/// every artifact/bomb at a random cell inside the window.
pub fn populate<R: Rng>(settings: &Settings, width: i32, height: i32, rng: &mut R) -> Cast {
    let width = width.max(1);
    let height = height.max(1);
    let mut cast = Cast::new();

    cast.add_actor(BANNER_GROUP, Actor::new("0").with_position(Point::new(1, 0)));
    cast.add_actor(
        ROBOT_GROUP,
        Actor::new("#").with_position(Point::new(width / 2, height - 1)),
    );

    for _ in 0..settings.artifact_count {
        let at = random_cell(rng, width, height);
        cast.add_actor(ARTIFACT_GROUP, Artifact::new(settings.artifact_points).at(at));
    }
    for _ in 0..settings.bomb_count {
        let at = random_cell(rng, width, height);
        cast.add_actor(BOMB_GROUP, Bomb::new(settings.bomb_points).at(at));
    }

    log::info!(
        "Populated {} artifacts and {} bombs in {}x{}",
        settings.artifact_count,
        settings.bomb_count,
        width,
        height
    );
    cast
}

fn random_cell<R: Rng>(rng: &mut R, width: i32, height: i32) -> Point {
    Point::new(rng.random_range(0..width), rng.random_range(0..height))
}
