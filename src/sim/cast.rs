//! Named-group registry of every actor in play
//!
//! Groups keep the order they were first used in, and each group keeps its
//! actors in insertion order. Draw order and collision order both follow it.

use serde::{Deserialize, Serialize};

use super::{Actor, Artifact, Bomb, PointValue};

/// One entry in the cast: a plain actor or one of the scoring variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CastMember {
    Actor(Actor),
    Artifact(Artifact),
    Bomb(Bomb),
}

impl CastMember {
    pub fn actor(&self) -> &Actor {
        match self {
            CastMember::Actor(actor) => actor,
            CastMember::Artifact(artifact) => artifact.actor(),
            CastMember::Bomb(bomb) => bomb.actor(),
        }
    }

    pub fn actor_mut(&mut self) -> &mut Actor {
        match self {
            CastMember::Actor(actor) => actor,
            CastMember::Artifact(artifact) => artifact.actor_mut(),
            CastMember::Bomb(bomb) => bomb.actor_mut(),
        }
    }

    /// The point value, if this member carries one
    pub fn as_point_value(&self) -> Option<&dyn PointValue> {
        match self {
            CastMember::Actor(_) => None,
            CastMember::Artifact(artifact) => Some(artifact as &dyn PointValue),
            CastMember::Bomb(bomb) => Some(bomb as &dyn PointValue),
        }
    }
}

impl From<Actor> for CastMember {
    fn from(actor: Actor) -> Self {
        CastMember::Actor(actor)
    }
}

impl From<Artifact> for CastMember {
    fn from(artifact: Artifact) -> Self {
        CastMember::Artifact(artifact)
    }
}

impl From<Bomb> for CastMember {
    fn from(bomb: Bomb) -> Self {
        CastMember::Bomb(bomb)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Group {
    name: String,
    members: Vec<CastMember>,
}

/// The full actor roster, organized by role
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cast {
    groups: Vec<Group>,
}

impl Cast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the named group, creating it on first use
    pub fn add_actor(&mut self, group: &str, member: impl Into<CastMember>) {
        let member = member.into();
        match self.groups.iter_mut().find(|g| g.name == group) {
            Some(existing) => existing.members.push(member),
            None => self.groups.push(Group {
                name: group.to_string(),
                members: vec![member],
            }),
        }
    }

    /// Remove and return the actor at `index` in `group`
    pub fn remove_actor(&mut self, group: &str, index: usize) -> Option<CastMember> {
        let members = &mut self.group_mut(group)?.members;
        (index < members.len()).then(|| members.remove(index))
    }

    /// First actor of a group; `None` when the group is empty or unknown
    pub fn first_actor(&self, group: &str) -> Option<&CastMember> {
        self.actors(group).first()
    }

    pub fn first_actor_mut(&mut self, group: &str) -> Option<&mut CastMember> {
        self.actors_mut(group).first_mut()
    }

    /// Every actor in a group, in insertion order (empty when unknown)
    pub fn actors(&self, group: &str) -> &[CastMember] {
        self.groups
            .iter()
            .find(|g| g.name == group)
            .map(|g| g.members.as_slice())
            .unwrap_or(&[])
    }

    pub fn actors_mut(&mut self, group: &str) -> &mut [CastMember] {
        match self.group_mut(group) {
            Some(g) => g.members.as_mut_slice(),
            None => &mut [],
        }
    }

    /// Every actor across all groups, groups in registration order
    pub fn all_actors(&self) -> Vec<&Actor> {
        self.groups
            .iter()
            .flat_map(|g| g.members.iter().map(CastMember::actor))
            .collect()
    }

    /// Group names in registration order
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.name.as_str())
    }

    /// Total number of actors across all groups
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.members.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn group_mut(&mut self, group: &str) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| g.name == group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Point;

    fn sample_cast() -> Cast {
        let mut cast = Cast::new();
        cast.add_actor("banner", Actor::new("0"));
        cast.add_actor("robot", Actor::new("#").with_position(Point::new(40, 23)));
        cast.add_actor("artifacts", Artifact::new(100).at(Point::new(1, 1)));
        cast.add_actor("artifacts", Artifact::new(100).at(Point::new(2, 2)));
        cast.add_actor("bombs", Bomb::new(-50).at(Point::new(3, 3)));
        cast
    }

    #[test]
    fn test_first_actor() {
        let cast = sample_cast();
        let robot = cast.first_actor("robot").unwrap();
        assert_eq!(robot.actor().text(), "#");

        let first = cast.first_actor("artifacts").unwrap();
        assert_eq!(first.actor().position(), Point::new(1, 1));
    }

    #[test]
    fn test_first_actor_missing_or_empty() {
        let mut cast = sample_cast();
        assert!(cast.first_actor("nonexistent").is_none());

        // Emptied group behaves like an absent one
        assert!(cast.remove_actor("robot", 0).is_some());
        assert!(cast.first_actor("robot").is_none());
        assert!(cast.first_actor_mut("robot").is_none());
    }

    #[test]
    fn test_unknown_group_is_empty_sequence() {
        let mut cast = sample_cast();
        assert!(cast.actors("nonexistent").is_empty());
        assert!(cast.actors_mut("nonexistent").is_empty());
    }

    #[test]
    fn test_all_actors_flattens_in_registration_order() {
        let cast = sample_cast();
        let all = cast.all_actors();
        let total: usize = cast.group_names().map(|g| cast.actors(g).len()).sum();
        assert_eq!(all.len(), total);
        assert_eq!(all.len(), cast.len());

        let texts: Vec<&str> = all.iter().map(|a| a.text()).collect();
        assert_eq!(texts, vec!["0", "#", "*", "*", "o"]);
    }

    #[test]
    fn test_group_order_is_first_use() {
        let mut cast = sample_cast();
        // Adding to an existing group must not move it to the back
        cast.add_actor("banner", Actor::new("extra"));
        let names: Vec<&str> = cast.group_names().collect();
        assert_eq!(names, vec!["banner", "robot", "artifacts", "bombs"]);
        assert_eq!(cast.all_actors()[1].text(), "extra");
    }

    #[test]
    fn test_remove_actor_out_of_range() {
        let mut cast = sample_cast();
        assert!(cast.remove_actor("bombs", 5).is_none());
        assert!(cast.remove_actor("nonexistent", 0).is_none());
        assert_eq!(cast.len(), 5);
    }

    #[test]
    fn test_point_value_dispatch() {
        let cast = sample_cast();
        assert!(cast.first_actor("robot").unwrap().as_point_value().is_none());
        let bomb = cast.first_actor("bombs").unwrap();
        assert_eq!(bomb.as_point_value().map(|p| p.points()), Some(-50));
    }

    #[test]
    fn test_actors_mut_edits_in_place() {
        let mut cast = sample_cast();
        for member in cast.actors_mut("artifacts") {
            member.actor_mut().set_text("+");
        }
        assert!(cast.actors("artifacts").iter().all(|m| m.actor().text() == "+"));
        assert!(!cast.is_empty());
    }
}
