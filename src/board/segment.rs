/// An undirected line between two stars, owned by whoever drew it.
/// Committed segments are append-only: once a move is accepted the
/// segment is never mutated or removed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
    pub owner: Player,
}

impl Segment {
    pub fn new(a: Point, b: Point, owner: Player) -> Self {
        Self { a, b, owner }
    }

    /// does this segment join exactly these two stars, in either order
    pub fn connects(&self, x: usize, y: usize) -> bool {
        (self.a.id == x && self.b.id == y) || (self.a.id == y && self.b.id == x)
    }

    /// is this star one of the segment's endpoints
    pub fn touches(&self, id: usize) -> bool {
        self.a.id == id || self.b.id == id
    }

    /// the star across the segment from the given endpoint
    pub fn across(&self, id: usize) -> Option<usize> {
        if self.a.id == id {
            Some(self.b.id)
        } else if self.b.id == id {
            Some(self.a.id)
        } else {
            None
        }
    }
}

/// undirected endpoint equality; ownership is not identity
impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.connects(other.a.id, other.b.id)
    }
}
impl Eq for Segment {}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}--{}", self.a, self.b)
    }
}

use super::point::Point;
use crate::gameplay::player::Player;
use serde::Deserialize;
use serde::Serialize;
