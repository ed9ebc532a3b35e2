/// Three stars whose three connecting segments all exist, claimed by the
/// player whose move completed the third edge. Created atomically with
/// that segment; stores vertices and owner only, edges are derivable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
    pub owner: Player,
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point, owner: Player) -> Self {
        Self { a, b, c, owner }
    }

    /// vertex ids in ascending order, for order-insensitive comparison
    pub fn ids(&self) -> [usize; 3] {
        let mut ids = [self.a.id, self.b.id, self.c.id];
        ids.sort_unstable();
        ids
    }
}

impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        self.ids() == other.ids()
    }
}
impl Eq for Triangle {}

impl std::fmt::Display for Triangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.a, self.b, self.c)
    }
}

use super::point::Point;
use crate::gameplay::player::Player;
use serde::Deserialize;
use serde::Serialize;
