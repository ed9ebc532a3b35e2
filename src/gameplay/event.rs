use super::phase::Phase;
use super::player::Player;
use crate::Score;
use crate::board::Segment;
use crate::board::Triangle;

/// Notifications pushed to the embedding view after each operation.
/// The core never renders or animates; it reports what changed and the
/// view decides what to do about it.
#[derive(Debug, Clone)]
pub enum Event {
    PhaseChanged(Phase),
    SegmentAdded(Segment),
    TrianglesClaimed(Vec<Triangle>, Player),
    ScoresChanged([Score; 2]),
    MoveRejected(usize, usize),
    GameOver([Score; 2]),
}

/// A view subscribed to the engine. Calls arrive synchronously, in the
/// order the changes happened.
pub trait Observer {
    fn notify(&mut self, event: &Event);
}
