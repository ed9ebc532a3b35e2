/// Coarse state of a session. An explicit enum rather than a pile of
/// booleans, so inconsistent combinations (moves left while waiting on
/// the die) cannot be represented.
///
/// Menu -> Configuring -> Rolling <-> Playing -> GameOver, with Menu
/// reachable again from GameOver (reset) or mid-game (abort).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Menu,
    Configuring,
    Rolling,
    Playing,
    GameOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Menu => write!(f, "MENU"),
            Phase::Configuring => write!(f, "SETUP"),
            Phase::Rolling => write!(f, "ROLL"),
            Phase::Playing => write!(f, "PLAY"),
            Phase::GameOver => write!(f, "OVER"),
        }
    }
}

use serde::Deserialize;
use serde::Serialize;
