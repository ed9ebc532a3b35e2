use super::tier::Tier;
use serde::Deserialize;
use serde::Serialize;

/// who sits in the second seat; the first seat is always driven by the
/// embedding view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opponent {
    Human,
    Bot(Tier),
}

impl Opponent {
    pub fn tier(&self) -> Option<Tier> {
        match self {
            Opponent::Human => None,
            Opponent::Bot(tier) => Some(*tier),
        }
    }
}

impl std::fmt::Display for Opponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Opponent::Human => write!(f, "human"),
            Opponent::Bot(tier) => write!(f, "bot ({tier})"),
        }
    }
}
