pub mod engine;
pub use engine::*;

pub mod event;
pub use event::*;

pub mod game;
pub use game::*;

pub mod phase;
pub use phase::*;

pub mod player;
pub use player::*;
