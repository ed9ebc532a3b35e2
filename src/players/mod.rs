pub mod bot;
pub use bot::*;

pub mod opponent;
pub use opponent::*;

pub mod tier;
pub use tier::*;
