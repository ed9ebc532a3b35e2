pub mod field;
pub use field::*;

pub mod geometry;
pub use geometry::*;

pub mod point;
pub use point::*;

pub mod segment;
pub use segment::*;

pub mod triangle;
pub use triangle::*;
