pub mod player;
pub mod team;

pub use player::*;
pub use team::*;
