mod lineup;
mod selector;

pub use lineup::*;
pub use selector::*;
