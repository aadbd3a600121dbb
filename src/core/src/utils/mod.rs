mod stats;
mod time;

pub use stats::*;
pub use time::*;
