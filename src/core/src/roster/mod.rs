mod join;
mod records;

pub use join::*;
pub use records::*;
