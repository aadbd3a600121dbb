mod assembler;
mod sections;

pub use assembler::*;
