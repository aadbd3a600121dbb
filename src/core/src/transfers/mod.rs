pub mod candidate;
pub mod generator;
pub mod graph;
pub mod market;
pub mod matching;
pub mod relaxation;
pub mod settings;

pub use candidate::*;
pub use generator::*;
pub use graph::*;
pub use market::*;
pub use matching::*;
pub use relaxation::*;
pub use settings::*;
