mod error;
mod filter;
pub mod loaders;
pub mod sources;

pub use error::SourceError;
pub use filter::ValuationFilter;
pub use loaders::ValuesCsvLoader;
pub use sources::{
    FantasyCalcClient, FantasyCalcParams, HttpSource, RetryPolicy, SleeperClient, SourceConfig,
};
