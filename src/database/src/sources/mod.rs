mod config;
mod fantasycalc;
mod http;
mod sleeper;

pub use config::*;
pub use fantasycalc::*;
pub use http::*;
pub use sleeper::*;
