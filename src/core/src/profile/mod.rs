mod profiler;

pub use profiler::*;
