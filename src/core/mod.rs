pub mod engine;
pub mod rng;
pub mod sampler;

pub use crate::domain::model::{GameRequest, NumberSet, ResultCollection};
pub use crate::domain::ports::{ConfigProvider, RandomSource, ResultSink};
pub use crate::utils::error::Result;
