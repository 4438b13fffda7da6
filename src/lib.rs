pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::output::{JsonSink, OutputFormat, TextSink};
pub use app::session::{run_session, SessionOptions};
pub use config::toml_config::TomlConfig;
pub use core::{engine::DrawEngine, rng::StdRandomSource, sampler::UniqueSampleGenerator};
pub use domain::model::{GameRequest, NumberSet, ResultCollection};
pub use domain::ports::{ConfigProvider, RandomSource, ResultSink};
pub use utils::error::{LottoError, Result};
