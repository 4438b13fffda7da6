use crate::app::output::{self, OutputFormat};
use crate::config::{prompt::Prompter, resolve_request, resolve_seed};
use crate::core::{engine::DrawEngine, rng::StdRandomSource, ConfigProvider};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    pub format: OutputFormat,
    pub sort: bool,
}

/// One console run: banner, prompts for missing values, then every game.
///
/// Results go to `stdout`. Prompts share `stdout` in text mode and move to
/// `stderr` in JSON mode so stdout holds exactly one JSON document.
pub fn run_session<R: BufRead, O: Write, E: Write>(
    primary: &dyn ConfigProvider,
    fallback: &dyn ConfigProvider,
    options: SessionOptions,
    input: R,
    mut stdout: O,
    mut stderr: E,
) -> Result<u32> {
    if options.format == OutputFormat::Text {
        output::write_banner(&mut stdout)?;
    }

    let request = {
        let prompt_out: &mut dyn Write = match options.format {
            OutputFormat::Text => &mut stdout,
            OutputFormat::Json => &mut stderr,
        };
        let mut prompter = Prompter::new(input, prompt_out);
        resolve_request(primary, fallback, &mut prompter)?
    };
    request.validate()?;

    let seed = resolve_seed(primary, fallback);
    if let Some(seed) = seed {
        tracing::info!("Using fixed seed {}", seed);
    }

    let mut engine = DrawEngine::new(StdRandomSource::from_seed_option(seed));
    let mut sink = output::sink_for(options.format, &mut stdout, seed, options.sort);
    engine.run(&request, sink.as_mut())
}
