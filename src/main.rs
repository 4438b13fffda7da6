use clap::Parser;
use lotto_gen::app::output::OutputFormat;
use lotto_gen::app::session::{run_session, SessionOptions};
use lotto_gen::config::NoConfig;
use lotto_gen::utils::{logger, validation::Validate};
use lotto_gen::{CliConfig, ConfigProvider, LottoError, TomlConfig};
use std::io;

fn main() {
    let cli = CliConfig::parse();

    let file_config = match cli.config.as_deref().map(TomlConfig::from_file).transpose() {
        Ok(file_config) => file_config,
        Err(e) => exit_with(&e),
    };

    let format = cli
        .format
        .or_else(|| file_config.as_ref().and_then(TomlConfig::output_format))
        .unwrap_or_default();

    match format {
        OutputFormat::Text => logger::init_cli_logger(cli.verbose),
        OutputFormat::Json => logger::init_json_logger(cli.verbose),
    }

    tracing::info!("Starting lotto-gen v{}", env!("CARGO_PKG_VERSION"));
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli, file_config.as_ref(), format) {
        tracing::error!(
            "Run failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        exit_with(&e);
    }
}

fn exit_with(e: &LottoError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn run(
    cli: &CliConfig,
    file_config: Option<&TomlConfig>,
    format: OutputFormat,
) -> Result<(), LottoError> {
    cli.validate()?;
    if let Some(file_config) = file_config {
        file_config.validate()?;
    }

    let fallback: &dyn ConfigProvider = match file_config {
        Some(file_config) => file_config,
        None => &NoConfig,
    };
    let options = SessionOptions {
        format,
        sort: cli.sort || file_config.is_some_and(TomlConfig::sort),
    };

    run_session(
        cli,
        fallback,
        options,
        io::stdin().lock(),
        io::stdout().lock(),
        io::stderr(),
    )?;

    Ok(())
}
