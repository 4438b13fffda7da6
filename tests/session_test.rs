mod common;

use anyhow::Result;
use common::MockRng;
use lotto_gen::config::{prompt::Prompter, resolve_request, resolve_seed, NoConfig};
use lotto_gen::utils::validation::Validate;
use lotto_gen::{
    run_session, CliConfig, DrawEngine, GameRequest, JsonSink, LottoError, OutputFormat,
    SessionOptions, StdRandomSource, TextSink, TomlConfig,
};
use std::io::Cursor;
use tempfile::TempDir;

/// Flags fill the game count, the file fills the rest; nothing is prompted.
#[test]
fn test_cli_overrides_file_values() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("ozlotto.toml");
    std::fs::write(
        &config_path,
        r#"
[game]
games = 12
pool_size = 47
numbers_per_game = 7

[generator]
seed = 99

[output]
format = "json"
"#,
    )?;

    let file_config = TomlConfig::from_file(&config_path)?;
    file_config.validate()?;

    let cli = CliConfig {
        games: Some(3),
        ..CliConfig::default()
    };
    let mut prompter = Prompter::new(Cursor::new(""), Vec::new());

    let request = resolve_request(&cli, &file_config, &mut prompter)?;
    assert_eq!(request, GameRequest::new(3, 47, 7));
    assert_eq!(resolve_seed(&cli, &file_config), Some(99));
    assert_eq!(file_config.output_format(), Some(OutputFormat::Json));
    assert!(prompter.into_writer().is_empty());
    Ok(())
}

/// Console-only run: three answers in, one line per game out.
#[test]
fn test_prompted_run_renders_every_game() -> Result<()> {
    let mut prompter = Prompter::new(Cursor::new("4\n45\n6\n"), Vec::new());
    let request = resolve_request(&NoConfig, &NoConfig, &mut prompter)?;

    let mut engine = DrawEngine::new(StdRandomSource::seeded(5));
    let mut sink = TextSink::new(Vec::new(), true);
    let emitted = engine.run(&request, &mut sink)?;
    assert_eq!(emitted, 4);

    let text = String::from_utf8(sink.into_inner())?;
    let game_lines: Vec<&str> = text.lines().filter(|l| l.starts_with("Game ")).collect();
    assert_eq!(game_lines.len(), 4);

    for (i, line) in game_lines.iter().enumerate() {
        let (label, numbers) = line.split_once(" - ").expect("game line has a separator");
        assert_eq!(label, format!("Game {}", i + 1));

        let numbers: Vec<u32> = numbers
            .split_whitespace()
            .map(str::parse::<u32>)
            .collect::<std::result::Result<_, _>>()?;
        assert_eq!(numbers.len(), 6);
        assert!(numbers.windows(2).all(|w| w[0] < w[1]), "sorted and distinct: {:?}", numbers);
        assert!(numbers.iter().all(|n| (1..=45).contains(n)));
    }
    Ok(())
}

#[test]
fn test_oversized_request_fails_before_output() {
    let mut prompter = Prompter::new(Cursor::new("2\n6\n7\n"), Vec::new());
    let request = resolve_request(&NoConfig, &NoConfig, &mut prompter).unwrap();

    let mut engine = DrawEngine::new(MockRng);
    let mut sink = TextSink::new(Vec::new(), false);
    let err = engine.run(&request, &mut sink).unwrap_err();

    assert!(matches!(err, LottoError::InvalidParameters { pool_size: 6, count: 7, .. }));
    assert!(sink.into_inner().is_empty());
}

#[test]
fn test_malformed_answer_stops_the_run() {
    let mut prompter = Prompter::new(Cursor::new("5\nforty-five\n6\n"), Vec::new());
    let err = resolve_request(&NoConfig, &NoConfig, &mut prompter).unwrap_err();

    match err {
        LottoError::ValidationError { field, value, .. } => {
            assert_eq!(field, "pool size");
            assert_eq!(value, "forty-five");
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_json_run_with_mock_rng() -> Result<()> {
    let mut engine = DrawEngine::new(MockRng);
    let mut sink = JsonSink::new(Vec::new(), None, false);
    engine.run(&GameRequest::new(2, 20, 3), &mut sink)?;

    let value: serde_json::Value = serde_json::from_slice(&sink.into_inner())?;
    assert!(value["seed"].is_null());
    assert_eq!(value["request"]["numbers_per_game"], 3);
    assert_eq!(value["games"][1]["game"], 2);
    assert_eq!(value["games"][1]["numbers"], serde_json::json!([1, 2, 3]));
    Ok(())
}

/// Seeded JSON run that still has to ask for the pool and row size.
#[test]
fn test_json_session_with_prompts_is_one_document() -> Result<()> {
    let cli = CliConfig {
        games: Some(2),
        seed: Some(1),
        format: Some(OutputFormat::Json),
        ..CliConfig::default()
    };
    let options = SessionOptions {
        format: OutputFormat::Json,
        sort: false,
    };
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();

    run_session(
        &cli,
        &NoConfig,
        options,
        Cursor::new("45\n6\n"),
        &mut stdout,
        &mut stderr,
    )?;

    let value: serde_json::Value = serde_json::from_slice(&stdout)?;
    assert_eq!(value["seed"], 1);
    assert_eq!(value["games"].as_array().map(Vec::len), Some(2));
    assert!(String::from_utf8(stderr)?.contains("Numbers per game"));
    Ok(())
}

#[test]
fn test_unreadable_config_exits_with_config_code() {
    let err = TomlConfig::from_file("/nonexistent/lotto.toml").unwrap_err();
    assert!(matches!(err, LottoError::ConfigError { .. }));
    assert_eq!(err.exit_code(), 2);
}
