//! CLI entrypoint for trivia-quiz
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use quiz_application::{GameLogger, HighScoresUseCase, NoGameLogger, PlayQuizUseCase, ScoreStore};
use quiz_infrastructure::{
    ConfigLoader, FileConfig, JsonQuestionSource, JsonlGameLogger, LocalKeyValueStore,
    LocalScoreStore,
};
use quiz_presentation::{Cli, ConsoleFormatter, TuiApp};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    // CLI flags take precedence over every config file
    if let Some(path) = &cli.questions {
        config.questions.path = Some(path.display().to_string());
    }
    if let Some(path) = &cli.store {
        config.storage.path = Some(path.display().to_string());
    }

    ConsoleFormatter::set_color_enabled(!cli.no_color && config.output.color);

    // Keep the guard alive until exit so buffered log lines are flushed
    let _log_guard = init_tracing(&cli, &config)?;

    info!("Starting trivia-quiz");

    let issues = config.validate();
    if !issues.is_empty() {
        eprintln!("{}", ConsoleFormatter::format_config_issues(&issues));
        for issue in &issues {
            warn!("Config issue: {}", issue.message);
        }
    }
    if issues.iter().any(|issue| issue.is_error()) {
        bail!("Invalid configuration");
    }

    // === Dependency Injection ===
    let storage_path = config
        .storage_path()
        .or_else(LocalKeyValueStore::default_path)
        .context("Could not determine a data directory; pass --store <PATH>")?;
    info!("Using score storage at {}", storage_path.display());
    let store = Arc::new(LocalScoreStore::with_key(
        LocalKeyValueStore::new(storage_path),
        config.storage.key.clone(),
    ));

    // Non-interactive listing
    if cli.scores {
        let format = cli
            .output
            .map(Into::into)
            .or(config.output.format)
            .unwrap_or_default();
        println!("{}", ConsoleFormatter::format(&store.load(), format));
        return Ok(());
    }

    let questions = Arc::new(match config.questions_path() {
        Some(path) => JsonQuestionSource::from_file(path),
        None => JsonQuestionSource::bundled(),
    });

    let logger: Arc<dyn GameLogger> = match config.game_log_path().and_then(JsonlGameLogger::new)
    {
        Some(logger) => {
            info!("Writing game events to {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoGameLogger),
    };

    let game_config = config.game_config();
    let play = PlayQuizUseCase::new(questions, Arc::clone(&store), &game_config)
        .with_logger(Arc::clone(&logger));
    let scores = HighScoresUseCase::new(store, &game_config).with_logger(logger);

    let player = cli
        .user
        .or_else(|| config.game.default_user.clone())
        .unwrap_or_default();

    let mut app = TuiApp::new(play, scores, player).with_tick_rate(config.tick_rate());
    app.run().await?;

    info!("Exiting trivia-quiz");
    Ok(())
}

/// Initialize logging based on verbosity level.
///
/// The TUI owns the terminal, so interactive runs log to a file; `--scores`
/// logs to stderr.
fn init_tracing(cli: &Cli, config: &FileConfig) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    if cli.scores {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    }

    let Some(path) = config.log_file_path().or_else(default_log_path) else {
        return Ok(None);
    };
    let dir = path
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let file_name = path
        .file_name()
        .context("Log file path has no file name")?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create log directory {}", dir.display()))?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(&dir, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

fn default_log_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("trivia-quiz").join("trivia-quiz.log"))
}
