use std::io;
use std::path::PathBuf;

use clap::Parser;
use verbquiz::app::App;
use verbquiz::config::QuizConfig;
use verbquiz::quiz::QuizController;
use verbquiz::simple::run_plain;
use verbquiz::store::FileStore;
use verbquiz::{error, Result};

/// Vocabulary quiz with progress that survives restarts
#[derive(Debug, Parser)]
#[command(name = "verbquiz", version, about)]
struct Cli {
    /// Config file (default: $CONFIG_DIR/verbquiz/verbquiz.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// TOML question file to use instead of the built-in list
    #[arg(long, value_name = "PATH")]
    questions: Option<PathBuf>,

    /// Progress file (default: $DATA_DIR/verbquiz/progress.json)
    #[arg(long, value_name = "PATH")]
    progress: Option<PathBuf>,

    /// Line-based mode without the full-screen interface
    #[arg(long)]
    plain: bool,

    /// Clear saved progress and exit
    #[arg(long)]
    reset_progress: bool,

    /// Write the resolved settings to the config file and exit
    #[arg(long)]
    save_config: bool,
}

fn main() {
    pretty_env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        log::error!("{}", e);
        eprintln!("{}", error::user_friendly_message(&e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => QuizConfig::load_from(path)?,
        None => QuizConfig::load()?,
    };
    if let Some(path) = cli.questions {
        config = config.with_questions_file(path);
    }
    if let Some(path) = cli.progress {
        config = config.with_progress_file(path);
    }
    config.validate()?;

    if cli.save_config {
        match &cli.config {
            Some(path) => config.save_to(path)?,
            None => config.save()?,
        }
        println!("Settings saved");
        return Ok(());
    }

    let progress_path = config.progress_path()?;
    let mut store = FileStore::open_or_empty(&progress_path);

    if cli.reset_progress {
        store.clear()?;
        println!("Progress cleared ({})", progress_path.display());
        return Ok(());
    }

    let bank = config.question_bank()?;
    log::info!(
        "starting quiz with {} questions, progress at {}",
        bank.len(),
        progress_path.display()
    );
    let mut quiz = QuizController::new(bank, store);

    if cli.plain {
        let stdin = io::stdin();
        return run_plain(&mut quiz, &mut stdin.lock(), &mut io::stdout());
    }

    let mut app = App::new(quiz)?;
    app.init()?;
    app.run()?;

    let quiz = app.into_quiz();
    println!("Score: {}", quiz.score().summary());
    Ok(())
}
