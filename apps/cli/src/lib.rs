//! `vocab` command-line app: keep a personal word list and quiz yourself on it.

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;

use std::io::Write;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocab_core::{load_words, QuizSession};

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::db::SqliteStore;

pub async fn run() -> anyhow::Result<()> {
    let args = Cli::parse();
    let config = Config::from_env();
    init_tracing(&config.log_filter);

    let db_path = args.db.clone().unwrap_or_else(|| config.db_path.clone());
    tracing::debug!(path = %db_path.display(), "opening word store");
    let store = SqliteStore::open(&db_path)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Add { term, definition } => commands::add(&store, &term, &definition, &mut out)?,
        Command::List => commands::list(&store, &mut out)?,
        Command::Search { query } => commands::search(&store, &query, &mut out)?,
        Command::Delete { id } => commands::delete(&store, &id, &mut out)?,
        Command::Export { out: dir } => {
            let dir = dir.unwrap_or_else(|| config.export_dir.clone());
            commands::export_words(&store, &dir, &mut out).await?;
        }
        Command::Import { file } => {
            commands::import_words(&store, &file, &mut out).await?;
        }
        Command::Quiz { seed } => {
            let rng = match seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_entropy(),
            };
            let mut session = QuizSession::start(load_words(&store)?, rng);
            let stdin = std::io::stdin();
            commands::run_quiz(&mut session, &mut stdin.lock(), &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Install the global subscriber. Logs go to stderr so they never mix with
/// command output.
fn init_tracing(filter: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
