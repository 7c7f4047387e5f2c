//! Command-line handling for the `autostack-canvas` binary.

use crate::script::{Replayer, Script, ScriptError};
use autostack_core::{CanvasConfig, CanvasSnapshot, CanvasStore, ConfigError, TemplateRegistry};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Top-level application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Replay a gesture script against a fresh canvas and print the final state as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "autostack-canvas")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Canvas settings file (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Gesture script to replay (JSON)
    pub script: PathBuf,
}

/// Replay the script named in `args` and return the final canvas state.
pub fn run(args: &Args) -> Result<CanvasSnapshot, AppError> {
    let config = match &args.config {
        Some(path) => CanvasConfig::load(path)?,
        None => CanvasConfig::default(),
    };
    let script = Script::load(&args.script)?;

    let registry = Arc::new(TemplateRegistry::builtin());
    log::info!("Loaded {} component templates", registry.len());

    let mut store = CanvasStore::with_settings(registry, config.into_settings());
    let updates = store.subscribe();

    let report = Replayer::new(&mut store).run(&script)?;
    let published = updates.try_iter().count();
    log::info!(
        "Replayed {} steps ({} rejected drops, {} state updates)",
        report.steps,
        report.rejected_drops,
        published
    );

    Ok(store.snapshot())
}
