use std::{path::PathBuf, time::Duration};

use taskfall_engine::{GameField, GameSession, ShapePicker, SpawnSeed};

use crate::{command::play::app::PlayApp, store::JsonFileStore, tui::Runtime};

mod app;
mod screens;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Path of the JSON file holding task text, keyed by shape id
    #[clap(long, default_value = "taskfall-tasks.json")]
    store_path: PathBuf,
    /// Hex seed for reproducible shape selection
    #[clap(long)]
    seed: Option<SpawnSeed>,
    /// Gravity tick delay in milliseconds
    #[clap(long, default_value_t = 900)]
    gravity_ms: u64,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("taskfall-tasks.json"),
            seed: None,
            gravity_ms: 900,
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        store_path,
        seed,
        gravity_ms,
    } = arg;

    let store = JsonFileStore::open(store_path)?;
    let picker = seed.map_or_else(ShapePicker::new, ShapePicker::with_seed);
    let session = GameSession::new(GameField::with_picker(picker, Box::new(store)));

    let mut app = PlayApp::new(session, Duration::from_millis(*gravity_ms));
    Runtime::new().run(&mut app)?;

    Ok(())
}
