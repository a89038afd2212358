use anyhow::Result;
use makeitso::config::Config;
use makeitso::store::{self, TaskStore};
use makeitso::{logger, ui};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.first().map(String::as_str) == Some("--generate-config") {
        let path = match args.get(1) {
            Some(path) => PathBuf::from(path),
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = Config::load()?;
    logger::init(&config.logging)?;

    let tasks = match &config.tasks.seed_file {
        Some(path) => TaskStore::load_seed_file(path)?,
        None => store::sample_tasks(),
    };

    // Run the TUI application
    ui::run_app(&config, TaskStore::new(tasks)).await
}
