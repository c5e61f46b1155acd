//! `vecdraw [SCRIPT]`: replays a gesture script against a canvas built from
//! the user's configuration and prints the resulting shapes.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use vecdraw::replay::{self, Script};
use vecdraw::{canvas_from_config, init_logging, Config};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;
    tracing::info!("vecdraw {} (built {})", vecdraw::VERSION, vecdraw::BUILD_DATE);

    let source = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("reading script {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading script from stdin")?;
            buffer
        }
    };
    let script = Script::parse(&source)?;

    let config = match Config::default_path() {
        Ok(path) => Config::load_or_default(&path)
            .with_context(|| format!("loading config {}", path.display()))?,
        Err(e) => {
            tracing::warn!("{}; using default settings", e);
            Config::default()
        }
    };
    let mut canvas = canvas_from_config(&config)?;

    script.run(&mut canvas)?;
    for line in replay::summarize(&canvas) {
        println!("{}", line);
    }
    Ok(())
}
