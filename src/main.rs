use anyhow::{anyhow, Context, Result};
use clap::Parser;

use kanban_board::cli::{load_script, CliArgs, OutputFormat};
use kanban_board::debug_dump::{render_text, StateDump};
use kanban_board::messages::Msg;
use kanban_board::update::update;
use kanban_board::{BoardConfig, BoardModel};

fn main() -> Result<()> {
    kanban_board::tracing::init();

    let args = CliArgs::parse();
    tracing::debug!(?args, "starting");

    let config = match &args.board {
        Some(path) => BoardConfig::load_from(path).map_err(|e| anyhow!(e))?,
        None => BoardConfig::load(),
    };
    let mut model = BoardModel::from_config(&config).context("Invalid seed board")?;

    if let Some(path) = &args.script {
        let events = load_script(path).map_err(|e| anyhow!(e))?;
        tracing::info!("Replaying {} events from {}", events.len(), path.display());

        for event in events {
            let cmd = update(&mut model, Msg::from(event));
            tracing::debug!(?cmd, "update");
        }

        if model.is_dragging() {
            tracing::warn!("Script ended with a drag still in progress");
        }
    }

    match args.output_format() {
        OutputFormat::Text => print!("{}", render_text(&model)),
        OutputFormat::Json => {
            let json = StateDump::from_model(&model)
                .to_json()
                .context("Failed to serialize state")?;
            println!("{}", json);
        }
    }

    Ok(())
}
