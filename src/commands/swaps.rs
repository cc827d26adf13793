use crate::config::get_scoring_weights;
use crate::errors::EngineError;
use crate::insights::format_swap_options;
use crate::io;
use crate::io::output::OutputFormat;
use crate::outfit::swap_options;
use anyhow::Result;
use std::path::PathBuf;

pub struct SwapsConfig {
    pub path: PathBuf,
    pub item_id: String,
    pub format: OutputFormat,
    pub plain: bool,
}

pub fn handle_swaps(config: SwapsConfig) -> Result<()> {
    if config.plain {
        colored::control::set_override(false);
    }

    let items = io::read_wardrobe(&config.path)?;
    let current = items
        .iter()
        .find(|i| i.id == config.item_id)
        .ok_or(EngineError::ItemNotFound {
            id: config.item_id.clone(),
        })?;

    let options = swap_options(current.kind, &current.id, &items, get_scoring_weights())?;

    match config.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&options)?),
        OutputFormat::Terminal | OutputFormat::Markdown => {
            print!("{}", format_swap_options(&options));
        }
    }
    Ok(())
}
