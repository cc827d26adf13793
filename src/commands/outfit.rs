use crate::config::get_scoring_weights;
use crate::core::{Occasion, OutfitConstraints, Weather};
use crate::errors::EngineError;
use crate::insights::format_variants;
use crate::io;
use crate::io::output::OutputFormat;
use crate::outfit::generate_variants;
use anyhow::{anyhow, Result};
use std::path::PathBuf;

pub struct OutfitConfig {
    pub path: PathBuf,
    pub anchor_id: String,
    pub avoid_colors: Vec<String>,
    pub style: Option<String>,
    pub weather: Option<String>,
    pub format: OutputFormat,
    pub plain: bool,
}

pub fn handle_outfit(config: OutfitConfig) -> Result<()> {
    if config.plain {
        colored::control::set_override(false);
    }

    let items = io::read_wardrobe(&config.path)?;
    let anchor = items
        .iter()
        .find(|i| i.id == config.anchor_id)
        .ok_or(EngineError::ItemNotFound {
            id: config.anchor_id.clone(),
        })?
        .clone();

    let constraints = build_constraints(&config)?;
    let variants = generate_variants(&anchor, &items, &constraints, get_scoring_weights());

    match config.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&variants)?),
        OutputFormat::Terminal | OutputFormat::Markdown => {
            print!("{}", format_variants(&variants));
        }
    }
    Ok(())
}

fn build_constraints(config: &OutfitConfig) -> Result<OutfitConstraints> {
    let require_style = config
        .style
        .as_deref()
        .map(|s| s.parse::<Occasion>().map_err(|e| anyhow!(e)))
        .transpose()?;
    let weather = config
        .weather
        .as_deref()
        .map(|s| s.parse::<Weather>().map_err(|e| anyhow!(e)))
        .transpose()?;

    Ok(OutfitConstraints {
        avoid_colors: config.avoid_colors.clone(),
        require_style,
        weather,
        budget: None,
        brands: vec![],
    })
}
