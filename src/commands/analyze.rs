use crate::catalog::RecommendationCatalog;
use crate::insights::build_report;
use crate::io;
use crate::io::output::{create_writer, OutputFormat};
use anyhow::Result;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub plain: bool,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    if config.plain {
        colored::control::set_override(false);
    }

    let items = io::read_wardrobe(&config.path)?;
    let catalog = RecommendationCatalog::builtin();
    let report = build_report(&items, &catalog);

    let destination: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout()),
    };
    create_writer(config.format, destination).write_report(&report)?;
    Ok(())
}
