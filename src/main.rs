use anyhow::Result;
use clap::Parser;
use stylemap::cli::{Cli, Commands};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
            plain,
        } => stylemap::commands::analyze::handle_analyze(
            stylemap::commands::analyze::AnalyzeConfig {
                path,
                format: format.into(),
                output,
                plain,
            },
        ),
        Commands::Outfit {
            path,
            anchor,
            avoid_colors,
            style,
            weather,
            format,
            plain,
        } => stylemap::commands::outfit::handle_outfit(stylemap::commands::outfit::OutfitConfig {
            path,
            anchor_id: anchor,
            avoid_colors: normalize_list(avoid_colors),
            style,
            weather,
            format: format.into(),
            plain,
        }),
        Commands::Swaps {
            path,
            item,
            format,
            plain,
        } => stylemap::commands::swaps::handle_swaps(stylemap::commands::swaps::SwapsConfig {
            path,
            item_id: item,
            format: format.into(),
            plain,
        }),
        Commands::Init { force } => stylemap::commands::init::init_config(force),
    }
}

// Drop empty tokens left behind by trailing commas in delimited args.
fn normalize_list(values: Vec<String>) -> Vec<String> {
    values.into_iter().filter(|v| !v.is_empty()).collect()
}
