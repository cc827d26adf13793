use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "stylemap")]
#[command(about = "Wardrobe completeness and outfit recommendation analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a wardrobe for coverage gaps and completeness
    Analyze {
        /// Wardrobe JSON file
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        plain: bool,
    },

    /// Generate outfit variants around an anchor item
    Outfit {
        /// Wardrobe JSON file
        path: PathBuf,

        /// Id of the item to build outfits around
        #[arg(long)]
        anchor: String,

        /// Color tokens to exclude from candidates
        #[arg(long = "avoid-colors", value_delimiter = ',')]
        avoid_colors: Vec<String>,

        /// Require candidates to list this occasion (casual, smart, formal, sport, travel)
        #[arg(long)]
        style: Option<String>,

        /// Weather to dress for (hot, mild, cold, rain)
        #[arg(long)]
        weather: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Disable colored output
        #[arg(long)]
        plain: bool,
    },

    /// Rank swap candidates for the slot an item occupies
    Swaps {
        /// Wardrobe JSON file
        path: PathBuf,

        /// Id of the item currently filling the slot
        #[arg(long)]
        item: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Disable colored output
        #[arg(long)]
        plain: bool,
    },

    /// Create a default .stylemap.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
