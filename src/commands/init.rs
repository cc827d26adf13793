use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(".stylemap.toml");

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Stylemap Configuration

# Weights for the compatibility scorer. Must sum to 1.0.
[scoring]
color = 0.35
occasion = 0.30
season = 0.20
freshness = 0.15

[output]
default_format = "terminal"
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created .stylemap.toml configuration file");

    Ok(())
}
