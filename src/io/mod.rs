pub mod output;

use crate::core::WardrobeItem;
use crate::errors::EngineError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Wardrobe files are either a bare JSON array of items or an object with
/// an `items` field; exports from different tools disagree on the wrapper.
#[derive(Deserialize)]
#[serde(untagged)]
enum WardrobeFile {
    Bare(Vec<WardrobeItem>),
    Wrapped { items: Vec<WardrobeItem> },
}

/// Read a wardrobe collection from a JSON file.
pub fn read_wardrobe(path: &Path) -> Result<Vec<WardrobeItem>, EngineError> {
    let contents = fs::read_to_string(path).map_err(|source| EngineError::WardrobeRead {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed: WardrobeFile =
        serde_json::from_str(&contents).map_err(|source| EngineError::WardrobeParse {
            path: path.to_path_buf(),
            source,
        })?;

    let items = match parsed {
        WardrobeFile::Bare(items) => items,
        WardrobeFile::Wrapped { items } => items,
    };
    log::debug!("loaded {} items from {}", items.len(), path.display());
    Ok(items)
}

pub fn write_file(path: &Path, contents: &str) -> anyhow::Result<()> {
    fs::write(path, contents)?;
    Ok(())
}
