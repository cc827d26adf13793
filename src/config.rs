use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Weights for the deterministic compatibility scorer.
///
/// Compatibility between an anchor and a candidate is a weighted blend of
/// color overlap, occasion overlap, season overlap, and wear freshness.
/// The four weights must each sit in [0.0, 1.0] and sum to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Weight for shared color tokens (0.0-1.0)
    #[serde(default = "default_color_weight")]
    pub color: f64,

    /// Weight for shared occasions (0.0-1.0)
    #[serde(default = "default_occasion_weight")]
    pub occasion: f64,

    /// Weight for shared seasons (0.0-1.0)
    #[serde(default = "default_season_weight")]
    pub season: f64,

    /// Weight for wear freshness, favoring less-worn pieces (0.0-1.0)
    #[serde(default = "default_freshness_weight")]
    pub freshness: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            color: default_color_weight(),
            occasion: default_occasion_weight(),
            season: default_season_weight(),
            freshness: default_freshness_weight(),
        }
    }
}

impl ScoringWeights {
    fn is_valid_weight(weight: f64) -> bool {
        (0.0..=1.0).contains(&weight)
    }

    fn validate_weight(weight: f64, name: &str) -> Result<(), String> {
        if Self::is_valid_weight(weight) {
            Ok(())
        } else {
            Err(format!("{name} weight must be between 0.0 and 1.0"))
        }
    }

    /// Validate that all weights are in range and sum to 1.0 (with a small
    /// tolerance for floating point).
    pub fn validate(&self) -> Result<(), String> {
        let sum = self.color + self.occasion + self.season + self.freshness;
        if (sum - 1.0).abs() > 0.001 {
            return Err(format!(
                "scoring weights must sum to 1.0, but sum to {sum:.3}"
            ));
        }

        Self::validate_weight(self.color, "color")?;
        Self::validate_weight(self.occasion, "occasion")?;
        Self::validate_weight(self.season, "season")?;
        Self::validate_weight(self.freshness, "freshness")?;
        Ok(())
    }

    /// Normalize weights so they sum to exactly 1.0.
    pub fn normalize(&mut self) {
        let sum = self.color + self.occasion + self.season + self.freshness;
        if sum > 0.0 && (sum - 1.0).abs() > 0.001 {
            self.color /= sum;
            self.occasion /= sum;
            self.season /= sum;
            self.freshness /= sum;
        }
    }
}

// Default weights: shared palette dominates, occasion fit close behind.
fn default_color_weight() -> f64 {
    0.35
}
fn default_occasion_weight() -> f64 {
    0.30
}
fn default_season_weight() -> f64 {
    0.20
}
fn default_freshness_weight() -> f64 {
    0.15
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub default_format: Option<String>,
}

/// Root configuration, loaded from `.stylemap.toml` if present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StylemapConfig {
    pub scoring: Option<ScoringWeights>,
    pub output: Option<OutputConfig>,
}

static CONFIG: OnceLock<StylemapConfig> = OnceLock::new();
static SCORING_WEIGHTS: OnceLock<ScoringWeights> = OnceLock::new();

fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

fn parse_and_validate_config(contents: &str) -> Result<StylemapConfig, String> {
    let mut config = toml::from_str::<StylemapConfig>(contents)
        .map_err(|e| format!("failed to parse .stylemap.toml: {e}"))?;

    if let Some(ref mut scoring) = config.scoring {
        if let Err(e) = scoring.validate() {
            log::warn!("invalid scoring weights: {e}; using defaults");
            config.scoring = Some(ScoringWeights::default());
        } else {
            scoring.normalize();
        }
    }

    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<StylemapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("failed to read config file {}: {e}", config_path.display());
            }
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{e}; using defaults");
            None
        }
    }
}

fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load configuration by walking up from the current directory.
pub fn load_config() -> StylemapConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!("failed to get current directory: {e}; using default config");
            return StylemapConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(".stylemap.toml"))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_default()
}

/// Get the cached configuration.
pub fn get_config() -> &'static StylemapConfig {
    CONFIG.get_or_init(load_config)
}

/// Get the scoring weights, falling back to defaults when not configured.
pub fn get_scoring_weights() -> &'static ScoringWeights {
    SCORING_WEIGHTS.get_or_init(|| get_config().scoring.clone().unwrap_or_default())
}
