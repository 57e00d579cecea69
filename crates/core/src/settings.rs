//! Reader settings: chunk size presets and bionic intensity levels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;

// ── Chunk size ────────────────────────────────────────────────

/// Sentence and character ceilings for a single chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkSizeConfig {
    pub max_sentences: usize,
    pub max_characters: usize,
}

impl ChunkSizeConfig {
    /// Build a custom config. Both ceilings must be at least 1.
    pub fn new(max_sentences: usize, max_characters: usize) -> Result<Self, ExtractionError> {
        if max_sentences == 0 {
            return Err(ExtractionError::InvalidConfig(
                "max_sentences must be at least 1".to_string(),
            ));
        }
        if max_characters == 0 {
            return Err(ExtractionError::InvalidConfig(
                "max_characters must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            max_sentences,
            max_characters,
        })
    }
}

/// Fixed chunk size presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ChunkSize {
    pub const ALL: [ChunkSize; 3] = [ChunkSize::Small, ChunkSize::Medium, ChunkSize::Large];

    pub const fn config(self) -> ChunkSizeConfig {
        match self {
            ChunkSize::Small => ChunkSizeConfig {
                max_sentences: 1,
                max_characters: 150,
            },
            ChunkSize::Medium => ChunkSizeConfig {
                max_sentences: 2,
                max_characters: 300,
            },
            ChunkSize::Large => ChunkSizeConfig {
                max_sentences: 4,
                max_characters: 500,
            },
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ChunkSize::Small => "small",
            ChunkSize::Medium => "medium",
            ChunkSize::Large => "large",
        }
    }
}

impl From<ChunkSize> for ChunkSizeConfig {
    fn from(size: ChunkSize) -> Self {
        size.config()
    }
}

impl fmt::Display for ChunkSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChunkSize {
    type Err = ExtractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "small" | "s" => Ok(ChunkSize::Small),
            "medium" | "m" => Ok(ChunkSize::Medium),
            "large" | "l" => Ok(ChunkSize::Large),
            other => Err(ExtractionError::InvalidConfig(format!(
                "unknown chunk size '{other}' (expected small, medium or large)"
            ))),
        }
    }
}

// ── Bionic intensity ──────────────────────────────────────────

/// How much of each word gets bolded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BionicIntensity {
    Light,
    #[default]
    Medium,
    Strong,
}

impl BionicIntensity {
    pub const ALL: [BionicIntensity; 3] = [
        BionicIntensity::Light,
        BionicIntensity::Medium,
        BionicIntensity::Strong,
    ];

    /// Bold fraction as an integer percentage (light 30, medium 50, strong 70).
    ///
    /// Kept integral so `ceil(len * ratio)` is exact: in f64, `10.0 * 0.7`
    /// is `7.000000000000001`, which would ceil to 8.
    pub const fn percent(self) -> usize {
        match self {
            BionicIntensity::Light => 30,
            BionicIntensity::Medium => 50,
            BionicIntensity::Strong => 70,
        }
    }

    pub fn ratio(self) -> f64 {
        self.percent() as f64 / 100.0
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            BionicIntensity::Light => "light",
            BionicIntensity::Medium => "medium",
            BionicIntensity::Strong => "strong",
        }
    }
}

impl fmt::Display for BionicIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BionicIntensity {
    type Err = ExtractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(BionicIntensity::Light),
            "medium" => Ok(BionicIntensity::Medium),
            "strong" => Ok(BionicIntensity::Strong),
            other => Err(ExtractionError::InvalidConfig(format!(
                "unknown bionic intensity '{other}' (expected light, medium or strong)"
            ))),
        }
    }
}

// ── Reader settings ───────────────────────────────────────────

/// Read-only configuration consumed by the chunker and the bionic transformer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReaderSettings {
    #[serde(default)]
    pub chunk_size: ChunkSize,
    #[serde(default)]
    pub bionic_intensity: BionicIntensity,
    #[serde(default = "default_bionic_enabled")]
    pub bionic_enabled: bool,
}

fn default_bionic_enabled() -> bool {
    true
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self {
            chunk_size: ChunkSize::default(),
            bionic_intensity: BionicIntensity::default(),
            bionic_enabled: default_bionic_enabled(),
        }
    }
}

impl ReaderSettings {
    /// The intensity to annotate with, or `None` when bionic reading is off.
    pub fn active_intensity(&self) -> Option<BionicIntensity> {
        self.bionic_enabled.then_some(self.bionic_intensity)
    }
}
