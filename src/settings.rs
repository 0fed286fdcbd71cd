//! Game settings and preferences
//!
//! Read from an optional JSON file, then patched by command line flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_SOUND_DIR;
use crate::tuning::{Tuning, TuningOverrides, Variant};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Gameplay preset
    pub variant: Variant,
    /// Per-value adjustments on top of the preset
    pub overrides: TuningOverrides,

    // === Audio ===
    /// Directory holding audio.wav, missed.wav and newball.wav
    pub sound_dir: PathBuf,
    /// Silence audio even when the variant has it
    pub mute: bool,

    /// RNG seed (random when unset)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            overrides: TuningOverrides::default(),
            sound_dir: PathBuf::from(DEFAULT_SOUND_DIR),
            mute: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Create settings from a variant preset
    pub fn from_variant(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&json)
            .with_context(|| format!("invalid settings file {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Resolved tuning: variant preset plus overrides
    pub fn tuning(&self) -> Tuning {
        let mut tuning = Tuning::from_variant(self.variant);
        tuning.apply(&self.overrides);
        tuning
    }

    /// Effective audio switch (respects mute)
    pub fn audio_enabled(&self) -> bool {
        self.tuning().audio && !self.mute
    }

    /// Configured seed, or a fresh random one
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
