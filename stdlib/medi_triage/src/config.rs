use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TriageError};
use crate::risk::ScoringWeights;

pub const CONFIG_FILE: &str = "meditriage.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TriageConfig {
    #[serde(default)]
    pub speech: SpeechConfig,

    #[serde(default)]
    pub scoring: ScoringWeights,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SpeechConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_speech_command")]
    pub command: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}

fn default_speech_command() -> String {
    "espeak".to_string()
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            command: default_speech_command(),
            args: Vec::new(),
        }
    }
}

impl TriageConfig {
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| TriageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = parse_config(&text)?;
        log::debug!("loaded config from '{}': {config}", path.display());
        Ok(config)
    }

    /// Load an explicit path, else `meditriage.toml` under `dir` if present, else defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = dir.join(CONFIG_FILE);
        if candidate.exists() {
            Self::load(&candidate)
        } else {
            log::debug!("no {CONFIG_FILE} in '{}', using defaults", dir.display());
            Ok(Self::default())
        }
    }
}

impl fmt::Display for TriageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let speech = if self.speech.enabled {
            self.speech.command.as_str()
        } else {
            "off"
        };
        let weights = if self.scoring == ScoringWeights::default() {
            "reference"
        } else {
            "custom"
        };
        write!(f, "speech={speech} weights={weights}")
    }
}

pub fn parse_config(text: &str) -> Result<TriageConfig> {
    Ok(toml::from_str::<TriageConfig>(text)?)
}

/// Commented starter file.
pub fn generate_config() -> String {
    let w = ScoringWeights::default();
    let mut out = String::new();
    out.push_str("# meditriage configuration\n");
    out.push_str("\n[speech]\n");
    out.push_str("# Announce each prediction through an external text-to-speech program\n");
    out.push_str("enabled = false\n");
    out.push_str("command = \"espeak\"\n");
    out.push_str("# args = [\"-s\", \"150\"]\n");
    out.push_str("\n# Scoring weights. Changing any of these departs from the reference model.\n");
    out.push_str("# [scoring]\n");
    out.push_str(&format!("# senior_age = {:?}\n", w.senior_age));
    out.push_str(&format!("# senior_points = {:?}\n", w.senior_points));
    out.push_str(&format!("# middle_age = {:?}\n", w.middle_age));
    out.push_str(&format!("# middle_points = {:?}\n", w.middle_points));
    out.push_str(&format!("# fever_points = {:?}\n", w.fever_points));
    out.push_str(&format!("# cough_points = {:?}\n", w.cough_points));
    out.push_str(&format!("# fatigue_factor = {:?}\n", w.fatigue_factor));
    out.push_str(&format!("# breath_factor = {:?}\n", w.breath_factor));
    out.push_str(&format!("# cap = {:?}\n", w.cap));
    out.push_str(&format!("# high_threshold = {}\n", w.high_threshold));
    out.push_str(&format!("# moderate_threshold = {}\n", w.moderate_threshold));
    out
}
