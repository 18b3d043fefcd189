//! Weighted symptom risk scoring.
//!
//! The score is an illustrative heuristic, not a validated model. The pipeline
//! is split into ordered steps so capping and rounding can be checked on their
//! own:
//!
//! 1. additive contributions (age, fever, cough, fatigue, breathing)
//! 2. pre-existing condition multiplier
//! 3. cap at [`ScoringWeights::cap`]
//! 4. scale to a 0-100 probability, rounding halves up
//! 5. threshold into a [`RiskLabel`]

use std::fmt;
use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TriageError};
use crate::symptom::SymptomInput;

/// Minimal trait for prediction models
pub trait Model {
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RiskLabel {
    Low,
    Moderate,
    High,
}

impl RiskLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::Low => "Low",
            RiskLabel::Moderate => "Moderate",
            RiskLabel::High => "High",
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one scoring call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    /// Score after the multiplier and the upper cap. Not floored.
    pub raw: f64,
    /// `raw` scaled to 0-100 and rounded. Negative when `raw` is negative.
    pub probability: i64,
    pub label: RiskLabel,
}

/// Constants of the scoring pipeline.
///
/// `Default` reproduces the reference weights exactly; changing any of them
/// changes every score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub senior_age: f64,
    pub senior_points: f64,
    pub middle_age: f64,
    pub middle_points: f64,
    pub fever_points: f64,
    pub cough_points: f64,
    pub fatigue_factor: f64,
    pub breath_factor: f64,
    pub cap: f64,
    pub high_threshold: i64,
    pub moderate_threshold: i64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            senior_age: 60.0,
            senior_points: 2.0,
            middle_age: 45.0,
            middle_points: 1.0,
            fever_points: 2.0,
            cough_points: 1.0,
            fatigue_factor: 0.4,
            breath_factor: 1.5,
            cap: 10.0,
            high_threshold: 70,
            moderate_threshold: 40,
        }
    }
}

/// Stateless weighted-sum scorer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskScorer {
    pub weights: ScoringWeights,
}

impl Model for RiskScorer {
    fn name(&self) -> &str {
        "weighted-symptom-score"
    }
}

impl RiskScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Load weights saved as JSON, e.g. `{"weights": {"fever_points": 3.0}}`.
    pub fn load_model(path: impl AsRef<Path>) -> Result<RiskScorer> {
        let path = path.as_ref();
        let s = read_to_string(path).map_err(|source| TriageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str::<RiskScorer>(&s)?)
    }

    /// Score one input. Total over every `f64`: never panics, never errors.
    pub fn score(&self, input: &SymptomInput) -> RiskResult {
        let w = &self.weights;
        let additive = additive_score(input, w);
        let amplified = apply_multiplier(additive, input.preexist);
        let raw = cap_score(amplified, w.cap);
        let probability = to_probability(raw, w.cap);
        let label = classify(probability, w);
        log::debug!(
            "scored input: additive={additive} amplified={amplified} raw={raw} probability={probability} label={label}"
        );
        RiskResult {
            raw,
            probability,
            label,
        }
    }
}

/// Score with the reference weights.
pub fn score(input: &SymptomInput) -> RiskResult {
    RiskScorer::default().score(input)
}

/// Age bands are exclusive; the senior band is checked first.
pub fn age_contribution(age: f64, w: &ScoringWeights) -> f64 {
    if age >= w.senior_age {
        w.senior_points
    } else if age >= w.middle_age {
        w.middle_points
    } else {
        0.0
    }
}

pub fn fever_contribution(fever: f64, w: &ScoringWeights) -> f64 {
    if fever == 1.0 {
        w.fever_points
    } else {
        0.0
    }
}

pub fn cough_contribution(cough: f64, w: &ScoringWeights) -> f64 {
    if cough == 1.0 {
        w.cough_points
    } else {
        0.0
    }
}

pub fn fatigue_contribution(fatigue: f64, w: &ScoringWeights) -> f64 {
    fatigue * w.fatigue_factor
}

pub fn breath_contribution(breath: f64, w: &ScoringWeights) -> f64 {
    breath * w.breath_factor
}

/// Sum of the additive terms, accumulated left to right in a fixed order.
pub fn additive_score(input: &SymptomInput, w: &ScoringWeights) -> f64 {
    let mut score = 0.0;
    score += age_contribution(input.age, w);
    score += fever_contribution(input.fever, w);
    score += cough_contribution(input.cough, w);
    score += fatigue_contribution(input.fatigue, w);
    score += breath_contribution(input.breath, w);
    score
}

/// `preexist` scales the whole additive score, so zero erases every signal.
pub fn apply_multiplier(score: f64, preexist: f64) -> f64 {
    score * preexist
}

/// Upper cap only. NaN passes through unchanged.
pub fn cap_score(score: f64, cap: f64) -> f64 {
    if score > cap {
        cap
    } else {
        score
    }
}

/// Scale `raw` from `0..=cap` to `0..=100`. NaN maps to 0.
pub fn to_probability(raw: f64, cap: f64) -> i64 {
    // saturating cast
    round_half_up((raw / cap) * 100.0) as i64
}

/// Round to the nearest integer with halves going toward positive infinity:
/// `82.5 -> 83`, `-2.5 -> -2`.
pub fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

pub fn classify(probability: i64, w: &ScoringWeights) -> RiskLabel {
    if probability >= w.high_threshold {
        RiskLabel::High
    } else if probability >= w.moderate_threshold {
        RiskLabel::Moderate
    } else {
        RiskLabel::Low
    }
}
