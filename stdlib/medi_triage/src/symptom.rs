//! Symptom inputs fed to the scorer.
//!
//! Values are taken as-is. Nothing here rejects an input; [`SymptomInput::notes`]
//! only reports values that fall outside the range the form is designed for.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Six caller-supplied numeric symptom fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SymptomInput {
    /// Age in years.
    pub age: f64,
    /// 1 when febrile, 0 otherwise.
    pub fever: f64,
    /// 1 when coughing, 0 otherwise.
    pub cough: f64,
    /// Fatigue on a 0-5 scale.
    pub fatigue: f64,
    /// Shortness-of-breath severity.
    pub breath: f64,
    /// Pre-existing condition multiplier applied to the whole score.
    pub preexist: f64,
}

impl SymptomInput {
    pub fn new(age: f64, fever: f64, cough: f64, fatigue: f64, breath: f64, preexist: f64) -> Self {
        Self {
            age,
            fever,
            cough,
            fatigue,
            breath,
            preexist,
        }
    }

    /// Advisory notes for values outside their expected domain.
    pub fn notes(&self) -> Vec<DomainNote> {
        let mut out = Vec::new();
        for (field, value) in self.fields() {
            if !value.is_finite() {
                out.push(DomainNote::NonFinite { field, value });
            }
        }

        if self.age < 0.0 {
            out.push(DomainNote::OutOfRange {
                field: "age",
                value: self.age,
                expected: ">= 0",
            });
        }
        for (field, value) in [("fever", self.fever), ("cough", self.cough)] {
            if value.is_finite() && value != 0.0 && value != 1.0 {
                out.push(DomainNote::OutOfRange {
                    field,
                    value,
                    expected: "0 or 1",
                });
            }
        }
        if self.fatigue < 0.0 || self.fatigue > 5.0 {
            out.push(DomainNote::OutOfRange {
                field: "fatigue",
                value: self.fatigue,
                expected: "0..=5",
            });
        }
        if self.breath < 0.0 {
            out.push(DomainNote::OutOfRange {
                field: "breath",
                value: self.breath,
                expected: ">= 0",
            });
        }
        if self.preexist < 0.0 {
            out.push(DomainNote::OutOfRange {
                field: "preexist",
                value: self.preexist,
                expected: ">= 0",
            });
        }
        // Multiplying by zero erases every other signal; kept as-is pending product review.
        if self.preexist == 0.0 {
            out.push(DomainNote::ZeroMultiplier);
        }
        out
    }

    fn fields(&self) -> [(&'static str, f64); 6] {
        [
            ("age", self.age),
            ("fever", self.fever),
            ("cough", self.cough),
            ("fatigue", self.fatigue),
            ("breath", self.breath),
            ("preexist", self.preexist),
        ]
    }
}

/// A value the scorer accepted but that is unlikely to be meaningful.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DomainNote {
    OutOfRange {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },
    NonFinite {
        field: &'static str,
        value: f64,
    },
    /// `preexist == 0` collapses the score to zero regardless of symptoms.
    ZeroMultiplier,
}

impl fmt::Display for DomainNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainNote::OutOfRange {
                field,
                value,
                expected,
            } => write!(f, "{field} = {value} is outside the expected range ({expected})"),
            DomainNote::NonFinite { field, value } => write!(f, "{field} = {value} is not finite"),
            DomainNote::ZeroMultiplier => {
                write!(f, "preexist = 0 suppresses every other symptom signal")
            }
        }
    }
}
