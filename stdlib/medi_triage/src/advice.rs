use serde::{Deserialize, Serialize};

use crate::risk::{Model, RiskLabel, RiskResult, RiskScorer};
use crate::symptom::SymptomInput;

pub const NO_PREDICTION: &str = "No prediction yet.";

pub fn advice_for(label: RiskLabel) -> &'static str {
    match label {
        RiskLabel::High => {
            "Advice: Seek medical attention immediately and consider contacting a healthcare provider."
        }
        RiskLabel::Moderate => {
            "Advice: Monitor symptoms closely. Consider teleconsultation if symptoms persist or worsen."
        }
        RiskLabel::Low => {
            "Advice: Low immediate risk. Rest, hydrate, and consult a doctor if new symptoms appear."
        }
    }
}

pub fn risk_text(result: &RiskResult) -> String {
    format!(
        "Risk: {} — {}% probability",
        result.label, result.probability
    )
}

/// Sentence handed to text-to-speech.
pub fn speech_line(result: &RiskResult) -> String {
    format!(
        "Predicted risk is {} with probability {} percent.",
        result.label, result.probability
    )
}

/// The two output lines under the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionView {
    pub risk_text: String,
    pub advice_text: String,
}

impl Default for PredictionView {
    fn default() -> Self {
        Self {
            risk_text: NO_PREDICTION.to_string(),
            advice_text: String::new(),
        }
    }
}

impl PredictionView {
    pub fn show(&mut self, result: &RiskResult) {
        self.risk_text = risk_text(result);
        self.advice_text = advice_for(result.label).to_string();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Everything produced for one prediction, for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub model: String,
    pub input: SymptomInput,
    pub result: RiskResult,
    pub risk_text: String,
    pub advice: String,
    pub notes: Vec<String>,
}

impl Prediction {
    pub fn from_input(scorer: &RiskScorer, input: SymptomInput) -> Self {
        let result = scorer.score(&input);
        Self {
            model: scorer.name().to_string(),
            input,
            result,
            risk_text: risk_text(&result),
            advice: advice_for(result.label).to_string(),
            notes: input.notes().iter().map(|n| n.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(probability: i64, label: RiskLabel) -> RiskResult {
        RiskResult {
            raw: probability as f64 / 10.0,
            probability,
            label,
        }
    }

    #[test]
    fn risk_text_format() {
        assert_eq!(
            risk_text(&result(83, RiskLabel::High)),
            "Risk: High — 83% probability"
        );
    }

    #[test]
    fn speech_line_format() {
        assert_eq!(
            speech_line(&result(40, RiskLabel::Moderate)),
            "Predicted risk is Moderate with probability 40 percent."
        );
    }

    #[test]
    fn view_show_then_reset() {
        let mut view = PredictionView::default();
        assert_eq!(view.risk_text, NO_PREDICTION);
        view.show(&result(20, RiskLabel::Low));
        assert_eq!(view.risk_text, "Risk: Low — 20% probability");
        assert!(view.advice_text.starts_with("Advice: Low immediate risk."));
        view.reset();
        assert_eq!(view, PredictionView::default());
        assert_eq!(view.advice_text, "");
    }

    #[test]
    fn each_label_has_distinct_advice() {
        let all = [RiskLabel::Low, RiskLabel::Moderate, RiskLabel::High].map(advice_for);
        assert_ne!(all[0], all[1]);
        assert_ne!(all[1], all[2]);
        assert!(all[2].contains("Seek medical attention"));
    }
}
