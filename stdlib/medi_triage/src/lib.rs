//! Symptom risk triage.
//!
//! A weighted-sum heuristic turns six symptom values into a capped raw score,
//! a 0-100 probability and a Low/Moderate/High label. The surrounding modules
//! cover what a front end needs around it: coercing form text, rendering the
//! result and advice, an optional spoken announcement and a small keyword
//! assistant.
//!
//! The weights are illustrative. They are not a validated clinical model.

pub mod advice;
pub mod assistant;
pub mod config;
pub mod error;
pub mod form;
pub mod risk;
pub mod speech;
pub mod symptom;

pub use advice::{advice_for, risk_text, speech_line, Prediction, PredictionView};
pub use assistant::{reply_for, Assistant};
pub use config::{SpeechConfig, TriageConfig};
pub use error::{Result, TriageError};
pub use form::PredictForm;
pub use risk::{score, Model, RiskLabel, RiskResult, RiskScorer, ScoringWeights};
pub use speech::{announce, CommandSpeaker, SilentSpeaker, Speaker};
pub use symptom::{DomainNote, SymptomInput};

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Once;

    use env_logger::Builder;
    use log::LevelFilter;

    static INIT: Once = Once::new();

    /// Initialize the logger for tests
    pub fn init_test_logger() {
        INIT.call_once(|| {
            let _ = Builder::new()
                .filter_level(LevelFilter::Debug)
                .is_test(true)
                .format(|buf, record| {
                    writeln!(
                        buf,
                        "[{}] {}: {}",
                        record.level(),
                        record.target(),
                        record.args()
                    )
                })
                .try_init();
        });
    }

    #[test]
    fn reexports_score_end_to_end() {
        init_test_logger();
        let r = super::score(&super::SymptomInput::new(60.0, 1.0, 1.0, 5.0, 5.0, 2.0));
        assert_eq!(r.probability, 100);
        assert_eq!(r.label, super::RiskLabel::High);
    }
}
