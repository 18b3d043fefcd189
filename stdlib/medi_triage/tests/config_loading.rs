use std::fs;

use medi_triage::config::{generate_config, CONFIG_FILE};
use medi_triage::{RiskScorer, ScoringWeights, SymptomInput, TriageConfig, TriageError};

#[test]
fn discover_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = TriageConfig::discover(None, dir.path()).unwrap();
    assert_eq!(config, TriageConfig::default());
}

#[test]
fn discover_reads_file_in_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE),
        "[speech]\nenabled = true\ncommand = \"say\"\n\n[scoring]\ncap = 5.0\n",
    )
    .unwrap();
    let config = TriageConfig::discover(None, dir.path()).unwrap();
    assert!(config.speech.enabled);
    assert_eq!(config.speech.command, "say");
    assert_eq!(config.scoring.cap, 5.0);

    // cap 5 halves the scale: raw 3 of 5 -> 60
    let r = RiskScorer::new(config.scoring).score(&SymptomInput::new(0.0, 1.0, 1.0, 0.0, 0.0, 1.0));
    assert_eq!(r.probability, 60);
}

#[test]
fn explicit_missing_path_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(matches!(
        TriageConfig::discover(Some(missing.as_path()), dir.path()),
        Err(TriageError::Io { .. })
    ));
}

#[test]
fn generated_file_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE);
    fs::write(&path, generate_config()).unwrap();
    assert_eq!(TriageConfig::load(&path).unwrap(), TriageConfig::default());
}

#[test]
fn scorer_loads_from_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weights.json");
    fs::write(&path, r#"{"weights": {"fever_points": 3.0}}"#).unwrap();
    let scorer = RiskScorer::load_model(&path).unwrap();
    assert_eq!(
        scorer.weights,
        ScoringWeights {
            fever_points: 3.0,
            ..ScoringWeights::default()
        }
    );
}
