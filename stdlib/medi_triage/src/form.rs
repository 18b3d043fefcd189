//! The predict form: six text fields coerced to numbers before scoring.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TriageError};
use crate::symptom::SymptomInput;

/// Field ids in form order.
pub const FIELD_IDS: [&str; 6] = ["age", "fever", "cough", "fatigue", "breath", "preexist"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Number,
    /// Fixed choices; reset selects the first one.
    Select(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub id: String,
    pub kind: FieldKind,
    pub value: String,
}

impl FormField {
    fn number(id: &str) -> Self {
        Self {
            id: id.to_string(),
            kind: FieldKind::Number,
            value: String::new(),
        }
    }

    fn select(id: &str, options: &[&str]) -> Self {
        let options: Vec<String> = options.iter().map(|s| s.to_string()).collect();
        let value = options.first().cloned().unwrap_or_default();
        Self {
            id: id.to_string(),
            kind: FieldKind::Select(options),
            value,
        }
    }

    fn reset(&mut self) {
        self.value = match &self.kind {
            FieldKind::Number => String::new(),
            FieldKind::Select(options) => options.first().cloned().unwrap_or_default(),
        };
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictForm {
    fields: Vec<FormField>,
}

impl Default for PredictForm {
    fn default() -> Self {
        Self {
            fields: vec![
                FormField::number("age"),
                FormField::select("fever", &["0", "1"]),
                FormField::select("cough", &["0", "1"]),
                FormField::number("fatigue"),
                FormField::number("breath"),
                FormField::number("preexist"),
            ],
        }
    }
}

impl PredictForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn get(&self, id: &str) -> Result<&str> {
        self.fields
            .iter()
            .find(|f| f.id == id)
            .map(|f| f.value.as_str())
            .ok_or_else(|| TriageError::UnknownField(id.to_string()))
    }

    /// Store raw text. Select fields accept any text, as a hand-edited form would.
    pub fn set(&mut self, id: &str, value: impl Into<String>) -> Result<()> {
        let field = self
            .fields
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| TriageError::UnknownField(id.to_string()))?;
        field.value = value.into();
        Ok(())
    }

    /// Coerce every field; missing or unparseable text reads as 0.
    pub fn to_input(&self) -> SymptomInput {
        let num = |id: &str| self.get(id).map(coerce).unwrap_or(0.0);
        SymptomInput {
            age: num("age"),
            fever: num("fever"),
            cough: num("cough"),
            fatigue: num("fatigue"),
            breath: num("breath"),
            preexist: num("preexist"),
        }
    }

    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
    }
}

/// Text to number, defaulting to 0 for blank, malformed or non-finite input.
pub fn coerce(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        Ok(v) => {
            log::warn!("non-finite value '{text}' ({v}) coerced to 0");
            0.0
        }
        Err(_) => {
            if !text.trim().is_empty() {
                log::warn!("unparseable value '{text}' coerced to 0");
            }
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_defaults_to_zero() {
        assert_eq!(coerce(""), 0.0);
        assert_eq!(coerce("   "), 0.0);
        assert_eq!(coerce("abc"), 0.0);
        assert_eq!(coerce("inf"), 0.0);
        assert_eq!(coerce("NaN"), 0.0);
    }

    #[test]
    fn coerce_trims_and_parses() {
        assert_eq!(coerce(" 61 "), 61.0);
        assert_eq!(coerce("2.5"), 2.5);
        assert_eq!(coerce("-1"), -1.0);
        assert_eq!(coerce("1e1"), 10.0);
    }

    #[test]
    fn fresh_form_reads_as_all_zero() {
        let form = PredictForm::new();
        assert_eq!(form.to_input(), SymptomInput::default());
    }

    #[test]
    fn unknown_field_is_an_error() {
        let mut form = PredictForm::new();
        assert!(matches!(
            form.set("weight", "80"),
            Err(TriageError::UnknownField(id)) if id == "weight"
        ));
        assert!(form.get("weight").is_err());
    }

    #[test]
    fn reset_clears_numbers_and_rewinds_selects() {
        let mut form = PredictForm::new();
        for (id, v) in FIELD_IDS.iter().zip(["70", "1", "1", "4", "2", "1.5"]) {
            form.set(id, v).unwrap();
        }
        form.reset();
        assert_eq!(form.get("age").unwrap(), "");
        assert_eq!(form.get("fever").unwrap(), "0");
        assert_eq!(form.get("cough").unwrap(), "0");
        assert_eq!(form.get("preexist").unwrap(), "");
    }

    #[test]
    fn field_order_matches_ids() {
        let form = PredictForm::new();
        let ids: Vec<&str> = form.fields().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, FIELD_IDS.to_vec());
    }
}
