use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::js_number::{format_number, parse_float_prefix, round_half_up};

/// Cancellation verdict and confidence returned by the prediction service.
///
/// Both fields are kept as raw JSON so that unexpected shapes still render:
/// a missing or non-string `resultado` reads as "will not cancel" and an
/// unreadable `confianza` reads as `NaN`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(default)]
    pub resultado: Option<Value>,
    #[serde(default)]
    pub confianza: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    WillCancel,
    WillNotCancel,
}

impl Verdict {
    pub fn label(self) -> &'static str {
        match self {
            Verdict::WillCancel => "❌ Sí",
            Verdict::WillNotCancel => "✅ No",
        }
    }
}

impl PredictionResult {
    pub fn new(resultado: impl Into<Value>, confianza: impl Into<Value>) -> Self {
        Self {
            resultado: Some(resultado.into()),
            confianza: Some(confianza.into()),
        }
    }

    /// Only the literal "si", in any letter case, means the booking will be
    /// cancelled. Accented "sí" and "yes" do not.
    pub fn verdict(&self) -> Verdict {
        match self.resultado.as_ref().and_then(Value::as_str) {
            Some(text) if text.to_lowercase() == "si" => Verdict::WillCancel,
            _ => Verdict::WillNotCancel,
        }
    }

    /// Confidence as a fraction; `NaN` when the value cannot be read.
    pub fn confidence(&self) -> f64 {
        match &self.confianza {
            Some(Value::Number(number)) => number.as_f64().unwrap_or(f64::NAN),
            Some(Value::String(text)) => parse_float_prefix(text),
            _ => f64::NAN,
        }
    }

    /// Confidence scaled to a whole percentage. Out of range values are kept.
    pub fn confidence_percent(&self) -> f64 {
        round_half_up(self.confidence() * 100.0)
    }

    pub fn confidence_label(&self) -> String {
        format!("{}%", format_number(self.confidence_percent()))
    }
}
