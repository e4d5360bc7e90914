//! Render-ready snapshot of the calculator.

use crate::core::Mode;
use serde::{Deserialize, Serialize};

/// Everything a presentation layer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorView {
    /// Main display text
    pub display: String,
    /// Small line above the display, e.g. `"12 ×"`
    pub expression_preview: String,
    pub mode: Mode,
    /// Completed calculations, oldest first
    pub history: Vec<String>,
}

impl CalculatorView {
    /// Serialize for a UI that consumes JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_serializes_to_json() {
        let view = CalculatorView {
            display: "6.0".to_string(),
            expression_preview: String::new(),
            mode: Mode::EnteringFirstOperand,
            history: vec!["9.0 - 3.0 = 6.0".to_string()],
        };

        let json = view.to_json().unwrap();
        assert!(json.contains("\"display\":\"6.0\""));
        assert!(json.contains("\"mode\":\"EnteringFirstOperand\""));

        let back: CalculatorView = serde_json::from_str(&json).unwrap();
        assert_eq!(back, view);
    }
}
