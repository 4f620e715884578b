//! Response schemas for the kitchen backend.
//!
//! Each type models exactly the fields the dashboard consumes. Unknown fields
//! are ignored; a missing or mistyped consumed field fails decoding.

use serde::Deserialize;

/// `POST /detect` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetectResponse {
    pub items: Vec<String>,
}

/// `POST /spoilage` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SpoilageResponse {
    pub spoiled: bool,
}

/// `POST /waste` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WasteResponse {
    pub log: Vec<WasteEntry>,
}

/// One waste log row, amount in kilograms.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WasteEntry {
    pub category: String,
    pub amount: f64,
}

/// One point of the `GET /forecast` series.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastPoint {
    /// Date label, passed through as-is.
    pub ds: String,
    /// Predicted quantity.
    pub yhat: f64,
}

impl ForecastPoint {
    /// Predicted quantity rounded for display, halves toward +inf.
    /// Exact for every finite value; never clamped to an integer type.
    pub fn rounded_yhat(&self) -> f64 {
        let floor = self.yhat.floor();
        let rounded = if self.yhat - floor >= 0.5 {
            floor + 1.0
        } else {
            floor
        };
        // Normalise -0.0 so it prints as "0"
        rounded + 0.0
    }
}
