//! Boundary payloads
//!
//! Request/response types for the conversion call boundary. The raw value in
//! `ConvertUnitsRequest` accepts either a JSON number or a string, since
//! presentation layers usually hold the typed-in text; it is parsed into a
//! finite f64 at the boundary, not here.

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::units::Category;

/// Request payload for a unit conversion
#[derive(Debug, Clone, Serialize)]
pub struct ConvertUnitsRequest {
    pub category: Category,
    pub source_unit: usize,
    pub destination_unit: usize,
    /// Raw value as typed by the user; parsed at the call boundary
    pub value: String,
}

/// Response payload for a unit conversion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertUnitsResponse {
    pub result: f64,
    pub formatted_result: String,
    pub category: Category,
    pub from_unit: String,
    pub to_unit: String,
}

/// Unit metadata for presentation layers to populate their selectors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitDto {
    /// Position in the category's declared unit list
    pub index: usize,
    pub symbol: String,
    pub label: String,
    pub category: Category,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUnitsResponse {
    pub units: Vec<UnitDto>,
}

// ---- Serde helpers ----

impl<'de> Deserialize<'de> for ConvertUnitsRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum NumOrString {
            Num(f64),
            Str(String),
        }

        #[derive(Deserialize)]
        struct Raw {
            category: Category,
            source_unit: usize,
            destination_unit: usize,
            value: NumOrString,
        }

        let raw = Raw::deserialize(deserializer)?;
        let value = match raw.value {
            NumOrString::Num(n) => n.to_string(),
            NumOrString::Str(s) => s,
        };
        Ok(Self {
            category: raw.category,
            source_unit: raw.source_unit,
            destination_unit: raw.destination_unit,
            value,
        })
    }
}
