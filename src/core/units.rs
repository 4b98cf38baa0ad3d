//! Unit categories and conversion tables
//!
//! Every unit is declared as a named constant with an explicit index, so the
//! coupling between a selector position and its table entry is visible here
//! rather than implied by list order somewhere else. Tables are validated
//! once at first access: indices must be contiguous from 0, the base unit
//! must sit at index 0 with factor 1.0, and every factor must be positive
//! and finite.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Unit categories for type-safe conversions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Weight,
    Temperature,
}

impl Category {
    /// All categories in selector order
    pub const ALL: [Category; 3] = [Category::Length, Category::Weight, Category::Temperature];

    /// Resolve a positional selector (0=length, 1=weight, 2=temperature)
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
        }
    }

    /// Number of units declared for this category
    pub fn unit_count(self) -> usize {
        match self {
            Category::Length => length_units().len(),
            Category::Weight => weight_units().len(),
            Category::Temperature => TemperatureUnit::ALL.len(),
        }
    }
}

/// Unit definition for the linear (ratio-based) categories
///
/// `to_base` is the multiplicative factor converting one unit of this type
/// to the category's base unit (index 0).
#[derive(Debug, Clone, Copy)]
pub struct UnitDef {
    pub index: usize,
    pub symbol: &'static str,
    pub name: &'static str,
    pub to_base: f64,
}

const LENGTH_UNITS: &[UnitDef] = &[
    UnitDef { index: 0, symbol: "m", name: "Meters", to_base: 1.0 },
    UnitDef { index: 1, symbol: "in", name: "Inches", to_base: 2.54 },
    UnitDef { index: 2, symbol: "ft", name: "Feet", to_base: 30.48 },
    UnitDef { index: 3, symbol: "yd", name: "Yards", to_base: 91.44 },
    UnitDef { index: 4, symbol: "mi", name: "Miles", to_base: 160934.0 },
];

const WEIGHT_UNITS: &[UnitDef] = &[
    UnitDef { index: 0, symbol: "kg", name: "Kilograms", to_base: 1.0 },
    UnitDef { index: 1, symbol: "lb", name: "Pounds", to_base: 0.453592 },
    UnitDef { index: 2, symbol: "oz", name: "Ounces", to_base: 0.0283495 },
    UnitDef { index: 3, symbol: "ton", name: "Tons", to_base: 907.185 },
];

// Validated once at first access. Using panics is safe here since the tables
// are compile-time constants; a violation is a programming error, not input.
static LENGTH_TABLE: Lazy<&'static [UnitDef]> =
    Lazy::new(|| validate_table(Category::Length, LENGTH_UNITS));
static WEIGHT_TABLE: Lazy<&'static [UnitDef]> =
    Lazy::new(|| validate_table(Category::Weight, WEIGHT_UNITS));

fn validate_table(category: Category, table: &'static [UnitDef]) -> &'static [UnitDef] {
    assert!(
        !table.is_empty(),
        "unit table for {} is empty",
        category.as_str()
    );
    for (position, def) in table.iter().enumerate() {
        assert!(
            def.index == position,
            "unit table for {}: '{}' declares index {} but sits at position {}",
            category.as_str(),
            def.symbol,
            def.index,
            position
        );
        assert!(
            def.to_base.is_finite() && def.to_base > 0.0,
            "unit table for {}: '{}' has a non-positive or non-finite factor",
            category.as_str(),
            def.symbol
        );
    }
    assert!(
        table[0].to_base == 1.0,
        "unit table for {}: base unit '{}' must have factor 1.0",
        category.as_str(),
        table[0].symbol
    );
    table
}

pub fn length_units() -> &'static [UnitDef] {
    *LENGTH_TABLE
}

pub fn weight_units() -> &'static [UnitDef] {
    *WEIGHT_TABLE
}

/// Temperature units, identified by the same index convention as the tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    /// All temperature units in selector order (0=C, 1=F, 2=K)
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Fahrenheit => "F",
            TemperatureUnit::Kelvin => "K",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
            TemperatureUnit::Kelvin => "Kelvin",
        }
    }
}

/// Symbol for the unit at `index`, if declared
pub fn unit_symbol(category: Category, index: usize) -> Option<&'static str> {
    match category {
        Category::Length => length_units().get(index).map(|def| def.symbol),
        Category::Weight => weight_units().get(index).map(|def| def.symbol),
        Category::Temperature => TemperatureUnit::from_index(index).map(|unit| unit.symbol()),
    }
}

/// Display name for the unit at `index`, if declared
pub fn unit_name(category: Category, index: usize) -> Option<&'static str> {
    match category {
        Category::Length => length_units().get(index).map(|def| def.name),
        Category::Weight => weight_units().get(index).map(|def| def.name),
        Category::Temperature => TemperatureUnit::from_index(index).map(|unit| unit.name()),
    }
}

// Unit alias mapping so callers (e.g. the CLI) can pass symbols or spelled
// out names instead of bare indices.
pub fn unit_index(category: Category, unit: &str) -> Option<usize> {
    let unit_lower = unit.trim().to_lowercase();
    let resolved = match category {
        Category::Length => match unit_lower.as_str() {
            "m" | "meter" | "meters" | "metre" | "metres" => 0,
            "in" | "inch" | "inches" => 1,
            "ft" | "foot" | "feet" => 2,
            "yd" | "yard" | "yards" => 3,
            "mi" | "mile" | "miles" => 4,
            _ => return None,
        },
        Category::Weight => match unit_lower.as_str() {
            "kg" | "kilogram" | "kilograms" => 0,
            "lb" | "lbs" | "pound" | "pounds" => 1,
            "oz" | "ounce" | "ounces" => 2,
            "ton" | "tons" => 3,
            _ => return None,
        },
        Category::Temperature => match unit_lower.as_str() {
            "c" | "celsius" | "°c" => 0,
            "f" | "fahrenheit" | "°f" => 1,
            "k" | "kelvin" | "°k" => 2,
            _ => return None,
        },
    };
    Some(resolved)
}

/// Resolve a category from its name (case-insensitive) or selector index
pub fn category_from_str(text: &str) -> Option<Category> {
    let lower = text.trim().to_lowercase();
    match lower.as_str() {
        "length" => Some(Category::Length),
        "weight" => Some(Category::Weight),
        "temperature" | "temp" => Some(Category::Temperature),
        _ => lower.parse::<usize>().ok().and_then(Category::from_index),
    }
}
