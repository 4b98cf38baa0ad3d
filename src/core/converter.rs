//! The conversion engine
//!
//! A pure function of (category, source selector, destination selector,
//! value). Length and weight are ratio-based: normalize to the base unit via
//! the source factor, then divide by the destination factor. Temperature is
//! special-cased with one explicit formula per (source, destination) pair.
//!
//! Out-of-range selectors are a hard error. The original selector logic fell
//! through to a Celsius source and a Kelvin destination for malformed
//! temperature indices; that fallback is deliberately not kept.

use crate::core::units::{length_units, weight_units, Category, TemperatureUnit, UnitDef};
use crate::shared::error::{ConvertError, ConvertResult};

/// Convert `value` from the source unit to the destination unit
///
/// Selectors are positions in the category's declared unit list. Returns
/// `ConvertError::InvalidInput` for non-finite values or unknown selectors;
/// there are no other failure modes.
pub fn convert(
    category: Category,
    source: usize,
    destination: usize,
    value: f64,
) -> ConvertResult<f64> {
    if !value.is_finite() {
        return Err(ConvertError::InvalidInput(format!(
            "value is not finite: {}",
            value
        )));
    }

    match category {
        Category::Length => convert_linear(length_units(), source, destination, value),
        Category::Weight => convert_linear(weight_units(), source, destination, value),
        Category::Temperature => {
            let from = TemperatureUnit::from_index(source).ok_or_else(|| {
                ConvertError::InvalidInput(format!("unknown source unit index: {}", source))
            })?;
            let to = TemperatureUnit::from_index(destination).ok_or_else(|| {
                ConvertError::InvalidInput(format!(
                    "unknown destination unit index: {}",
                    destination
                ))
            })?;
            Ok(convert_temperature(value, from, to))
        }
    }
}

// Ratio-based conversion: multiplying by the source factor normalizes to the
// base unit, dividing by the destination factor lands on the target unit.
fn convert_linear(
    table: &[UnitDef],
    source: usize,
    destination: usize,
    value: f64,
) -> ConvertResult<f64> {
    let from = table.get(source).ok_or_else(|| {
        ConvertError::InvalidInput(format!("unknown source unit index: {}", source))
    })?;
    let to = table.get(destination).ok_or_else(|| {
        ConvertError::InvalidInput(format!("unknown destination unit index: {}", destination))
    })?;
    Ok(value * from.to_base / to.to_base)
}

/// Pairwise temperature rules, one formula per (source, destination) pair
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    use TemperatureUnit::*;
    match (from, to) {
        (Celsius, Celsius) => value,
        (Celsius, Fahrenheit) => value * 1.8 + 32.0,
        (Celsius, Kelvin) => value + 273.15,
        (Fahrenheit, Celsius) => (value - 32.0) / 1.8,
        (Fahrenheit, Fahrenheit) => value,
        (Fahrenheit, Kelvin) => (value + 459.67) * 5.0 / 9.0,
        (Kelvin, Celsius) => value - 273.15,
        (Kelvin, Fahrenheit) => value * 9.0 / 5.0 - 459.67,
        (Kelvin, Kelvin) => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        let scale = a.abs().max(b.abs()).max(1.0);
        (a - b).abs() <= 1e-9 * scale
    }

    #[test]
    fn test_identity_conversion_for_every_unit() {
        for category in Category::ALL {
            for index in 0..category.unit_count() {
                let result = convert(category, index, index, 42.5).unwrap();
                assert!(
                    approx_eq(result, 42.5),
                    "identity failed for {:?} unit {}",
                    category,
                    index
                );
            }
        }
    }

    #[test]
    fn test_meter_to_inch() {
        // factor ratio 1 / 2.54
        let result = convert(Category::Length, 0, 1, 1.0).unwrap();
        assert!((result - 0.3937).abs() < 1e-3, "got {}", result);
    }

    #[test]
    fn test_kilogram_to_pound() {
        let result = convert(Category::Weight, 0, 1, 1.0).unwrap();
        assert!((result - 2.2046).abs() < 1e-3, "got {}", result);
    }

    #[test]
    fn test_mile_to_yard() {
        let result = convert(Category::Length, 4, 3, 1.0).unwrap();
        assert!(approx_eq(result, 160934.0 / 91.44), "got {}", result);
    }

    #[test]
    fn test_celsius_to_fahrenheit_freezing() {
        assert_eq!(convert(Category::Temperature, 0, 1, 0.0).unwrap(), 32.0);
    }

    #[test]
    fn test_fahrenheit_to_celsius_boiling() {
        let result = convert(Category::Temperature, 1, 0, 212.0).unwrap();
        assert!(approx_eq(result, 100.0), "got {}", result);
    }

    #[test]
    fn test_celsius_to_kelvin() {
        assert_eq!(convert(Category::Temperature, 0, 2, 0.0).unwrap(), 273.15);
    }

    #[test]
    fn test_fahrenheit_to_kelvin() {
        let result = convert(Category::Temperature, 1, 2, 32.0).unwrap();
        assert!(approx_eq(result, 273.15), "got {}", result);
    }

    #[test]
    fn test_kelvin_to_fahrenheit() {
        let result = convert(Category::Temperature, 2, 1, 273.15).unwrap();
        assert!(approx_eq(result, 32.0), "got {}", result);
    }

    #[test]
    fn test_temperature_round_trips_all_pairs() {
        for from in 0..3 {
            for to in 0..3 {
                let out = convert(Category::Temperature, from, to, 100.0).unwrap();
                let back = convert(Category::Temperature, to, from, out).unwrap();
                assert!(
                    approx_eq(back, 100.0),
                    "round trip {} -> {} came back as {}",
                    from,
                    to,
                    back
                );
            }
        }
    }

    #[test]
    fn test_linear_round_trips_all_pairs() {
        for category in [Category::Length, Category::Weight] {
            for from in 0..category.unit_count() {
                for to in 0..category.unit_count() {
                    let out = convert(category, from, to, 7.25).unwrap();
                    let back = convert(category, to, from, out).unwrap();
                    assert!(
                        approx_eq(back, 7.25),
                        "{:?} round trip {} -> {} came back as {}",
                        category,
                        from,
                        to,
                        back
                    );
                }
            }
        }
    }

    #[test]
    fn test_nan_is_rejected() {
        assert!(convert(Category::Length, 0, 1, f64::NAN).is_err());
    }

    #[test]
    fn test_infinity_is_rejected() {
        assert!(convert(Category::Weight, 0, 1, f64::INFINITY).is_err());
        assert!(convert(Category::Weight, 0, 1, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_out_of_range_linear_index_is_rejected() {
        assert!(convert(Category::Length, 99, 1, 1.0).is_err());
        assert!(convert(Category::Length, 0, 99, 1.0).is_err());
        assert!(convert(Category::Weight, 4, 0, 1.0).is_err());
    }

    #[test]
    fn test_out_of_range_temperature_index_is_rejected() {
        // No silent Celsius/Kelvin fallback for malformed selectors
        assert!(convert(Category::Temperature, 3, 0, 1.0).is_err());
        assert!(convert(Category::Temperature, 0, 3, 1.0).is_err());
    }

    #[test]
    fn test_negative_values_pass_through_linear() {
        let result = convert(Category::Length, 2, 0, -2.0).unwrap();
        assert!(approx_eq(result, -60.96), "got {}", result);
    }

    #[test]
    fn test_repeated_calls_are_deterministic() {
        let first = convert(Category::Weight, 3, 2, 1.5).unwrap();
        let second = convert(Category::Weight, 3, 2, 1.5).unwrap();
        assert_eq!(first, second);
    }
}
