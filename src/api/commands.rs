//! Conversion commands
//!
//! The one logical call a presentation layer makes: three selectors plus a
//! raw value in, a numeric result with a display string out. Parse failures,
//! non-finite values, and unknown selectors all come back as the single
//! invalid-input error rather than a panic.

use log::debug;

use crate::core::converter::convert;
use crate::core::units::{
    length_units, unit_symbol, weight_units, Category, TemperatureUnit, UnitDef,
};
use crate::shared::error::{ConvertError, ConvertResult};
use crate::shared::types::{ConvertUnitsRequest, ConvertUnitsResponse, GetUnitsResponse, UnitDto};

/// Convert the raw value in `request` between its two selected units
pub fn convert_units(request: ConvertUnitsRequest) -> ConvertResult<ConvertUnitsResponse> {
    let value = parse_value(&request.value)?;
    let result = convert(
        request.category,
        request.source_unit,
        request.destination_unit,
        value,
    )?;

    // The engine validated both selectors, so the symbol lookups hold
    let from_unit = unit_symbol(request.category, request.source_unit)
        .ok_or_else(|| ConvertError::InvalidInput("unknown source unit".to_string()))?;
    let to_unit = unit_symbol(request.category, request.destination_unit)
        .ok_or_else(|| ConvertError::InvalidInput("unknown destination unit".to_string()))?;

    let formatted_result = format_number(result);
    debug!(
        "[convert_units] {} {} -> {} {} ({})",
        value, from_unit, result, to_unit, formatted_result
    );

    Ok(ConvertUnitsResponse {
        result,
        formatted_result,
        category: request.category,
        from_unit: from_unit.to_string(),
        to_unit: to_unit.to_string(),
    })
}

/// All declared units across all categories, in category then selector order
pub fn get_all_units() -> GetUnitsResponse {
    let units = Category::ALL
        .iter()
        .flat_map(|&category| get_units_for_category(category))
        .collect();
    GetUnitsResponse { units }
}

/// Units of one category, in selector order
pub fn get_units_for_category(category: Category) -> Vec<UnitDto> {
    match category {
        Category::Length => dtos_from_table(category, length_units()),
        Category::Weight => dtos_from_table(category, weight_units()),
        Category::Temperature => TemperatureUnit::ALL
            .iter()
            .enumerate()
            .map(|(index, unit)| UnitDto {
                index,
                symbol: unit.symbol().to_string(),
                label: unit.name().to_string(),
                category,
            })
            .collect(),
    }
}

fn dtos_from_table(category: Category, table: &[UnitDef]) -> Vec<UnitDto> {
    table
        .iter()
        .map(|def| UnitDto {
            index: def.index,
            symbol: def.symbol.to_string(),
            label: def.name.to_string(),
            category,
        })
        .collect()
}

/// Parse a raw text value into a finite f64
///
/// Comma decimal separators are normalized to dots before parsing.
pub fn parse_value(text: &str) -> ConvertResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ConvertError::InvalidInput("empty value".to_string()));
    }

    let normalized = trimmed.replace(',', ".");
    let value: f64 = normalized
        .parse()
        .map_err(|_| ConvertError::InvalidInput(format!("not a number: {}", trimmed)))?;

    if !value.is_finite() {
        return Err(ConvertError::InvalidInput(format!(
            "value is not finite: {}",
            trimmed
        )));
    }
    Ok(value)
}

/// Format a conversion result for display
///
/// Up to 4 decimal places, trailing zeros stripped, thousands separators in
/// the integer part. Examples: 130000.0 -> "130,000", 0.39370 -> "0.3937".
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "∞".to_string()
        } else {
            "-∞".to_string()
        };
    }

    let mut formatted = format!("{:.4}", value);
    while formatted.ends_with('0') {
        formatted.pop();
    }
    if formatted.ends_with('.') {
        formatted.pop();
    }
    if formatted == "-0" {
        formatted = "0".to_string();
    }

    let (sign, rest) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match rest.split_once('.') {
        Some((integer, decimal)) => (integer, Some(decimal)),
        None => (rest, None),
    };

    let grouped = add_thousands_separators(integer_part);
    match decimal_part {
        Some(decimal) => format!("{}{}.{}", sign, grouped, decimal),
        None => format!("{}{}", sign, grouped),
    }
}

// Group digits in threes from the right
fn add_thousands_separators(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(parse_value("12.5").unwrap(), 12.5);
        assert_eq!(parse_value(" -3 ").unwrap(), -3.0);
    }

    #[test]
    fn test_parse_comma_decimal_separator() {
        assert_eq!(parse_value("12,5").unwrap(), 12.5);
    }

    #[test]
    fn test_parse_rejects_text() {
        assert!(parse_value("abc").is_err());
        assert!(parse_value("").is_err());
        assert!(parse_value("12abc").is_err());
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        // 1e400 overflows f64 to infinity
        assert!(parse_value("1e400").is_err());
        assert!(parse_value("NaN").is_err());
        assert!(parse_value("inf").is_err());
    }

    #[test]
    fn test_format_strips_trailing_zeros() {
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(32.0), "32");
        assert_eq!(format_number(0.39370078), "0.3937");
    }

    #[test]
    fn test_format_thousands_separators() {
        assert_eq!(format_number(130000.0), "130,000");
        assert_eq!(format_number(1609340.0), "1,609,340");
        assert_eq!(format_number(-1234.5), "-1,234.5");
        assert_eq!(format_number(999.0), "999");
    }

    #[test]
    fn test_format_tiny_negative_rounds_to_zero() {
        assert_eq!(format_number(-0.00001), "0");
    }

    #[test]
    fn test_convert_units_happy_path() {
        let response = convert_units(ConvertUnitsRequest {
            category: Category::Temperature,
            source_unit: 0,
            destination_unit: 1,
            value: "0".to_string(),
        })
        .unwrap();
        assert_eq!(response.result, 32.0);
        assert_eq!(response.formatted_result, "32");
        assert_eq!(response.from_unit, "C");
        assert_eq!(response.to_unit, "F");
    }

    #[test]
    fn test_convert_units_invalid_text_yields_error() {
        let result = convert_units(ConvertUnitsRequest {
            category: Category::Length,
            source_unit: 0,
            destination_unit: 1,
            value: "abc".to_string(),
        });
        assert!(matches!(result, Err(ConvertError::InvalidInput(_))));
    }

    #[test]
    fn test_convert_units_out_of_range_selector_yields_error() {
        let result = convert_units(ConvertUnitsRequest {
            category: Category::Length,
            source_unit: 99,
            destination_unit: 1,
            value: "1".to_string(),
        });
        assert!(matches!(result, Err(ConvertError::InvalidInput(_))));
    }

    #[test]
    fn test_get_all_units_counts() {
        let response = get_all_units();
        // 5 length + 4 weight + 3 temperature
        assert_eq!(response.units.len(), 12);
    }

    #[test]
    fn test_get_units_for_category_selector_order() {
        let units = get_units_for_category(Category::Weight);
        let symbols: Vec<&str> = units.iter().map(|u| u.symbol.as_str()).collect();
        assert_eq!(symbols, ["kg", "lb", "oz", "ton"]);
        for (position, unit) in units.iter().enumerate() {
            assert_eq!(unit.index, position);
        }
    }
}
