//! CLI wrapper around the conversion engine
//!
//! Usage: unit-converter <category> <from> <to> <value>
//! Categories by name or index (length/weight/temperature), units by symbol,
//! name, or selector index. Prints the formatted result, or the fixed
//! invalid-input message with a non-zero exit.

use std::env;
use std::process::ExitCode;

use unit_converter::api::commands::convert_units;
use unit_converter::core::units::{category_from_str, unit_index, Category};
use unit_converter::shared::error::MSG_INPUT_NOT_VALID;
use unit_converter::shared::types::ConvertUnitsRequest;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() != 4 {
        eprintln!("Usage: unit-converter <category> <from> <to> <value>");
        eprintln!("Example: unit-converter temperature C F 100");
        return ExitCode::FAILURE;
    }

    let Some(category) = category_from_str(&args[0]) else {
        eprintln!("Unknown category: {}", args[0]);
        return ExitCode::FAILURE;
    };

    let (Some(source_unit), Some(destination_unit)) =
        (resolve_unit(category, &args[1]), resolve_unit(category, &args[2]))
    else {
        eprintln!("{}", MSG_INPUT_NOT_VALID);
        return ExitCode::FAILURE;
    };

    let request = ConvertUnitsRequest {
        category,
        source_unit,
        destination_unit,
        value: args[3].clone(),
    };

    match convert_units(request) {
        Ok(response) => {
            println!("{} {}", response.formatted_result, response.to_unit);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::debug!("conversion failed: {}", err);
            eprintln!("{}", MSG_INPUT_NOT_VALID);
            ExitCode::FAILURE
        }
    }
}

// Accept a unit symbol/name, or a bare selector index
fn resolve_unit(category: Category, text: &str) -> Option<usize> {
    unit_index(category, text).or_else(|| {
        text.parse::<usize>()
            .ok()
            .filter(|&index| index < category.unit_count())
    })
}
