//! Single-conversion developer commands

use anstream::println;
use cycler_error::{AsCyclerError, CyclerError};
use cycler_units::{
    RawQuantity, convert_electric, convert_temperature, convert_time, parse_timestamp_text,
};
use serde_json::json;

use crate::command::DevCommands;

const ARGUMENT_ORIGIN: &str = "<argument>";

/// Runs a developer command, printing the converted value as JSON.
///
/// # Errors
///
/// Returns the conversion failure, located within the argument text.
pub fn run(command: &DevCommands) -> Result<(), CyclerError> {
    let output = match command {
        DevCommands::ConvertTime { text } => {
            let seconds = convert_time(Some(&RawQuantity::from(text.as_str())))
                .map_err(|error| to_cycler_error(&error, text))?;
            json!({ "seconds": seconds })
        }
        DevCommands::ConvertTemperature { text } => {
            let kelvin = convert_temperature(Some(&RawQuantity::from(text.as_str())))
                .map_err(|error| to_cycler_error(&error, text))?;
            json!({ "kelvin": kelvin })
        }
        DevCommands::ConvertElectric { text } => {
            let (kind, value) =
                convert_electric(text).map_err(|error| to_cycler_error(&error, text))?;
            json!({ "type": kind, "value": value, "unit": kind.symbol() })
        }
        DevCommands::ParseTimestamp { text } => {
            let timestamp =
                parse_timestamp_text(text).map_err(|error| to_cycler_error(&error, text))?;
            json!({ "timestamp": timestamp })
        }
    };

    println!("{output}");
    Ok(())
}

fn to_cycler_error(error: &impl AsCyclerError, text: &str) -> CyclerError {
    CyclerError::from_error_with_source(error, ARGUMENT_ORIGIN, text)
}
