#![cfg_attr(doc, doc = include_str!("../README.md"))]
//! Unit conversion for experiment steps

mod catalog;
mod electric;
mod error;
mod quantity;
mod temperature;
mod time;
mod timestamp;

pub use catalog::{EXAMPLE_INSTRUCTIONS, example_catalog};
pub use electric::{ElectricKind, convert_electric};
pub use error::{ConvertError, QuantityKind};
pub use quantity::RawQuantity;
pub use temperature::{CELSIUS_OFFSET, convert_temperature, parse_temperature};
pub use time::{TimeUnit, convert_time, parse_time};
pub use timestamp::{
    DAY_FORMAT_YEAR, RawTimestamp, TimestampFormat, parse_timestamp, parse_timestamp_text,
};
