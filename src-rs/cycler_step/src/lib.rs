#![cfg_attr(doc, doc = include_str!("../README.md"))]
//! Battery experiment step descriptors

mod builder;
mod drive_cycle;
mod error;
mod factory;
mod input;
mod kind;
mod step;

pub use builder::StepBuilder;
pub use drive_cycle::{Interpolant, START_TIME_INPUT};
pub use error::StepError;
pub use factory::{c_rate, cccv, current, power, resistance, rest, string, voltage};
pub use input::StepInput;
pub use kind::{StepKind, Termination, TerminationKind};
pub use step::{Step, StepDict, StepValue};

pub use cycler_parser::ParseConfig;
pub use cycler_units::{RawQuantity, RawTimestamp};
