//! Token parsers for experiment instructions.
//!
//! - `keyword`: the clause keywords (`at`, `for`, `until`, `or`, `period`)
//!   and the bare words actions are read from
//! - `literal`: quantities such as `1 A`, `0.5 hours` or `C/2`
//! - `symbol`: the parentheses around a period clause
//!
//! All token parsers consume trailing whitespace after the matched content.

use super::util::{InputSpan, Parser, Result};

pub mod error;
mod util;
pub use util::inline_whitespace;

pub mod keyword;
pub mod literal;
pub mod symbol;
