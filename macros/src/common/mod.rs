// Common utilities shared between the user-facing macros
//
// This module contains:
// - parse_utils: capability names and capability list parsing
// - cap_set: capability list validation and impl generation

mod cap_set;
mod parse_utils;

pub use cap_set::*;
pub use parse_utils::*;
