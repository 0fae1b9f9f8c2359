//! Drip table schema module.
//!
//! Component options and column definitions arrive as arbitrary JSON. This crate describes the
//! expected shape of such values with static, const-constructible schema types and verifies JSON
//! data against them, collecting every offending property together with its path.

mod const_regex;
pub use const_regex::ConstRegexPattern;

mod schema;
pub use schema::*;

// const_regex! expands to code naming the regex type, but users should not need to depend on
// the regex crate themselves, so we add a hidden re-export here which is semver-exempt!
#[doc(hidden)]
pub mod semver_exempt {
    pub use regex::Regex;
}
