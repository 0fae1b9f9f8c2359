use std::fmt;

/// Helper to represent compile time regular expressions.
///
/// The regex is compiled on first use only.
pub struct ConstRegexPattern {
    /// This is only used for documentation and debugging.
    pub regex_string: &'static str,
    /// Returns the (lazily compiled) regex object.
    pub regex_obj: fn() -> &'static regex::Regex,
}

impl fmt::Debug for ConstRegexPattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.regex_string)
    }
}

impl ConstRegexPattern {
    /// Check whether `value` matches this pattern.
    pub fn is_match(&self, value: &str) -> bool {
        (self.regex_obj)().is_match(value)
    }
}

/// Macro to generate a `ConstRegexPattern`.
///
/// ```
/// use drip_table_schema::const_regex;
///
/// const_regex! {
///     pub LOWERCASE_REGEX = r"^[a-z]+$";
/// }
///
/// assert!(LOWERCASE_REGEX.is_match("text"));
/// assert!(!LOWERCASE_REGEX.is_match("Text"));
/// ```
#[macro_export]
macro_rules! const_regex {
    ($(
        $(#[$attr:meta])*
        $vis:vis $name:ident = $regex:expr;
    )+) => { $(
        $(#[$attr])* $vis const $name: $crate::ConstRegexPattern = {
            fn regex_obj() -> &'static $crate::semver_exempt::Regex {
                static REGEX: ::std::sync::OnceLock<$crate::semver_exempt::Regex> =
                    ::std::sync::OnceLock::new();
                REGEX.get_or_init(|| {
                    $crate::semver_exempt::Regex::new($regex)
                        .unwrap_or_else(|err| panic!("invalid const regex {:?}: {err}", $regex))
                })
            }

            $crate::ConstRegexPattern {
                regex_string: $regex,
                regex_obj,
            }
        };
    )+ };
}
