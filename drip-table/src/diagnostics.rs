//! Side channel for advisory messages produced while resolving a schema.
//!
//! Nothing reported here ever stops a resolution pass. Callers decide whether diagnostics end up
//! in the log ([`LogSink`]) or are collected for inspection (`Vec<Diagnostic>`).

use std::fmt;

/// Prefix used when forwarding diagnostics to the log.
pub const LOG_PREFIX: &str = "[DripTable]";

/// A single advisory message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// A column still uses a legacy field.
    Deprecated {
        column: String,
        field: &'static str,
        replacement: &'static str,
    },
    /// A column failed validation and was replaced by its error display fallback.
    InvalidColumn { column: String, message: String },
    /// A column key appears more than once within one table.
    DuplicateKey { key: String, path: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Diagnostic::Deprecated {
                column,
                field,
                replacement,
            } => write!(
                f,
                "Column {column} \"{field}\" is deprecated, please use \"{replacement}\" instead."
            ),
            Diagnostic::InvalidColumn { column, message } => {
                write!(f, "Column {column} is invalid and rendered as error: {message}")
            }
            Diagnostic::DuplicateKey { key, path } => {
                write!(f, "Column key '{key}' at {path} is not unique.")
            }
        }
    }
}

/// Receiver for [`Diagnostic`]s.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Forwards every diagnostic to `log::warn!`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        log::warn!("{LOG_PREFIX} {diagnostic}");
    }
}
