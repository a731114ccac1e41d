use thiserror::Error;

/// Parsing errors.
///
/// Defines all error types that can occur while classifying and parsing a
/// line: unknown commands, malformed assignments and expressions that do not
/// match the grammar or have unbalanced parentheses.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a postfix
/// sequence, such as unknown variables, division by zero or an exponent that
/// cannot be used.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while handling a single input line.
///
/// The session loop catches this error, prints its message and continues with
/// the next line. Both phases convert into it with `?`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    /// The line could not be classified or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The line parsed but could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
