use thiserror::Error;

/// Represents all errors that can occur while classifying or parsing a line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A line started with `/` but named no known command.
    #[error("Unknown command")]
    UnknownCommand {
        /// The command text as typed, including the leading `/`.
        command: String,
    },
    /// The left side of an assignment is not a purely alphabetic name.
    #[error("Invalid identifier")]
    InvalidIdentifier {
        /// The rejected left-hand side.
        identifier: String,
    },
    /// The right side of an assignment is not a single operand, or the line
    /// holds more than one `=`.
    #[error("Invalid assignment")]
    InvalidAssignment,
    /// The expression does not match the grammar or its parentheses are
    /// unbalanced.
    #[error("Invalid expression")]
    InvalidExpression,
}
