use thiserror::Error;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Tried to use a variable that was never assigned.
    #[error("Unknown variable")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Attempted division by zero.
    #[error("Division by zero")]
    DivisionByZero,
    /// The right operand of `^` was negative.
    #[error("Negative exponent")]
    NegativeExponent,
    /// The right operand of `^` does not fit in a `u32`.
    #[error("Exponent is too large")]
    ExponentTooLarge,
    /// The result of `^` would exceed
    /// [`MAX_RESULT_BITS`](crate::util::num::MAX_RESULT_BITS).
    #[error("Result is too large")]
    Overflow,
    /// The postfix sequence left the operand stack empty or with more than
    /// one value.
    #[error("Invalid expression")]
    MalformedPostfix,
}
