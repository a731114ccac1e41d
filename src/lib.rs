//! # bigcalc
//!
//! bigcalc is an interactive calculator for arbitrary-precision integers.
//! It reads one line at a time and treats it as a command, a variable
//! assignment or an arithmetic expression with `+ - * / ^` and parentheses.
//!
//! Expressions go through a fixed pipeline: the lexer normalizes sign runs,
//! the validator checks the grammar, the parser converts to postfix with the
//! shunting-yard algorithm, and the evaluator computes the result against the
//! session's variable bindings.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use dashu::integer::IBig;

use crate::{error::CalcError, interpreter::bindings::Bindings};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while handling a line:
/// unknown commands, malformed assignments or expressions, unknown variables
/// and arithmetic faults. Every error displays as the exact message printed to
/// the user.
///
/// # Responsibilities
/// - Defines error enums for the parse and evaluation phases.
/// - Combines them into a single error for the session loop.
pub mod error;
/// Orchestrates the handling of input lines.
///
/// This module ties together lexing, validation, postfix conversion,
/// evaluation, variable bindings and commands to provide the complete
/// calculator session.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Provides entry points for handling single lines or whole sessions.
pub mod interpreter;
/// Token definitions shared by the lexer, parser and evaluator.
///
/// Declares the `Token` enum for classified, sign-normalized tokens and the
/// `Operator` enum with its precedence table.
pub mod token;
/// General utilities for checked numeric conversion.
pub mod util;

pub use interpreter::session::{handle_line, run};

/// Evaluates a single expression against the given bindings.
///
/// This is a shortcut for the expression path of a session; commands and
/// assignments are not accepted here.
///
/// # Errors
/// Returns an error if the expression is malformed or cannot be evaluated.
///
/// # Examples
/// ```
/// use bigcalc::{get_result, interpreter::bindings::Bindings};
/// use dashu::integer::IBig;
///
/// let bindings = Bindings::new();
/// assert_eq!(get_result("2 + 3 * 4", &bindings).unwrap(), IBig::from(14));
///
/// // 'x' is not defined
/// assert!(get_result("x + 1", &bindings).is_err());
/// ```
pub fn get_result(source: &str, bindings: &Bindings) -> Result<IBig, CalcError> {
    interpreter::session::evaluate_expression(source, bindings)
}
