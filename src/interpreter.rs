/// The lexer module turns a raw line into classified tokens.
///
/// The lexer reads the line with `logos`, discards whitespace, collapses every
/// run of `+` and `-` into a single sign by the parity of its minuses, and
/// decides whether each sign belongs to the following operand or acts as a
/// binary operator.
///
/// # Responsibilities
/// - Recognizes identifiers, integer literals, operators and parentheses.
/// - Normalizes sign runs such as `--5` or `+-5`.
/// - Reports characters outside the expression alphabet.
pub mod lexer;
/// Grammar validation for token streams.
///
/// Decides whether a token stream alternates operands and operators, before
/// any conversion is attempted.
pub mod validator;
/// The parser module reorders tokens into postfix form.
///
/// Implements the shunting-yard conversion with the operator precedence table
/// and detects unbalanced parentheses.
pub mod parser;
/// The evaluator module computes the value of a postfix sequence.
///
/// Evaluates postfix tokens on an operand stack of arbitrary-precision
/// integers, resolving identifiers through the session's bindings.
///
/// # Responsibilities
/// - Resolves literals and variables.
/// - Applies `+ - * / ^` exactly, with truncating division.
/// - Reports unknown variables, division by zero and unusable exponents.
pub mod evaluator;
/// Variable storage.
///
/// Defines the table that maps identifiers to their values for the lifetime
/// of a session.
pub mod bindings;
/// Session commands such as `/help` and `/exit`.
pub mod command;
/// Line classification and the read-eval-print loop.
///
/// Ties the other modules together: each line is classified as a command, an
/// assignment or an expression, handled, and its result or error printed.
pub mod session;
