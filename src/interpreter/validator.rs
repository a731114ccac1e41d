use crate::token::Token;

/// What the validator is waiting for next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    Operand,
    Operator,
}

/// Checks that a token stream matches `operand (operator operand)*`.
///
/// Parentheses do not take part in the alternation, but `(` is only accepted
/// where an operand may start and `)` only where an operand just ended.
/// Whether they balance is left to the postfix conversion.
///
/// # Example
/// ```
/// use bigcalc::interpreter::{lexer::tokenize, validator::is_valid_expression};
///
/// assert!(is_valid_expression(&tokenize("2 + (3 * x)").unwrap()));
/// assert!(is_valid_expression(&tokenize("(1 + 2").unwrap()));
/// assert!(!is_valid_expression(&tokenize("2 +").unwrap()));
/// assert!(!is_valid_expression(&tokenize("2 3").unwrap()));
/// assert!(!is_valid_expression(&[]));
/// ```
#[must_use]
pub fn is_valid_expression(tokens: &[Token]) -> bool {
    let mut expect = Expect::Operand;

    for token in tokens {
        expect = match (expect, token) {
            (Expect::Operand, token) if token.is_operand() => Expect::Operator,
            (Expect::Operand, Token::LParen) => Expect::Operand,
            (Expect::Operator, Token::Operator(_)) => Expect::Operand,
            (Expect::Operator, Token::RParen) => Expect::Operator,
            _ => return false,
        };
    }

    expect == Expect::Operator
}
