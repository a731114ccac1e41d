use crate::{
    error::ParseError,
    token::{Operator, Token},
};

/// Result type used by the lexer, validator and postfix conversion.
pub type ParseResult<T> = Result<T, ParseError>;

/// An entry of the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StackEntry {
    Operator(Operator),
    LParen,
}

/// Converts an infix token stream into postfix (Reverse Polish) order.
///
/// This is the shunting-yard algorithm. Operands go straight to the output;
/// operators wait on a stack until an operator that does not bind strictly
/// tighter arrives, which makes equal tiers left-associative. `^` follows the
/// same rule, so `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2`.
///
/// The input is expected to have passed
/// [`is_valid_expression`](crate::interpreter::validator::is_valid_expression).
///
/// # Errors
/// Returns `ParseError::InvalidExpression` if the parentheses do not balance.
///
/// # Example
/// ```
/// use bigcalc::interpreter::{lexer::tokenize, parser::to_postfix};
///
/// let postfix = to_postfix(tokenize("(2 + 3) * 4").unwrap()).unwrap();
/// let rendered: Vec<String> = postfix.iter().map(ToString::to_string).collect();
/// assert_eq!(rendered, ["2", "3", "+", "4", "*"]);
///
/// assert!(to_postfix(tokenize("1 + 2)").unwrap()).is_err());
/// ```
pub fn to_postfix(tokens: Vec<Token>) -> ParseResult<Vec<Token>> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<StackEntry> = Vec::new();

    for token in tokens {
        match token {
            Token::Integer(_) | Token::Identifier { .. } => output.push(token),
            Token::LParen => stack.push(StackEntry::LParen),
            Token::RParen => loop {
                match stack.pop() {
                    Some(StackEntry::Operator(op)) => output.push(Token::Operator(op)),
                    Some(StackEntry::LParen) => break,
                    None => return Err(ParseError::InvalidExpression),
                }
            },
            Token::Operator(op) => {
                while let Some(&StackEntry::Operator(top)) = stack.last()
                      && !op.binds_tighter_than(top)
                {
                    output.push(Token::Operator(top));
                    stack.pop();
                }
                stack.push(StackEntry::Operator(op));
            },
        }
    }

    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::Operator(op) => output.push(Token::Operator(op)),
            StackEntry::LParen => return Err(ParseError::InvalidExpression),
        }
    }

    Ok(output)
}
