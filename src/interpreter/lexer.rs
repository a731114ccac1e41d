use std::iter::Peekable;

use dashu::integer::IBig;
use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::parser::ParseResult,
    token::{Operator, Token},
};

/// A raw lexical unit of an input line, before sign runs are resolved.
///
/// Whitespace separates lexemes but is otherwise discarded.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"\s+")]
pub enum Lexeme {
    /// Identifier lexemes; variable names such as `x` or `total`.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Unsigned integer literal lexemes, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(IBig),
    /// A run of `+` and `-` characters, already resolved to one sign.
    #[regex(r"[+-]+", parse_sign_run)]
    Signs(Sign),
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// The sign a run of `+` and `-` collapses to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// An even number of `-` in the run.
    Plus,
    /// An odd number of `-` in the run.
    Minus,
}

impl Sign {
    /// Resolves a run of sign characters by the parity of its minuses.
    ///
    /// # Example
    /// ```
    /// use bigcalc::interpreter::lexer::Sign;
    ///
    /// assert_eq!(Sign::from_run("--"), Sign::Plus);
    /// assert_eq!(Sign::from_run("+-"), Sign::Minus);
    /// assert_eq!(Sign::from_run("+-+--"), Sign::Minus);
    /// ```
    #[must_use]
    pub fn from_run(run: &str) -> Self {
        let minuses = run.chars().filter(|&c| c == '-').count();
        if minuses % 2 == 1 { Self::Minus } else { Self::Plus }
    }

    /// Combines two adjacent signs into one.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        match (self, other) {
            (Self::Plus, Self::Plus) | (Self::Minus, Self::Minus) => Self::Plus,
            _ => Self::Minus,
        }
    }

    const fn as_operator(self) -> Operator {
        match self {
            Self::Plus => Operator::Add,
            Self::Minus => Operator::Sub,
        }
    }
}

fn parse_integer(lex: &logos::Lexer<Lexeme>) -> Option<IBig> {
    lex.slice().parse().ok()
}

fn parse_sign_run(lex: &logos::Lexer<Lexeme>) -> Sign {
    Sign::from_run(lex.slice())
}

/// Splits a line into lexemes, merging sign runs that whitespace interrupted.
///
/// `5 - -2` yields the same lexemes as `5--2`: `5`, `+`, `2`.
///
/// # Errors
/// Returns `ParseError::InvalidExpression` for any character that starts no
/// lexeme.
pub fn lex(line: &str) -> ParseResult<Vec<Lexeme>> {
    let mut lexemes: Vec<Lexeme> = Vec::new();

    for lexeme in Lexeme::lexer(line) {
        let lexeme = lexeme.map_err(|()| ParseError::InvalidExpression)?;
        if let Lexeme::Signs(sign) = lexeme
           && let Some(Lexeme::Signs(previous)) = lexemes.last_mut()
        {
            *previous = previous.merge(sign);
        } else {
            lexemes.push(lexeme);
        }
    }

    Ok(lexemes)
}

/// Lexes a line and classifies every lexeme into a [`Token`].
///
/// A collapsed sign becomes part of the following operand when it stands in
/// operand position: at the start of the line, after an operator or after `(`.
/// Anywhere else it is a binary `+` or `-`.
///
/// # Errors
/// Returns `ParseError::InvalidExpression` if the line contains characters
/// outside the expression alphabet.
///
/// # Example
/// ```
/// use bigcalc::{
///     interpreter::lexer::tokenize,
///     token::{Operator, Token},
/// };
/// use dashu::integer::IBig;
///
/// let tokens = tokenize("2 * -3").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Integer(IBig::from(2)),
///                 Token::Operator(Operator::Mul),
///                 Token::Integer(IBig::from(-3))]);
/// ```
pub fn tokenize(line: &str) -> ParseResult<Vec<Token>> {
    let lexemes = lex(line)?;
    let mut tokens: Vec<Token> = Vec::with_capacity(lexemes.len());
    let mut iter = lexemes.into_iter().peekable();

    while let Some(lexeme) = iter.next() {
        let token = match lexeme {
            Lexeme::Identifier(name) => Token::Identifier { name, negated: false },
            Lexeme::Integer(value) => Token::Integer(value),
            Lexeme::Signs(sign) => {
                if expects_operand(tokens.last())
                   && let Some(operand) = take_signed_operand(sign, &mut iter)
                {
                    operand
                } else {
                    Token::Operator(sign.as_operator())
                }
            },
            Lexeme::Star => Token::Operator(Operator::Mul),
            Lexeme::Slash => Token::Operator(Operator::Div),
            Lexeme::Caret => Token::Operator(Operator::Pow),
            Lexeme::LParen => Token::LParen,
            Lexeme::RParen => Token::RParen,
        };
        tokens.push(token);
    }

    Ok(tokens)
}

/// Renders the normalized form of a line: no whitespace, one sign per run.
///
/// # Errors
/// Fails like [`tokenize`].
///
/// # Example
/// ```
/// use bigcalc::interpreter::lexer::normalize;
///
/// assert_eq!(normalize("5 - -2").unwrap(), "5+2");
/// assert_eq!(normalize("3 +-+-- x").unwrap(), "3-x");
/// assert_eq!(normalize("(--4) * b").unwrap(), "(4)*b");
/// ```
pub fn normalize(line: &str) -> ParseResult<String> {
    Ok(tokenize(line)?.iter().map(ToString::to_string).collect())
}

/// Parses the right-hand side of an assignment: one operand with at most one
/// leading sign and no embedded whitespace.
///
/// Returns `None` if `text` is anything else.
///
/// # Example
/// ```
/// use bigcalc::{interpreter::lexer::parse_operand, token::Token};
/// use dashu::integer::IBig;
///
/// assert_eq!(parse_operand("-12"), Some(Token::Integer(IBig::from(-12))));
/// assert!(parse_operand("--12").is_none());
/// assert!(parse_operand("1 2").is_none());
/// assert!(parse_operand("a1").is_none());
/// ```
#[must_use]
pub fn parse_operand(text: &str) -> Option<Token> {
    let (sign, body) = match text.strip_prefix('-') {
        Some(rest) => (Sign::Minus, rest),
        None => (Sign::Plus, text.strip_prefix('+').unwrap_or(text)),
    };
    if body.is_empty() || body.chars().any(char::is_whitespace) {
        return None;
    }

    let mut lexer = Lexeme::lexer(body);
    let lexeme = lexer.next()?.ok()?;
    if lexer.next().is_some() {
        return None;
    }

    let mut iter = std::iter::once(lexeme).peekable();
    take_signed_operand(sign, &mut iter)
}

/// Returns true if `text` is a valid variable name, `[a-zA-Z]+`.
///
/// # Example
/// ```
/// use bigcalc::interpreter::lexer::is_identifier;
///
/// assert!(is_identifier("abc"));
/// assert!(!is_identifier("a1"));
/// assert!(!is_identifier(""));
/// ```
#[must_use]
pub fn is_identifier(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_alphabetic())
}

const fn expects_operand(previous: Option<&Token>) -> bool {
    matches!(previous, None | Some(Token::Operator(_) | Token::LParen))
}

/// Consumes the next lexeme when it is an operand and applies `sign` to it.
fn take_signed_operand<I>(sign: Sign, iter: &mut Peekable<I>) -> Option<Token>
    where I: Iterator<Item = Lexeme>
{
    let negated = sign == Sign::Minus;
    match iter.next_if(|next| matches!(next, Lexeme::Identifier(_) | Lexeme::Integer(_)))? {
        Lexeme::Identifier(name) => Some(Token::Identifier { name, negated }),
        Lexeme::Integer(value) => Some(Token::Integer(if negated { -value } else { value })),
        _ => None,
    }
}
