use dashu::integer::IBig;

use crate::{
    error::RuntimeError,
    interpreter::bindings::Bindings,
    token::{Operator, Token},
    util::num::{check_power_size, exponent_to_u32_checked, u32_to_usize_checked},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a postfix token sequence against a set of bindings.
///
/// Operands are pushed onto a stack; each operator pops `x` (the most recent
/// value) and then `y`, and pushes `y op x`. Exactly one value must remain at
/// the end.
///
/// # Errors
/// - `RuntimeError::UnknownVariable` for an identifier with no binding.
/// - `RuntimeError::DivisionByZero`, `RuntimeError::NegativeExponent` and
///   `RuntimeError::ExponentTooLarge` from [`apply`].
/// - `RuntimeError::MalformedPostfix` if the sequence underflows the stack or
///   leaves more than one value.
///
/// # Example
/// ```
/// use bigcalc::interpreter::{
///     bindings::Bindings, evaluator::evaluate, lexer::tokenize, parser::to_postfix,
/// };
/// use dashu::integer::IBig;
///
/// let mut bindings = Bindings::new();
/// bindings.set("n", IBig::from(4));
///
/// let postfix = to_postfix(tokenize("8 - 3 - n").unwrap()).unwrap();
/// assert_eq!(evaluate(&postfix, &bindings).unwrap(), IBig::from(1));
/// ```
pub fn evaluate(postfix: &[Token], bindings: &Bindings) -> EvalResult<IBig> {
    let mut stack: Vec<IBig> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match token {
            Token::Operator(op) => {
                let x = stack.pop().ok_or(RuntimeError::MalformedPostfix)?;
                let y = stack.pop().ok_or(RuntimeError::MalformedPostfix)?;
                let result = apply(*op, y, x)?;
                log::trace!("{op}: pushing {result}");
                stack.push(result);
            },
            Token::Integer(_) | Token::Identifier { .. } => {
                let value = resolve(token, bindings)?;
                log::trace!("operand {token}: pushing {value}");
                stack.push(value);
            },
            Token::LParen | Token::RParen => return Err(RuntimeError::MalformedPostfix),
        }
    }

    match (stack.pop(), stack.is_empty()) {
        (Some(result), true) => Ok(result),
        _ => Err(RuntimeError::MalformedPostfix),
    }
}

/// Resolves an operand token to its value.
///
/// Literals evaluate to themselves; identifiers are looked up in `bindings`
/// and negated if the operand carried a `-`.
///
/// # Errors
/// Returns `RuntimeError::UnknownVariable` if an identifier is unbound, and
/// `RuntimeError::MalformedPostfix` if `token` is not an operand.
pub fn resolve(token: &Token, bindings: &Bindings) -> EvalResult<IBig> {
    match token {
        Token::Integer(value) => Ok(value.clone()),
        Token::Identifier { name, negated } => {
            let value = bindings.get(name)
                                .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone() })?;
            Ok(if *negated { -value.clone() } else { value.clone() })
        },
        Token::Operator(_) | Token::LParen | Token::RParen => Err(RuntimeError::MalformedPostfix),
    }
}

/// Applies a binary operator to two values, `left op right`.
///
/// `+`, `-` and `*` are exact. `/` truncates toward zero. `^` needs a
/// non-negative exponent that fits in a `u32` and a result no larger than
/// [`MAX_RESULT_BITS`](crate::util::num::MAX_RESULT_BITS).
///
/// # Errors
/// - `RuntimeError::DivisionByZero` if `right` is zero for `/`.
/// - `RuntimeError::NegativeExponent` or `RuntimeError::ExponentTooLarge` for
///   an unusable exponent.
/// - `RuntimeError::Overflow` if the power would be too large to compute.
///
/// # Example
/// ```
/// use bigcalc::{error::RuntimeError, interpreter::evaluator::apply, token::Operator};
/// use dashu::integer::IBig;
///
/// assert_eq!(apply(Operator::Div, IBig::from(-7), IBig::from(2)).unwrap(), IBig::from(-3));
/// assert_eq!(apply(Operator::Pow, IBig::from(2), IBig::from(10)).unwrap(),
///            IBig::from(1024));
/// assert_eq!(apply(Operator::Div, IBig::from(1), IBig::from(0)).unwrap_err(),
///            RuntimeError::DivisionByZero);
/// ```
pub fn apply(op: Operator, left: IBig, right: IBig) -> EvalResult<IBig> {
    match op {
        Operator::Add => Ok(left + right),
        Operator::Sub => Ok(left - right),
        Operator::Mul => Ok(left * right),
        Operator::Div => {
            if right == IBig::ZERO {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok(left / right)
        },
        Operator::Pow => {
            let exponent = exponent_to_u32_checked(&right)?;
            check_power_size(&left, exponent)?;
            Ok(left.pow(u32_to_usize_checked(exponent)?))
        },
    }
}
