use std::fmt;

use dashu::integer::IBig;

/// A binary arithmetic operator.
///
/// Operators carry a precedence number where a lower number binds tighter.
/// Operators sharing a number are left-associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, truncating toward zero.
    Div,
    /// `^`
    Pow,
}

impl Operator {
    /// Returns the precedence number of the operator.
    ///
    /// `^` is 2, `*` and `/` are 3, `+` and `-` are 4. Number 1 belongs to the
    /// opening parenthesis, which never competes with operators on the stack.
    ///
    /// # Example
    /// ```
    /// use bigcalc::token::Operator;
    ///
    /// assert!(Operator::Pow.precedence() < Operator::Mul.precedence());
    /// assert_eq!(Operator::Add.precedence(), Operator::Sub.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Pow => 2,
            Self::Mul | Self::Div => 3,
            Self::Add | Self::Sub => 4,
        }
    }

    /// Returns true when `self` binds strictly tighter than `other`.
    #[must_use]
    pub const fn binds_tighter_than(self, other: Self) -> bool {
        self.precedence() < other.precedence()
    }

    /// The character used for the operator in source text.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A classified token of a normalized expression.
///
/// Sign runs have already been collapsed when a `Token` exists. A sign that
/// belonged to an operand is folded into it: literals carry it in their value,
/// identifiers in the `negated` flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An integer literal, such as `42` or `-7`.
    Integer(IBig),
    /// A variable reference, such as `count` or `-count`.
    Identifier {
        /// The variable name, `[a-zA-Z]+`.
        name:    String,
        /// Whether the operand carried a leading `-`.
        negated: bool,
    },
    /// A binary operator.
    Operator(Operator),
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl Token {
    /// Returns true for integer literals and identifiers.
    #[must_use]
    pub const fn is_operand(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Identifier { .. })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Identifier { name, negated } => {
                if *negated {
                    write!(f, "-{name}")
                } else {
                    write!(f, "{name}")
                }
            },
            Self::Operator(op) => write!(f, "{op}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}
