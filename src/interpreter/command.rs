use std::{fmt, str::FromStr};

use crate::error::ParseError;

/// The text printed by `/help`.
pub const HELP_TEXT: &str = "The program evaluates integer expressions with + - * / ^ and \
                             parentheses, stores variables with `name = value`, and quits on \
                             /exit";

/// The text printed by `/exit` before the session ends.
pub const EXIT_TEXT: &str = "Bye!";

/// A recognized session command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `/help`
    Help,
    /// `/exit`
    Exit,
}

impl Command {
    /// The text printed in response to the command.
    #[must_use]
    pub const fn reply(self) -> &'static str {
        match self {
            Self::Help => HELP_TEXT,
            Self::Exit => EXIT_TEXT,
        }
    }

    /// Returns true if the session ends after this command.
    #[must_use]
    pub const fn terminates(self) -> bool {
        matches!(self, Self::Exit)
    }
}

impl FromStr for Command {
    type Err = ParseError;

    /// Parses a command line, including its leading `/`.
    ///
    /// # Example
    /// ```
    /// use bigcalc::{error::ParseError, interpreter::command::Command};
    ///
    /// assert_eq!("/exit".parse::<Command>(), Ok(Command::Exit));
    /// assert!(matches!("/foo".parse::<Command>(),
    ///                  Err(ParseError::UnknownCommand { .. })));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "/help" => Ok(Self::Help),
            "/exit" => Ok(Self::Exit),
            _ => Err(ParseError::UnknownCommand { command: s.to_string() }),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Help => write!(f, "/help"),
            Self::Exit => write!(f, "/exit"),
        }
    }
}
