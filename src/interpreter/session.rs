use std::io::{self, BufRead, Write};

use dashu::integer::IBig;

use crate::{
    error::{CalcError, ParseError},
    interpreter::{
        bindings::Bindings,
        command::Command,
        evaluator::{evaluate, resolve},
        lexer::{is_identifier, normalize, parse_operand, tokenize},
        parser::to_postfix,
        validator::is_valid_expression,
    },
};

/// The kind of an input line, decided by its first characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Nothing but whitespace.
    Empty,
    /// Starts with `/`.
    Command(&'a str),
    /// Contains `=`.
    Assignment(&'a str),
    /// Anything else.
    Expression(&'a str),
}

impl<'a> Line<'a> {
    /// Classifies a line. Surrounding whitespace is ignored.
    ///
    /// # Example
    /// ```
    /// use bigcalc::interpreter::session::Line;
    ///
    /// assert_eq!(Line::classify("   "), Line::Empty);
    /// assert_eq!(Line::classify(" /help "), Line::Command("/help"));
    /// assert_eq!(Line::classify("a = 1"), Line::Assignment("a = 1"));
    /// assert_eq!(Line::classify("a + 1"), Line::Expression("a + 1"));
    /// ```
    #[must_use]
    pub fn classify(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            Self::Empty
        } else if line.starts_with('/') {
            Self::Command(line)
        } else if line.contains('=') {
            Self::Assignment(line)
        } else {
            Self::Expression(line)
        }
    }
}

/// What a successfully handled line asks the session to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Print nothing and continue.
    Silent,
    /// Print the computed value and continue.
    Value(IBig),
    /// Print the command's reply; stop if the command terminates.
    Command(Command),
}

impl Response {
    /// The line to print for this response, if any.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Silent => None,
            Self::Value(value) => Some(value.to_string()),
            Self::Command(command) => Some(command.reply().to_string()),
        }
    }

    /// Returns true if the session ends after this response.
    #[must_use]
    pub const fn terminates(&self) -> bool {
        matches!(self, Self::Command(command) if command.terminates())
    }
}

/// Handles one input line against the session's bindings.
///
/// # Errors
/// Returns the `CalcError` describing why the line was rejected. Bindings are
/// only modified by an assignment that succeeds.
///
/// # Example
/// ```
/// use bigcalc::interpreter::{
///     bindings::Bindings,
///     session::{Response, handle_line},
/// };
/// use dashu::integer::IBig;
///
/// let mut bindings = Bindings::new();
/// assert_eq!(handle_line("x = 5", &mut bindings).unwrap(), Response::Silent);
/// assert_eq!(handle_line("x * 2", &mut bindings).unwrap(), Response::Value(IBig::from(10)));
/// assert!(handle_line("y", &mut bindings).is_err());
/// ```
pub fn handle_line(line: &str, bindings: &mut Bindings) -> Result<Response, CalcError> {
    match Line::classify(line) {
        Line::Empty => Ok(Response::Silent),
        Line::Command(text) => {
            let command: Command = text.parse()?;
            log::debug!("running {command}");
            Ok(Response::Command(command))
        },
        Line::Assignment(text) => {
            assign(text, bindings)?;
            Ok(Response::Silent)
        },
        Line::Expression(text) => Ok(Response::Value(evaluate_expression(text, bindings)?)),
    }
}

/// Performs an assignment `identifier = operand`.
///
/// The left side must be purely alphabetic. The right side must be a single
/// literal or identifier with at most one leading sign; an identifier must
/// already be bound.
///
/// # Errors
/// - `ParseError::InvalidIdentifier` for a bad left side.
/// - `ParseError::InvalidAssignment` for a bad right side or a second `=`.
/// - `RuntimeError::UnknownVariable` for an unbound identifier on the right.
pub fn assign(line: &str, bindings: &mut Bindings) -> Result<(), CalcError> {
    let mut sides = line.split('=');
    let name = sides.next().unwrap_or_default().trim();
    if !is_identifier(name) {
        return Err(ParseError::InvalidIdentifier { identifier: name.to_string() }.into());
    }

    let operand = match (sides.next(), sides.next()) {
        (Some(rhs), None) => parse_operand(rhs.trim()).ok_or(ParseError::InvalidAssignment)?,
        _ => return Err(ParseError::InvalidAssignment.into()),
    };

    let value = resolve(&operand, bindings)?;
    log::debug!("{name} = {value}");
    bindings.set(name, value);
    Ok(())
}

/// Evaluates an arithmetic expression line.
///
/// # Errors
/// - `ParseError::InvalidExpression` if the line does not lex, does not match
///   the grammar or has unbalanced parentheses.
/// - Any `RuntimeError` raised by [`evaluate`].
pub fn evaluate_expression(line: &str, bindings: &Bindings) -> Result<IBig, CalcError> {
    let tokens = tokenize(line)?;
    if !is_valid_expression(&tokens) {
        return Err(ParseError::InvalidExpression.into());
    }
    log::debug!("normalized: {}", normalize(line)?);

    let postfix = to_postfix(tokens)?;
    log::debug!("postfix: {}",
                postfix.iter().map(ToString::to_string).collect::<Vec<_>>().join(" "));

    Ok(evaluate(&postfix, bindings)?)
}

/// Runs the read-eval-print loop until `/exit` or the end of `input`.
///
/// Every handled line prints at most one line to `output`. Failures are
/// printed as their message and the loop moves on to the next line. A line
/// that is not valid UTF-8 is reported as `Invalid expression`.
///
/// # Errors
/// Returns an I/O error if reading `input` or writing `output` fails.
///
/// # Example
/// ```
/// use bigcalc::interpreter::session::run;
///
/// let mut output = Vec::new();
/// run("a = 4\na ^ 2\n/foo\n/exit\n1 + 1\n".as_bytes(), &mut output).unwrap();
/// assert_eq!(String::from_utf8(output).unwrap(), "16\nUnknown command\nBye!\n");
/// ```
pub fn run<R: BufRead, W: Write>(mut input: R, output: &mut W) -> io::Result<()> {
    let mut bindings = Bindings::new();
    let mut handled = 0usize;
    let mut buffer = Vec::new();
    log::info!("session started");

    loop {
        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }
        handled += 1;

        let outcome = decode_line(&buffer).and_then(|line| handle_line(line, &mut bindings));
        match outcome {
            Ok(response) => {
                if let Some(message) = response.message() {
                    writeln!(output, "{message}")?;
                }
                if response.terminates() {
                    output.flush()?;
                    break;
                }
            },
            Err(e) => {
                log::warn!("line {handled} rejected: {e:?}");
                writeln!(output, "{e}")?;
            },
        }
        output.flush()?;
    }

    log::info!("session ended after {handled} lines, {} variables bound", bindings.len());
    Ok(())
}

/// Decodes one raw input line; undecodable bytes make it an invalid expression.
fn decode_line(bytes: &[u8]) -> Result<&str, CalcError> {
    std::str::from_utf8(bytes).map_err(|e| {
                                  log::debug!("undecodable input: {e}");
                                  ParseError::InvalidExpression.into()
                              })
}
