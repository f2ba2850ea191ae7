use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use crate::{
    config::Config,
    error::{Error, ParseError},
    interpreter::variables::VariableStore,
    parse_line,
};

/// One interactive session: a configuration and the variables assigned so
/// far.
///
/// Each input line is handled on its own. A failing line is reported and
/// discarded; the variable store and the loop carry on.
#[derive(Debug)]
pub struct Session {
    config:    Config,
    variables: VariableStore,
}

impl Session {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config,
               variables: VariableStore::new() }
    }

    #[must_use]
    pub const fn variables(&self) -> &VariableStore {
        &self.variables
    }

    /// Evaluates a single line against the session's variables.
    ///
    /// # Errors
    /// Returns the parse or runtime error of the line.
    ///
    /// ## Example
    /// ```
    /// use algebra::{config::Config, repl::Session};
    ///
    /// let mut session = Session::new(Config::default());
    ///
    /// assert_eq!(session.eval("x = 7"), Ok(None));
    /// assert_eq!(session.eval("x + 1"), Ok(Some(8)));
    /// assert!(session.eval("y + 1").is_err());
    /// ```
    pub fn eval(&mut self, line: &str) -> Result<Option<i64>, Error> {
        crate::evaluate_line(line, &mut self.variables)
    }

    /// Reads lines from `input` until EOF or the quit line, writing results
    /// and diagnostics to `output`.
    ///
    /// Values are written as `= <value>`, errors as `error: <message>`, and
    /// assignments produce no output. A line that is not valid UTF-8 is
    /// reported like any other failing line.
    ///
    /// # Errors
    /// Returns an error only if `input` or `output` fails at the I/O level.
    ///
    /// ## Example
    /// ```
    /// use algebra::{config::Config, repl::Session};
    ///
    /// let config = Config { prompt: String::new(),
    ///                       ..Config::default() };
    /// let mut session = Session::new(config);
    /// let mut output = Vec::new();
    ///
    /// session.run("x = 7\nx * 6\nq\n1 + 1\n".as_bytes(), &mut output).unwrap();
    /// assert_eq!(String::from_utf8(output).unwrap(), "= 42\n");
    /// ```
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        let mut buffer = Vec::new();

        loop {
            if !self.config.prompt.is_empty() {
                write!(output, "{}", self.config.prompt)?;
                output.flush()?;
            }

            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                debug!("end of input");
                break;
            }

            let Ok(text) = std::str::from_utf8(&buffer) else {
                let lossy = String::from_utf8_lossy(&buffer);
                Self::report(lossy.trim(), &Error::from(ParseError::InvalidEncoding), &mut output)?;
                continue;
            };

            let line = text.trim();
            if line == self.config.quit {
                info!(variables = self.variables.len(), "session ended by quit line");
                break;
            }
            if line.is_empty() {
                continue;
            }

            self.respond(line, &mut output)?;
        }

        Ok(())
    }

    fn respond<W: Write>(&mut self, line: &str, output: &mut W) -> io::Result<()> {
        let expr = match parse_line(line, &mut self.variables) {
            Ok(expr) if expr.is_assignment() => return Ok(()),
            Ok(expr) => expr,
            Err(e) => return Self::report(line, &e, output),
        };

        if self.config.show_tree {
            writeln!(output, "tree: {expr}")?;
        }

        match expr.evaluate() {
            Ok(value) => writeln!(output, "= {value}"),
            Err(e) => Self::report(line, &Error::from(e), output),
        }
    }

    fn report<W: Write>(line: &str, error: &Error, output: &mut W) -> io::Result<()> {
        warn!(line, kind = ?error.kind(), %error, "line failed");
        writeln!(output, "error: {error}")
    }
}
