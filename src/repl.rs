use std::io::{self, BufRead, Write};

use crate::{
    ast::BUILTIN_FUNCTIONS,
    error::{CalcError, SessionError},
    interpreter::{
        converter::to_postfix,
        lexer::{is_identifier, tokenize},
        serializer::tokens_to_line,
        tree::ExprTree,
    },
    repl::{
        command::Command,
        render::render_tree,
        variables::{ANSWER, Variables},
    },
    util::num::format_value,
};

/// Classification of input lines into commands.
pub mod command;
/// Box-drawing display of expression trees for the `tree` command.
pub mod render;
/// The variable table, which doubles as the session's resolver.
pub mod variables;

const BANNER: &str = "Welcome to treecalc. Type 'help' for a list of commands.";
const PROMPT: &str = "> ";

/// What the caller should do after a line has been executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to print.
    Silent,
    /// Print this text on its own line.
    Text(String),
    /// End the session.
    Exit,
}

/// An interactive calculator session.
///
/// The session keeps the tree of the most recent expression so that
/// `prefix`, `postfix` and `tree` can display it, and resolves identifiers
/// through a borrowed [`Variables`] table.
///
/// # Example
/// ```
/// use treecalc::repl::{Reply, Session, variables::Variables};
///
/// let vars = Variables::new();
/// let mut session = Session::new(&vars);
///
/// assert_eq!(session.execute("r = 3").unwrap(), Reply::Text("r -> 3".into()));
/// assert_eq!(session.execute("r^2 + 1").unwrap(), Reply::Text("ans -> 10".into()));
/// assert_eq!(session.execute("postfix").unwrap(), Reply::Text("r 2 ^ 1 +".into()));
/// assert_eq!(vars.get("ans"), Some(10.0));
/// ```
#[derive(Debug)]
pub struct Session<'v> {
    variables: &'v Variables,
    tree:      ExprTree<'v>,
}

impl<'v> Session<'v> {
    /// Creates a session that reads and writes variables in `variables`.
    #[must_use]
    pub fn new(variables: &'v Variables) -> Self {
        Self { variables,
               tree: ExprTree::with_resolver(variables) }
    }

    /// Returns the tree of the most recent expression.
    #[must_use]
    pub const fn tree(&self) -> &ExprTree<'v> {
        &self.tree
    }

    /// Executes one line of input.
    ///
    /// # Errors
    /// Returns a [`SessionError`] for malformed commands and for any failure
    /// of the expression pipeline. The session stays usable afterwards.
    pub fn execute(&mut self, line: &str) -> Result<Reply, SessionError> {
        match Command::parse(line) {
            Command::Blank => Ok(Reply::Silent),
            Command::Exit => Ok(Reply::Exit),
            Command::Help => Ok(Reply::Text(help_text())),
            Command::Prefix => Ok(Reply::Text(tokens_to_line(&self.tree.to_prefix()))),
            Command::Postfix => Ok(Reply::Text(tokens_to_line(&self.tree.to_postfix()))),
            Command::Tree => Ok(Reply::Text(render_tree(&self.tree))),
            Command::ShowAll => {
                let lines: Vec<String> =
                    self.variables
                        .names()
                        .into_iter()
                        .filter_map(|name| self.variables.get(&name).map(|value| binding(&name, value)))
                        .collect();
                Ok(Reply::Text(lines.join("\n")))
            },
            Command::Show(name) => {
                let value = self.variables
                                .get(name)
                                .ok_or_else(|| SessionError::UnknownVariable { name: name.to_string() })?;
                Ok(Reply::Text(binding(name, value)))
            },
            Command::Assign { name, expression } => {
                if name.is_empty() {
                    return Err(SessionError::MissingAssignmentTarget);
                }
                if !is_identifier(name) {
                    return Err(SessionError::InvalidVariableName { name: name.to_string() });
                }
                let value = self.calculate(expression)?;
                self.variables.assign(name, value);
                self.variables.assign(ANSWER, value);
                Ok(Reply::Text(binding(name, value)))
            },
            Command::Evaluate(expression) => {
                let value = self.calculate(expression)?;
                self.variables.assign(ANSWER, value);
                Ok(Reply::Text(binding(ANSWER, value)))
            },
        }
    }

    /// Runs the pipeline on `expression`, keeping the resulting tree.
    ///
    /// Tokenizing and conversion happen before the old tree is touched, so a
    /// line that fails early leaves the previous expression on display.
    fn calculate(&mut self, expression: &str) -> Result<f64, CalcError> {
        let infix = tokenize(expression)?;
        let postfix = to_postfix(&infix)?;
        self.tree.build_from_postfix(&postfix)?;
        Ok(self.tree.evaluate()?)
    }
}

/// Formats a variable binding as `<name> -> <value>`.
fn binding(name: &str, value: f64) -> String {
    format!("{name} -> {}", format_value(value))
}

fn help_text() -> String {
    let commands = ["Commands:",
                    "  <expression>           evaluate (may use ans and variables)",
                    "  <name> = <expression>  assign to a variable",
                    "  show <name>            print a variable",
                    "  show                   print every variable",
                    "  postfix                print the last expression in postfix order",
                    "  prefix                 print the last expression in prefix order",
                    "  tree                   draw the last expression tree",
                    "  help                   print this help",
                    "  exit                   leave"];

    format!("{}\nFunctions: {}", commands.join("\n"), BUILTIN_FUNCTIONS.join(", "))
}

/// Runs a session over `input`, writing replies and errors to `output`.
///
/// Each line is executed in turn; failures are written as `ERROR: <message>`
/// and the session continues. The loop ends at `exit` or end of input. When
/// `quiet` is set the banner and prompt are not written.
///
/// # Errors
/// Returns any I/O error raised while reading `input` or writing `output`.
///
/// # Example
/// ```
/// use treecalc::repl::run;
///
/// let input = "x = 4\nsqrt(x) + 1\n1/0\nexit\n";
/// let mut output = Vec::new();
/// run(input.as_bytes(), &mut output, true).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(),
///            "x -> 4\nans -> 3\nERROR: Division by zero.\n");
/// ```
pub fn run<R: BufRead, W: Write>(input: R, mut output: W, quiet: bool) -> io::Result<()> {
    let variables = Variables::new();
    let mut session = Session::new(&variables);

    if !quiet {
        writeln!(output, "{BANNER}")?;
    }

    let mut lines = input.lines();
    loop {
        if !quiet {
            write!(output, "{PROMPT}")?;
            output.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };

        match session.execute(&line?) {
            Ok(Reply::Silent) => {},
            Ok(Reply::Text(text)) => writeln!(output, "{text}")?,
            Ok(Reply::Exit) => break,
            Err(e) => writeln!(output, "ERROR: {e}")?,
        }
    }

    Ok(())
}
