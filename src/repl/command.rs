/// A single line of input to a calculator session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// An empty or whitespace-only line.
    Blank,
    /// `exit`
    Exit,
    /// `help`
    Help,
    /// `prefix`
    Prefix,
    /// `postfix`, also accepted as `posfix`.
    Postfix,
    /// `tree`
    Tree,
    /// `show` with no name: every variable.
    ShowAll,
    /// `show <name>`
    Show(&'a str),
    /// `<name> = <expression>`; the name is validated when executed.
    Assign {
        /// Text to the left of the first `=`, trimmed.
        name:       &'a str,
        /// Text to the right of the first `=`, trimmed.
        expression: &'a str,
    },
    /// Any other line is an expression to evaluate.
    Evaluate(&'a str),
}

impl<'a> Command<'a> {
    /// Classifies a line of input.
    ///
    /// Keywords are matched on the trimmed line as a whole, so `tree` is a
    /// command while `tree + 1` is an expression.
    ///
    /// # Example
    /// ```
    /// use treecalc::repl::command::Command;
    ///
    /// assert_eq!(Command::parse("  exit "), Command::Exit);
    /// assert_eq!(Command::parse("show rate"), Command::Show("rate"));
    /// assert_eq!(Command::parse("show"), Command::ShowAll);
    /// assert_eq!(Command::parse("y = 2*x"),
    ///            Command::Assign { name:       "y",
    ///                              expression: "2*x", });
    /// assert_eq!(Command::parse("2*x"), Command::Evaluate("2*x"));
    /// ```
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        match line {
            "" => return Self::Blank,
            "exit" => return Self::Exit,
            "help" => return Self::Help,
            "prefix" => return Self::Prefix,
            "postfix" | "posfix" => return Self::Postfix,
            "tree" => return Self::Tree,
            "show" => return Self::ShowAll,
            _ => {},
        }

        if let Some(name) = line.strip_prefix("show ") {
            return Self::Show(name.trim());
        }

        match line.split_once('=') {
            Some((name, expression)) => Self::Assign { name:       name.trim(),
                                                       expression: expression.trim(), },
            None => Self::Evaluate(line),
        }
    }
}
