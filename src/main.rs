use std::{
    fs::File,
    io::{self, BufReader},
};

use clap::{Parser, ValueEnum};
use treecalc::{
    compile, evaluate,
    interpreter::serializer::tokens_to_line,
    repl::{self, variables::Variables},
    util::num::format_value,
};

/// treecalc is an expression-tree calculator. Without arguments it starts an
/// interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells treecalc to read session commands from a file instead of
    /// evaluating `contents` as an expression.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Print the expression in this notation instead of its value.
    #[arg(short, long, value_enum, conflicts_with = "file")]
    notation: Option<Notation>,

    /// Do not print the banner and prompt of an interactive session.
    #[arg(short, long)]
    quiet: bool,

    /// An expression to evaluate, or a file path with `--file`.
    contents: Option<String>,
}

/// Token orders an expression can be written back in.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Notation {
    Prefix,
    Postfix,
}

fn main() {
    let args = Args::parse();

    let outcome = match (&args.contents, args.file) {
        (Some(path), true) => run_file(path),
        (Some(expression), false) => run_once(expression, args.notation),
        (None, _) => repl::run(io::stdin().lock(), io::stdout().lock(), args.quiet)
                     .map_err(|e| e.to_string()),
    };

    if let Err(message) = outcome {
        eprintln!("{message}");
        std::process::exit(1);
    }
}

/// Evaluates one expression, or rewrites it in `notation`, and prints the
/// result.
fn run_once(expression: &str, notation: Option<Notation>) -> Result<(), String> {
    let line = match notation {
        None => {
            let variables = Variables::new();
            let value = evaluate(expression, &variables).map_err(|e| e.to_string())?;
            format_value(value)
        },
        Some(notation) => {
            let tree = compile(expression).map_err(|e| e.to_string())?;
            let tokens = match notation {
                Notation::Prefix => tree.to_prefix(),
                Notation::Postfix => tree.to_postfix(),
            };
            tokens_to_line(&tokens)
        },
    };

    println!("{line}");
    Ok(())
}

/// Feeds every line of the file at `path` to a quiet session.
fn run_file(path: &str) -> Result<(), String> {
    let file = File::open(path).map_err(|_| {
                                    format!("Failed to read the input file '{path}'. Perhaps this file does not exist?")
                                })?;

    repl::run(BufReader::new(file), io::stdout().lock(), true).map_err(|e| e.to_string())
}
