use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use log::debug;
use notation::{Notation, NotationError};

/// notation converts arithmetic expressions between infix and postfix
/// notation and evaluates them.
///
/// Run without a subcommand for an interactive menu.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maximum number of items any operator or operand stack may hold.
    #[arg(short, long)]
    stack_limit: Option<usize>,

    /// Binds a single-letter variable for evaluation, as in `--var x=2.5`.
    /// May be given more than once.
    #[arg(short, long = "var", value_parser = parse_binding)]
    vars: Vec<(char, f64)>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Converts an infix expression to postfix.
    ToPostfix { expression: String },
    /// Converts a postfix expression to infix.
    ToInfix { expression: String },
    /// Evaluates an infix expression.
    EvalInfix { expression: String },
    /// Evaluates a postfix expression.
    EvalPostfix { expression: String },
}

impl Command {
    fn split(self) -> (Operation, String) {
        match self {
            Self::ToPostfix { expression } => (Operation::ToPostfix, expression),
            Self::ToInfix { expression } => (Operation::ToInfix, expression),
            Self::EvalInfix { expression } => (Operation::EvalInfix, expression),
            Self::EvalPostfix { expression } => (Operation::EvalPostfix, expression),
        }
    }
}

/// The four operations, numbered as in the interactive menu.
#[derive(Debug, Clone, Copy)]
enum Operation {
    ToPostfix,
    ToInfix,
    EvalPostfix,
    EvalInfix,
}

impl Operation {
    const fn from_menu(selection: char) -> Option<Self> {
        match selection {
            '1' => Some(Self::ToPostfix),
            '2' => Some(Self::ToInfix),
            '3' => Some(Self::EvalPostfix),
            '4' => Some(Self::EvalInfix),
            _ => None,
        }
    }

    fn run(self, notation: &Notation, expression: &str) -> Result<String, NotationError> {
        Ok(match self {
               Self::ToPostfix => format!("Postfix: {}", notation.convert_infix_to_postfix(expression)?),
               Self::ToInfix => format!("Infix: {}", notation.convert_postfix_to_infix(expression)?),
               Self::EvalPostfix => {
                   format!("Answer: {}", notation.evaluate_postfix_expression(expression)?)
               },
               Self::EvalInfix => {
                   format!("Answer: {}", notation.evaluate_infix_expression(expression)?)
               },
           })
    }
}

/// Parses a `name=value` variable binding.
fn parse_binding(raw: &str) -> Result<(char, f64), String> {
    let (name, value) = raw.split_once('=')
                           .ok_or_else(|| format!("expected NAME=VALUE, found '{raw}'"))?;

    let mut letters = name.trim().chars();
    let name = match (letters.next(), letters.next()) {
        (Some(letter), None) if letter.is_alphabetic() => letter,
        _ => return Err(format!("'{name}' is not a single-letter variable")),
    };
    let value = value.trim()
                     .parse::<f64>()
                     .map_err(|e| format!("'{value}' is not a number: {e}"))?;

    Ok((name, value))
}

/// Reads one line, returning `None` at end of input.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Runs the numbered menu until the user picks `0`, declines to continue,
/// or input ends.
fn run_menu(notation: &Notation,
            input: &mut impl BufRead,
            output: &mut impl Write)
            -> io::Result<()> {
    loop {
        writeln!(output, "Notation")?;
        writeln!(output, "Enter a function to run:")?;
        writeln!(output, "1. Convert infix to postfix")?;
        writeln!(output, "2. Convert postfix to infix")?;
        writeln!(output, "3. Evaluate postfix expression")?;
        writeln!(output, "4. Evaluate infix expression")?;
        writeln!(output, "0. Exit")?;
        output.flush()?;

        let operation = loop {
            let Some(line) = read_line(input)? else {
                return Ok(());
            };
            let selection = line.trim().chars().next();
            if selection == Some('0') {
                return Ok(());
            }
            if let Some(operation) = selection.and_then(Operation::from_menu) {
                break operation;
            }
            writeln!(output, "Please enter a number 0-4")?;
        };

        writeln!(output, "Enter the expression:")?;
        output.flush()?;
        let Some(expression) = read_line(input)? else {
            return Ok(());
        };

        match operation.run(notation, &expression) {
            Ok(result) => writeln!(output, "{result}")?,
            Err(e) => writeln!(output, "{e}")?,
        }

        writeln!(output, "Again? Y/N")?;
        output.flush()?;
        match read_line(input)? {
            Some(answer) if answer.trim().starts_with(['N', 'n']) => return Ok(()),
            None => return Ok(()),
            Some(_) => {},
        }
    }
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let mut notation = Notation::new();
    if let Some(limit) = args.stack_limit {
        notation = notation.with_stack_limit(limit);
    }
    for (name, value) in args.vars {
        notation = notation.bind(name, value);
    }
    debug!("running with {notation:?}");

    match args.command {
        Some(command) => {
            let (operation, expression) = command.split();
            match operation.run(&notation, &expression) {
                Ok(result) => println!("{result}"),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                },
            }
        },
        None => {
            let stdin = io::stdin();
            if let Err(e) = run_menu(&notation, &mut stdin.lock(), &mut io::stdout()) {
                eprintln!("Failed to run the interactive menu: {e}");
                std::process::exit(1);
            }
        },
    }
}
