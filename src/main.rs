use std::{
    fs,
    io::{self, Read, Write},
};

use clap::Parser;
use lumen::{
    interpret,
    interpreter::{
        lexer::{Lexer, Token},
        parser,
        value::Environment,
    },
};

/// lumen is a small, expression-oriented scripting language with
/// first-class functions and closures.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a script to run. Without it, piped standard input is
    /// evaluated; on a terminal, the interactive REPL starts instead.
    file: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Some(path) = args.file {
        let source = fs::read_to_string(&path).unwrap_or_else(|_| {
                         eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                         std::process::exit(1);
                     });
        run_source(&source);
        return;
    }

    if !atty::is(atty::Stream::Stdin) {
        let mut source = String::new();
        if io::stdin().read_to_string(&mut source).is_err() || source.is_empty() {
            return;
        }
        run_source(&source);
        return;
    }

    repl();
}

/// Evaluates a complete source buffer in a fresh environment and prints the
/// result, or the failure, the way the REPL would.
fn run_source(source: &str) {
    let env = Environment::new();

    match interpret(source, &env) {
        Ok(value) => println!("{value}"),
        Err(error) => eprintln!("{error}"),
    }
}

/// What the REPL does with each entered line.
#[derive(Clone, Copy)]
enum Mode {
    /// Dump the token stream.
    Lexer,
    /// Dump the parsed AST.
    Parser,
    /// Print the parsed program back as source text.
    Stringify,
    /// Evaluate against the session environment.
    Evaluate,
}

/// The interactive prompt. Single-letter inputs switch modes; anything else
/// is processed under the current mode. Evaluation keeps its bindings for
/// the whole session.
fn repl() {
    println!("Welcome to the lumen REPL, glad you're here!");
    println!("Please choose a mode:");
    println!("  'l' for lexer output");
    println!("  'p' for parser (AST) output");
    println!("  's' for parsed string output");
    println!("  'e' for code evaluation (default)");

    let mut mode = Mode::Evaluate;
    let env = Environment::new();

    loop {
        print!("=> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let input = line.trim();
        match input {
            "" | "q" | "quit" => break,
            "l" | "lexer" => {
                println!("<lexer mode>");
                mode = Mode::Lexer;
                continue;
            },
            "p" | "parser" => {
                println!("<parser mode>");
                mode = Mode::Parser;
                continue;
            },
            "s" | "string" => {
                println!("<string mode>");
                mode = Mode::Stringify;
                continue;
            },
            "e" | "eval" => {
                println!("<eval mode>");
                mode = Mode::Evaluate;
                continue;
            },
            _ => {},
        }

        match mode {
            Mode::Lexer => lex_line(input),
            Mode::Parser => parse_line(input, false),
            Mode::Stringify => parse_line(input, true),
            Mode::Evaluate => match interpret(input, &env) {
                Ok(value) => println!("{value}"),
                Err(error) => eprintln!("{error}"),
            },
        }
    }
}

/// Prints every token of the line until end of input.
fn lex_line(input: &str) {
    let mut lexer = Lexer::new(input);

    loop {
        let (token, _) = lexer.next_token();
        if token == Token::Eof {
            break;
        }
        println!("{token:?}");
    }
}

/// Parses the line and prints either the AST or its round-tripped source
/// form, followed by any parse errors.
fn parse_line(input: &str, stringify: bool) {
    let mut p = parser::Parser::new(Lexer::new(input));
    let program = p.parse_program();

    if stringify {
        println!("{program}");
    } else {
        println!("{program:#?}");
    }

    if p.errors().is_empty() {
        return;
    }
    println!("Failed to parse ({} errors):", p.errors().len());
    for error in p.errors() {
        println!("  Error: {error}");
    }
}
