//! # lumen
//!
//! lumen is a small, expression-oriented scripting language with integers,
//! booleans, strings, arrays, first-class functions, and closures. This
//! crate implements the full pipeline: a streaming lexer, a Pratt parser,
//! and a tree-walking evaluator over lexically scoped environments.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::rc::Rc;

use crate::{
    error::InterpretError,
    interpreter::{
        evaluator::eval_program,
        lexer::Lexer,
        parser::Parser,
        value::{Environment, Value},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement`, and `Expression` types
/// that represent the syntactic structure of source code as a tree. The AST
/// is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression variants for all language constructs.
/// - Attaches source line numbers to nodes for diagnostics.
/// - Prints nodes back as re-parsable, fully parenthesized source text.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be recorded during lexing and
/// parsing or raised during evaluation. Parse errors accumulate in a list;
/// runtime errors are values that short-circuit evaluation and carry a
/// `<kind>: <detail>` message the caller can display or match on.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Formats messages the way the language's tests and REPL expect them.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, values, and
/// environments to provide a complete runtime for source code evaluation.
/// It exposes the component types for embedding and testing.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and values.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses and evaluates a source buffer against the given environment.
///
/// The buffer is lexed and parsed first; if the parser recorded any errors
/// the program is *not* evaluated and the full error list is returned.
/// Otherwise the program runs to completion and the final value is
/// returned — including a value carried out by a top-level `return`.
///
/// The environment is caller-supplied so bindings can persist across
/// buffers, which is what the REPL does line by line.
///
/// # Errors
/// Returns [`InterpretError::Parse`] when parsing recorded errors and
/// [`InterpretError::Runtime`] when evaluation failed.
///
/// # Examples
/// ```
/// use lumen::{interpret, interpreter::value::Environment};
///
/// let env = Environment::new();
///
/// let value = interpret("let double = fn(x) { x * 2 }; double(21)", &env).unwrap();
/// assert_eq!(value.to_string(), "42");
///
/// // The binding above persists in the environment.
/// let value = interpret("double(5)", &env).unwrap();
/// assert_eq!(value.to_string(), "10");
/// ```
pub fn interpret(source: &str, env: &Rc<Environment>) -> Result<Value, InterpretError> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        return Err(InterpretError::Parse(parser.errors().to_vec()));
    }

    Ok(eval_program(&program, env)?)
}
