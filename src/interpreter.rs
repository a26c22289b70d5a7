/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST recursively, applying operator semantics,
/// managing lexical scopes, calling functions and builtins, and producing a
/// final runtime value. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates statements and expressions against an environment.
/// - Implements closures: function values capture their defining scope.
/// - Propagates `return` through blocks and unwraps it at call boundaries.
/// - Reports runtime errors such as unknown identifiers or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens,
/// each corresponding to a meaningful language element such as an integer,
/// identifier, operator, delimiter, or keyword. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input byte stream into tokens with line information.
/// - Folds multi-character operators and distinguishes keywords from
///   identifiers.
/// - Never fails: malformed input becomes `Illegal` tokens for the parser
///   to report.
pub mod lexer;
/// The parser module builds the abstract syntax tree from tokens.
///
/// A recursive-descent parser with Pratt precedence climbing for
/// expressions. Errors are accumulated rather than raised, so a single
/// pass reports as many problems as it can; callers refuse to evaluate a
/// program that parsed with errors.
///
/// # Responsibilities
/// - Turns the token stream into `Program`/`Statement`/`Expression` nodes.
/// - Enforces operator precedence and associativity.
/// - Collects human-readable parse errors and stops on fatal ones.
pub mod parser;
/// The value module defines runtime values and scopes.
///
/// Declares the `Value` enum covering every runtime type, the boolean and
/// null singletons, function and builtin representations, and the
/// `Environment` type that backs lexical scoping and closure capture.
pub mod value;
