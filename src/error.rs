/// Parsing errors.
///
/// Defines all error types that can be recorded while turning source text
/// into an abstract syntax tree. Parse errors include unmet token
/// expectations, tokens no expression can start with, malformed integer
/// literals, and unterminated structures.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unknown
/// identifiers, operator/type mismatches, bad indices, call errors, and the
/// internal invalid-cast case.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// The combined failure type returned by [`crate::interpret`].
///
/// A source buffer fails either before evaluation, with the parser's full
/// error list, or during evaluation with a single runtime error. Programs
/// that parsed with errors are never evaluated.
pub enum InterpretError {
    /// The parser recorded one or more errors; evaluation was refused.
    Parse(Vec<ParseError>),
    /// Evaluation produced a runtime error.
    Runtime(RuntimeError),
}

impl std::fmt::Display for InterpretError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(errors) => {
                writeln!(f, "Failed to parse ({} errors):", errors.len())?;
                for error in errors {
                    writeln!(f, "  Error: {error}")?;
                }
                Ok(())
            },
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for InterpretError {}

impl From<RuntimeError> for InterpretError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl From<Vec<ParseError>> for InterpretError {
    fn from(errors: Vec<ParseError>) -> Self {
        Self::Parse(errors)
    }
}
