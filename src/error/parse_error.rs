#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors the parser can record while building a program.
///
/// Parse errors are accumulated in a list on the parser rather than raised;
/// the caller inspects the list and refuses to evaluate a program that
/// parsed with errors.
pub enum ParseError {
    /// The current token was not the one the grammar requires.
    UnexpectedToken {
        /// Printable name of the expected token kind.
        expected: String,
        /// Printable name of the token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// No expression can start with the current token.
    NoPrefixFunction {
        /// Printable name of the offending token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An integer literal did not fit into a 64-bit signed integer.
    InvalidInteger {
        /// The literal text as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A block reached end of input before its closing brace. Fatal: the
    /// parser stops consuming statements once this is recorded.
    MissingClosingBrace {
        /// The source line where the block started.
        line: usize,
    },
    /// A function literal parameter list contained something other than an
    /// identifier. Fatal, like a missing brace.
    InvalidParameter {
        /// Printable name of the offending token.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found, line } => {
                write!(f, "line {line}: expected {expected}, got {found}")
            },
            Self::NoPrefixFunction { token, line } => {
                write!(f, "line {line}: no prefix parse function for {token}")
            },
            Self::InvalidInteger { literal, line } => {
                write!(f, "line {line}: could not parse {literal} as integer")
            },
            Self::MissingClosingBrace { line } => {
                write!(f, "line {line}: missing closing brace")
            },
            Self::InvalidParameter { found, line } => {
                write!(f, "line {line}: invalid function parameter: {found}")
            },
        }
    }
}

impl std::error::Error for ParseError {}
