use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    ///
    /// The pattern deliberately swallows a trailing alphanumeric run so that
    /// a malformed literal like `123abc` surfaces as one `Illegal` token
    /// instead of an integer followed by an identifier.
    #[regex(r"[0-9][0-9A-Za-z]*", parse_integer)]
    Int(String),
    /// String literal tokens. The literal is the raw text between the
    /// quotes; no escape sequences are recognized. A literal left open at
    /// end of input keeps the remaining text.
    #[regex(r#""[^"]*"?"#, trim_quotes)]
    Str(String),
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// Identifier tokens; binding or parameter names such as `x` or `add`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `==`
    #[token("==")]
    Equal,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `&&` — a lone `&` is not an operator and lexes as `Illegal`.
    #[token("&&")]
    And,
    /// `||` — a lone `|` is not an operator and lexes as `Illegal`.
    #[token("||")]
    Or,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    /// Newlines advance the line counter and are otherwise skipped.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,

    /// A byte sequence no rule recognizes, carrying the offending lexeme.
    /// Only produced by the [`Lexer`] wrapper, never by `logos` itself.
    Illegal(String),
    /// End of input. Only produced by the [`Lexer`] wrapper when the
    /// underlying iterator is exhausted; repeated calls keep yielding it.
    Eof,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Int(_) => "Int",
            Self::Str(_) => "String",
            Self::Identifier(_) => "Identifier",
            Self::Illegal(_) => "Illegal",
            Self::Eof => "EOF",
            Self::Function => "Function",
            Self::Let => "Let",
            Self::True => "True",
            Self::False => "False",
            Self::If => "If",
            Self::Else => "Else",
            Self::Return => "Return",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::And => "&&",
            Self::Or => "||",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::NewLine | Self::Ignored => "Whitespace",
        };
        write!(f, "{name}")
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Validates an integer literal from the current token slice.
///
/// Returns the decimal text when the whole maximal alphanumeric run is made
/// of digits; returns `None` otherwise, which turns the entire run into an
/// error and, through the [`Lexer`] wrapper, into one `Illegal` token.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<String> {
    let slice = lex.slice();
    if slice.bytes().all(|byte| byte.is_ascii_digit()) {
        Some(slice.to_string())
    } else {
        None
    }
}

/// Strips the delimiting quotes from a string literal slice.
///
/// The closing quote is optional so that a literal still open at end of
/// input yields its remaining text rather than an error.
fn trim_quotes(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let inner = slice.strip_prefix('"').unwrap_or(slice);
    inner.strip_suffix('"').unwrap_or(inner).to_string()
}

/// A streaming tokenizer over a source buffer.
///
/// Wraps the generated `logos` lexer with the two behaviors the parser
/// relies on: lexing never fails (unrecognized input becomes an
/// [`Token::Illegal`] carrying the offending lexeme) and a drained input
/// yields [`Token::Eof`] indefinitely. The lexer is single-pass; tokens are
/// produced on demand and consumed exactly once.
pub struct Lexer<'source> {
    inner: logos::Lexer<'source, Token>,
}

impl<'source> Lexer<'source> {
    /// Creates a lexer over the given source text, starting at line 1.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { inner: Token::lexer_with_extras(source, LexerExtras { line: 1 }), }
    }

    /// Returns the next token together with the line it starts on.
    ///
    /// # Examples
    /// ```
    /// use lumen::interpreter::lexer::{Lexer, Token};
    ///
    /// let mut lexer = Lexer::new("let x = 5;");
    ///
    /// assert_eq!(lexer.next_token(), (Token::Let, 1));
    /// assert_eq!(lexer.next_token(), (Token::Identifier("x".to_string()), 1));
    /// assert_eq!(lexer.next_token(), (Token::Assign, 1));
    /// assert_eq!(lexer.next_token(), (Token::Int("5".to_string()), 1));
    /// assert_eq!(lexer.next_token(), (Token::Semicolon, 1));
    /// assert_eq!(lexer.next_token(), (Token::Eof, 1));
    /// assert_eq!(lexer.next_token(), (Token::Eof, 1));
    /// ```
    pub fn next_token(&mut self) -> (Token, usize) {
        match self.inner.next() {
            Some(Ok(token)) => (token, self.inner.extras.line),
            Some(Err(())) => {
                (Token::Illegal(self.inner.slice().to_string()), self.inner.extras.line)
            },
            None => (Token::Eof, self.inner.extras.line),
        }
    }
}
