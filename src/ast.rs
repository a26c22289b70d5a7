use std::{fmt, rc::Rc};

/// A complete parsed program: an ordered sequence of statements.
///
/// Produced by the parser and consumed by the evaluator. Its `Display`
/// implementation concatenates the printed statements, which makes a parsed
/// program round-trip through printing and re-parsing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The top-level statements in source order.
    pub statements: Vec<Statement>,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

/// A brace-delimited sequence of statements.
///
/// Blocks appear as statements in their own right, as the branches of a
/// conditional, and as function bodies. The evaluator decides per call site
/// whether a block opens a child scope.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    /// Statements inside the braces.
    pub statements: Vec<Statement>,
    /// Line number of the opening brace.
    pub line:       usize,
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for statement in &self.statements {
            write!(f, "{statement} ")?;
        }
        write!(f, "}}")
    }
}

/// A single statement.
///
/// Statements are the units a program is made of. All variants carry the
/// line number of their introducing token.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A `let` binding: `let name = value;`.
    Let {
        /// The name being bound.
        name:  String,
        /// The bound expression.
        value: Expression,
        /// Line number of the `let` keyword.
        line:  usize,
    },
    /// An early return: `return value;`.
    Return {
        /// The returned expression.
        value: Expression,
        /// Line number of the `return` keyword.
        line:  usize,
    },
    /// A bare expression evaluated for its value.
    Expression {
        /// The expression to evaluate.
        value: Expression,
        /// Line number of the expression's first token.
        line:  usize,
    },
    /// A braced block of statements.
    Block(BlockStatement),
}

impl Statement {
    /// Gets the source line this statement starts on.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Let { line, .. } | Self::Return { line, .. } | Self::Expression { line, .. } => {
                *line
            },
            Self::Block(block) => block.line,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value, .. } => write!(f, "let {name} = {value};"),
            Self::Return { value, .. } => write!(f, "return {value};"),
            Self::Expression { value, .. } => write!(f, "{value}"),
            Self::Block(block) => write!(f, "{block}"),
        }
    }
}

/// A single expression.
///
/// Every composite variant prints itself fully parenthesized so that the
/// printed form re-parses to the same tree regardless of precedence.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A reference to a binding or builtin by name.
    Identifier {
        /// The referenced name.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A decimal integer literal.
    IntegerLiteral {
        /// The literal value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A `true` or `false` literal.
    BooleanLiteral {
        /// The literal value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// A double-quoted string literal. No escape sequences exist; the value
    /// is the raw text between the quotes.
    StringLiteral {
        /// The literal text, quotes stripped.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// An array literal: `[e1, e2, ...]`.
    ArrayLiteral {
        /// Element expressions in source order.
        elements: Vec<Expression>,
        /// Line number of the opening bracket.
        line:     usize,
    },
    /// A prefix operation: `!x` or `-x`.
    Prefix {
        /// The prefix operator.
        operator: PrefixOperator,
        /// The operand.
        right:    Box<Expression>,
        /// Line number of the operator.
        line:     usize,
    },
    /// A binary infix operation.
    Infix {
        /// Left operand.
        left:     Box<Expression>,
        /// The operator.
        operator: InfixOperator,
        /// Right operand.
        right:    Box<Expression>,
        /// Line number of the operator.
        line:     usize,
    },
    /// An `if`/`else` conditional. Both forms are expressions; a missing
    /// alternative evaluates to `null` when the condition is false.
    Conditional {
        /// The condition; must evaluate to a boolean.
        condition:   Box<Expression>,
        /// Block evaluated when the condition is true.
        consequence: BlockStatement,
        /// Block evaluated when the condition is false, if present.
        alternative: Option<BlockStatement>,
        /// Line number of the `if` keyword.
        line:        usize,
    },
    /// An index operation: `left[index]`.
    Index {
        /// The indexed expression.
        left:  Box<Expression>,
        /// The index expression.
        index: Box<Expression>,
        /// Line number of the opening bracket.
        line:  usize,
    },
    /// A function literal: `fn(p1, p2) { body }`.
    ///
    /// Parameters and body are reference-counted so a function value created
    /// from this literal can outlive the program that parsed it (the REPL
    /// drops each line's program after evaluating it).
    FunctionLiteral {
        /// Parameter names in declaration order.
        parameters: Rc<Vec<String>>,
        /// The function body.
        body:       Rc<BlockStatement>,
        /// Line number of the `fn` keyword.
        line:       usize,
    },
    /// A call: `function(arg1, arg2)`. The callee is an arbitrary
    /// expression; it must evaluate to a function or builtin.
    Call {
        /// The called expression.
        function:  Box<Expression>,
        /// Argument expressions in source order.
        arguments: Vec<Expression>,
        /// Line number of the opening parenthesis.
        line:      usize,
    },
}

impl Expression {
    /// Gets the source line this expression starts on.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Identifier { line, .. }
            | Self::IntegerLiteral { line, .. }
            | Self::BooleanLiteral { line, .. }
            | Self::StringLiteral { line, .. }
            | Self::ArrayLiteral { line, .. }
            | Self::Prefix { line, .. }
            | Self::Infix { line, .. }
            | Self::Conditional { line, .. }
            | Self::Index { line, .. }
            | Self::FunctionLiteral { line, .. }
            | Self::Call { line, .. } => *line,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier { name, .. } => write!(f, "{name}"),
            Self::IntegerLiteral { value, .. } => write!(f, "{value}"),
            Self::BooleanLiteral { value, .. } => write!(f, "{value}"),
            Self::StringLiteral { value, .. } => write!(f, "\"{value}\""),
            Self::ArrayLiteral { elements, .. } => {
                write!(f, "[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
            Self::Prefix { operator, right, .. } => write!(f, "({operator}{right})"),
            Self::Infix { left,
                          operator,
                          right,
                          .. } => write!(f, "({left} {operator} {right})"),
            Self::Conditional { condition,
                                consequence,
                                alternative,
                                .. } => {
                write!(f, "if {condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            },
            Self::Index { left, index, .. } => write!(f, "({left}[{index}])"),
            Self::FunctionLiteral { parameters, body, .. } => {
                write!(f, "fn({}) {body}", parameters.join(", "))
            },
            Self::Call { function, arguments, .. } => {
                write!(f, "{function}(")?;
                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
        }
    }
}

/// A prefix (unary) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical NOT (`!x`), defined on booleans only.
    Not,
    /// Arithmetic negation (`-x`), defined on integers only.
    Negate,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Not => "!",
            Self::Negate => "-",
        };
        write!(f, "{operator}")
    }
}

/// A binary infix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division, truncated toward zero (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::And => "&&",
            Self::Or => "||",
        };
        write!(f, "{operator}")
    }
}
