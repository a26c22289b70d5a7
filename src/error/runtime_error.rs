#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Runtime errors are first-class results: any sub-evaluation that produces
/// one short-circuits every enclosing evaluation step, and the final message
/// is what the caller observes. Messages follow the `<kind>: <detail>`
/// shape throughout.
pub enum RuntimeError {
    /// A function or builtin was called with the wrong number of arguments.
    ArgumentMismatch {
        /// Printable form of the callee.
        function: String,
    },
    /// A builtin was invoked with operand types it does not support.
    ArgumentTypes {
        /// The builtin name applied to the offending type names.
        detail: String,
    },
    /// An array or string index fell outside `0..len`.
    IndexOutOfBounds {
        /// The offending index.
        index: i64,
    },
    /// A name was neither a builtin nor bound in any enclosing scope.
    IdentifierNotFound {
        /// The unresolved name.
        name: String,
    },
    /// An infix operator was applied to a type with no infix semantics.
    InfixNotImplemented {
        /// The operand type name.
        type_name: &'static str,
    },
    /// An `if` condition evaluated to something other than `true`/`false`.
    InvalidCondition {
        /// The condition as written in the source.
        condition: String,
    },
    /// Infix operands had differing types.
    TypeMismatch {
        /// Description of the mismatch, e.g. `Integer + Boolean`.
        detail: String,
    },
    /// An operator exists for the operand type family but not this
    /// combination.
    UnknownOperator {
        /// The operator applied to the offending type names.
        detail: String,
    },
    /// An index operation was attempted on an unindexable combination.
    InvalidIndexExpression {
        /// Type name of the indexed value.
        left:  &'static str,
        /// Type name of the index value.
        index: &'static str,
    },
    /// Integer division with a zero divisor.
    DivisionByZero,
    /// A call target evaluated to something that is not callable. Marked
    /// internal: a well-formed program can only reach it by calling a
    /// non-function value, which the message spells out.
    InvalidCast {
        /// Description of the failed cast.
        detail: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ArgumentMismatch { function } => {
                write!(f, "wrong number of arguments for function: {function}")
            },
            Self::ArgumentTypes { detail } => {
                write!(f, "argument type(s) not supported: {detail}")
            },
            Self::IndexOutOfBounds { index } => write!(f, "index out of bounds: {index}"),
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),
            Self::InfixNotImplemented { type_name } => {
                write!(f, "no infixes implemented for type: {type_name}")
            },
            Self::InvalidCondition { condition } => write!(f, "invalid condition: {condition}"),
            Self::TypeMismatch { detail } => write!(f, "type mismatch: {detail}"),
            Self::UnknownOperator { detail } => write!(f, "unknown operator: {detail}"),
            Self::InvalidIndexExpression { left, index } => {
                write!(f, "invalid index expression: cannot index {left} with {index}")
            },
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::InvalidCast { detail } => write!(f, "invalid type cast (internal): {detail}"),
        }
    }
}

impl std::error::Error for RuntimeError {}
