use std::rc::Rc;

use crate::{
    ast::BlockStatement,
    interpreter::{evaluator::core::EvalResult, value::environment::Environment},
};

/// The `true` singleton. All boolean results route through this constant or
/// [`FALSE`] (via [`Value::boolean`]), so comparing boolean values compares
/// the singletons.
pub const TRUE: Value = Value::Boolean(true);
/// The `false` singleton.
pub const FALSE: Value = Value::Boolean(false);
/// The singleton representing the absence of a value: the result of an
/// empty block, or of a false condition without an `else` branch.
pub const NULL: Value = Value::Null;

/// Represents a runtime value in the interpreter.
///
/// This enum models every type a program can produce: the literal-backed
/// types, arrays, `null`, user-defined functions, builtins, and the
/// internal return wrapper. Values are immutable after construction;
/// aggregate variants share their payload through `Rc`.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, ...) and logical
    /// operations. Conditions in `if` expressions must evaluate to this
    /// type, exactly.
    Boolean(bool),
    /// An immutable byte string. Indexing and the sequence builtins work on
    /// bytes, not characters.
    Str(Rc<str>),
    /// An array of values.
    Array(Rc<Vec<Self>>),
    /// The absent value.
    Null,
    /// A user-defined function together with its captured environment.
    Function(Rc<FunctionValue>),
    /// A builtin function.
    Builtin(Builtin),
    /// The internal wrapper produced by a `return` statement. Block
    /// evaluation short-circuits on it; the nearest function call unwraps
    /// exactly one layer. User code never observes this variant.
    Returned(Box<Self>),
}

impl Value {
    /// Returns the boolean singleton for `value`.
    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        if value { TRUE } else { FALSE }
    }

    /// The type name used in diagnostics, e.g. `Integer` or `Array`.
    ///
    /// # Examples
    /// ```
    /// use lumen::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "Integer");
    /// assert_eq!(Value::Null.type_name(), "Null");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "Integer",
            Self::Boolean(_) => "Boolean",
            Self::Str(_) => "String",
            Self::Array(_) => "Array",
            Self::Null => "Null",
            Self::Function(_) => "Function",
            Self::Builtin(_) => "Builtin",
            Self::Returned(_) => "Return",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left == right,
            (Self::Boolean(left), Self::Boolean(right)) => left == right,
            (Self::Str(left), Self::Str(right)) => left == right,
            (Self::Array(left), Self::Array(right)) => left == right,
            (Self::Null, Self::Null) => true,
            (Self::Function(left), Self::Function(right)) => Rc::ptr_eq(left, right),
            (Self::Builtin(left), Self::Builtin(right)) => left.name == right.name,
            (Self::Returned(left), Self::Returned(right)) => left == right,
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(Rc::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(Rc::from(value.as_str()))
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::Array(Rc::new(value))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "{value}"),
            Self::Array(elements) => {
                write!(f, "[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
            Self::Null => write!(f, "null"),
            Self::Function(function) => write!(f, "{function}"),
            Self::Builtin(builtin) => write!(f, "builtin function: {}", builtin.name),
            Self::Returned(value) => write!(f, "{value}"),
        }
    }
}

/// A user-defined function value.
///
/// Holds the parameter names, the body, and a strong reference to the
/// environment the `fn` literal was evaluated in. The captured environment
/// is what makes closures work: it stays alive for as long as the function
/// value does, and calls resolve free names through it rather than through
/// the caller's scope.
#[derive(Debug)]
pub struct FunctionValue {
    /// Parameter names in declaration order.
    pub parameters: Rc<Vec<String>>,
    /// The function body, shared with the AST node it came from.
    pub body:       Rc<BlockStatement>,
    /// The defining environment.
    pub env:        Rc<Environment>,
}

impl std::fmt::Display for FunctionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fn({}) {}", self.parameters.join(", "), self.body)
    }
}

/// The signature shared by all builtin implementations: evaluated argument
/// values in, a value or a runtime error out.
pub type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
#[derive(Debug, Clone, Copy)]
pub enum Arity {
    /// The builtin takes exactly this many arguments.
    Exact(usize),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity.
    #[must_use]
    pub const fn check(&self, count: usize) -> bool {
        match self {
            Self::Exact(expected) => count == *expected,
        }
    }
}

/// A builtin function value: its registry name, arity, and implementation.
///
/// Builtins are plain function pointers, so the value is `Copy`; identity
/// for equality purposes is the registry name.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    /// The name the builtin is looked up under.
    pub name:  &'static str,
    /// How many arguments the builtin accepts.
    pub arity: Arity,
    /// The implementation.
    pub func:  BuiltinFn,
}
