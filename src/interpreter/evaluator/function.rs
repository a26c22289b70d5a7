use std::rc::Rc;

use crate::{
    ast::Expression,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            builtin,
            core::{eval_block, eval_expression, EvalResult},
        },
        value::{
            core::{Arity, Builtin, FunctionValue},
            Environment, Value,
        },
    },
};

/// Defines the builtin registry.
///
/// Each entry provides a name, an arity specification, and the
/// implementing function. Arity is checked centrally at the call site, so
/// the implementations themselves only validate operand types.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "len"   => { arity: Arity::Exact(1), func: builtin::len },
    "first" => { arity: Arity::Exact(1), func: builtin::first },
    "last"  => { arity: Arity::Exact(1), func: builtin::last },
    "head"  => { arity: Arity::Exact(1), func: builtin::head },
    "tail"  => { arity: Arity::Exact(1), func: builtin::tail },
    "push"  => { arity: Arity::Exact(2), func: builtin::push },
}

/// Looks a name up in the builtin registry.
///
/// Identifier resolution consults this before the environment chain, so a
/// builtin name always resolves to the builtin even when a binding of the
/// same name exists.
pub(crate) fn builtin_lookup(name: &str) -> Option<Builtin> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name).copied()
}

/// Evaluates a call expression.
///
/// The callee is evaluated first; it must produce a function or a builtin.
/// Anything else is the internal invalid-cast error (the parser happily
/// builds calls on arbitrary expressions, so `5(1)` reaches this point).
pub(crate) fn eval_call(function: &Expression,
                        arguments: &[Expression],
                        env: &Rc<Environment>)
                        -> EvalResult<Value> {
    match eval_expression(function, env)? {
        Value::Function(function) => apply_function(&function, arguments, env),
        Value::Builtin(builtin) => apply_builtin(builtin, arguments, env),
        other => {
            Err(RuntimeError::InvalidCast { detail: format!("{} cannot be cast to a function",
                                                            other.type_name()), })
        },
    }
}

/// Calls a user-defined function.
///
/// Arity is checked before any argument evaluates. Arguments then evaluate
/// left to right in the caller's environment, and the body runs in a child
/// of the function's *captured* environment with the parameters bound
/// positionally. One layer of return wrapper is unwrapped on the way out;
/// this is the only unwrap site besides the top level.
fn apply_function(function: &Rc<FunctionValue>,
                  arguments: &[Expression],
                  env: &Rc<Environment>)
                  -> EvalResult<Value> {
    if arguments.len() != function.parameters.len() {
        return Err(RuntimeError::ArgumentMismatch { function: function.to_string() });
    }

    let values = eval_arguments(arguments, env)?;

    let inner = Environment::enclosed(Rc::clone(&function.env));
    for (parameter, value) in function.parameters.iter().zip(values) {
        inner.set(parameter, value);
    }

    let result = eval_block(&function.body, &inner)?;
    Ok(unwrap_returned(result))
}

/// Calls a builtin.
///
/// Arguments evaluate first; the registry's declared arity is checked against
/// the evaluated count, and the implementation handles type checking.
fn apply_builtin(builtin: Builtin,
                 arguments: &[Expression],
                 env: &Rc<Environment>)
                 -> EvalResult<Value> {
    let values = eval_arguments(arguments, env)?;

    if !builtin.arity.check(values.len()) {
        return Err(RuntimeError::ArgumentMismatch { function: builtin.name.to_string() });
    }

    (builtin.func)(&values)
}

/// Evaluates an argument list left to right, stopping at the first error.
fn eval_arguments(arguments: &[Expression], env: &Rc<Environment>) -> EvalResult<Vec<Value>> {
    let mut values = Vec::with_capacity(arguments.len());

    for argument in arguments {
        values.push(eval_expression(argument, env)?);
    }

    Ok(values)
}

/// Unwraps exactly one layer of return wrapper, if present.
fn unwrap_returned(value: Value) -> Value {
    match value {
        Value::Returned(inner) => *inner,
        other => other,
    }
}
