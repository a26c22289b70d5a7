use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Applies a prefix operator to an already-evaluated operand.
///
/// `!` is defined on booleans only and inverts through the singletons;
/// unary `-` is defined on integers only and negates with two's-complement
/// wrapping. Any other operand type is an `unknown operator` error.
pub(crate) fn eval_prefix(operator: PrefixOperator, right: &Value) -> EvalResult<Value> {
    match operator {
        PrefixOperator::Not => match right {
            Value::Boolean(value) => Ok(Value::boolean(!value)),
            other => Err(RuntimeError::UnknownOperator { detail: format!("!{}",
                                                                         other.type_name()), }),
        },
        PrefixOperator::Negate => match right {
            Value::Integer(value) => Ok(Value::Integer(value.wrapping_neg())),
            other => Err(RuntimeError::UnknownOperator { detail: format!("-{}",
                                                                         other.type_name()), }),
        },
    }
}
