use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Applies an infix operator to two already-evaluated operands.
///
/// Operands of differing types are a `type mismatch` regardless of the
/// operator. Matching types dispatch to their family's semantics; families
/// without any infix semantics (arrays, functions, `null`) report
/// `no infixes implemented`.
pub(crate) fn eval_infix(operator: InfixOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    if left.type_name() != right.type_name() {
        return Err(RuntimeError::TypeMismatch { detail: format!("{} {} {}",
                                                                left.type_name(),
                                                                operator,
                                                                right.type_name()), });
    }

    match (left, right) {
        (Value::Integer(left), Value::Integer(right)) => eval_integer_infix(operator, *left, *right),
        (Value::Boolean(left), Value::Boolean(right)) => eval_boolean_infix(operator, *left, *right),
        (Value::Str(left), Value::Str(right)) => eval_string_infix(operator, left, right),
        _ => Err(RuntimeError::InfixNotImplemented { type_name: left.type_name() }),
    }
}

/// Integer semantics: `+ - * /` produce integers with two's-complement
/// wrapping, division truncates toward zero, and the comparisons produce
/// the boolean singletons.
fn eval_integer_infix(operator: InfixOperator, left: i64, right: i64) -> EvalResult<Value> {
    match operator {
        InfixOperator::Add => Ok(Value::Integer(left.wrapping_add(right))),
        InfixOperator::Sub => Ok(Value::Integer(left.wrapping_sub(right))),
        InfixOperator::Mul => Ok(Value::Integer(left.wrapping_mul(right))),
        InfixOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok(Value::Integer(left.wrapping_div(right)))
        },
        InfixOperator::Less => Ok(Value::boolean(left < right)),
        InfixOperator::Greater => Ok(Value::boolean(left > right)),
        InfixOperator::Equal => Ok(Value::boolean(left == right)),
        InfixOperator::NotEqual => Ok(Value::boolean(left != right)),
        InfixOperator::And | InfixOperator::Or => {
            Err(unknown_operator(operator, "Integer"))
        },
    }
}

/// Boolean semantics: equality compares the singletons; `&&`/`||` are
/// logical but not short-circuiting — both operands were already evaluated
/// by the time this runs.
fn eval_boolean_infix(operator: InfixOperator, left: bool, right: bool) -> EvalResult<Value> {
    match operator {
        InfixOperator::Equal => Ok(Value::boolean(left == right)),
        InfixOperator::NotEqual => Ok(Value::boolean(left != right)),
        InfixOperator::And => Ok(Value::boolean(left && right)),
        InfixOperator::Or => Ok(Value::boolean(left || right)),
        _ => Err(unknown_operator(operator, "Boolean")),
    }
}

/// String semantics: `+` concatenates, equality compares bytes.
fn eval_string_infix(operator: InfixOperator, left: &str, right: &str) -> EvalResult<Value> {
    match operator {
        InfixOperator::Add => Ok(Value::from(format!("{left}{right}"))),
        InfixOperator::Equal => Ok(Value::boolean(left == right)),
        InfixOperator::NotEqual => Ok(Value::boolean(left != right)),
        _ => Err(unknown_operator(operator, "String")),
    }
}

fn unknown_operator(operator: InfixOperator, type_name: &str) -> RuntimeError {
    RuntimeError::UnknownOperator { detail: format!("{type_name} {operator} {type_name}") }
}
