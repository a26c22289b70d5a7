use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Applies an index operation to already-evaluated operands.
///
/// Arrays and strings are indexable by integers within `0..len`; anything
/// else is an `invalid index expression`. String indexing addresses bytes
/// and yields a one-byte string.
pub(crate) fn eval_index(left: &Value, index: &Value) -> EvalResult<Value> {
    match (left, index) {
        (Value::Array(elements), Value::Integer(position)) => {
            let position = checked_position(*position, elements.len())?;
            Ok(elements[position].clone())
        },
        (Value::Str(text), Value::Integer(position)) => {
            let bytes = text.as_bytes();
            let position = checked_position(*position, bytes.len())?;
            Ok(Value::from(String::from_utf8_lossy(&bytes[position..=position]).into_owned()))
        },
        _ => Err(RuntimeError::InvalidIndexExpression { left:  left.type_name(),
                                                        index: index.type_name(), }),
    }
}

/// Converts an index value into a position, enforcing `0 <= i <= len - 1`.
fn checked_position(index: i64, len: usize) -> EvalResult<usize> {
    usize::try_from(index).ok()
                          .filter(|&position| position < len)
                          .ok_or(RuntimeError::IndexOutOfBounds { index })
}
