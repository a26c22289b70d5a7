use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::NULL, Value},
    },
};

/// `len(x)` — element count of an array, byte length of a string.
pub(super) fn len(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => Ok(Value::Integer(elements.len() as i64)),
        Value::Str(text) => Ok(Value::Integer(text.len() as i64)),
        other => Err(argument_types(format!("len({})", other.type_name()))),
    }
}

/// `first(x)` — first element of an array or first byte of a string as a
/// one-byte string; `null` when empty.
pub(super) fn first(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => Ok(elements.first().cloned().unwrap_or(NULL)),
        Value::Str(text) => match text.as_bytes().first() {
            Some(&byte) => Ok(byte_string(byte)),
            None => Ok(NULL),
        },
        other => Err(argument_types(format!("first({})", other.type_name()))),
    }
}

/// `last(x)` — last element of an array or last byte of a string as a
/// one-byte string; `null` when empty.
pub(super) fn last(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => Ok(elements.last().cloned().unwrap_or(NULL)),
        Value::Str(text) => match text.as_bytes().last() {
            Some(&byte) => Ok(byte_string(byte)),
            None => Ok(NULL),
        },
        other => Err(argument_types(format!("last({})", other.type_name()))),
    }
}

/// `head(x)` — everything but the last element/byte. Inputs shorter than
/// two elements yield an empty array/string; this boundary is part of the
/// language's observable behavior.
pub(super) fn head(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => {
            if elements.len() < 2 {
                return Ok(Value::from(Vec::new()));
            }
            Ok(Value::from(elements[..elements.len() - 1].to_vec()))
        },
        Value::Str(text) => {
            let bytes = text.as_bytes();
            if bytes.len() < 2 {
                return Ok(Value::from(""));
            }
            Ok(lossy_string(&bytes[..bytes.len() - 1]))
        },
        other => Err(argument_types(format!("head({})", other.type_name()))),
    }
}

/// `tail(x)` — everything but the first element/byte, with the same
/// shorter-than-two boundary as [`head`].
pub(super) fn tail(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => {
            if elements.len() < 2 {
                return Ok(Value::from(Vec::new()));
            }
            Ok(Value::from(elements[1..].to_vec()))
        },
        Value::Str(text) => {
            let bytes = text.as_bytes();
            if bytes.len() < 2 {
                return Ok(Value::from(""));
            }
            Ok(lossy_string(&bytes[1..]))
        },
        other => Err(argument_types(format!("tail({})", other.type_name()))),
    }
}

/// `push(collection, element)` — a new array with the element appended, or
/// string concatenation.
///
/// Appending to a non-empty array requires the element's type to match the
/// existing elements'. Values are immutable, so the original collection is
/// never modified.
pub(super) fn push(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => {
            if let Some(existing) = elements.first()
               && existing.type_name() != args[1].type_name()
            {
                return Err(RuntimeError::TypeMismatch { detail: format!("push(Array[{}], {})",
                                                                        existing.type_name(),
                                                                        args[1].type_name()), });
            }

            let mut appended = elements.as_ref().clone();
            appended.push(args[1].clone());
            Ok(Value::from(appended))
        },
        Value::Str(text) => match &args[1] {
            Value::Str(suffix) => Ok(Value::from(format!("{text}{suffix}"))),
            other => Err(argument_types(format!("push(String, {})", other.type_name()))),
        },
        other => Err(argument_types(format!("push({}, {})",
                                            other.type_name(),
                                            args[1].type_name()))),
    }
}

fn argument_types(detail: String) -> RuntimeError {
    RuntimeError::ArgumentTypes { detail }
}

/// A single byte as a one-byte string value.
fn byte_string(byte: u8) -> Value {
    lossy_string(&[byte])
}

/// Builds a string value from raw bytes. Strings are byte-indexed, so a
/// slice can cut a multi-byte sequence; lossy conversion keeps that a
/// printable-value concern instead of a crash.
fn lossy_string(bytes: &[u8]) -> Value {
    Value::from(String::from_utf8_lossy(bytes).into_owned())
}
