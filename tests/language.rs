use std::fs;

use lumen::{
    error::InterpretError,
    interpret,
    interpreter::value::{Environment, Value},
};
use walkdir::WalkDir;

fn eval(source: &str) -> Result<Value, InterpretError> {
    interpret(source, &Environment::new())
}

fn assert_integer(source: &str, expected: i64) {
    match eval(source) {
        Ok(Value::Integer(value)) => assert_eq!(value, expected, "source: {source}"),
        other => panic!("expected Integer({expected}) from {source:?}, got {other:?}"),
    }
}

fn assert_boolean(source: &str, expected: bool) {
    match eval(source) {
        Ok(Value::Boolean(value)) => assert_eq!(value, expected, "source: {source}"),
        other => panic!("expected Boolean({expected}) from {source:?}, got {other:?}"),
    }
}

fn assert_string(source: &str, expected: &str) {
    match eval(source) {
        Ok(Value::Str(value)) => assert_eq!(value.as_ref(), expected, "source: {source}"),
        other => panic!("expected String({expected:?}) from {source:?}, got {other:?}"),
    }
}

fn assert_null(source: &str) {
    match eval(source) {
        Ok(Value::Null) => {},
        other => panic!("expected Null from {source:?}, got {other:?}"),
    }
}

fn assert_display(source: &str, expected: &str) {
    match eval(source) {
        Ok(value) => assert_eq!(value.to_string(), expected, "source: {source}"),
        other => panic!("expected a value from {source:?}, got {other:?}"),
    }
}

fn assert_runtime_error(source: &str, expected: &str) {
    match eval(source) {
        Err(InterpretError::Runtime(error)) => {
            assert_eq!(error.to_string(), expected, "source: {source}");
        },
        other => panic!("expected runtime error {expected:?} from {source:?}, got {other:?}"),
    }
}

#[test]
fn integer_arithmetic() {
    assert_integer("0", 0);
    assert_integer("5", 5);
    assert_integer("-5", -5);
    assert_integer("-0", 0);
    assert_integer("5 + 5 + 5", 15);
    assert_integer("20 - 5 - 5", 10);
    assert_integer("2 * 2 * 2", 8);
    assert_integer("20 / 2 / 2", 5);
    assert_integer("2 * (2 + 3)", 10);
    assert_integer("-7 + 7 + -7", -7);
    assert_integer("5 * 2 + 10", 20);
    assert_integer("10 + 5 * 2", 20);
    assert_integer("5 + 5 * 2", 15);
}

#[test]
fn division_truncates_toward_zero() {
    assert_integer("7 / 2", 3);
    assert_integer("-7 / 2", -3);
    assert_integer("7 / -2", -3);
}

#[test]
fn division_by_zero_is_an_error() {
    assert_runtime_error("5 / 0", "division by zero");
    assert_runtime_error("let x = 0; 1 / x", "division by zero");
}

#[test]
fn integer_arithmetic_wraps() {
    assert_integer("9223372036854775807 + 1", i64::MIN);
    assert_integer("-9223372036854775807 - 2", i64::MAX);
}

#[test]
fn booleans_and_bang() {
    assert_boolean("true", true);
    assert_boolean("false", false);
    assert_boolean("!true", false);
    assert_boolean("!false", true);
    assert_boolean("!!true", true);
    assert_boolean("!!false", false);
    assert_boolean("1 < 2", true);
    assert_boolean("1 > 2", false);
    assert_boolean("1 == 1", true);
    assert_boolean("1 != 1", false);
    assert_boolean("true == true", true);
    assert_boolean("true != false", true);
}

#[test]
fn logical_operators() {
    assert_boolean("true && true", true);
    assert_boolean("true && false", false);
    assert_boolean("false || true", true);
    assert_boolean("false || false", false);
    assert_boolean("1 < 2 && 2 < 3", true);
    assert_boolean("1 < 2 && 3 < 2", false);
    // `&&` binds looser than `==`.
    assert_boolean("true && 1 == 1", true);
}

#[test]
fn strings() {
    assert_string("\"hello\"", "hello");
    assert_string("\"Hello\" + \" \" + \"world\"", "Hello world");
    assert_boolean("\"a\" == \"a\"", true);
    assert_boolean("\"a\" != \"b\"", true);
    assert_string("\"abc\"[0]", "a");
    assert_string("\"abc\"[1]", "b");
    assert_string("\"abc\"[2]", "c");
}

#[test]
fn conditionals() {
    assert_integer("if (1 < 2) { 10 } else { 20 }", 10);
    assert_integer("if (1 > 2) { 10 } else { 20 }", 20);
    assert_integer("if true { 1 }", 1);
    assert_null("if (false) { 10 }");
    assert_null("if false { 10 }");
}

#[test]
fn invalid_conditions() {
    assert_runtime_error("if (1) { 10 }", "invalid condition: 1");
    assert_runtime_error("if \"yes\" { 10 }", "invalid condition: \"yes\"");
    assert_runtime_error("if (1 + 1) { 10 }", "invalid condition: (1 + 1)");
}

#[test]
fn let_bindings_and_scoping() {
    assert_integer("let x = 5; x", 5);
    assert_integer("let x = 5;", 5);
    assert_integer("let x = 5; let y = x + 1; y", 6);
    // Rebinding in the same scope overwrites.
    assert_integer("let x = 1; let x = 2; x", 2);
    // A block statement opens a child scope.
    assert_integer("let x = 5; { let x = 10; } x", 5);
    assert_integer("let x = 5; { x }", 5);
    // Conditional branches open child scopes too.
    assert_integer("let x = 5; if true { let x = 9; } x", 5);
}

#[test]
fn empty_programs_and_blocks() {
    assert_null("");
    assert_null("{}");
}

#[test]
fn return_statements() {
    assert_integer("return 10;", 10);
    assert_integer("return 10; 9", 10);
    assert_integer("{ return 10; 9 } 8", 10);
    // A return escapes arbitrarily nested blocks.
    assert_integer("{{ return 10; 9 } 8 }", 10);
    assert_integer("if true { if true { return 10; } return 1; }", 10);
}

#[test]
fn functions_and_calls() {
    assert_integer("let identity = fn(x) { x }; identity(5)", 5);
    assert_integer("let double = fn(x) { x * 2 }; double(5)", 10);
    assert_integer("let add = fn(x, y) { x + y }; add(5, 5)", 10);
    assert_integer("let add = fn(x, y) { x + y }; add(5 + 5, add(5, 5))", 20);
    assert_integer("fn(x) { x }(5)", 5);
    // The body's value is implicit; `return` exits early.
    assert_integer("let f = fn() { return 3; 9 }; f()", 3);
    assert_integer("let f = fn() { { return 3; } 9 }; f()", 3);
}

#[test]
fn closures() {
    assert_integer("let adder = fn(x){ fn(y){ x + y } }; let add2 = adder(2); add2(3)", 5);
    assert_integer("let adder = fn(x){ fn(y){ x + y } }; adder(3)(4)", 7);
    // The captured scope is the defining one, not the caller's.
    assert_integer("let x = 10; let f = fn() { x }; let g = fn() { let x = 99; f() }; g()",
                   10);
}

#[test]
fn recursion() {
    assert_integer("let fact = fn(n) { if n == 0 { 1 } else { n * fact(n-1) } }; fact(5)",
                   120);
    assert_integer("let fib = fn(n) { if n < 2 { n } else { fib(n-1) + fib(n-2) } }; fib(10)",
                   55);
}

#[test]
fn higher_order_functions() {
    assert_integer("let apply = fn(f, x) { f(x) }; apply(fn(y) { y * 2 }, 21)", 42);
    // A builtin is a first-class value.
    assert_integer("let f = len; f([1, 2])", 2);
}

#[test]
fn call_arity_is_checked_before_arguments() {
    assert_runtime_error("let f = fn(x) { x }; f(1, 2)",
                         "wrong number of arguments for function: fn(x) { x }");
    assert_runtime_error("let f = fn(x, y) { x + y }; f(1)",
                         "wrong number of arguments for function: fn(x, y) { (x + y) }");
    // Arity fails before the bad argument would evaluate.
    assert_runtime_error("let f = fn(x) { x }; f(1, missing)",
                         "wrong number of arguments for function: fn(x) { x }");
}

#[test]
fn calling_a_non_function_is_an_internal_cast_error() {
    assert_runtime_error("5(1)", "invalid type cast (internal): Integer cannot be cast to a function");
    assert_runtime_error("let x = true; x()",
                         "invalid type cast (internal): Boolean cannot be cast to a function");
}

#[test]
fn arrays() {
    assert_display("[1, 2 * 2, 3 + 3]", "[1, 4, 6]");
    assert_integer("[1, 2, 3][0]", 1);
    assert_integer("[1, 2, 3][2]", 3);
    assert_integer("let arr = [1, 2, 3]; arr[1 + 1]", 3);
    assert_integer("[[1, 2], [3, 4]][1][0]", 3);
}

#[test]
fn index_out_of_bounds() {
    assert_runtime_error("[1,2,3][5]", "index out of bounds: 5");
    assert_runtime_error("[1,2,3][3]", "index out of bounds: 3");
    assert_runtime_error("[1,2,3][-1]", "index out of bounds: -1");
    assert_runtime_error("\"abc\"[3]", "index out of bounds: 3");
    assert_runtime_error("\"\"[0]", "index out of bounds: 0");
}

#[test]
fn invalid_index_expressions() {
    assert_runtime_error("5[0]", "invalid index expression: cannot index Integer with Integer");
    assert_runtime_error("[1][true]", "invalid index expression: cannot index Array with Boolean");
    assert_runtime_error("[1][\"0\"]", "invalid index expression: cannot index Array with String");
    assert_runtime_error("true[0]", "invalid index expression: cannot index Boolean with Integer");
}

#[test]
fn infix_type_errors() {
    assert_runtime_error("5 + true", "type mismatch: Integer + Boolean");
    assert_runtime_error("\"a\" + 1", "type mismatch: String + Integer");
    assert_runtime_error("true + false", "unknown operator: Boolean + Boolean");
    assert_runtime_error("true < false", "unknown operator: Boolean < Boolean");
    assert_runtime_error("5 && 6", "unknown operator: Integer && Integer");
    assert_runtime_error("\"a\" - \"b\"", "unknown operator: String - String");
    assert_runtime_error("[1] + [2]", "no infixes implemented for type: Array");
}

#[test]
fn prefix_type_errors() {
    assert_runtime_error("-true", "unknown operator: -Boolean");
    assert_runtime_error("-\"a\"", "unknown operator: -String");
    assert_runtime_error("!5", "unknown operator: !Integer");
}

#[test]
fn unknown_identifiers() {
    assert_runtime_error("foobar", "identifier not found: foobar");
    assert_runtime_error("let x = 1; y", "identifier not found: y");
}

#[test]
fn first_error_wins() {
    assert_runtime_error("missing + 1", "identifier not found: missing");
    assert_runtime_error("1 + missing", "identifier not found: missing");
    assert_runtime_error("[1, missing, alsoMissing]", "identifier not found: missing");
    assert_runtime_error("len(missing, alsoMissing)", "identifier not found: missing");
    assert_runtime_error("let f = fn(x) { x }; f(missing)", "identifier not found: missing");
}

#[test]
fn builtin_len() {
    assert_integer("len(\"\")", 0);
    assert_integer("len(\"four\")", 4);
    assert_integer("len([1, 2, 3])", 3);
    assert_integer("len([])", 0);
    assert_runtime_error("len(1)", "argument type(s) not supported: len(Integer)");
    assert_runtime_error("len(\"a\", \"b\")", "wrong number of arguments for function: len");
    assert_runtime_error("len()", "wrong number of arguments for function: len");
}

#[test]
fn builtin_first_and_last() {
    assert_integer("first([1, 2, 3])", 1);
    assert_integer("last([1, 2, 3])", 3);
    assert_null("first([])");
    assert_null("last([])");
    assert_string("first(\"abc\")", "a");
    assert_string("last(\"abc\")", "c");
    assert_null("first(\"\")");
    assert_null("last(\"\")");
    assert_runtime_error("first(1)", "argument type(s) not supported: first(Integer)");
    assert_runtime_error("last(true)", "argument type(s) not supported: last(Boolean)");
}

#[test]
fn builtin_head_and_tail() {
    assert_display("head([1, 2, 3])", "[1, 2]");
    assert_display("tail([1, 2, 3])", "[2, 3]");
    assert_string("head(\"abc\")", "ab");
    assert_string("tail(\"abc\")", "bc");
    // Inputs shorter than two elements yield empty results.
    assert_display("head([1])", "[]");
    assert_display("tail([1])", "[]");
    assert_display("head([])", "[]");
    assert_display("tail([])", "[]");
    assert_string("head(\"a\")", "");
    assert_string("tail(\"a\")", "");
    assert_runtime_error("head(1)", "argument type(s) not supported: head(Integer)");
    assert_runtime_error("tail(1)", "argument type(s) not supported: tail(Integer)");
}

#[test]
fn builtin_push() {
    assert_display("push([1, 2], 3)", "[1, 2, 3]");
    assert_display("push([], true)", "[true]");
    assert_string("push(\"ab\", \"c\")", "abc");
    // The original array is untouched.
    assert_display("let a = [1]; let b = push(a, 2); a", "[1]");
    assert_runtime_error("push([1,2], true)", "type mismatch: push(Array[Integer], Boolean)");
    assert_runtime_error("push([\"a\"], 1)", "type mismatch: push(Array[String], Integer)");
    assert_runtime_error("push(\"ab\", 1)", "argument type(s) not supported: push(String, Integer)");
    assert_runtime_error("push(1, true)", "argument type(s) not supported: push(Integer, Boolean)");
    assert_runtime_error("push([1])", "wrong number of arguments for function: push");
}

#[test]
fn builtins_shadow_bindings() {
    // Identifier lookup consults the builtin registry before the
    // environment, so a same-named binding never wins.
    assert_integer("let len = 1; len(\"abc\")", 3);
}

#[test]
fn evaluation_is_deterministic() {
    let source = "let f = fn(x) { x * 2 }; [f(1), f(2), f(3)][2] + len(\"ab\")";
    assert_eq!(eval(source).unwrap(), eval(source).unwrap());
}

#[test]
fn environment_persists_across_buffers() {
    let env = Environment::new();

    interpret("let counter = fn(x) { x + 1 };", &env).unwrap();
    let value = interpret("counter(41)", &env).unwrap();
    assert_eq!(value, Value::Integer(42));
}

#[test]
fn parse_errors_refuse_evaluation() {
    match eval("let x = ;") {
        Err(InterpretError::Parse(errors)) => assert!(!errors.is_empty()),
        other => panic!("expected parse failure, got {other:?}"),
    }

    let message = eval("let x = ;").unwrap_err().to_string();
    assert!(message.starts_with("Failed to parse ("), "message: {message}");
}

#[test]
fn scripts_evaluate_to_true() {
    let mut count = 0;

    for entry in WalkDir::new("tests/scripts").into_iter()
                                              .filter_map(Result::ok)
                                              .filter(|entry| {
                                                  entry.path()
                                                       .extension()
                                                       .is_some_and(|ext| ext == "lumen")
                                              })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("failed to read {path:?}: {e}"));

        count += 1;
        match interpret(&source, &Environment::new()) {
            Ok(Value::Boolean(true)) => {},
            other => panic!("script {path:?} did not evaluate to true: {other:?}"),
        }
    }

    assert!(count > 0, "no scripts found in tests/scripts");
}
