use std::rc::Rc;

use crate::{
    ast::{BlockStatement, Expression, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{function, index, infix, prefix},
        value::{
            core::{FunctionValue, NULL},
            Environment, Value,
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`RuntimeError`] describing the failure. The `?` operator is what gives
/// errors their short-circuit behavior: any sub-evaluation that fails makes
/// every enclosing evaluation step fail with the same error.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a whole program against the given environment.
///
/// Statements run in order in `env` itself (top level opens no child
/// scope). A `return` that escapes every block stops the program and, as
/// the implicit top level behaves like a function boundary, its wrapper is
/// unwrapped here so the caller observes the returned value.
///
/// # Examples
/// ```
/// use lumen::interpreter::{
///     evaluator::eval_program,
///     lexer::Lexer,
///     parser::Parser,
///     value::{Environment, Value},
/// };
///
/// let mut parser = Parser::new(Lexer::new("let x = 2; x * 3"));
/// let program = parser.parse_program();
/// let env = Environment::new();
///
/// assert_eq!(eval_program(&program, &env), Ok(Value::Integer(6)));
/// ```
pub fn eval_program(program: &Program, env: &Rc<Environment>) -> EvalResult<Value> {
    let mut result = NULL;

    for statement in &program.statements {
        match eval_statement(statement, env)? {
            Value::Returned(value) => return Ok(*value),
            value => result = value,
        }
    }

    Ok(result)
}

/// Evaluates a single statement.
///
/// `let` binds after its right-hand side fully evaluates and yields the
/// bound value; `return` wraps its value in the internal return wrapper; a
/// block statement runs in a fresh child scope.
pub(crate) fn eval_statement(statement: &Statement, env: &Rc<Environment>) -> EvalResult<Value> {
    match statement {
        Statement::Let { name, value, .. } => {
            let value = eval_expression(value, env)?;
            env.set(name, value.clone());
            Ok(value)
        },
        Statement::Return { value, .. } => {
            let value = eval_expression(value, env)?;
            Ok(Value::Returned(Box::new(value)))
        },
        Statement::Expression { value, .. } => eval_expression(value, env),
        Statement::Block(block) => {
            let inner = Environment::enclosed(Rc::clone(env));
            eval_block(block, &inner)
        },
    }
}

/// Evaluates the statements of a block in the given environment.
///
/// The block yields its last statement's value; an empty block yields
/// `null`. A return wrapper stops the iteration and propagates outward
/// untouched; only a function call (or the top level) unwraps it. Scoping
/// is the caller's concern: whoever has a reason to open a child
/// environment passes it in here.
pub(crate) fn eval_block(block: &BlockStatement, env: &Rc<Environment>) -> EvalResult<Value> {
    let mut result = NULL;

    for statement in &block.statements {
        result = eval_statement(statement, env)?;

        if matches!(result, Value::Returned(_)) {
            return Ok(result);
        }
    }

    Ok(result)
}

/// Evaluates a single expression.
pub(crate) fn eval_expression(expression: &Expression, env: &Rc<Environment>) -> EvalResult<Value> {
    match expression {
        Expression::Identifier { name, .. } => eval_identifier(name, env),
        Expression::IntegerLiteral { value, .. } => Ok(Value::Integer(*value)),
        Expression::BooleanLiteral { value, .. } => Ok(Value::boolean(*value)),
        Expression::StringLiteral { value, .. } => Ok(Value::from(value.as_str())),
        Expression::ArrayLiteral { elements, .. } => eval_array_literal(elements, env),
        Expression::Prefix { operator, right, .. } => {
            let right = eval_expression(right, env)?;
            prefix::eval_prefix(*operator, &right)
        },
        Expression::Infix { left,
                            operator,
                            right,
                            .. } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            infix::eval_infix(*operator, &left, &right)
        },
        Expression::Conditional { condition,
                                  consequence,
                                  alternative,
                                  .. } => {
            eval_conditional(condition, consequence, alternative.as_ref(), env)
        },
        Expression::Index { left, index, .. } => {
            let left = eval_expression(left, env)?;
            let index = eval_expression(index, env)?;
            index::eval_index(&left, &index)
        },
        Expression::FunctionLiteral { parameters, body, .. } => {
            Ok(Value::Function(Rc::new(FunctionValue { parameters: Rc::clone(parameters),
                                                       body:       Rc::clone(body),
                                                       env:        Rc::clone(env), })))
        },
        Expression::Call { function, arguments, .. } => {
            function::eval_call(function, arguments, env)
        },
    }
}

/// Resolves a name: the builtin registry first, then the environment chain.
fn eval_identifier(name: &str, env: &Rc<Environment>) -> EvalResult<Value> {
    if let Some(builtin) = function::builtin_lookup(name) {
        return Ok(Value::Builtin(builtin));
    }
    env.get(name)
       .ok_or_else(|| RuntimeError::IdentifierNotFound { name: name.to_string() })
}

/// Evaluates array elements left to right, stopping at the first error.
fn eval_array_literal(elements: &[Expression], env: &Rc<Environment>) -> EvalResult<Value> {
    let mut values = Vec::with_capacity(elements.len());

    for element in elements {
        values.push(eval_expression(element, env)?);
    }

    Ok(Value::from(values))
}

/// Evaluates an `if`/`else` expression.
///
/// The condition must be exactly `true` or `false`; any other value is the
/// `invalid condition` error, with the condition's source form as detail.
/// The chosen branch runs in a fresh child scope; a false condition with no
/// alternative yields `null`.
fn eval_conditional(condition: &Expression,
                    consequence: &BlockStatement,
                    alternative: Option<&BlockStatement>,
                    env: &Rc<Environment>)
                    -> EvalResult<Value> {
    match eval_expression(condition, env)? {
        Value::Boolean(true) => {
            let inner = Environment::enclosed(Rc::clone(env));
            eval_block(consequence, &inner)
        },
        Value::Boolean(false) => match alternative {
            Some(block) => {
                let inner = Environment::enclosed(Rc::clone(env));
                eval_block(block, &inner)
            },
            None => Ok(NULL),
        },
        _ => Err(RuntimeError::InvalidCondition { condition: condition.to_string() }),
    }
}
