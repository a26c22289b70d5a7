use lumen::{
    ast::{Expression, Statement},
    interpreter::{lexer::Lexer, parser::Parser},
};

fn parse(source: &str) -> lumen::ast::Program {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    assert!(parser.errors().is_empty(),
            "parser reported errors for {source:?}: {:?}",
            parser.errors());
    program
}

fn parse_errors(source: &str) -> Vec<String> {
    let mut parser = Parser::new(Lexer::new(source));
    parser.parse_program();
    parser.errors().iter().map(ToString::to_string).collect()
}

#[test]
fn let_statements() {
    let program = parse("let x = 5; let y = 10; let foobar = 1729;");
    assert_eq!(program.statements.len(), 3);

    let names: Vec<_> = program.statements
                               .iter()
                               .map(|statement| match statement {
                                   Statement::Let { name, .. } => name.as_str(),
                                   other => panic!("expected let statement, got {other:?}"),
                               })
                               .collect();
    assert_eq!(names, vec!["x", "y", "foobar"]);
}

#[test]
fn return_statements() {
    let program = parse("return 5; return 10; return 993322;");
    assert_eq!(program.statements.len(), 3);

    for statement in &program.statements {
        assert!(matches!(statement, Statement::Return { .. }),
                "expected return statement, got {statement:?}");
    }
}

#[test]
fn trailing_semicolons_are_optional() {
    assert_eq!(parse("let x = 5").statements.len(), 1);
    assert_eq!(parse("5 + 5").statements.len(), 1);
    assert_eq!(parse("{ 1; 2 }").statements.len(), 1);
}

#[test]
fn identifier_and_literal_expressions() {
    let program = parse("foobar;");
    match &program.statements[0] {
        Statement::Expression { value: Expression::Identifier { name, .. },
                                .. } => assert_eq!(name, "foobar"),
        other => panic!("expected identifier expression, got {other:?}"),
    }

    let program = parse("5;");
    match &program.statements[0] {
        Statement::Expression { value: Expression::IntegerLiteral { value, .. },
                                .. } => assert_eq!(*value, 5),
        other => panic!("expected integer literal, got {other:?}"),
    }

    let program = parse("\"hello world\";");
    match &program.statements[0] {
        Statement::Expression { value: Expression::StringLiteral { value, .. },
                                .. } => assert_eq!(value, "hello world"),
        other => panic!("expected string literal, got {other:?}"),
    }
}

#[test]
fn function_literals() {
    let program = parse("fn(x, y) { x + y }");
    match &program.statements[0] {
        Statement::Expression { value: Expression::FunctionLiteral { parameters, body, .. },
                                .. } => {
            assert_eq!(parameters.as_ref(), &vec!["x".to_string(), "y".to_string()]);
            assert_eq!(body.statements.len(), 1);
        },
        other => panic!("expected function literal, got {other:?}"),
    }

    let program = parse("fn() {}");
    match &program.statements[0] {
        Statement::Expression { value: Expression::FunctionLiteral { parameters, body, .. },
                                .. } => {
            assert!(parameters.is_empty());
            assert!(body.statements.is_empty());
        },
        other => panic!("expected function literal, got {other:?}"),
    }
}

#[test]
fn conditionals_with_and_without_parens() {
    for source in ["if x < y { x }", "if (x < y) { x }"] {
        let program = parse(source);
        match &program.statements[0] {
            Statement::Expression { value: Expression::Conditional { alternative, .. },
                                    .. } => assert!(alternative.is_none()),
            other => panic!("expected conditional, got {other:?}"),
        }
    }

    let program = parse("if (x < y) { x } else { y }");
    match &program.statements[0] {
        Statement::Expression { value: Expression::Conditional { alternative, .. },
                                .. } => assert!(alternative.is_some()),
        other => panic!("expected conditional, got {other:?}"),
    }
}

#[test]
fn operator_precedence_canon() {
    let tests = [
        ("-a * b", "((-a) * b)"),
        ("!-a", "(!(-a))"),
        ("a + b + c", "((a + b) + c)"),
        ("a + b - c", "((a + b) - c)"),
        ("a * b * c", "((a * b) * c)"),
        ("a * b / c", "((a * b) / c)"),
        ("a + b / c", "(a + (b / c))"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
        ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
        ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
        ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
        ("true", "true"),
        ("false", "false"),
        ("3 > 5 == false", "((3 > 5) == false)"),
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
        ("(5 + 5) * 2", "((5 + 5) * 2)"),
        ("2 / (5 + 5)", "(2 / (5 + 5))"),
        ("-(5 + 5)", "(-(5 + 5))"),
        ("!(true == true)", "(!(true == true))"),
        ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
        ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
         "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"),
        ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
        ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
        ("add(a * b[2], b[1], 2 * [1, 2][1])",
         "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))"),
    ];

    for (source, expected) in tests {
        assert_eq!(parse(source).to_string(), expected, "input: {source}");
    }
}

#[test]
fn logical_operators_bind_below_equality() {
    let tests = [
        ("a && b == c", "(a && (b == c))"),
        ("a == b && c != d", "((a == b) && (c != d))"),
        ("a && b || c", "((a && b) || c)"),
        ("a || b && c", "((a || b) && c)"),
        ("!a && b", "((!a) && b)"),
        ("1 < 2 && 2 < 3", "((1 < 2) && (2 < 3))"),
    ];

    for (source, expected) in tests {
        assert_eq!(parse(source).to_string(), expected, "input: {source}");
    }
}

#[test]
fn printed_programs_reparse_identically() {
    let sources = [
        "a + b * c + d / e - f",
        "-(5 + 5)",
        "!(true == true)",
        "[1, 2 * 2, 3 + 3]",
        "myArray[1 + 1]",
        "add(a, b, 1, 2 * 3)",
        "let x = 5;",
        "return 10;",
        "let add = fn(x, y) { x + y };",
        "if (x < y) { x } else { y }",
        "if x { 1 }",
        "{ let inner = 2; inner }",
        "\"hello\" + \" \" + \"world\"",
        "a && b == c",
        "fn() { return 1; }()",
    ];

    for source in sources {
        let first = parse(source);
        let second = parse(&first.to_string());
        assert_eq!(first, second, "round-trip changed the program for {source:?}");
    }
}

#[test]
fn missing_prefix_function_is_reported() {
    let errors = parse_errors("5 +;");
    assert_eq!(errors, vec!["line 1: no prefix parse function for ;"]);
}

#[test]
fn expectation_errors_accumulate() {
    let errors = parse_errors("let = 5; let y 10;");
    assert_eq!(errors.len(), 3);
    assert_eq!(errors[0], "line 1: expected Identifier, got =");
    assert_eq!(errors[1], "line 1: no prefix parse function for =");
    assert_eq!(errors[2], "line 1: expected =, got Int");
}

#[test]
fn let_requires_identifier_and_assign() {
    assert_eq!(parse_errors("let 5 = 6;")[0], "line 1: expected Identifier, got Int");
    assert_eq!(parse_errors("let x 5;")[0], "line 1: expected =, got Int");
}

#[test]
fn unclosed_block_is_fatal() {
    let mut parser = Parser::new(Lexer::new("{ 1; { 2; } let x = 3;"));
    let program = parser.parse_program();

    assert_eq!(parser.errors().len(), 1);
    assert_eq!(parser.errors()[0].to_string(), "line 1: missing closing brace");
    // The fatal error stops statement collection.
    assert!(program.statements.is_empty());
}

#[test]
fn non_identifier_parameter_is_fatal() {
    let mut parser = Parser::new(Lexer::new("fn(a, 1) { a } let x = 5;"));
    let program = parser.parse_program();

    assert_eq!(parser.errors().len(), 1);
    assert_eq!(parser.errors()[0].to_string(), "line 1: invalid function parameter: Int");
    assert!(program.statements.is_empty());
}

#[test]
fn integer_literal_overflow_is_reported() {
    let errors = parse_errors("9223372036854775808");
    assert_eq!(errors,
               vec!["line 1: could not parse 9223372036854775808 as integer"]);

    // The maximum value itself is fine.
    let program = parse("9223372036854775807;");
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn illegal_tokens_surface_as_parse_errors() {
    let errors = parse_errors("let x = 123abc");
    assert_eq!(errors, vec!["line 1: no prefix parse function for Illegal"]);
}

#[test]
fn partial_program_is_kept_on_recoverable_errors() {
    let mut parser = Parser::new(Lexer::new("let x = 1; let 2 = 3; let y = 4;"));
    let program = parser.parse_program();

    assert!(!parser.errors().is_empty());
    // The two well-formed statements survive.
    let names: Vec<_> = program.statements
                               .iter()
                               .filter_map(|statement| match statement {
                                   Statement::Let { name, .. } => Some(name.as_str()),
                                   _ => None,
                               })
                               .collect();
    assert_eq!(names, vec!["x", "y"]);
}
