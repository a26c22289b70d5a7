use std::rc::Rc;

use crate::{
    ast::{Expression, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses the expression form that starts at the current token.
    ///
    /// This is the prefix half of the Pratt parser: literals, identifiers,
    /// grouped expressions, the unary operators, conditionals, function
    /// literals, and array literals. A token with no prefix handler records
    /// a `no prefix parse function` error and is consumed so parsing can
    /// resume behind it.
    pub(in crate::interpreter::parser) fn parse_prefix(&mut self) -> Option<Expression> {
        match self.current.clone() {
            Token::Identifier(name) => {
                let line = self.line;
                self.advance();
                Some(Expression::Identifier { name, line })
            },
            Token::Int(literal) => self.parse_integer_literal(&literal),
            Token::Str(value) => {
                let line = self.line;
                self.advance();
                Some(Expression::StringLiteral { value, line })
            },
            Token::True => {
                let line = self.line;
                self.advance();
                Some(Expression::BooleanLiteral { value: true, line })
            },
            Token::False => {
                let line = self.line;
                self.advance();
                Some(Expression::BooleanLiteral { value: false, line })
            },
            Token::LParen => self.parse_grouped_expression(),
            Token::Bang => self.parse_prefix_operator(PrefixOperator::Not),
            Token::Minus => self.parse_prefix_operator(PrefixOperator::Negate),
            Token::If => self.parse_conditional(),
            Token::Function => self.parse_function_literal(),
            Token::LBracket => self.parse_array_literal(),
            other => {
                self.errors.push(ParseError::NoPrefixFunction { token: other.to_string(),
                                                                line:  self.line, });
                self.advance();
                None
            },
        }
    }

    /// Parses an integer literal out of its decimal text.
    ///
    /// The lexer guarantees the text is all digits, so the only possible
    /// failure is a value outside the 64-bit signed range.
    fn parse_integer_literal(&mut self, literal: &str) -> Option<Expression> {
        let line = self.line;
        self.advance();

        match literal.parse::<i64>() {
            Ok(value) => Some(Expression::IntegerLiteral { value, line }),
            Err(_) => {
                self.errors.push(ParseError::InvalidInteger { literal: literal.to_string(),
                                                              line });
                None
            },
        }
    }

    /// Parses `( <expression> )`. The parentheses only group; no node is
    /// produced for them.
    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.advance();

        let expression = self.parse_expression(Precedence::Lowest)?;
        if !self.expect(&Token::RParen) {
            return None;
        }

        Some(expression)
    }

    /// Parses `!x` or `-x`; the operand binds at `Prefix` strength.
    fn parse_prefix_operator(&mut self, operator: PrefixOperator) -> Option<Expression> {
        let line = self.line;
        self.advance();

        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix { operator,
                                  right: Box::new(right),
                                  line })
    }

    /// Parses `if COND { ... }` with an optional `else { ... }`.
    ///
    /// Parentheses around the condition are accepted but not required; a
    /// stray opener or closer around the condition position is consumed
    /// silently.
    fn parse_conditional(&mut self) -> Option<Expression> {
        let line = self.line;
        self.advance();

        if self.current == Token::LParen {
            self.advance();
        }
        let condition = self.parse_expression(Precedence::Lowest)?;
        if self.current == Token::RParen {
            self.advance();
        }

        if self.current != Token::LBrace {
            self.errors.push(ParseError::UnexpectedToken { expected: "{".to_string(),
                                                           found:    self.current.to_string(),
                                                           line:     self.line, });
            return None;
        }
        let consequence = self.parse_block_statement()?;

        let alternative = if self.current == Token::Else {
            self.advance();
            if self.current != Token::LBrace {
                self.errors.push(ParseError::UnexpectedToken { expected: "{".to_string(),
                                                               found:    self.current.to_string(),
                                                               line:     self.line, });
                return None;
            }
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Some(Expression::Conditional { condition: Box::new(condition),
                                       consequence,
                                       alternative,
                                       line })
    }

    /// Parses `fn(p1, p2) { ... }`.
    ///
    /// The parameter list may be empty. Anything other than an identifier
    /// in parameter position is a fatal parse error: the `invalid` flag is
    /// set and the outer loops stop.
    fn parse_function_literal(&mut self) -> Option<Expression> {
        let line = self.line;
        self.advance();

        if !self.expect(&Token::LParen) {
            return None;
        }

        let mut parameters = Vec::new();
        if self.current == Token::RParen {
            self.advance();
        } else {
            loop {
                match &self.current {
                    Token::Identifier(name) => {
                        parameters.push(name.clone());
                        self.advance();
                    },
                    other => {
                        self.errors.push(ParseError::InvalidParameter { found: other.to_string(),
                                                                        line:  self.line, });
                        self.invalid = true;
                        return None;
                    },
                }

                if self.current == Token::Comma {
                    self.advance();
                    continue;
                }
                if !self.expect(&Token::RParen) {
                    return None;
                }
                break;
            }
        }

        if self.current != Token::LBrace {
            self.errors.push(ParseError::UnexpectedToken { expected: "{".to_string(),
                                                           found:    self.current.to_string(),
                                                           line:     self.line, });
            return None;
        }
        let body = self.parse_block_statement()?;

        Some(Expression::FunctionLiteral { parameters: Rc::new(parameters),
                                           body: Rc::new(body),
                                           line })
    }

    /// Parses `[e1, e2, ...]`.
    fn parse_array_literal(&mut self) -> Option<Expression> {
        let line = self.line;
        self.advance();

        let elements = self.parse_expression_list(&Token::RBracket)?;

        Some(Expression::ArrayLiteral { elements, line })
    }
}
