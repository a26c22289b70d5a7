use crate::{
    ast::{Expression, InfixOperator},
    interpreter::{
        lexer::Token,
        parser::{
            core::infix_precedence,
            Parser, Precedence,
        },
    },
};

impl Parser<'_> {
    /// Combines `left` with the infix construct at the current token.
    ///
    /// Only reached for tokens the precedence table knows, so the handler
    /// set and the table cover exactly the same tokens: the binary
    /// operators, `(` for calls, and `[` for indexing.
    pub(in crate::interpreter::parser) fn parse_infix(&mut self,
                                                      left: Expression)
                                                      -> Option<Expression> {
        match self.current {
            Token::Plus => self.parse_infix_operator(left, InfixOperator::Add),
            Token::Minus => self.parse_infix_operator(left, InfixOperator::Sub),
            Token::Asterisk => self.parse_infix_operator(left, InfixOperator::Mul),
            Token::Slash => self.parse_infix_operator(left, InfixOperator::Div),
            Token::Less => self.parse_infix_operator(left, InfixOperator::Less),
            Token::Greater => self.parse_infix_operator(left, InfixOperator::Greater),
            Token::Equal => self.parse_infix_operator(left, InfixOperator::Equal),
            Token::NotEqual => self.parse_infix_operator(left, InfixOperator::NotEqual),
            Token::And => self.parse_infix_operator(left, InfixOperator::And),
            Token::Or => self.parse_infix_operator(left, InfixOperator::Or),
            Token::LParen => self.parse_call(left),
            Token::LBracket => self.parse_index(left),
            _ => unreachable!("token without infix handler reached infix position"),
        }
    }

    /// Parses the right-hand side of a left-associative binary operator.
    ///
    /// The operator's own precedence is passed down, which is what makes
    /// same-level chains associate to the left.
    fn parse_infix_operator(&mut self,
                            left: Expression,
                            operator: InfixOperator)
                            -> Option<Expression> {
        let precedence =
            infix_precedence(&self.current).unwrap_or(Precedence::Lowest);
        let line = self.line;
        self.advance();

        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix { left: Box::new(left),
                                 operator,
                                 right: Box::new(right),
                                 line })
    }

    /// Parses `callee(arg1, arg2, ...)`; the callee is whatever expression
    /// was already parsed to the left of the `(`.
    fn parse_call(&mut self, function: Expression) -> Option<Expression> {
        let line = self.line;
        self.advance();

        let arguments = self.parse_expression_list(&Token::RParen)?;

        Some(Expression::Call { function: Box::new(function),
                                arguments,
                                line })
    }

    /// Parses `left[index]` with a single index expression.
    fn parse_index(&mut self, left: Expression) -> Option<Expression> {
        let line = self.line;
        self.advance();

        let index = self.parse_expression(Precedence::Lowest)?;
        if !self.expect(&Token::RBracket) {
            return None;
        }

        Some(Expression::Index { left: Box::new(left),
                                 index: Box::new(index),
                                 line })
    }
}
