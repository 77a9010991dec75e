use super::ast::{Access, BinOp, Node};
use super::error::{ParseError, Result};
use crate::tree_walk::token::{Keyword, Literal, Token, TokenKind};

/// Parses a token sequence into the program's top-level statement nodes.
pub fn parse(tokens: Vec<Token>) -> Result<Vec<Node>> {
    Parser::new(tokens).parse()
}

/// Recursive-descent, single-token lookahead. Comments and newlines carry no
/// syntactic meaning and are filtered out up front.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        let tokens = tokens
            .into_iter()
            .filter(|token| {
                token.kind != TokenKind::Comment && token.kind != TokenKind::Newline
            })
            .collect();
        Self { tokens, current: 0 }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }

    fn peek_kind(&self) -> Option<&TokenKind> {
        self.peek().map(|token| &token.kind)
    }

    fn peek_keyword(&self, keyword: Keyword) -> bool {
        self.peek_kind() == Some(&TokenKind::Keyword(keyword))
    }

    fn advance(&mut self) -> Result<Token> {
        let token = self
            .tokens
            .get(self.current)
            .ok_or(ParseError::UnexpectedEnd)?
            .clone();
        self.current += 1;
        Ok(token)
    }

    fn unexpected(&self, expected: impl ToString) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::UnexpectedToken {
                line: token.line,
                column: token.column,
                expected: expected.to_string(),
                found: token.kind.to_string(),
            },
            None => ParseError::UnexpectedEnd,
        }
    }

    /// Consume-or-fail on an exact token kind.
    fn eat(&mut self, kind: TokenKind) -> Result<Token> {
        if self.peek_kind() == Some(&kind) {
            self.advance()
        } else {
            Err(self.unexpected(kind))
        }
    }

    /// Consume-or-fail on a specific keyword.
    fn eat_keyword(&mut self, keyword: Keyword) -> Result<Token> {
        self.eat(TokenKind::Keyword(keyword))
    }

    fn eat_identifier(&mut self) -> Result<String> {
        Ok(self.eat(TokenKind::Identifier)?.lexeme)
    }

    pub fn parse(&mut self) -> Result<Vec<Node>> {
        let mut program = Vec::new();
        while let Some(kind) = self.peek_kind() {
            if *kind == TokenKind::Eof {
                break;
            }
            program.push(self.statement()?);
        }
        Ok(program)
    }

    fn statement(&mut self) -> Result<Node> {
        match self.peek_kind() {
            Some(TokenKind::Keyword(Keyword::Sketch)) => self.function_statement(),
            Some(TokenKind::Keyword(Keyword::Finished)) => self.return_statement(),
            Some(TokenKind::Keyword(Keyword::Loop)) => self.for_statement(),
            Some(TokenKind::Keyword(Keyword::While)) => self.while_statement(),
            Some(TokenKind::Keyword(Keyword::If)) => self.conditional_statement(Keyword::If),
            Some(TokenKind::Keyword(Keyword::Prepare)) => self.assignment_statement(),
            Some(TokenKind::Keyword(Keyword::Brush)) => self.struct_statement(),
            Some(_) => self.expression(),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    /// `{ stmt* }`
    fn block(&mut self) -> Result<Vec<Node>> {
        self.eat(TokenKind::LeftBrace)?;
        let mut body = Vec::new();
        while let Some(kind) = self.peek_kind() {
            if *kind == TokenKind::RightBrace || *kind == TokenKind::Eof {
                break;
            }
            body.push(self.statement()?);
        }
        self.eat(TokenKind::RightBrace)?;
        Ok(body)
    }

    /// `sketch Name [needs ( params )] { stmt* }`
    fn function_statement(&mut self) -> Result<Node> {
        self.eat_keyword(Keyword::Sketch)?;
        let name = self.eat_identifier()?;

        let mut params = Vec::new();
        if self.peek_keyword(Keyword::Needs) {
            self.eat_keyword(Keyword::Needs)?;
            self.eat(TokenKind::LeftParen)?;
            params = self.identifier_list()?;
            self.eat(TokenKind::RightParen)?;
        }

        let body = self.block()?;
        Ok(Node::FunctionStatement { name, params, body })
    }

    /// `finished expr`
    fn return_statement(&mut self) -> Result<Node> {
        self.eat_keyword(Keyword::Finished)?;
        let value = Box::new(self.expression()?);
        Ok(Node::ReturnStatement { value })
    }

    /// `loop Name through ( start , end ) { stmt* }`
    fn for_statement(&mut self) -> Result<Node> {
        self.eat_keyword(Keyword::Loop)?;
        let variable = self.eat_identifier()?;
        self.eat_keyword(Keyword::Through)?;

        let open = self.eat(TokenKind::LeftParen)?;
        let mut range = self.expression_list()?;
        if range.len() != 2 {
            return Err(ParseError::MalformedRange {
                line: open.line,
                column: open.column,
                found: range.len(),
            });
        }
        self.eat(TokenKind::RightParen)?;
        let end = Box::new(range.pop().ok_or(ParseError::UnexpectedEnd)?);
        let start = Box::new(range.pop().ok_or(ParseError::UnexpectedEnd)?);

        let body = self.block()?;
        Ok(Node::ForStatement {
            variable,
            start,
            end,
            body,
        })
    }

    /// `while ( expr ) { stmt* }`
    fn while_statement(&mut self) -> Result<Node> {
        self.eat_keyword(Keyword::While)?;
        self.eat(TokenKind::LeftParen)?;
        let condition = Box::new(self.expression()?);
        self.eat(TokenKind::RightParen)?;
        let body = self.block()?;
        Ok(Node::WhileStatement { condition, body })
    }

    /// `if ( expr ) { stmt* }` with `elif`/`else` links nested into the
    /// `otherwise` chain; an `else` clause gets a literal `true` guard.
    fn conditional_statement(&mut self, keyword: Keyword) -> Result<Node> {
        self.eat_keyword(keyword)?;

        let condition = if keyword == Keyword::Else {
            Node::Literal(Literal::Bool(true))
        } else {
            self.eat(TokenKind::LeftParen)?;
            let condition = self.expression()?;
            self.eat(TokenKind::RightParen)?;
            condition
        };

        let body = self.block()?;

        let mut otherwise = Vec::new();
        loop {
            if self.peek_keyword(Keyword::Elif) {
                otherwise.push(self.conditional_statement(Keyword::Elif)?);
            } else if self.peek_keyword(Keyword::Else) {
                otherwise.push(self.conditional_statement(Keyword::Else)?);
            } else {
                break;
            }
        }

        Ok(Node::ConditionalStatement {
            condition: Box::new(condition),
            body,
            otherwise,
        })
    }

    /// `prepare Name as expr` or `prepare Name . property as expr`
    fn assignment_statement(&mut self) -> Result<Node> {
        self.eat_keyword(Keyword::Prepare)?;
        let name = self.eat_identifier()?;

        if self.peek_kind() == Some(&TokenKind::Period) {
            self.eat(TokenKind::Period)?;
            let property = self.eat_identifier()?;
            self.eat_keyword(Keyword::As)?;
            let value = Box::new(self.expression()?);
            return Ok(Node::Set {
                target: name,
                property,
                value,
            });
        }

        self.eat_keyword(Keyword::As)?;
        let value = Box::new(self.expression()?);
        Ok(Node::Variable {
            name,
            initializer: Some(value),
        })
    }

    /// `brush Name has { member , member , ... }`
    fn struct_statement(&mut self) -> Result<Node> {
        self.eat_keyword(Keyword::Brush)?;
        let name = self.eat_identifier()?;
        self.eat_keyword(Keyword::Has)?;

        self.eat(TokenKind::LeftBrace)?;
        let members = self.identifier_list()?;
        self.eat(TokenKind::RightBrace)?;

        Ok(Node::StructStatement { name, members })
    }

    /// Binary expressions are parsed right-recursively over a flat operator
    /// set, then locally rebalanced one level when the just-consumed
    /// operator outranks the right subtree's operator. This fixes a single
    /// precedence inversion; longer mixed chains keep the shape this
    /// produces.
    fn expression(&mut self) -> Result<Node> {
        let left = self.call()?;
        let Some(operator) = self.peek_kind().and_then(BinOp::from_token) else {
            return Ok(left);
        };
        self.advance()?;
        let right = self.expression()?;

        if let Node::BinaryExpr {
            left: right_left,
            operator: right_operator,
            right: right_right,
        } = right
        {
            if operator.precedence() > right_operator.precedence() {
                return Ok(Node::BinaryExpr {
                    left: Box::new(Node::BinaryExpr {
                        left: Box::new(left),
                        operator,
                        right: right_left,
                    }),
                    operator: right_operator,
                    right: right_right,
                });
            }
            return Ok(Node::BinaryExpr {
                left: Box::new(left),
                operator,
                right: Box::new(Node::BinaryExpr {
                    left: right_left,
                    operator: right_operator,
                    right: right_right,
                }),
            });
        }

        Ok(Node::BinaryExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    /// Postfix chain: calls, indexed access, dotted access, left to right.
    fn call(&mut self) -> Result<Node> {
        let mut expression = self.simple()?;
        loop {
            match self.peek_kind() {
                Some(TokenKind::LeftParen) => {
                    self.eat(TokenKind::LeftParen)?;
                    let mut args = Vec::new();
                    if self.peek_kind() != Some(&TokenKind::RightParen) {
                        args = self.expression_list()?;
                    }
                    self.eat(TokenKind::RightParen)?;
                    expression = Node::Call {
                        callee: Box::new(expression),
                        args,
                    };
                }
                Some(TokenKind::LeftBracket) => {
                    self.eat(TokenKind::LeftBracket)?;
                    let index = self.expression()?;
                    self.eat(TokenKind::RightBracket)?;
                    expression = Node::Get {
                        object: Box::new(expression),
                        property: Access::Indexed(Box::new(index)),
                    };
                }
                Some(TokenKind::Period) => {
                    self.eat(TokenKind::Period)?;
                    let name = self.eat_identifier()?;
                    expression = Node::Get {
                        object: Box::new(expression),
                        property: Access::Dotted(name),
                    };
                }
                _ => break,
            }
        }
        Ok(expression)
    }

    fn simple(&mut self) -> Result<Node> {
        let token = self.advance()?;
        match token.kind {
            TokenKind::Str | TokenKind::Number | TokenKind::Boolean => match token.literal {
                Some(literal) => Ok(Node::Literal(literal)),
                None => Err(ParseError::ExpectedExpression {
                    line: token.line,
                    column: token.column,
                    found: token.kind.to_string(),
                }),
            },

            TokenKind::LeftBracket => {
                let mut items = Vec::new();
                if self.peek_kind() != Some(&TokenKind::RightBracket) {
                    items = self.expression_list()?;
                }
                self.eat(TokenKind::RightBracket)?;
                Ok(Node::ArrayLiteral(items))
            }

            TokenKind::LeftParen => {
                let inner = self.expression()?;
                self.eat(TokenKind::RightParen)?;
                Ok(inner)
            }

            TokenKind::Identifier => Ok(Node::Variable {
                name: token.lexeme,
                initializer: None,
            }),

            TokenKind::Keyword(Keyword::Prep) => {
                let name = self.eat_identifier()?;
                self.eat(TokenKind::LeftParen)?;
                let mut members = Vec::new();
                while self.peek_kind() != Some(&TokenKind::RightParen) {
                    let member = self.eat_identifier()?;
                    self.eat(TokenKind::Colon)?;
                    members.push((member, self.expression()?));
                    if self.peek_kind() == Some(&TokenKind::Comma) {
                        self.eat(TokenKind::Comma)?;
                    }
                }
                self.eat(TokenKind::RightParen)?;
                Ok(Node::Instance { name, members })
            }

            kind => Err(ParseError::ExpectedExpression {
                line: token.line,
                column: token.column,
                found: kind.to_string(),
            }),
        }
    }

    fn expression_list(&mut self) -> Result<Vec<Node>> {
        let mut expressions = vec![self.expression()?];
        while self.peek_kind() == Some(&TokenKind::Comma) {
            self.eat(TokenKind::Comma)?;
            expressions.push(self.expression()?);
        }
        Ok(expressions)
    }

    fn identifier_list(&mut self) -> Result<Vec<String>> {
        let mut identifiers = vec![self.eat_identifier()?];
        while self.peek_kind() == Some(&TokenKind::Comma) {
            self.eat(TokenKind::Comma)?;
            identifiers.push(self.eat_identifier()?);
        }
        Ok(identifiers)
    }
}
