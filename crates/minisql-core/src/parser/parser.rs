//! SQL Parser implementation.

use tracing::{debug, trace};

use super::error::{ParseError, ParseErrorKind};
use super::precedence::{
    ends_expression_list, keyword_to_data_type, keyword_to_function, Precedence,
};
use crate::ast::{
    BinaryOp, ColumnDef, ColumnRef, CreateTableStatement, DataType, DeleteStatement,
    DropTableStatement, Expr, Function, InsertStatement, SelectStatement, Statement, TableRef,
};
use crate::lexer::{Keyword, Lexer, Token, TokenKind};

/// SQL Parser.
///
/// A parser reads exactly one statement, optionally followed by `;`. After a
/// failure it keeps returning the recorded error; build a new parser for the
/// next statement.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    error: Option<ParseError>,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Deepest allowed nesting of expressions. Each parenthesized
    /// expression, function argument and unary operator adds a level.
    pub const MAX_DEPTH: usize = 64;

    /// Creates a new parser for the given input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer::new(input);
        let (current, error) = match lexer.next_token() {
            Ok(token) => (token, None),
            Err(err) => (Token::eof(err.position), Some(ParseError::from(err))),
        };
        Self {
            lexer,
            current,
            error,
            depth: 0,
        }
    }

    /// Parses a single SQL statement.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input is not a valid SQL statement, or
    /// the error recorded by an earlier failed call.
    pub fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        let result = self.parse_complete_statement();
        match &result {
            Ok(stmt) => debug!(kind = %stmt.kind(), "parsed statement"),
            Err(err) => {
                debug!(error = %err, "parse failed");
                self.error = Some(err.clone());
            }
        }
        result
    }

    /// Returns the recorded error, if parsing failed.
    #[must_use]
    pub const fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    /// Returns the recorded diagnostic text, if parsing failed.
    #[must_use]
    pub fn diagnostic(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    fn parse_complete_statement(&mut self) -> Result<Statement, ParseError> {
        let stmt = match self.current.as_keyword() {
            Some(Keyword::Create) => Statement::CreateTable(self.parse_create_table_statement()?),
            Some(Keyword::Drop) => Statement::DropTable(self.parse_drop_table_statement()?),
            Some(Keyword::Insert) => Statement::Insert(self.parse_insert_statement()?),
            Some(Keyword::Select) => Statement::Select(self.parse_select_statement()?),
            Some(Keyword::Delete) => Statement::Delete(self.parse_delete_statement()?),
            _ => return Err(ParseError::unexpected("statement", &self.current)),
        };

        if self.check(TokenKind::Semicolon) {
            self.advance()?;
        }
        if !self.current.is_eof() {
            return Err(ParseError::unexpected("end of input", &self.current));
        }
        Ok(stmt)
    }

    /// Parses a CREATE TABLE statement.
    fn parse_create_table_statement(&mut self) -> Result<CreateTableStatement, ParseError> {
        self.expect_keyword(Keyword::Create)?;
        self.expect_keyword(Keyword::Table)?;

        let if_not_exists = if self.check_keyword(Keyword::If) {
            self.advance()?;
            self.expect_keyword(Keyword::Not)?;
            self.expect_keyword(Keyword::Exists)?;
            true
        } else {
            false
        };

        let table_name = self.expect_identifier("table name")?;

        self.expect(TokenKind::LeftParen)?;
        if self.check(TokenKind::RightParen) {
            return Err(ParseError::empty("column definition list", &self.current));
        }
        let columns = self.parse_comma_separated(Self::parse_column_def)?;
        self.expect(TokenKind::RightParen)?;

        Ok(CreateTableStatement {
            table_name,
            columns,
            if_not_exists,
        })
    }

    fn parse_column_def(&mut self) -> Result<ColumnDef, ParseError> {
        let column_name = self.expect_identifier("column name")?;
        let data_type = self.parse_data_type()?;
        Ok(ColumnDef::new(column_name, data_type))
    }

    /// Parses a column type. `VARCHAR(n)` and `DECIMAL(p, s)` arguments are
    /// checked and dropped.
    fn parse_data_type(&mut self) -> Result<DataType, ParseError> {
        let Some(data_type) = self.current.as_keyword().and_then(keyword_to_data_type) else {
            return Err(ParseError::unexpected("data type", &self.current));
        };
        let keyword = self.advance()?.as_keyword();

        let max_arguments = match keyword {
            Some(Keyword::Varchar) => 1,
            Some(Keyword::Decimal) => 2,
            _ => 0,
        };
        if max_arguments > 0 && self.check(TokenKind::LeftParen) {
            self.advance()?;
            let mut count = 0;
            loop {
                self.expect(TokenKind::IntegerLiteral)?;
                count += 1;
                if count == max_arguments || !self.check(TokenKind::Comma) {
                    break;
                }
                self.advance()?;
            }
            self.expect(TokenKind::RightParen)?;
        }

        Ok(data_type)
    }

    /// Parses a DROP TABLE statement.
    fn parse_drop_table_statement(&mut self) -> Result<DropTableStatement, ParseError> {
        self.expect_keyword(Keyword::Drop)?;
        self.expect_keyword(Keyword::Table)?;

        let if_exists = if self.check_keyword(Keyword::If) {
            self.advance()?;
            self.expect_keyword(Keyword::Exists)?;
            true
        } else {
            false
        };

        let table_name = self.expect_identifier("table name")?;
        Ok(DropTableStatement {
            table_name,
            if_exists,
        })
    }

    /// Parses an INSERT statement.
    fn parse_insert_statement(&mut self) -> Result<InsertStatement, ParseError> {
        self.expect_keyword(Keyword::Insert)?;
        self.expect_keyword(Keyword::Into)?;
        let table_name = self.expect_identifier("table name")?;

        // Optional column list
        let columns = if self.check(TokenKind::LeftParen) {
            self.advance()?;
            if self.check(TokenKind::RightParen) {
                return Err(ParseError::empty("column list", &self.current));
            }
            let columns = self.parse_comma_separated(|p| p.expect_identifier("column name"))?;
            self.expect(TokenKind::RightParen)?;
            columns
        } else {
            vec![]
        };

        self.expect_keyword(Keyword::Values)?;
        let rows = self.parse_comma_separated(|p| {
            p.expect(TokenKind::LeftParen)?;
            let row = p.parse_expression_list("VALUES row")?;
            p.expect(TokenKind::RightParen)?;
            Ok(row)
        })?;

        Ok(InsertStatement {
            table_name,
            columns,
            rows,
        })
    }

    /// Parses a SELECT statement.
    fn parse_select_statement(&mut self) -> Result<SelectStatement, ParseError> {
        self.expect_keyword(Keyword::Select)?;
        let select_list = self.parse_expression_list("select list")?;

        // FROM clause (optional for expressions like SELECT 1+1)
        let from_table = if self.check_keyword(Keyword::From) {
            self.advance()?;
            Some(self.parse_table_ref()?)
        } else {
            None
        };

        let where_clause = self.parse_optional_where()?;

        Ok(SelectStatement {
            select_list,
            from_table,
            where_clause,
        })
    }

    /// Parses a DELETE statement.
    fn parse_delete_statement(&mut self) -> Result<DeleteStatement, ParseError> {
        self.expect_keyword(Keyword::Delete)?;
        self.expect_keyword(Keyword::From)?;
        let from_table = self.parse_table_ref()?;
        let where_clause = self.parse_optional_where()?;

        Ok(DeleteStatement {
            from_table,
            where_clause,
        })
    }

    fn parse_table_ref(&mut self) -> Result<TableRef, ParseError> {
        Ok(TableRef::new(self.expect_identifier("table name")?))
    }

    fn parse_optional_where(&mut self) -> Result<Option<Expr>, ParseError> {
        if self.check_keyword(Keyword::Where) {
            self.advance()?;
            Ok(Some(self.parse_expression()?))
        } else {
            Ok(None)
        }
    }

    // Expressions

    /// Parses a full expression.
    fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.nested(|p| p.parse_binary(Precedence::LOWEST))
    }

    /// Runs `parse` one nesting level deeper.
    fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= Self::MAX_DEPTH {
            return Err(ParseError::new(
                ParseErrorKind::Syntax,
                "expression nested too deeply",
                self.current.position,
            ));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Parses operators of `level`, folding them left to right.
    fn parse_binary(&mut self, level: Precedence) -> Result<Expr, ParseError> {
        let mut left = self.parse_operand(level)?;
        while let Some(op) = level.binary_op(self.current.kind) {
            self.advance()?;
            let right = self.parse_operand(level)?;
            left = left.binary(op, right);
        }
        Ok(left)
    }

    fn parse_operand(&mut self, level: Precedence) -> Result<Expr, ParseError> {
        match level.next() {
            Some(tighter) => self.parse_binary(tighter),
            None => self.parse_unary(),
        }
    }

    /// Parses prefix `+` and `-`. A negated numeric literal folds into the
    /// literal text; any other negated operand becomes `0 - operand`.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        match self.current.kind {
            TokenKind::Plus => {
                self.advance()?;
                self.nested(Self::parse_unary)
            }
            TokenKind::Minus => {
                self.advance()?;
                let operand = self.nested(Self::parse_unary)?;
                Ok(match operand {
                    Expr::Literal(literal) if literal.data_type.is_numeric() => {
                        Expr::Literal(literal.negated())
                    }
                    operand => Expr::int("0").binary(BinaryOp::Subtract, operand),
                })
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.current.kind {
            TokenKind::IntegerLiteral => Ok(Expr::int(self.advance()?.text)),
            TokenKind::DecimalLiteral => Ok(Expr::decimal(self.advance()?.text)),
            TokenKind::StringLiteral => Ok(Expr::string(self.advance()?.text)),
            TokenKind::Keyword(Keyword::True) => {
                self.advance()?;
                Ok(Expr::boolean(true))
            }
            TokenKind::Keyword(Keyword::False) => {
                self.advance()?;
                Ok(Expr::boolean(false))
            }
            TokenKind::Keyword(keyword) => match keyword_to_function(keyword) {
                Some(function) => self.parse_function_call(function),
                None => Err(ParseError::unexpected("expression", &self.current)),
            },
            TokenKind::Star => {
                self.advance()?;
                Ok(Expr::wildcard())
            }
            TokenKind::Identifier => self.parse_column_ref(),
            TokenKind::LeftParen => {
                self.advance()?;
                let expr = self.parse_expression()?;
                self.expect(TokenKind::RightParen)?;
                Ok(expr)
            }
            _ => Err(ParseError::unexpected("expression", &self.current)),
        }
    }

    /// Parses `column`, `table.column` or `table.*`.
    fn parse_column_ref(&mut self) -> Result<Expr, ParseError> {
        let name = self.advance()?.text;
        if !self.check(TokenKind::Dot) {
            return Ok(Expr::Column(ColumnRef::new(name)));
        }
        self.advance()?;
        let column = if self.check(TokenKind::Star) {
            self.advance()?;
            String::from(ColumnRef::WILDCARD)
        } else {
            self.expect_identifier("column name")?
        };
        Ok(Expr::Column(ColumnRef::qualified(name, column)))
    }

    /// Parses `NAME(args)`. The argument list may be empty.
    fn parse_function_call(&mut self, function: Function) -> Result<Expr, ParseError> {
        self.advance()?;
        self.expect(TokenKind::LeftParen)?;
        let args = if self.check(TokenKind::RightParen) {
            vec![]
        } else {
            self.parse_comma_separated(Self::parse_expression)?
        };
        self.expect(TokenKind::RightParen)?;
        Ok(Expr::call(function, args))
    }

    /// Parses a non-empty comma-separated expression list. The list is
    /// empty when it is closed before its first item.
    fn parse_expression_list(&mut self, what: &str) -> Result<Vec<Expr>, ParseError> {
        if ends_expression_list(self.current.kind) {
            return Err(ParseError::empty(what, &self.current));
        }
        self.parse_comma_separated(Self::parse_expression)
    }

    fn parse_comma_separated<T>(
        &mut self,
        mut parse_item: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        let mut items = vec![parse_item(self)?];
        while self.check(TokenKind::Comma) {
            self.advance()?;
            items.push(parse_item(self)?);
        }
        Ok(items)
    }

    // Helper methods

    /// Moves to the next token and returns the one just consumed.
    fn advance(&mut self) -> Result<Token, ParseError> {
        let next = self.lexer.next_token()?;
        trace!(token = %self.current, "consumed token");
        Ok(core::mem::replace(&mut self.current, next))
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    fn check_keyword(&self, keyword: Keyword) -> bool {
        self.check(TokenKind::Keyword(keyword))
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(ParseError::unexpected(kind, &self.current))
        }
    }

    fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), ParseError> {
        self.expect(TokenKind::Keyword(keyword)).map(drop)
    }

    fn expect_identifier(&mut self, what: &str) -> Result<String, ParseError> {
        if self.check(TokenKind::Identifier) {
            Ok(self.advance()?.text)
        } else {
            Err(ParseError::unexpected(what, &self.current))
        }
    }
}
