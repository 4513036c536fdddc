//! SQL Tokenizer implementation.

use super::{Keyword, LexError, Position, Token, TokenKind};

/// A lexer that tokenizes SQL input.
///
/// The lexer only moves forward; to scan the same input again, create a new
/// one.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current position.
    pos: Position,
    /// The position of the start of the current token.
    start: Position,
    /// Set once the iterator has yielded `Eof` or an error.
    done: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: Position::start(),
            start: Position::start(),
            done: false,
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos.offset..].chars().next()
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos.offset..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos = self.pos.advance(c);
        Some(c)
    }

    /// Skips whitespace and comments.
    fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }

            // -- line comment
            if self.peek() == Some('-') && self.peek_next() == Some('-') {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
                continue;
            }

            // /* block comment */
            if self.peek() == Some('/') && self.peek_next() == Some('*') {
                let opened_at = self.pos;
                self.advance();
                self.advance();
                loop {
                    match self.advance() {
                        Some('*') if self.peek() == Some('/') => {
                            self.advance();
                            break;
                        }
                        Some(_) => {}
                        None => {
                            return Err(LexError::new("unterminated block comment", opened_at));
                        }
                    }
                }
                continue;
            }

            return Ok(());
        }
    }

    /// Source text of the current token.
    fn lexeme(&self) -> &'a str {
        &self.input[self.start.offset..self.pos.offset]
    }

    /// Creates a token whose text is the verbatim lexeme.
    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.lexeme(), self.start)
    }

    /// Scans an identifier or keyword. Both are stored uppercased.
    fn scan_identifier(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.advance();
        }

        let text = self.lexeme().to_uppercase();
        let kind = Keyword::from_str(&text).map_or(TokenKind::Identifier, TokenKind::Keyword);
        Token::new(kind, text, self.start)
    }

    /// Scans a number. Any decimal point makes it a decimal, so `1.` and
    /// `1.5` are both decimals.
    fn scan_number(&mut self) -> Token {
        self.skip_digits();

        if self.peek() != Some('.') {
            return self.make_token(TokenKind::IntegerLiteral);
        }
        self.advance(); // consume .
        self.scan_fraction()
    }

    /// Scans the digits after a decimal point, as in `.5`.
    fn scan_fraction(&mut self) -> Token {
        self.skip_digits();
        self.make_token(TokenKind::DecimalLiteral)
    }

    fn skip_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    /// Scans a string literal; the opening quote has already been consumed.
    fn scan_string(&mut self, quote: char) -> Result<Token, LexError> {
        let mut value = String::new();

        loop {
            match self.advance() {
                Some(c) if c == quote => {
                    // A doubled quote stands for one quote character.
                    if self.peek() == Some(quote) {
                        self.advance();
                        value.push(quote);
                    } else {
                        break;
                    }
                }
                Some('\\') => match self.advance() {
                    Some(escaped) => value.push(unescape(escaped)),
                    None => return Err(self.unterminated_string()),
                },
                Some(c) => value.push(c),
                None => return Err(self.unterminated_string()),
            }
        }

        Ok(Token::new(TokenKind::StringLiteral, value, self.start))
    }

    fn unterminated_string(&self) -> LexError {
        LexError::new("unterminated string literal", self.start)
    }

    /// Scans the next token.
    ///
    /// Once the input is exhausted every call returns an `Eof` token.
    ///
    /// # Errors
    ///
    /// Returns a `LexError` for an unterminated string or block comment and
    /// for characters that cannot start a token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments()?;
        self.start = self.pos;

        let Some(c) = self.advance() else {
            return Ok(Token::eof(self.start));
        };

        let token = match c {
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            ',' => self.make_token(TokenKind::Comma),
            ';' => self.make_token(TokenKind::Semicolon),
            '.' if self.peek().is_some_and(|c| c.is_ascii_digit()) => self.scan_fraction(),
            '.' => self.make_token(TokenKind::Dot),
            '+' => self.make_token(TokenKind::Plus),
            '-' => self.make_token(TokenKind::Minus),
            '*' => self.make_token(TokenKind::Star),
            '/' => self.make_token(TokenKind::Slash),
            '=' => self.make_token(TokenKind::Eq),

            // Potentially multi-character tokens
            '<' => {
                if self.peek() == Some('=') {
                    self.advance();
                    self.make_token(TokenKind::LtEq)
                } else if self.peek() == Some('>') {
                    self.advance();
                    self.make_token(TokenKind::NotEq)
                } else {
                    self.make_token(TokenKind::Lt)
                }
            }
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    self.make_token(TokenKind::GtEq)
                } else {
                    self.make_token(TokenKind::Gt)
                }
            }
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    self.make_token(TokenKind::NotEq)
                } else {
                    return Err(LexError::new("unexpected character '!'", self.start));
                }
            }

            '\'' | '"' => self.scan_string(c)?,

            c if c.is_ascii_digit() => {
                self.pos = self.start;
                self.scan_number()
            }

            c if c.is_alphabetic() || c == '_' => {
                self.pos = self.start;
                self.scan_identifier()
            }

            _ => {
                return Err(LexError::new(
                    format!("unexpected character '{c}'"),
                    self.start,
                ));
            }
        };

        Ok(token)
    }

    /// Tokenizes the entire input, including the trailing `Eof` token.
    ///
    /// # Errors
    ///
    /// Returns the first `LexError` encountered.
    pub fn tokenize_all(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.next_token();
        self.done = result.as_ref().map_or(true, Token::is_eof);
        Some(result)
    }
}

/// Maps the character after a backslash to the character it stands for.
const fn unescape(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        '0' => '\0',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(input: &str) -> Vec<Token> {
        Lexer::new(input)
            .tokenize_all()
            .unwrap_or_else(|e| panic!("Failed to tokenize {input:?}: {e}"))
    }

    fn token_kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).into_iter().map(|t| t.kind).collect()
    }

    fn token_texts(input: &str) -> Vec<String> {
        tokenize(input).into_iter().map(|t| t.text).collect()
    }

    fn lex_err(input: &str) -> LexError {
        Lexer::new(input)
            .tokenize_all()
            .expect_err(&format!("Expected lex error for: {input}"))
    }

    #[test]
    fn test_empty_input() {
        let tokens = tokenize("");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
    }

    #[test]
    fn test_whitespace_only() {
        let tokens = tokenize("   \n\t  ");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
    }

    #[test]
    fn test_eof_repeats() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
        assert!(lexer.next_token().unwrap().is_eof());
        assert!(lexer.next_token().unwrap().is_eof());
    }

    #[test]
    fn test_single_line_comment() {
        assert_eq!(
            token_kinds("SELECT -- comment\nFROM"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Keyword(Keyword::From),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_multi_line_comment() {
        assert_eq!(
            token_kinds("SELECT /* comment */ FROM"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Keyword(Keyword::From),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_unterminated_block_comment() {
        let err = lex_err("SELECT /* never closed");
        assert_eq!(err.position.column, 8);
    }

    #[test]
    fn test_keywords_case_insensitive() {
        assert_eq!(
            token_kinds("select FROM wHeRe"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Keyword(Keyword::From),
                TokenKind::Keyword(Keyword::Where),
                TokenKind::Eof,
            ]
        );
        assert_eq!(token_texts("select FROM wHeRe"), vec!["SELECT", "FROM", "WHERE", ""]);
    }

    #[test]
    fn test_identifiers_uppercased() {
        assert_eq!(
            token_texts("foo bar_baz _qux t1"),
            vec!["FOO", "BAR_BAZ", "_QUX", "T1", ""]
        );
        assert!(token_kinds("foo bar_baz")
            .iter()
            .take(2)
            .all(|k| *k == TokenKind::Identifier));
    }

    #[test]
    fn test_function_keywords() {
        assert_eq!(
            token_kinds("sin Cos SUBSTR"),
            vec![
                TokenKind::Keyword(Keyword::Sin),
                TokenKind::Keyword(Keyword::Cos),
                TokenKind::Keyword(Keyword::Substr),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_integers() {
        assert_eq!(
            token_kinds("42 0 123456789"),
            vec![
                TokenKind::IntegerLiteral,
                TokenKind::IntegerLiteral,
                TokenKind::IntegerLiteral,
                TokenKind::Eof,
            ]
        );
        assert_eq!(token_texts("007"), vec!["007", ""]);
    }

    #[test]
    fn test_decimals_keep_text() {
        assert_eq!(
            token_kinds("3.14 0.50"),
            vec![
                TokenKind::DecimalLiteral,
                TokenKind::DecimalLiteral,
                TokenKind::Eof,
            ]
        );
        assert_eq!(token_texts("3.14 0.50"), vec!["3.14", "0.50", ""]);
    }

    #[test]
    fn test_bare_decimal_point() {
        assert_eq!(
            token_kinds("1. .5"),
            vec![
                TokenKind::DecimalLiteral,
                TokenKind::DecimalLiteral,
                TokenKind::Eof,
            ]
        );
        assert_eq!(token_texts("1. .5"), vec!["1.", ".5", ""]);
    }

    #[test]
    fn test_dot_after_identifier() {
        assert_eq!(
            token_kinds("t.a"),
            vec![
                TokenKind::Identifier,
                TokenKind::Dot,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_strings() {
        assert_eq!(token_texts("'hello' \"World\""), vec!["hello", "World", ""]);
        assert_eq!(
            token_kinds("'hello' \"World\""),
            vec![
                TokenKind::StringLiteral,
                TokenKind::StringLiteral,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_string_with_doubled_quote() {
        assert_eq!(token_texts("'O''Reilly'"), vec!["O'Reilly", ""]);
        assert_eq!(token_texts("\"say \"\"hi\"\"\""), vec!["say \"hi\"", ""]);
    }

    #[test]
    fn test_string_backslash_escapes() {
        assert_eq!(token_texts(r"'with\nnewline'"), vec!["with\nnewline", ""]);
        assert_eq!(token_texts(r"'tab\there'"), vec!["tab\there", ""]);
        assert_eq!(token_texts(r"'it\'s'"), vec!["it's", ""]);
        assert_eq!(token_texts(r"'back\\slash'"), vec!["back\\slash", ""]);
        assert_eq!(token_texts(r"'\q'"), vec!["q", ""]);
    }

    #[test]
    fn test_other_quote_inside_string() {
        assert_eq!(token_texts("'say \"hi\"'"), vec!["say \"hi\"", ""]);
    }

    #[test]
    fn test_unterminated_string() {
        let err = lex_err("SELECT 'abc");
        assert_eq!(err.message, "unterminated string literal");
        assert_eq!(err.position, Position::new(7, 1, 8));
    }

    #[test]
    fn test_unterminated_escape() {
        let err = lex_err("'abc\\");
        assert_eq!(err.message, "unterminated string literal");
    }

    #[test]
    fn test_unexpected_character() {
        let err = lex_err("SELECT #");
        assert_eq!(err.message, "unexpected character '#'");
        assert_eq!(err.position.column, 8);
    }

    #[test]
    fn test_lone_bang() {
        let err = lex_err("a ! b");
        assert_eq!(err.position.column, 3);
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            token_kinds("+ - * / = != <> < <= > >="),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Eq,
                TokenKind::NotEq,
                TokenKind::NotEq,
                TokenKind::Lt,
                TokenKind::LtEq,
                TokenKind::Gt,
                TokenKind::GtEq,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_operators_without_spaces() {
        assert_eq!(
            token_kinds("a<=b>=c!=d"),
            vec![
                TokenKind::Identifier,
                TokenKind::LtEq,
                TokenKind::Identifier,
                TokenKind::GtEq,
                TokenKind::Identifier,
                TokenKind::NotEq,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(
            token_kinds("( ) , ; ."),
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::Comma,
                TokenKind::Semicolon,
                TokenKind::Dot,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_simple_select() {
        let sql = "SELECT id, name FROM users WHERE active = 1";
        assert_eq!(
            token_kinds(sql),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Identifier,
                TokenKind::Comma,
                TokenKind::Identifier,
                TokenKind::Keyword(Keyword::From),
                TokenKind::Identifier,
                TokenKind::Keyword(Keyword::Where),
                TokenKind::Identifier,
                TokenKind::Eq,
                TokenKind::IntegerLiteral,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_position_tracking() {
        let tokens = tokenize("SELECT id\n  FROM t");
        assert_eq!(tokens[0].position, Position::new(0, 1, 1));
        assert_eq!(tokens[1].position, Position::new(7, 1, 8));
        assert_eq!(tokens[2].position, Position::new(12, 2, 3));
        assert_eq!(tokens[3].position, Position::new(17, 2, 8));
        assert_eq!(tokens[4].position, Position::new(18, 2, 9));
    }

    #[test]
    fn test_positions_non_decreasing() {
        let tokens = tokenize("INSERT INTO t VALUES (1, 'a'),\n (2, 'b');");
        for pair in tokens.windows(2) {
            assert!(pair[0].position <= pair[1].position);
        }
    }

    #[test]
    fn test_iterator_stops_after_eof() {
        let kinds: Vec<TokenKind> = Lexer::new("a b")
            .map(|t| t.unwrap().kind)
            .collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let results: Vec<_> = Lexer::new("a # b").collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }
}
