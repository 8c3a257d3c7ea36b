use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier, keyword or number. The lexer does not tell them apart.
    Word,
    /// Double-quoted literal, quotes included.
    Str,
    /// Operator, parenthesis, comma or any other single character.
    Punct,
    EndOfLine,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// 1-based source line.
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Token {
            kind,
            text: text.into(),
            line,
        }
    }

    pub fn end_of_line(line: usize) -> Self {
        Token::new(TokenKind::EndOfLine, "\n", line)
    }

    pub fn is_end_of_line(&self) -> bool {
        self.kind == TokenKind::EndOfLine
    }

    pub fn is_word_like(&self) -> bool {
        matches!(self.kind, TokenKind::Word | TokenKind::Str)
    }

    pub fn is(&self, text: &str) -> bool {
        !self.is_end_of_line() && self.text == text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
