use crate::ast::{DeclarationStatement, PrintStatement, Statement, TypeTag};
use crate::token::{Token, TokenKind};

pub const PRINT_KEYWORD: &str = "dekhao";
pub const CONNECTOR: &str = "te";

/// Result of recognizing one source line. Malformed lines are `Skipped`,
/// never an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseOutcome {
    Statement(Statement),
    Skipped,
}

pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Next token on the current line, if any.
    fn peek_in_line(&self) -> Option<&'a Token> {
        self.peek().filter(|t| !t.is_end_of_line())
    }

    fn bump(&mut self) -> Option<&'a Token> {
        let tok = self.peek()?;
        self.pos += 1;
        Some(tok)
    }

    fn bump_in_line(&mut self) -> Option<&'a Token> {
        let tok = self.peek_in_line()?;
        self.pos += 1;
        Some(tok)
    }

    fn skip_line_ends(&mut self) {
        while self.peek().is_some_and(Token::is_end_of_line) {
            self.pos += 1;
        }
    }

    fn skip_rest_of_line(&mut self) {
        while self.bump_in_line().is_some() {}
    }

    pub fn parse_program(&mut self) -> Vec<Statement> {
        let mut statements = Vec::new();

        loop {
            self.skip_line_ends();
            if self.peek().is_none() {
                break;
            }

            if let ParseOutcome::Statement(stmt) = self.parse_line() {
                log::debug!("line {}: recognized {:?}", stmt.line(), stmt);
                statements.push(stmt);
            }
            self.skip_rest_of_line();
        }

        statements
    }

    /// Recognize the line starting at the cursor. The cursor may be left
    /// anywhere before the line's end-of-line token.
    pub fn parse_line(&mut self) -> ParseOutcome {
        let Some(first) = self.peek_in_line() else {
            return ParseOutcome::Skipped;
        };

        if first.kind == TokenKind::Word {
            if first.text == PRINT_KEYWORD {
                return self.parse_print(first.line);
            }
            if let Some(ty) = TypeTag::from_keyword(&first.text) {
                return self.parse_declaration(ty, first.line);
            }
        }

        skipped(first.line, "not a print or declaration")
    }

    // dekhao ( arg, arg, ... )
    fn parse_print(&mut self, line: usize) -> ParseOutcome {
        self.bump();
        if !self.bump_in_line().is_some_and(|t| t.is("(")) {
            return skipped(line, "expected '(' after print keyword");
        }

        let mut args = Vec::new();
        let mut current: Vec<&Token> = Vec::new();
        let mut depth = 0usize;

        loop {
            let Some(tok) = self.bump_in_line() else {
                return skipped(line, "unclosed print argument list");
            };

            if tok.is("(") {
                depth += 1;
                current.push(tok);
            } else if tok.is(")") {
                if depth == 0 {
                    push_arg(&mut args, &current);
                    break;
                }
                depth -= 1;
                current.push(tok);
            } else if tok.is(",") && depth == 0 {
                push_arg(&mut args, &current);
                current.clear();
            } else {
                current.push(tok);
            }
        }

        ParseOutcome::Statement(Statement::Print(PrintStatement { args, line }))
    }

    // TYPE name [te] expr...
    fn parse_declaration(&mut self, ty: TypeTag, line: usize) -> ParseOutcome {
        self.bump();
        let name = match self.peek_in_line() {
            Some(tok) if tok.kind == TokenKind::Word => {
                self.bump();
                tok.text.clone()
            }
            _ => return skipped(line, "expected identifier after type keyword"),
        };

        if self.peek_in_line().is_some_and(|t| t.is(CONNECTOR)) {
            self.bump();
        }

        let mut expr = Vec::new();
        while let Some(tok) = self.bump_in_line() {
            if !tok.is(CONNECTOR) {
                expr.push(tok);
            }
        }

        ParseOutcome::Statement(Statement::Declaration(DeclarationStatement {
            ty,
            name,
            init: join_tokens(&expr),
            line,
        }))
    }
}

fn skipped(line: usize, reason: &str) -> ParseOutcome {
    log::debug!("line {}: skipped ({})", line, reason);
    ParseOutcome::Skipped
}

fn push_arg(args: &mut Vec<String>, tokens: &[&Token]) {
    let arg = join_tokens(tokens);
    let arg = arg.trim();
    if !arg.is_empty() {
        args.push(arg.to_string());
    }
}

/// Re-join an expression span. A single space goes between two adjacent
/// word-like tokens so they do not merge; punctuation is glued on.
pub fn join_tokens(tokens: &[&Token]) -> String {
    let mut out = String::new();
    let mut prev_word = false;
    for tok in tokens {
        if prev_word && tok.is_word_like() {
            out.push(' ');
        }
        out.push_str(&tok.text);
        prev_word = tok.is_word_like();
    }
    out
}

pub fn parse(tokens: &[Token]) -> Vec<Statement> {
    Parser::new(tokens).parse_program()
}
