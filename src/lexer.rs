// Line tokenizer: an ordered table of matcher rules applied at each cursor
// position. The first rule that matches consumes input.

use crate::error::{Error, Result};
use crate::token::{Token, TokenKind};

const PUNCTUATION: &[char] = &['(', ')', '+', '-', '*', '/', ','];

enum Match {
    Skip(usize),
    Emit(TokenKind, usize),
}

type Rule = fn(&str) -> Option<Match>;

const RULES: &[Rule] = &[whitespace, string_literal, punctuation, word, fallback];

fn whitespace(rest: &str) -> Option<Match> {
    let c = rest.chars().next()?;
    c.is_whitespace().then_some(Match::Skip(c.len_utf8()))
}

fn string_literal(rest: &str) -> Option<Match> {
    let body = rest.strip_prefix('"')?;
    // Unterminated literals run to end of line.
    let len = match body.find('"') {
        Some(close) => close + 2,
        None => rest.len(),
    };
    Some(Match::Emit(TokenKind::Str, len))
}

fn punctuation(rest: &str) -> Option<Match> {
    let c = rest.chars().next()?;
    PUNCTUATION
        .contains(&c)
        .then_some(Match::Emit(TokenKind::Punct, 1))
}

fn word(rest: &str) -> Option<Match> {
    let len: usize = rest
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .map(char::len_utf8)
        .sum();
    (len > 0).then_some(Match::Emit(TokenKind::Word, len))
}

fn fallback(rest: &str) -> Option<Match> {
    let c = rest.chars().next()?;
    Some(Match::Emit(TokenKind::Punct, c.len_utf8()))
}

/// Tokenize a single source line. The result always ends with an
/// end-of-line token.
pub fn tokenize_line(line: &str, line_no: usize) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < line.len() {
        let rest = &line[i..];
        let Some(m) = RULES.iter().find_map(|rule| rule(rest)) else {
            break;
        };
        match m {
            Match::Skip(len) => i += len,
            Match::Emit(kind, len) => {
                tokens.push(Token::new(kind, &rest[..len], line_no));
                i += len;
            }
        }
    }

    tokens.push(Token::end_of_line(line_no));
    log::trace!("line {}: {} token(s)", line_no, tokens.len() - 1);
    tokens
}

/// Tokenize a whole source file. Fails only when there are no lines to read.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    let mut lines = source.lines().peekable();
    if lines.peek().is_none() {
        return Err(Error::NoInput);
    }

    let mut tokens = Vec::new();
    for (idx, line) in lines.enumerate() {
        tokens.extend(tokenize_line(line, idx + 1));
    }
    Ok(tokens)
}

/// Human-readable token listing: `[text] ` per token, one source line per
/// output line.
pub fn dump_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        if token.is_end_of_line() {
            out.push('\n');
        } else {
            out.push_str(&format!("[{}] ", token));
        }
    }
    out
}
