pub mod ast;
pub mod emitter;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::{DeclarationStatement, PrintStatement, Statement, TypeTag};
pub use emitter::{generate, CppEmitter, Features, GeneratedProgram};
pub use error::{Error, Result};
pub use lexer::{dump_tokens, tokenize, tokenize_line};
pub use parser::{parse, ParseOutcome, Parser};
pub use token::{Token, TokenKind};

/// Transpile dekhao source code to a C++ program
pub fn transpile(source: &str) -> Result<GeneratedProgram> {
    let tokens = tokenize(source)?;
    let statements = parse(&tokens);
    Ok(generate(&statements))
}
