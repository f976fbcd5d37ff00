pub mod lexer;
pub mod parser;

use parser::ParserError;

/// TeenyError is the top-level error type for the compiler.
#[derive(thiserror::Error, Debug)]
pub enum TeenyError {
	/// Failures outside the source program itself, such as I/O
	#[error("CompilerInternalError: {0:#}")]
	InternalError(#[from] anyhow::Error),
	/// Lexing error, aborts the compilation
	#[error("Lexing error, {0}")]
	LexError(#[from] lexer::LexError),
	/// Grammar or semantic error, aborts the compilation
	#[error("Parsing error, {0}")]
	ParseError(#[from] parser::ParseError),
}

impl From<ParserError> for TeenyError {
	fn from(error: ParserError) -> Self {
		match error {
			ParserError::LexError(e) => e.into(),
			ParserError::ParseError(e) => e.into(),
		}
	}
}
