use crate::{LexError, lexer::TokenType};

/// What every parser routine returns on failure. Tokens are pulled lazily, so
/// a lexical error can surface from deep inside the descent.
#[derive(thiserror::Error, Debug)]
pub enum ParserError {
	#[error(transparent)]
	LexError(#[from] LexError),
	#[error(transparent)]
	ParseError(#[from] ParseError),
}

#[derive(thiserror::Error, Debug)]
#[error("line {line}: {type}")]
pub struct ParseError {
	line:   usize,
	r#type: ParseErrorType,
}

impl ParseError {
	pub fn new(line: usize, r#type: ParseErrorType) -> Self { Self { line, r#type } }

	pub fn line(&self) -> usize { self.line }

	pub fn r#type(&self) -> &ParseErrorType { &self.r#type }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
	UnexpectedToken { expected: TokenType, found: TokenType },
	InvalidStatement { lexeme: String, found: TokenType },
	ExpectedComparison(String),
	UnexpectedPrimary(String),
	DuplicateLabel(String),
	UndeclaredVariable(String),
	UndeclaredLabel(String),
}

impl std::fmt::Display for ParseErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ParseErrorType::*;
		match self {
			UnexpectedToken { expected, found } => {
				write!(f, "Expected {expected}, got {found}")
			}
			InvalidStatement { lexeme, found } => {
				write!(f, "Invalid statement at {lexeme:?} ({found})")
			}
			ExpectedComparison(lexeme) => {
				write!(f, "Expected comparison operator at: {lexeme:?}")
			}
			UnexpectedPrimary(lexeme) => {
				write!(f, "Unexpected token at {lexeme:?}")
			}
			DuplicateLabel(name) => {
				write!(f, "Label already exists: {name}")
			}
			UndeclaredVariable(name) => {
				write!(f, "Referencing variable before assignment: {name}")
			}
			UndeclaredLabel(name) => {
				write!(f, "Attempting to GOTO to undeclared label: {name}")
			}
		}
	}
}
