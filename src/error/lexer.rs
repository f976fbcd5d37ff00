/// A lexical error with the line it occurred on.
#[derive(thiserror::Error, Debug)]
#[error("line {line}: {type}")]
pub struct LexError {
	/// The line number where the error occurred.
	line:   usize,
	/// The type of lexical error.
	r#type: LexErrorType,
}

impl LexError {
	pub fn new(line: usize, r#type: LexErrorType) -> Self { Self { line, r#type } }

	pub fn line(&self) -> usize { self.line }

	pub fn r#type(&self) -> &LexErrorType { &self.r#type }
}

/// Types of lexical errors.
#[derive(Debug, Clone, PartialEq)]
pub enum LexErrorType {
	/// A character that starts no token.
	UnexpectedCharacter(char),
	/// `!` not followed by `=`, carries whatever came next.
	ExpectedNotEqual(char),
	/// Characters that would break the generated `printf` format string.
	IllegalStringCharacter(char),
	/// End of input inside a string literal.
	UnterminatedString,
	/// A decimal point without a digit after it.
	IllegalNumberCharacter,
}

impl std::fmt::Display for LexErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use LexErrorType::*;
		match self {
			UnexpectedCharacter(c) => {
				write!(f, "Unknown token: {c:?}")
			}
			ExpectedNotEqual(c) => {
				write!(f, "Expected !=, got !{c:?}")
			}
			IllegalStringCharacter(c) => {
				write!(f, "Illegal character in string: {c:?}")
			}
			UnterminatedString => {
				write!(f, "Unterminated string")
			}
			IllegalNumberCharacter => {
				write!(f, "Illegal character in number")
			}
		}
	}
}
