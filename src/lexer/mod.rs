//! Lexical analysis for Teeny Tiny BASIC.
//!
//! The lexer is pull-based: the parser asks for one token at a time and the
//! lexer never materializes the whole token stream. Whitespace other than
//! newlines and `#` comments never become tokens. Newlines do, because they
//! terminate statements.
//!
//! The source behaves as if a line terminator were appended to it, so the last
//! statement is always closed by a `Newline` token even when the file does not
//! end with one. After that, every call yields `Eof`.
//!
//! Identifiers and keywords share one rule (maximal munch over letters and
//! digits), and the keyword table decides afterwards which one we got.
mod token;

use std::{iter::Peekable, str::CharIndices};

use TokenType::*;
pub use token::*;

use crate::{LexError, LexErrorType};

/// A lexer for Teeny Tiny BASIC source code
pub struct Lexer<'a> {
	/// User input source code
	source:      &'a str,
	/// User input source code iterator
	source_iter: Peekable<CharIndices<'a>>,
	/// Points at the beginning of the current lexeme
	start:       usize,
	/// Points just past the character last consumed
	cursor:      usize,
	/// Line of the character currently being considered
	line:        usize,
	/// Whether the implicit trailing newline was already produced
	terminated:  bool,
	/// Set once the iterator yielded `Eof` or an error
	exhausted:   bool,
}

impl<'a> Lexer<'a> {
	pub fn new(source: &'a str) -> Self {
		let source_iter = source.char_indices().peekable();

		Self { source, source_iter, start: 0, cursor: 0, line: 1, terminated: false, exhausted: false }
	}

	/// Produce the next token. Once the input is exhausted this keeps
	/// returning `Eof`.
	pub fn next_token(&mut self) -> Result<Token<'a>, LexError> {
		self.skip_whitespace();
		self.skip_comment();

		// We are at the beginning of the next lexeme.
		self.start = self.source_iter.peek().map_or(self.source.len(), |&(index, _)| index);
		self.cursor = self.start;
		let line = self.line;

		let Some(next_char) = self.advance() else {
			return Ok(self.end_of_input());
		};

		#[rustfmt::skip]
		let r#type = match next_char {
			'+' => Plus,
			'-' => Minus,
			'*' => Asterisk,
			'/' => Slash,
			'\n' => { self.line += 1; Newline }
			'=' => if self.match_next('=') { EqEq } else { Eq },
			'>' => if self.match_next('=') { GtEq } else { Gt },
			'<' => if self.match_next('=') { LtEq } else { Lt },
			'!' => if self.match_next('=') {
				NotEq
			} else {
				let next = self.peek().unwrap_or('\n');
				return Err(LexError::new(line, LexErrorType::ExpectedNotEqual(next)));
			},
			'"' => return self.string(line),
			c if c.is_ascii_digit() => self.number(line)?,
			c if c.is_ascii_alphabetic() => self.identifier(),
			c => return Err(LexError::new(line, LexErrorType::UnexpectedCharacter(c))),
		};

		Ok(Token::new(r#type, &self.source[self.start..self.cursor], line))
	}

	/// Spaces, tabs and carriage returns separate tokens but are not tokens.
	fn skip_whitespace(&mut self) {
		while self.peek().is_some_and(|c| matches!(c, ' ' | '\t' | '\r')) {
			self.advance();
		}
	}

	/// A comment runs from `#` up to, not including, the end of the line.
	fn skip_comment(&mut self) {
		if self.peek() == Some('#') {
			while self.peek().is_some_and(|c| c != '\n') {
				self.advance();
			}
		}
	}

	fn end_of_input(&mut self) -> Token<'a> {
		if self.terminated {
			return Token::new(Eof, "", self.line);
		}
		self.terminated = true;
		let token = Token::new(Newline, "\n", self.line);
		self.line += 1;
		token
	}

	/// Match the next character if it is the expected one
	fn match_next(&mut self, expected: char) -> bool {
		matches!(self.peek(), Some(c) if c == expected && { self.advance(); true })
	}

	/// Advance to the next character
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.source_iter.next()?;
		self.cursor = i + c.len_utf8();
		Some(c)
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().map(|&(_, c)| c) }

	/// Lex a string literal, the opening quote is already consumed.
	///
	/// The text ends up verbatim inside a C `printf` format string, so escapes,
	/// control characters and `%` are rejected instead of translated.
	fn string(&mut self, line: usize) -> Result<Token<'a>, LexError> {
		loop {
			match self.peek() {
				Some('"') => break,
				Some(c @ ('\r' | '\n' | '\t' | '\\' | '%')) => {
					return Err(LexError::new(line, LexErrorType::IllegalStringCharacter(c)));
				}
				Some(_) => {
					self.advance();
				}
				None => return Err(LexError::new(line, LexErrorType::UnterminatedString)),
			}
		}

		let value = &self.source[self.start + 1..self.cursor];
		self.advance(); // The closing "
		Ok(Token::new(String, value, line))
	}

	/// Lex a number literal: digits, optionally followed by `.` and digits.
	fn number(&mut self, line: usize) -> Result<TokenType, LexError> {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
		}

		if self.peek() == Some('.') {
			self.advance(); // consume '.'
			// Must have at least one digit after the decimal point.
			if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
				return Err(LexError::new(line, LexErrorType::IllegalNumberCharacter));
			}
			while self.peek().is_some_and(|c| c.is_ascii_digit()) {
				self.advance();
			}
		}

		Ok(Number)
	}

	/// Lex an identifier or keyword
	fn identifier(&mut self) -> TokenType {
		while self.peek().is_some_and(|c| c.is_ascii_alphanumeric()) {
			self.advance();
		}
		TokenType::keyword_or_identifier(&self.source[self.start..self.cursor])
	}
}

/// Yields every token up to and including `Eof`, or up to the first error.
impl<'a> Iterator for Lexer<'a> {
	type Item = Result<Token<'a>, LexError>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.exhausted {
			return None;
		}
		let result = self.next_token();
		self.exhausted = !matches!(&result, Ok(token) if token.r#type != Eof);
		Some(result)
	}
}
