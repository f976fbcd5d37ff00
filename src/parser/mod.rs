//! Single-pass recursive-descent parser and C emitter for Teeny Tiny BASIC.
//!
//! There is no syntax tree. Each grammar rule is one method that checks the
//! tokens in front of it, validates what it can right away, and pushes the
//! matching C fragments to the [`Emitter`] as it goes. The call stack is the
//! only record of where we are in the program.
//!
//! ``` BNF
//! program    → nl? statement* ;
//! statement  → "PRINT" ( expression | STRING ) nl
//!            | "IF" comparison "THEN" nl statement* "ENDIF" nl
//!            | "WHILE" comparison "REPEAT" nl statement* "ENDWHILE" nl
//!            | "LABEL" IDENT nl
//!            | "GOTO" IDENT nl
//!            | "LET" IDENT "=" expression nl
//!            | "INPUT" IDENT nl ;
//! nl         → NEWLINE+ ;
//! comparison → expression ( ( "==" | "!=" | ">" | ">=" | "<" | "<=" ) expression )+ ;
//! expression → term ( ( "-" | "+" ) term )* ;
//! term       → unary ( ( "/" | "*" ) unary )* ;
//! unary      → ( "+" | "-" )? primary ;
//! primary    → NUMBER | IDENT ;
//! ```
//!
//! The precedence levels line up with C, so expressions are copied over token
//! by token without adding parentheses.
//!
//! Variables are declared by their first `LET` or `INPUT` and must be declared
//! before they are read. Labels may be jumped to before they are declared, so
//! goto targets are only checked once the whole program has been parsed.

use std::collections::HashSet;

use TokenType::{Asterisk, EndIf, EndWhile, Eof, Eq, Goto, Ident, If, Input, Label, Let, Minus, Newline, Number, Plus, Print, Repeat, Slash, Then, While};

use crate::{emitter::Emitter, error::parser::{ParseError, ParseErrorType, ParserError}, lexer::{Lexer, Token, TokenType}};

/// Parser with one token of lookahead, pulling tokens from the lexer on demand.
pub struct Parser<'a> {
	lexer:           Lexer<'a>,
	emitter:         Emitter,
	/// Variables declared so far.
	symbols:         HashSet<&'a str>,
	/// Labels declared so far.
	labels_declared: HashSet<&'a str>,
	/// Goto targets in the order they were referenced.
	labels_gotoed:   Vec<Token<'a>>,
	current:         Token<'a>,
	peek:            Token<'a>,
}

impl<'a> Parser<'a> {
	/// Prime `current` and `peek` with the first two tokens.
	pub fn new(mut lexer: Lexer<'a>) -> Result<Self, ParserError> {
		let current = lexer.next_token()?;
		let peek = lexer.next_token()?;

		Ok(Self {
			lexer,
			emitter: Emitter::new(),
			symbols: HashSet::new(),
			labels_declared: HashSet::new(),
			labels_gotoed: Vec::new(),
			current,
			peek,
		})
	}

	/// Whether the current token is of the given type.
	pub fn check_token(&self, r#type: TokenType) -> bool { self.current.r#type == r#type }

	/// Whether the lookahead token is of the given type.
	pub fn check_peek(&self, r#type: TokenType) -> bool { self.peek.r#type == r#type }

	/// Parse the whole program and return the generated C.
	pub fn program(mut self) -> Result<String, ParserError> {
		self.emitter.header_line("#include <stdio.h>");
		self.emitter.header_line("int main(void) {");

		// Newlines are required after statements, but not before the first one.
		while self.check_token(Newline) {
			self.advance()?;
		}

		while !self.check_token(Eof) {
			self.statement()?;
		}

		self.emitter.emit_line("return 0;");
		self.emitter.emit_line("}");

		if let Some(label) = self.labels_gotoed.iter().find(|label| !self.labels_declared.contains(label.lexeme)) {
			return Err(ParseError::new(label.line, ParseErrorType::UndeclaredLabel(label.lexeme.to_string())).into());
		}

		Ok(self.emitter.finish())
	}

	fn statement(&mut self) -> Result<(), ParserError> {
		match self.current.r#type {
			Print => {
				self.advance()?;
				if self.check_token(TokenType::String) {
					let text = self.advance()?.lexeme;
					self.emitter.emit_line(&format!("printf(\"{text}\\n\");"));
				} else {
					// Anything else has to be an expression, printed as a float.
					self.emitter.emit("printf(\"%.2f\\n\", (float)(");
					self.expression()?;
					self.emitter.emit_line("));");
				}
			}
			If => {
				self.advance()?;
				self.emitter.emit("if(");
				self.comparison()?;
				self.consume(Then)?;
				self.nl()?;
				self.emitter.emit_line("){");
				self.block(EndIf)?;
			}
			While => {
				self.advance()?;
				self.emitter.emit("while(");
				self.comparison()?;
				self.consume(Repeat)?;
				self.nl()?;
				self.emitter.emit_line("){");
				self.block(EndWhile)?;
			}
			Label => {
				self.advance()?;
				let name = self.consume(Ident)?;
				if !self.labels_declared.insert(name.lexeme) {
					return Err(ParseError::new(name.line, ParseErrorType::DuplicateLabel(name.lexeme.to_string())).into());
				}
				self.emitter.emit_line(&format!("{}:", name.lexeme));
			}
			Goto => {
				self.advance()?;
				let name = self.consume(Ident)?;
				self.labels_gotoed.push(name);
				self.emitter.emit_line(&format!("goto {};", name.lexeme));
			}
			Let => {
				self.advance()?;
				let name = self.consume(Ident)?;
				self.declare(name.lexeme);
				self.emitter.emit(&format!("{} = ", name.lexeme));
				self.consume(Eq)?;
				self.expression()?;
				self.emitter.emit_line(";");
			}
			Input => {
				self.advance()?;
				let name = self.consume(Ident)?.lexeme;
				self.declare(name);
				// A failed read zeroes the variable and throws away the rest of the input line.
				self.emitter.emit_line(&format!("if(0 == scanf(\"%f\", &{name})) {{"));
				self.emitter.emit_line(&format!("{name} = 0;"));
				self.emitter.emit_line("scanf(\"%*s\");");
				self.emitter.emit_line("}");
			}
			found => {
				let lexeme = self.current.lexeme.to_string();
				return Err(self.error(ParseErrorType::InvalidStatement { lexeme, found }));
			}
		}

		self.nl()
	}

	/// Statements up to the closing keyword, which is consumed too.
	fn block(&mut self, end: TokenType) -> Result<(), ParserError> {
		while !self.check_token(end) {
			self.statement()?;
		}
		self.consume(end)?;
		self.emitter.emit_line("}");
		Ok(())
	}

	/// At least one newline, extra blank lines are fine.
	fn nl(&mut self) -> Result<(), ParserError> {
		self.consume(Newline)?;
		while self.check_token(Newline) {
			self.advance()?;
		}
		Ok(())
	}

	/// A bare expression is not a comparison: at least one operator is required.
	fn comparison(&mut self) -> Result<(), ParserError> {
		self.expression()?;

		if !self.current.r#type.is_comparison() {
			let lexeme = self.current.lexeme.to_string();
			return Err(self.error(ParseErrorType::ExpectedComparison(lexeme)));
		}

		while self.current.r#type.is_comparison() {
			let operator = self.advance()?;
			self.emitter.emit(operator.lexeme);
			self.expression()?;
		}
		Ok(())
	}

	fn expression(&mut self) -> Result<(), ParserError> {
		self.term()?;
		while matches!(self.current.r#type, Plus | Minus) {
			let operator = self.advance()?;
			self.emitter.emit(operator.lexeme);
			self.term()?;
		}
		Ok(())
	}

	fn term(&mut self) -> Result<(), ParserError> {
		self.unary()?;
		while matches!(self.current.r#type, Asterisk | Slash) {
			let operator = self.advance()?;
			self.emitter.emit(operator.lexeme);
			self.unary()?;
		}
		Ok(())
	}

	fn unary(&mut self) -> Result<(), ParserError> {
		if matches!(self.current.r#type, Plus | Minus) {
			let operator = self.advance()?;
			self.emitter.emit(operator.lexeme);
		}
		self.primary()
	}

	fn primary(&mut self) -> Result<(), ParserError> {
		match self.current.r#type {
			Number => {}
			Ident if !self.symbols.contains(self.current.lexeme) => {
				let name = self.current.lexeme.to_string();
				return Err(self.error(ParseErrorType::UndeclaredVariable(name)));
			}
			Ident => {}
			_ => {
				let lexeme = self.current.lexeme.to_string();
				return Err(self.error(ParseErrorType::UnexpectedPrimary(lexeme)));
			}
		}
		let token = self.advance()?;
		self.emitter.emit(token.lexeme);
		Ok(())
	}

	/// Add a variable to the symbol table, declaring it in the header the first time.
	fn declare(&mut self, name: &'a str) {
		if self.symbols.insert(name) {
			self.emitter.header_line(&format!("float {name};"));
		}
	}

	/// Advance past a token of the expected type, or fail naming both types.
	fn consume(&mut self, expected: TokenType) -> Result<Token<'a>, ParserError> {
		if !self.check_token(expected) {
			let found = self.current.r#type;
			return Err(self.error(ParseErrorType::UnexpectedToken { expected, found }));
		}
		self.advance()
	}

	/// Shift `peek` into `current`, pulling a fresh lookahead. Returns the
	/// token that was current.
	fn advance(&mut self) -> Result<Token<'a>, ParserError> {
		let next = self.lexer.next_token()?;
		let previous = std::mem::replace(&mut self.current, std::mem::replace(&mut self.peek, next));
		Ok(previous)
	}

	fn error(&self, r#type: ParseErrorType) -> ParserError { ParseError::new(self.current.line, r#type).into() }
}
