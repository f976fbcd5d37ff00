use std::fmt::Display;

/// A token produced by the lexer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
	pub r#type: TokenType,
	pub lexeme: &'a str,
	pub line:   usize,
}

impl<'a> Token<'a> {
	pub fn new(r#type: TokenType, lexeme: &'a str, line: usize) -> Self { Self { r#type, lexeme, line } }
}

/// The closed set of token kinds. Literal kinds keep their text in
/// [`Token::lexeme`], so every kind is a plain tag and copying is free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
	/// End of input.
	Eof,
	/// New Line Character `\n`, terminates statements.
	Newline,
	/// Number literal, e.g. `123.45`.
	Number,
	/// Identifier, e.g. variable or label name.
	Ident,
	/// String literal, lexeme excludes the quotes.
	String,
	Label,
	Goto,
	Print,
	Input,
	Let,
	If,
	Then,
	EndIf,
	While,
	Repeat,
	EndWhile,
	/// Assignment `=`.
	Eq,
	/// Plus `+`.
	Plus,
	/// Minus `-`.
	Minus,
	/// Asterisk `*`.
	Asterisk,
	/// Slash `/`.
	Slash,
	/// Equal equal `==`.
	EqEq,
	/// Bang equal `!=`.
	NotEq,
	/// Less than `<`.
	Lt,
	/// Less than or equal `<=`.
	LtEq,
	/// Greater than `>`.
	Gt,
	/// Greater than or equal `>=`.
	GtEq,
}

impl TokenType {
	/// Keyword kinds, in declaration order.
	pub const KEYWORDS: [TokenType; 11] = [
		TokenType::Label,
		TokenType::Goto,
		TokenType::Print,
		TokenType::Input,
		TokenType::Let,
		TokenType::If,
		TokenType::Then,
		TokenType::EndIf,
		TokenType::While,
		TokenType::Repeat,
		TokenType::EndWhile,
	];

	/// Keywords are matched case-sensitively against their upper-case spelling.
	pub fn keyword(text: &str) -> Option<Self> {
		Some(match text {
			"LABEL" => TokenType::Label,
			"GOTO" => TokenType::Goto,
			"PRINT" => TokenType::Print,
			"INPUT" => TokenType::Input,
			"LET" => TokenType::Let,
			"IF" => TokenType::If,
			"THEN" => TokenType::Then,
			"ENDIF" => TokenType::EndIf,
			"WHILE" => TokenType::While,
			"REPEAT" => TokenType::Repeat,
			"ENDWHILE" => TokenType::EndWhile,
			_ => return None,
		})
	}

	pub fn keyword_or_identifier(text: &str) -> Self { Self::keyword(text).unwrap_or(TokenType::Ident) }

	pub fn is_keyword(&self) -> bool { Self::KEYWORDS.contains(self) }

	pub fn is_comparison(&self) -> bool {
		matches!(self, TokenType::EqEq | TokenType::NotEq | TokenType::Lt | TokenType::LtEq | TokenType::Gt | TokenType::GtEq)
	}

	/// Upper-case name used in diagnostics.
	pub fn name(&self) -> &'static str {
		use TokenType::*;
		match self {
			Eof => "EOF",
			Newline => "NEWLINE",
			Number => "NUMBER",
			Ident => "IDENT",
			String => "STRING",
			Label => "LABEL",
			Goto => "GOTO",
			Print => "PRINT",
			Input => "INPUT",
			Let => "LET",
			If => "IF",
			Then => "THEN",
			EndIf => "ENDIF",
			While => "WHILE",
			Repeat => "REPEAT",
			EndWhile => "ENDWHILE",
			Eq => "EQ",
			Plus => "PLUS",
			Minus => "MINUS",
			Asterisk => "ASTERISK",
			Slash => "SLASH",
			EqEq => "EQEQ",
			NotEq => "NOTEQ",
			Lt => "LT",
			LtEq => "LTEQ",
			Gt => "GT",
			GtEq => "GTEQ",
		}
	}
}

impl Display for TokenType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.name()) }
}
