#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use teeny::{LexErrorType, ParseErrorType, Teeny, TeenyError, lexer::TokenType};

	fn fixture(name: &str) -> PathBuf { PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join(name) }

	fn scratch(name: &str) -> PathBuf {
		std::env::temp_dir().join(format!("teeny-{}-{name}", std::process::id()))
	}

	#[test]
	fn test_fibonacci_file() {
		let teeny = Teeny;
		let code = teeny.compile_file(fixture("fibonacci.teeny")).unwrap();
		assert_eq!(code, include_str!("fibonacci.c"));
	}

	#[test]
	fn test_average_file() {
		let code = Teeny.compile_file(fixture("average.teeny")).unwrap();
		assert!(code.starts_with("#include <stdio.h>\nint main(void) {\nfloat a;\nfloat b;\nfloat s;\nfloat c;\n"));
		assert!(code.contains("printf(\"%.2f\\n\", (float)(s/a));\n"));
		assert!(code.ends_with("return 0;\n}\n"));
	}

	#[test]
	fn test_gotos_file() {
		let code = Teeny.compile_file(fixture("gotos.teeny")).unwrap();
		assert!(code.contains("loop:\nif(n<=0){\ngoto done;\n}\n"));
		assert!(code.contains("goto loop;\ndone:\n"));
	}

	#[test]
	fn test_fibonacci_while_loop() {
		let source = r#"PRINT "HOW MANY FIBONACCI NUMBERS DO YOU WANT?"
INPUT nums
LET i = 1
LET a = 0
WHILE i < nums REPEAT
    PRINT a
    LET a = a
    LET i = i + 1
ENDWHILE
"#;
		let code = Teeny.compile(source).unwrap();
		assert!(code.starts_with("#include <stdio.h>\nint main(void) {\nfloat nums;\nfloat i;\nfloat a;\nprintf("));
		assert!(code.contains("while(i<nums){\nprintf(\"%.2f\\n\", (float)(a));\na = a;\ni = i+1;\n}\n"));
		assert_eq!(code.matches("while(").count(), 1);
	}

	#[test]
	fn test_goto_needs_label() {
		let without = "GOTO skip\nPRINT \"skipped\"\n";
		match Teeny.compile(without) {
			Err(TeenyError::ParseError(e)) => {
				assert_eq!(*e.r#type(), ParseErrorType::UndeclaredLabel("skip".to_string()));
			}
			other => panic!("unexpected {other:?}"),
		}
		assert!(Teeny.compile(&format!("{without}LABEL skip\n")).is_ok());
		assert!(Teeny.compile(&format!("LABEL skip\n{without}")).is_ok());
	}

	#[test]
	fn test_error_kinds() {
		assert!(matches!(Teeny.compile("PRINT \"100%\""), Err(TeenyError::LexError(_))));
		assert!(matches!(Teeny.compile("PRINT x"), Err(TeenyError::ParseError(_))));
		assert!(matches!(Teeny.compile_file(fixture("missing.teeny")), Err(TeenyError::InternalError(_))));

		let error = Teeny.compile("LET a = 1\nLET b = a ! 2").unwrap_err();
		assert_eq!(error.to_string(), "Lexing error, line 2: Expected !=, got !' '");
		match error {
			TeenyError::LexError(e) => assert_eq!(*e.r#type(), LexErrorType::ExpectedNotEqual(' ')),
			other => panic!("unexpected {other:?}"),
		}
	}

	#[test]
	fn test_error_messages() {
		let error = Teeny.compile("PRINT 1\nPRINT y").unwrap_err();
		assert_eq!(error.to_string(), "Parsing error, line 2: Referencing variable before assignment: y");
		let error = Teeny.compile("LET 1 = 2").unwrap_err();
		assert_eq!(error.to_string(), "Parsing error, line 1: Expected IDENT, got NUMBER");
	}

	#[test]
	fn test_tokens() {
		let tokens = Teeny.tokens("WHILE x >= 12.50 REPEAT").unwrap();
		let types: Vec<TokenType> = tokens.iter().map(|token| token.r#type).collect();
		assert_eq!(types, vec![
			TokenType::While,
			TokenType::Ident,
			TokenType::GtEq,
			TokenType::Number,
			TokenType::Repeat,
			TokenType::Newline,
			TokenType::Eof
		]);
		assert_eq!(tokens[3].lexeme, "12.50");
	}

	#[test]
	fn test_dump_tokens() {
		let dump = Teeny.dump_tokens(fixture("gotos.teeny")).unwrap();
		assert!(dump.starts_with("1: \"LET\" => LET\n1: \"n\" => IDENT\n1: \"=\" => EQ\n1: \"3\" => NUMBER\n"));
		assert!(dump.ends_with("=> EOF\n"));
	}

	#[test]
	fn test_build_writes_output() {
		let output = scratch("fibonacci.c");
		Teeny.build(fixture("fibonacci.teeny"), &output).unwrap();
		assert_eq!(std::fs::read_to_string(&output).unwrap(), include_str!("fibonacci.c"));
		std::fs::remove_file(&output).unwrap();
	}

	#[test]
	fn test_build_failure_writes_nothing() {
		let input = scratch("broken.teeny");
		let output = scratch("broken.c");
		std::fs::write(&input, "PRINT nope\n").unwrap();
		assert!(Teeny.build(&input, &output).is_err());
		assert!(!output.exists());
		std::fs::remove_file(&input).unwrap();
	}
}
