use std::{fs::{read_to_string, write}, path::Path};

use anyhow::Context;

use crate::{TeenyError, lexer::{Lexer, Token}, parser::Parser};

/// Teeny is the main struct for the Teeny Tiny BASIC compiler.
pub struct Teeny;

impl Teeny {
	/// Compile source code into C. Any error means no output at all.
	pub fn compile(&self, source: &str) -> Result<String, TeenyError> {
		let parser = Parser::new(Lexer::new(source))?;
		Ok(parser.program()?)
	}

	/// Read and compile a source file.
	pub fn compile_file<P: AsRef<Path>>(&self, path: P) -> Result<String, TeenyError> {
		let path = path.as_ref();
		let source = read_to_string(path).with_context(|| format!("Failed open source file {}", path.display()))?;
		self.compile(&source)
	}

	/// Compile `input` and write the C code to `output`. The output file is
	/// left untouched when compilation fails.
	pub fn build<P: AsRef<Path>, Q: AsRef<Path>>(&self, input: P, output: Q) -> Result<(), TeenyError> {
		let code = self.compile_file(input)?;
		let output = output.as_ref();
		write(output, code).with_context(|| format!("Failed write output file {}", output.display()))?;
		Ok(())
	}

	/// All tokens of the source, up to and including `Eof`.
	pub fn tokens<'a>(&self, source: &'a str) -> Result<Vec<Token<'a>>, TeenyError> {
		Ok(Lexer::new(source).collect::<Result<Vec<_>, _>>()?)
	}

	/// One `line: "lexeme" => TYPE` entry per token of a source file.
	pub fn dump_tokens<P: AsRef<Path>>(&self, path: P) -> Result<String, TeenyError> {
		let path = path.as_ref();
		let source = read_to_string(path).with_context(|| format!("Failed open source file {}", path.display()))?;
		let dump = self
			.tokens(&source)?
			.iter()
			.map(|token| format!("{}: {:?} => {}\n", token.line, token.lexeme, token.r#type))
			.collect();
		Ok(dump)
	}
}
