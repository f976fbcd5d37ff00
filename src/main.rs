use std::{path::PathBuf, process::ExitCode};

use palc::Parser;
use teeny::cli::*;

fn main() -> ExitCode {
	let teeny = teeny::Teeny;

	match Cli::parse().mode {
		Mode::Build { path, output } => {
			let output = output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
			if let Err(e) = teeny.build(&path, &output) {
				eprintln!("Failed build file: {e}");
				return ExitCode::FAILURE;
			}
			eprintln!("Compiling completed: {}", output.display());
		}
		Mode::Emit { path } => match teeny.compile_file(&path) {
			Ok(code) => print!("{code}"),
			Err(e) => {
				eprintln!("Failed emit file: {e}");
				return ExitCode::FAILURE;
			}
		},
		Mode::Tokens { path } => match teeny.dump_tokens(&path) {
			Ok(dump) => print!("{dump}"),
			Err(e) => {
				eprintln!("Failed lex file: {e}");
				return ExitCode::FAILURE;
			}
		},
	}

	ExitCode::SUCCESS
}
