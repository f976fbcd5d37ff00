use std::path::PathBuf;

use palc::{Parser, Subcommand};

/// Where `build` writes when no output is given.
pub const DEFAULT_OUTPUT: &str = "out.c";

#[derive(Parser)]
#[command(name = "teeny", after_long_help = "Compiles Teeny Tiny BASIC into C.")]
pub struct Cli {
	#[command(subcommand)]
	pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Compile a source file into a C file
	Build {
		path:   PathBuf,
		/// Output C file, `out.c` by default
		#[arg(short, long)]
		output: Option<PathBuf>,
	},
	/// Print the generated C to stdout
	Emit { path: PathBuf },
	/// Print the tokens of a source file
	Tokens { path: PathBuf },
}
