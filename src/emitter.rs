//! Output sink for the generated C.
//!
//! C wants every variable declared before the first statement that uses it,
//! but the parser only discovers variables while it is already emitting
//! statements. So there are two buffers: `header` receives the boilerplate and
//! the declarations, `code` receives the statements, and [`Emitter::finish`]
//! glues them together in that order.

/// Accumulates generated code. Performs no validation.
#[derive(Debug, Default)]
pub struct Emitter {
	header: String,
	code:   String,
}

impl Emitter {
	pub fn new() -> Self { Self::default() }

	/// Append a fragment to the body, without a line break.
	pub fn emit(&mut self, code: &str) { self.code.push_str(code); }

	pub fn emit_line(&mut self, code: &str) {
		self.code.push_str(code);
		self.code.push('\n');
	}

	pub fn header_line(&mut self, code: &str) {
		self.header.push_str(code);
		self.header.push('\n');
	}

	/// Header immediately followed by body.
	pub fn finish(self) -> String {
		let mut output = self.header;
		output.push_str(&self.code);
		output
	}
}
