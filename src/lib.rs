//! # Teeny Tiny BASIC to C
//!
//! A single-pass compiler: source text goes in, C source comes out.
//!
//! ``` markdown
//! PRINT "HELLO"           #include <stdio.h>
//! LET a = 2 * 3      →    int main(void) {
//! PRINT a + 1             float a;
//!                         printf("HELLO\n");
//!                         a = 2*3;
//!                         printf("%.2f\n", (float)(a+1));
//!                         return 0;
//!                         }
//! ```

//! ## Lexing
//!
//! The [`lexer`] turns characters into tokens, one at a time, on demand.
//! Spaces and `#` comments are dropped. Newlines are kept because they end
//! statements.

//! ## Parsing and emitting
//!
//! The [`parser`] is a recursive-descent parser that never builds a tree. It
//! interleaves parsing, semantic checks and code generation: as soon as a
//! statement is recognised its C translation goes to the [`emitter`]. Checks
//! happen in the same pass: a variable read before it is assigned, a label
//! declared twice. A `GOTO` to a label that never appears is the one thing
//! only known at the end, so it is checked there.

//! ## Errors
//!
//! Lexing and parsing stop at the first error. The error goes back to the
//! caller as a [`TeenyError`] and no partial output is returned.

pub mod cli;
pub mod emitter;
mod error;
pub mod lexer;
pub mod parser;
mod teeny;

pub use error::{TeenyError, lexer::{LexError, LexErrorType}, parser::{ParseError, ParseErrorType, ParserError}};
pub use teeny::Teeny;
