//! ChRot13 - ROT13 encoder/decoder
//!
//! Applies the ROT13 substitution to text read from a file, standard input
//! or a literal argument, and writes the result to standard output or a file.
//!
//! ## Run Pipeline
//!
//! ```text
//! Source → Read → ROT13 → Sink
//! ```
//!
//! - **Source**: `--file PATH` > `--text STRING` > positional words > piped stdin
//! - **ROT13**: pure, self-inverse; encode and decode differ only in status lines
//! - **Sink**: standard output, or an atomically replaced file with `--output`
//!
//! Status lines go to standard error so the result stream stays clean.
//!
//! ## Example
//!
//! ```
//! use chrot13::cipher::{transform, Mode};
//!
//! let (encoded, report) = transform("Hello, World!", Mode::Encode);
//! assert_eq!(encoded, "Uryyb, Jbeyq!");
//! assert_eq!(report.characters, 13);
//! ```

pub mod cipher;
pub mod cli;
pub mod error;
pub mod interrupt;
pub mod logging;
pub mod sink;
pub mod source;
pub mod status;

pub use cipher::{rot13, rot13_char, transform, Mode, TransformReport};
pub use error::{ChRot13Error, ErrorKind, Result};
pub use sink::Sink;
pub use source::Source;
