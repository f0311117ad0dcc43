//! Scanning the Ion text data format.
//!
//! Ion is a self-describing, rich-typed data serialization format with
//! paired binary and text encodings. This crate implements the lexical
//! front end for the text encoding: a pull-driven [`Tokenizer`] that
//! classifies the next token in a byte stream and stops there, leaving the
//! token's payload bytes in place for a value reader to extract (or for
//! [`Tokenizer::finish`] to discard).
//!
//! The grammar has unusually many overlapping prefixes (`+inf` vs. the `+`
//! operator, `'''…'''` long strings vs. quoted symbols, `{{` lobs vs. `{`
//! structs, timestamps vs. decimals), so most of the work here is bounded
//! look-ahead and stop-character policy rather than ordinary scanning.

mod error;
mod tokenize;

pub use error::TokenizerError;
pub use tokenize::{TokenKind, Tokenizer};
