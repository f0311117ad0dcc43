use thiserror::Error;

/// Errors produced while scanning Ion text.
///
/// All of these are fatal to the call that produced them. The tokenizer
/// performs no recovery; after an error its position and peek buffer are
/// unspecified and scanning must not resume on the same instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizerError {
    /// A byte that cannot begin any token.
    #[error("unexpected byte {0:#04x} at offset {1}")]
    UnexpectedChar(u8, usize),
    /// Input ended where more bytes were required.
    #[error("unexpected end of input at offset {0}")]
    EarlyEof(usize),
    /// `unread` was called before anything had been read.
    #[error("cannot unread before reading")]
    UnreadAtStart,
    /// Comments are not valid inside `{{ … }}`.
    #[error("comment inside a blob or clob")]
    CommentInLob,
    /// A `/* … */` comment ran off the end of the input.
    #[error("unterminated block comment")]
    UnterminatedComment,
    /// Timestamps cannot be negative.
    #[error("negative timestamp")]
    NegativeTimestamp,
}
