use std::fmt;

/// Kinds of tokens assigned during scanning.
///
/// These carry no payload; a token's bytes stay in the input until a reader
/// extracts them or the tokenizer is told to skip past them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Invalid, // classification has not succeeded yet
    Eof,
    // a bare name like `foo`, a `'…'` quoted name, or a run of operator
    // characters; the distinction decides how the payload is drained.
    Symbol,
    SymbolQuoted,
    SymbolOperator,
    String,
    LongString, // `'''…'''`; adjacent long strings stay separate tokens here
    Number,
    Binary,
    Hex,
    Timestamp,
    FloatInf,
    FloatMinusInf,
    Dot,
    Comma,
    Colon,
    DoubleColon,
    OpenBrace,
    CloseBrace,
    // `{{` has no closing counterpart; the `}}` is absorbed while reading
    // or skipping the lob payload.
    OpenDoubleBrace,
    OpenBracket,
    CloseBracket,
    OpenParen,
    CloseParen,
}

impl TokenKind {
    /// True for kinds whose payload is a scalar value a reader can extract.
    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            Self::Symbol
                | Self::SymbolQuoted
                | Self::SymbolOperator
                | Self::String
                | Self::LongString
                | Self::Number
                | Self::Binary
                | Self::Hex
                | Self::Timestamp
                | Self::FloatInf
                | Self::FloatMinusInf
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Invalid => write!(f, "INVALID"),
            Self::Eof => write!(f, "EOF"),
            Self::Symbol => write!(f, "SYM"),
            Self::SymbolQuoted => write!(f, "SYM'"),
            Self::SymbolOperator => write!(f, "OP"),
            Self::String => write!(f, "STR"),
            Self::LongString => write!(f, "STR'''"),
            Self::Number => write!(f, "NUM"),
            Self::Binary => write!(f, "BIN"),
            Self::Hex => write!(f, "HEX"),
            Self::Timestamp => write!(f, "TS"),
            Self::FloatInf => write!(f, "+inf"),
            Self::FloatMinusInf => write!(f, "-inf"),
            Self::Dot => write!(f, "."),
            Self::Comma => write!(f, ","),
            Self::Colon => write!(f, ":"),
            Self::DoubleColon => write!(f, "::"),
            Self::OpenBrace => write!(f, "{{"),
            Self::CloseBrace => write!(f, "}}"),
            Self::OpenDoubleBrace => write!(f, "{{{{"),
            Self::OpenBracket => write!(f, "["),
            Self::CloseBracket => write!(f, "]"),
            Self::OpenParen => write!(f, "("),
            Self::CloseParen => write!(f, ")"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_terse() {
        assert_eq!(TokenKind::OpenDoubleBrace.to_string(), "{{");
        assert_eq!(TokenKind::DoubleColon.to_string(), "::");
        assert_eq!(TokenKind::FloatMinusInf.to_string(), "-inf");
    }

    #[test]
    fn scalars() {
        assert!(TokenKind::Number.is_scalar());
        assert!(TokenKind::LongString.is_scalar());
        assert!(!TokenKind::OpenBrace.is_scalar());
        assert!(!TokenKind::Eof.is_scalar());
    }
}
