//! The tokenizer state machine: byte I/O with unread, whitespace and
//! comment skipping, the disambiguation look-aheads, and `next_token`.

use log::trace;
use smallvec::SmallVec;

use super::chars;
use super::token::TokenKind;
use crate::error::TokenizerError;

pub(crate) const EOF: u8 = 0x0;

/// A pull-driven tokenizer over a byte slice holding an Ion text document.
///
/// `next_token` classifies the next token and stops with its payload still
/// in the input; the reader layered above drains it, or `finish` discards
/// it.
pub struct Tokenizer<'a> {
    input: &'a [u8],
    cursor: usize,
    // bytes pushed back by `unread`, consumed LIFO from the tail; the
    // multi-byte look-aheads (dot, minus, infinity) depend on this ordering
    pending: SmallVec<[u8; 8]>,
    position: usize,
    current: TokenKind,
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Tokenizer {
            input,
            cursor: 0,
            pending: SmallVec::new(),
            position: 0,
            current: TokenKind::Invalid,
            finished: true,
        }
    }

    pub fn current_token(&self) -> TokenKind {
        self.current
    }

    // false while the current token's payload has not been consumed
    pub fn finished(&self) -> bool {
        self.finished
    }

    // counts the normalized stream: a CRLF pair is a single read
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_eof(&self) -> bool {
        self.cursor >= self.input.len() && self.current == TokenKind::Eof
    }

    // === Byte I/O ===

    /// Next byte, consulting the peek buffer first. Returns the `0`
    /// sentinel at end of input; `\r` never comes back (CRLF and bare CR
    /// are delivered as `\n`, a `\r` with nothing after it is an error).
    pub fn read_byte(&mut self) -> Result<u8, TokenizerError> {
        let c = if let Some(c) = self.pending.pop() {
            c
        } else {
            match self.input.get(self.cursor) {
                None => EOF,
                Some(&b'\r') => {
                    self.cursor += 1;
                    match self.input.get(self.cursor) {
                        None => return Err(self.unexpected_eof()),
                        Some(&b'\n') => self.cursor += 1,
                        Some(_) => {}
                    }
                    b'\n'
                }
                Some(&c) => {
                    self.cursor += 1;
                    c
                }
            }
        };
        self.position += 1;
        Ok(c)
    }

    /// Push `c` back so the next read returns it; unreading the sentinel
    /// is legal.
    pub fn unread(&mut self, c: u8) -> Result<(), TokenizerError> {
        if self.position == 0 {
            return Err(TokenizerError::UnreadAtStart);
        }
        self.position -= 1;
        self.pending.push(c);
        Ok(())
    }

    pub fn peek_one(&mut self) -> Result<u8, TokenizerError> {
        if let Some(&c) = self.pending.last() {
            return Ok(c);
        }
        if self.cursor >= self.input.len() {
            return Err(self.unexpected_eof());
        }
        let c = self.read_byte()?;
        self.unread(c)?;
        Ok(c)
    }

    /// Up to `n` bytes of look-ahead, in read order; the stream is left
    /// unchanged.
    pub fn peek_max(&mut self, n: usize) -> Result<SmallVec<[u8; 8]>, TokenizerError> {
        let mut out = SmallVec::new();
        while out.len() < n {
            let c = self.read_byte()?;
            if c == EOF {
                self.unread(c)?;
                break;
            }
            out.push(c);
        }
        for i in (0..out.len()).rev() {
            self.unread(out[i])?;
        }
        Ok(out)
    }

    pub fn peek_exactly(&mut self, n: usize) -> Result<SmallVec<[u8; 8]>, TokenizerError> {
        let cs = self.peek_max(n)?;
        if cs.len() < n {
            return Err(self.unexpected_eof());
        }
        Ok(cs)
    }

    // the skips report EOF as `false` rather than erroring
    pub fn skip_one(&mut self) -> Result<bool, TokenizerError> {
        Ok(self.read_byte()? != EOF)
    }

    pub fn skip_exactly(&mut self, n: usize) -> Result<bool, TokenizerError> {
        for _ in 0..n {
            if !self.skip_one()? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub(crate) fn unexpected_eof(&self) -> TokenizerError {
        TokenizerError::EarlyEof(self.position)
    }

    // === Whitespace and comments ===

    /// Skip whitespace and comments, returning the first byte that is
    /// neither. A `/` that does not begin a comment is returned as-is.
    pub fn skip_whitespace(&mut self) -> Result<u8, TokenizerError> {
        self.skip_whitespace_mode::<true, false>()
    }

    // inside `{{ … }}`, where a comment is a syntax error
    pub fn skip_lob_whitespace(&mut self) -> Result<u8, TokenizerError> {
        self.skip_whitespace_mode::<false, true>()
    }

    // hands `/` back untouched, for readers that deal with comments
    // themselves
    pub fn skip_plain_whitespace(&mut self) -> Result<u8, TokenizerError> {
        self.skip_whitespace_mode::<false, false>()
    }

    // The three behaviors stay separate instantiations on purpose; folding
    // them into one runtime flag has a history of silently weakening the
    // lob check.
    fn skip_whitespace_mode<const SKIP_COMMENTS: bool, const FAIL_ON_COMMENT: bool>(
        &mut self,
    ) -> Result<u8, TokenizerError> {
        loop {
            let c = self.read_byte()?;
            if chars::is_whitespace(c) {
                continue;
            }
            if c != b'/' {
                return Ok(c);
            }
            if FAIL_ON_COMMENT {
                return Err(TokenizerError::CommentInLob);
            }
            if !SKIP_COMMENTS {
                return Ok(c);
            }
            let next = self.read_byte()?;
            match next {
                b'/' => self.skip_line_comment()?,
                b'*' => self.skip_block_comment()?,
                _ => {
                    self.unread(next)?;
                    return Ok(c);
                }
            }
        }
    }

    fn skip_line_comment(&mut self) -> Result<(), TokenizerError> {
        loop {
            match self.read_byte()? {
                EOF | b'\n' => return Ok(()),
                _ => {}
            }
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), TokenizerError> {
        loop {
            match self.read_byte()? {
                EOF => return Err(TokenizerError::UnterminatedComment),
                b'*' => {
                    let c = self.read_byte()?;
                    if c == b'/' {
                        return Ok(());
                    }
                    self.unread(c)?;
                }
                _ => {}
            }
        }
    }

    /// Whether `c` terminates an adjacent unquoted token. For `/` that
    /// depends on the byte after it: only a comment-opening slash stops.
    pub fn is_stop_char(&mut self, c: u8) -> Result<bool, TokenizerError> {
        if chars::is_stop_always(c) {
            return Ok(true);
        }
        if c == b'/' {
            let next = self.read_byte()?;
            self.unread(next)?;
            return Ok(next == b'/' || next == b'*');
        }
        Ok(false)
    }

    // === Look-aheads ===

    // after a `+` or `-`: is the rest `inf` followed by a token boundary?
    // consumes the `inf` when it is
    fn scan_for_inf(&mut self) -> Result<bool, TokenizerError> {
        let cs = self.peek_max(5)?;
        if cs.len() < 3 || &cs[..3] != b"inf" {
            return Ok(false);
        }
        let bounded = match cs.get(3) {
            // nothing after `inf`: EOF reads as a stop character
            None => true,
            Some(&c) if chars::is_stop_always(c) => true,
            Some(b'/') => matches!(cs.get(4), Some(b'/') | Some(b'*')),
            Some(_) => false,
        };
        if bounded && !self.skip_exactly(3)? {
            return Err(self.unexpected_eof());
        }
        Ok(bounded)
    }

    // after a `'`: do two more follow? consumes them when they do
    pub(super) fn scan_for_triple_quote(&mut self) -> Result<bool, TokenizerError> {
        let cs = match self.peek_exactly(2) {
            Ok(cs) => cs,
            // running out of input means not-a-triple-quote, not an error
            Err(TokenizerError::EarlyEof(_)) => return Ok(false),
            Err(e) => return Err(e),
        };
        if cs[0] == b'\'' && cs[1] == b'\'' {
            if !self.skip_exactly(2)? {
                return Err(self.unexpected_eof());
            }
            return Ok(true);
        }
        Ok(false)
    }

    // `0b`/`0x` radix prefixes, a `dddd-`/`ddddT` year opening a
    // timestamp, or a plain number; `c` is the already-read leading digit
    fn scan_number_kind(&mut self, c: u8) -> Result<TokenKind, TokenizerError> {
        let cs = self.peek_max(4)?;
        if c == b'0' {
            match cs.first() {
                Some(b'b') | Some(b'B') => return Ok(TokenKind::Binary),
                Some(b'x') | Some(b'X') => return Ok(TokenKind::Hex),
                _ => {}
            }
        }
        if cs.len() == 4
            && cs[..3].iter().all(u8::is_ascii_digit)
            && (cs[3] == b'-' || cs[3] == b'T')
        {
            return Ok(TokenKind::Timestamp);
        }
        Ok(TokenKind::Number)
    }

    // === Dispatch ===

    /// Advance to the next token, skipping the current token's payload
    /// first if it has not been consumed. Returns `Ok(true)` on every
    /// successful classification, including EOF; EOF is terminal.
    pub fn next_token(&mut self) -> Result<bool, TokenizerError> {
        if self.current == TokenKind::Eof {
            return Ok(true);
        }
        let c = if self.finished {
            self.skip_whitespace()?
        } else {
            self.skip_value()?
        };
        match c {
            EOF => self.produce(TokenKind::Eof, true),
            b':' => {
                let next = self.read_byte()?;
                if next == b':' {
                    self.produce(TokenKind::DoubleColon, true)
                } else {
                    self.unread(next)?;
                    self.produce(TokenKind::Colon, true)
                }
            }
            b'{' => {
                let next = self.read_byte()?;
                if next == b'{' {
                    self.produce(TokenKind::OpenDoubleBrace, false)
                } else {
                    self.unread(next)?;
                    self.produce(TokenKind::OpenBrace, true)
                }
            }
            b'}' => self.produce(TokenKind::CloseBrace, true),
            b'[' => self.produce(TokenKind::OpenBracket, true),
            b']' => self.produce(TokenKind::CloseBracket, true),
            b'(' => self.produce(TokenKind::OpenParen, true),
            b')' => self.produce(TokenKind::CloseParen, true),
            b',' => self.produce(TokenKind::Comma, true),
            b'.' => {
                // `.` glues onto a following operator run; anything else
                // (including the EOF sentinel) is pushed back whole.
                let next = self.read_byte()?;
                self.unread(next)?;
                if chars::is_operator_char(next) {
                    self.unread(b'.')?;
                    self.produce(TokenKind::SymbolOperator, false)
                } else {
                    self.produce(TokenKind::Dot, true)
                }
            }
            b'\'' => {
                if self.scan_for_triple_quote()? {
                    self.produce(TokenKind::LongString, false)
                } else {
                    self.produce(TokenKind::SymbolQuoted, false)
                }
            }
            b'+' => {
                if self.scan_for_inf()? {
                    self.produce(TokenKind::FloatInf, true)
                } else {
                    self.unread(b'+')?;
                    self.produce(TokenKind::SymbolOperator, false)
                }
            }
            b'-' => {
                if self.scan_for_inf()? {
                    return self.produce(TokenKind::FloatMinusInf, true);
                }
                let next = self.read_byte()?;
                if next.is_ascii_digit() {
                    let kind = self.scan_number_kind(next)?;
                    if kind == TokenKind::Timestamp {
                        return Err(TokenizerError::NegativeTimestamp);
                    }
                    self.unread(next)?;
                    self.unread(b'-')?;
                    self.produce(kind, false)
                } else {
                    self.unread(next)?;
                    self.unread(b'-')?;
                    self.produce(TokenKind::SymbolOperator, false)
                }
            }
            b'"' => self.produce(TokenKind::String, false),
            c if chars::is_operator_char(c) => {
                self.unread(c)?;
                self.produce(TokenKind::SymbolOperator, false)
            }
            c if chars::is_identifier_start(c) => {
                self.unread(c)?;
                self.produce(TokenKind::Symbol, false)
            }
            c if c.is_ascii_digit() => {
                let kind = self.scan_number_kind(c)?;
                self.unread(c)?;
                self.produce(kind, false)
            }
            c => Err(TokenizerError::UnexpectedChar(c, self.position)),
        }
    }

    /// Discard the rest of the current token's payload, leaving the stream
    /// positioned on the byte that terminated it. Returns `false` when
    /// there was nothing left to discard.
    pub fn finish(&mut self) -> Result<bool, TokenizerError> {
        if self.finished {
            return Ok(false);
        }
        let c = self.skip_payload()?;
        self.unread(c)?;
        self.finished = true;
        trace!("finished {} at offset {}", self.current, self.position);
        Ok(true)
    }

    fn produce(&mut self, kind: TokenKind, finished: bool) -> Result<bool, TokenizerError> {
        trace!("{kind} at offset {}", self.position);
        self.current = kind;
        self.finished = finished;
        Ok(true)
    }
}

impl<'a> From<&'a str> for Tokenizer<'a> {
    fn from(text: &'a str) -> Self {
        Tokenizer::new(text.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::TokenKind::*;
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    // drive the tokenizer to EOF, collecting every classification
    fn tokenize(text: &str) -> Vec<TokenKind> {
        init();
        let mut tok = Tokenizer::from(text);
        let mut out = Vec::new();
        loop {
            tok.next_token().unwrap();
            out.push(tok.current_token());
            if tok.current_token() == Eof {
                return out;
            }
        }
    }

    fn tokenize_err(text: &str) -> TokenizerError {
        init();
        let mut tok = Tokenizer::from(text);
        loop {
            match tok.next_token() {
                Err(e) => return e,
                Ok(_) if tok.current_token() == Eof => {
                    panic!("tokenized {text:?} without error")
                }
                Ok(_) => {}
            }
        }
    }

    #[test]
    fn empty_input() {
        let mut tok = Tokenizer::from("");
        tok.next_token().unwrap();
        assert_eq!(tok.current_token(), Eof);
        assert!(tok.finished());
        assert!(tok.is_eof());
    }

    #[test]
    fn eof_is_sticky() {
        let mut tok = Tokenizer::from("");
        for _ in 0..3 {
            tok.next_token().unwrap();
            assert_eq!(tok.current_token(), Eof);
        }
    }

    #[test]
    fn annotated_struct() {
        assert_eq!(
            tokenize("foo::{a:1, b:2}"),
            vec![
                Symbol,
                DoubleColon,
                OpenBrace,
                Symbol,
                Colon,
                Number,
                Comma,
                Symbol,
                Colon,
                Number,
                CloseBrace,
                Eof,
            ]
        );
    }

    #[test]
    fn infinities_and_signs() {
        // `+1` is an operator followed by a number; `-1` is a single
        // number whose payload starts at the minus sign.
        assert_eq!(
            tokenize("+inf -inf +1 -1"),
            vec![FloatInf, FloatMinusInf, SymbolOperator, Number, Number, Eof]
        );
    }

    #[test]
    fn inf_needs_a_boundary() {
        assert_eq!(tokenize("+inf"), vec![FloatInf, Eof]);
        assert_eq!(tokenize("+inf//c"), vec![FloatInf, Eof]);
        // `info` is not infinity
        assert_eq!(tokenize("+info"), vec![SymbolOperator, Symbol, Eof]);
        // a slash that is not a comment is not a boundary either
        assert_eq!(
            tokenize("+inf/x"),
            vec![SymbolOperator, Symbol, SymbolOperator, Symbol, Eof]
        );
    }

    #[test]
    fn long_strings_stay_separate() {
        assert_eq!(
            tokenize("'''a''' '''b'''"),
            vec![LongString, LongString, Eof]
        );
    }

    #[test]
    fn radix_timestamp_number() {
        assert_eq!(
            tokenize("0b101 0xFF 2020-01-01T 2020"),
            vec![Binary, Hex, Timestamp, Number, Eof]
        );
    }

    #[test]
    fn comments_between_tokens() {
        assert_eq!(tokenize("a // comment\nb"), vec![Symbol, Symbol, Eof]);
        assert_eq!(tokenize("a /* x */ b"), vec![Symbol, Symbol, Eof]);
        assert_eq!(tokenize("a // trailing"), vec![Symbol, Eof]);
    }

    #[test]
    fn comment_inside_lob() {
        assert_eq!(tokenize_err("{{/*x*/}}"), TokenizerError::CommentInLob);
    }

    #[test]
    fn unterminated_block_comment() {
        assert_eq!(tokenize_err("/* x"), TokenizerError::UnterminatedComment);
    }

    #[test]
    fn negative_timestamp() {
        assert_eq!(
            tokenize_err("-2020-01-01T"),
            TokenizerError::NegativeTimestamp
        );
    }

    #[test]
    fn lone_trailing_cr() {
        let mut tok = Tokenizer::from("\r");
        assert_eq!(tok.read_byte(), Err(TokenizerError::EarlyEof(0)));
    }

    #[test]
    fn reader_consumes_payload() {
        let mut tok = Tokenizer::from("null.int");
        tok.next_token().unwrap();
        assert_eq!(tok.current_token(), Symbol);
        assert!(!tok.finished());
        // a null reader takes the whole typed null, dot included
        let mut payload = Vec::new();
        for _ in 0.."null.int".len() {
            payload.push(tok.read_byte().unwrap());
        }
        assert_eq!(payload, b"null.int");
        tok.next_token().unwrap();
        assert_eq!(tok.current_token(), Eof);
        assert!(tok.finished());
    }

    #[test]
    fn finish_discards_payload() {
        let mut tok = Tokenizer::from("foo bar");
        tok.next_token().unwrap();
        assert_eq!(tok.current_token(), Symbol);
        assert!(tok.finish().unwrap());
        assert!(tok.finished());
        // a second finish has nothing to do
        assert!(!tok.finish().unwrap());
        tok.next_token().unwrap();
        assert_eq!(tok.current_token(), Symbol);
        tok.next_token().unwrap();
        assert_eq!(tok.current_token(), Eof);
    }

    #[test]
    fn punctuation_shapes() {
        assert_eq!(tokenize("a::b"), vec![Symbol, DoubleColon, Symbol, Eof]);
        assert_eq!(tokenize(":"), vec![Colon, Eof]);
        assert_eq!(tokenize("."), vec![Dot, Eof]);
        assert_eq!(tokenize(".b"), vec![Dot, Symbol, Eof]);
        // a dot glued to an operator run is one operator symbol
        assert_eq!(tokenize(".+"), vec![SymbolOperator, Eof]);
        assert_eq!(tokenize("[](),"), vec![
            OpenBracket,
            CloseBracket,
            OpenParen,
            CloseParen,
            Comma,
            Eof
        ]);
    }

    #[test]
    fn quoted_forms() {
        assert_eq!(tokenize("'abc' \"str\""), vec![SymbolQuoted, String, Eof]);
        assert_eq!(tokenize("''"), vec![SymbolQuoted, Eof]);
    }

    #[test]
    fn unterminated_quoted_symbol() {
        let mut tok = Tokenizer::from("'");
        tok.next_token().unwrap();
        assert_eq!(tok.current_token(), SymbolQuoted);
        assert!(matches!(tok.next_token(), Err(TokenizerError::EarlyEof(_))));
    }

    #[test]
    fn finished_flags() {
        let mut tok = Tokenizer::from("{ {{ }} 1");
        tok.next_token().unwrap();
        assert_eq!(tok.current_token(), OpenBrace);
        assert!(tok.finished());
        tok.next_token().unwrap();
        assert_eq!(tok.current_token(), OpenDoubleBrace);
        assert!(!tok.finished());
        tok.next_token().unwrap();
        assert_eq!(tok.current_token(), Number);
        assert!(!tok.finished());
    }

    #[test]
    fn unexpected_character() {
        assert_eq!(
            tokenize_err("\\"),
            TokenizerError::UnexpectedChar(b'\\', 1)
        );
    }

    #[test]
    fn slash_as_operator() {
        assert_eq!(
            tokenize("a / b"),
            vec![Symbol, SymbolOperator, Symbol, Eof]
        );
        // an operator run ends in front of a comment
        assert_eq!(tokenize("++//x\n1"), vec![SymbolOperator, Number, Eof]);
    }

    // === byte I/O properties ===

    #[test]
    fn unread_round_trip() {
        let mut tok = Tokenizer::from("abc");
        let a = tok.read_byte().unwrap();
        let b = tok.read_byte().unwrap();
        let c = tok.read_byte().unwrap();
        assert_eq!((a, b, c), (b'a', b'b', b'c'));
        assert_eq!(tok.position(), 3);
        tok.unread(c).unwrap();
        tok.unread(b).unwrap();
        tok.unread(a).unwrap();
        assert_eq!(tok.position(), 0);
        assert_eq!(tok.read_byte().unwrap(), b'a');
        assert_eq!(tok.read_byte().unwrap(), b'b');
        assert_eq!(tok.read_byte().unwrap(), b'c');
        assert_eq!(tok.position(), 3);
    }

    #[test]
    fn unread_at_start() {
        let mut tok = Tokenizer::from("a");
        assert_eq!(tok.unread(b'x'), Err(TokenizerError::UnreadAtStart));
    }

    #[test]
    fn unread_eof_sentinel() {
        let mut tok = Tokenizer::from("a");
        assert_eq!(tok.read_byte().unwrap(), b'a');
        assert_eq!(tok.read_byte().unwrap(), EOF);
        tok.unread(EOF).unwrap();
        assert_eq!(tok.read_byte().unwrap(), EOF);
    }

    #[test]
    fn crlf_normalization() {
        let mut tok = Tokenizer::from("a\r\nb");
        assert_eq!(tok.read_byte().unwrap(), b'a');
        assert_eq!(tok.read_byte().unwrap(), b'\n');
        assert_eq!(tok.position(), 2);
        assert_eq!(tok.read_byte().unwrap(), b'b');
        assert_eq!(tok.position(), 3);

        let mut tok = Tokenizer::from("a\rb");
        assert_eq!(tok.read_byte().unwrap(), b'a');
        assert_eq!(tok.read_byte().unwrap(), b'\n');
        assert_eq!(tok.read_byte().unwrap(), b'b');
    }

    #[test]
    fn peek_is_idempotent() {
        let mut tok = Tokenizer::from("xyz");
        let first = tok.peek_max(3).unwrap();
        let second = tok.peek_max(3).unwrap();
        assert_eq!(first, second);
        assert_eq!(tok.position(), 0);
        assert_eq!(tok.read_byte().unwrap(), b'x');
        assert_eq!(tok.read_byte().unwrap(), b'y');
        assert_eq!(tok.read_byte().unwrap(), b'z');
    }

    #[test]
    fn peek_stops_at_eof() {
        let mut tok = Tokenizer::from("ab");
        let cs = tok.peek_max(5).unwrap();
        assert_eq!(&cs[..], b"ab");
        assert_eq!(tok.read_byte().unwrap(), b'a');
    }

    #[test]
    fn peek_exactly_restores_on_failure() {
        let mut tok = Tokenizer::from("ab");
        assert!(matches!(
            tok.peek_exactly(5),
            Err(TokenizerError::EarlyEof(_))
        ));
        assert_eq!(tok.read_byte().unwrap(), b'a');
        assert_eq!(tok.read_byte().unwrap(), b'b');
    }

    #[test]
    fn peek_one_semantics() {
        let mut tok = Tokenizer::from("q");
        assert_eq!(tok.peek_one().unwrap(), b'q');
        assert_eq!(tok.position(), 0);
        assert_eq!(tok.read_byte().unwrap(), b'q');
        assert!(matches!(tok.peek_one(), Err(TokenizerError::EarlyEof(_))));
        // but a pushed-back sentinel is peekable
        tok.unread(EOF).unwrap();
        assert_eq!(tok.peek_one().unwrap(), EOF);
    }

    #[test]
    fn skip_reports_eof_without_error() {
        let mut tok = Tokenizer::from("ab");
        assert!(tok.skip_one().unwrap());
        assert!(!tok.skip_exactly(5).unwrap());
        let mut tok = Tokenizer::from("abc");
        assert!(tok.skip_exactly(3).unwrap());
    }

    #[test]
    fn stop_char_slash_depends_on_next() {
        let mut tok = Tokenizer::from("/x");
        assert!(!tok.is_stop_char(b'/').unwrap());
        let mut tok = Tokenizer::from("/ x");
        assert!(!tok.is_stop_char(b'/').unwrap());
        let mut tok = Tokenizer::from("/*");
        assert!(tok.is_stop_char(b'/').unwrap());
        let mut tok = Tokenizer::from("//");
        assert!(tok.is_stop_char(b'/').unwrap());
        // EOF after the slash: not a comment, so not a stop
        let mut tok = Tokenizer::from("");
        assert!(!tok.is_stop_char(b'/').unwrap());
        assert!(tok.is_stop_char(b' ').unwrap());
        assert!(tok.is_stop_char(0).unwrap());
    }

    #[test]
    fn whitespace_modes() {
        let mut tok = Tokenizer::from(" \t// c\nx");
        assert_eq!(tok.skip_whitespace().unwrap(), b'x');

        // pass-through hands the slash back untouched
        let mut tok = Tokenizer::from("  //x");
        assert_eq!(tok.skip_plain_whitespace().unwrap(), b'/');
        assert_eq!(tok.read_byte().unwrap(), b'/');

        // a slash that opens no comment comes back from the default mode too
        let mut tok = Tokenizer::from(" / x");
        assert_eq!(tok.skip_whitespace().unwrap(), b'/');
        assert_eq!(tok.read_byte().unwrap(), b' ');

        let mut tok = Tokenizer::from(" // c");
        assert_eq!(
            tok.skip_lob_whitespace(),
            Err(TokenizerError::CommentInLob)
        );
    }

    #[test]
    fn position_counts_delivered_bytes() {
        let mut tok = Tokenizer::from("ab");
        assert_eq!(tok.position(), 0);
        tok.read_byte().unwrap();
        assert_eq!(tok.position(), 1);
        tok.read_byte().unwrap();
        assert_eq!(tok.position(), 2);
        tok.unread(b'b').unwrap();
        assert_eq!(tok.position(), 1);
        tok.read_byte().unwrap();
        assert_eq!(tok.position(), 2);
    }
}
