//! Payload skipping.
//!
//! Each helper consumes the current token's remaining payload bytes and
//! returns the byte that terminated it (for quoted forms and lobs, the byte
//! after the closing delimiter). `next_token` uses them to hop over an
//! unconsumed token; `finish` uses them and then pushes the terminator
//! back.

use super::chars;
use super::scan::{Tokenizer, EOF};
use super::token::TokenKind;
use crate::error::TokenizerError;

impl Tokenizer<'_> {
    /// Skip the unconsumed payload of the current token, plus any trivia
    /// after it, and return the byte `next_token` should classify.
    pub(super) fn skip_value(&mut self) -> Result<u8, TokenizerError> {
        let mut c = self.skip_payload()?;
        if chars::is_whitespace(c) {
            c = self.skip_whitespace()?;
        } else if c == b'/' {
            // the payload ended in front of a comment
            self.unread(c)?;
            c = self.skip_whitespace()?;
        }
        Ok(c)
    }

    pub(super) fn skip_payload(&mut self) -> Result<u8, TokenizerError> {
        match self.current_token() {
            TokenKind::Number
            | TokenKind::Binary
            | TokenKind::Hex
            | TokenKind::Timestamp => self.skip_to_stop_char(),
            TokenKind::Symbol => self.skip_symbol_body(),
            TokenKind::SymbolOperator => self.skip_operator_body(),
            TokenKind::SymbolQuoted => self.skip_quoted_body(b'\''),
            TokenKind::String => self.skip_quoted_body(b'"'),
            TokenKind::LongString => self.skip_long_string_body(),
            TokenKind::OpenDoubleBrace => self.skip_lob_body(),
            // every other kind is classified as already finished
            kind => unreachable!("no payload to skip for {kind}"),
        }
    }

    // numbers, radix literals and timestamps all end at the first stop char
    fn skip_to_stop_char(&mut self) -> Result<u8, TokenizerError> {
        loop {
            let c = self.read_byte()?;
            if self.is_stop_char(c)? {
                return Ok(c);
            }
        }
    }

    fn skip_symbol_body(&mut self) -> Result<u8, TokenizerError> {
        loop {
            let c = self.read_byte()?;
            if !chars::is_identifier_char(c) {
                return Ok(c);
            }
        }
    }

    // an operator run ends at a non-operator byte, or in front of a `/`
    // that opens a comment
    fn skip_operator_body(&mut self) -> Result<u8, TokenizerError> {
        loop {
            let c = self.read_byte()?;
            if c == b'/' {
                let next = self.read_byte()?;
                self.unread(next)?;
                if next == b'/' || next == b'*' {
                    return Ok(c);
                }
                continue;
            }
            if !chars::is_operator_char(c) {
                return Ok(c);
            }
        }
    }

    // consumes the closing quote and returns the byte after it; backslash
    // escapes the byte it precedes
    fn skip_quoted_body(&mut self, quote: u8) -> Result<u8, TokenizerError> {
        loop {
            match self.read_byte()? {
                EOF => return Err(self.unexpected_eof()),
                b'\\' => {
                    self.read_byte()?;
                }
                c if c == quote => return self.read_byte(),
                _ => {}
            }
        }
    }

    // adjacent long strings are not merged here; the next one is
    // classified as its own token
    fn skip_long_string_body(&mut self) -> Result<u8, TokenizerError> {
        let mut quotes = 0;
        loop {
            match self.read_byte()? {
                EOF => return Err(self.unexpected_eof()),
                b'\'' => {
                    quotes += 1;
                    if quotes == 3 {
                        return self.read_byte();
                    }
                }
                b'\\' => {
                    quotes = 0;
                    self.read_byte()?;
                }
                _ => quotes = 0,
            }
        }
    }

    // a leading `"` or `'''` selects the clob form; anything else is blob
    // content. comments are a syntax error throughout
    fn skip_lob_body(&mut self) -> Result<u8, TokenizerError> {
        let c = self.skip_lob_whitespace()?;
        match c {
            b'"' => {
                let after = self.skip_quoted_body(b'"')?;
                self.unread(after)?;
                self.expect_lob_close()
            }
            b'\'' => {
                if !self.scan_for_triple_quote()? {
                    return Err(TokenizerError::UnexpectedChar(c, self.position()));
                }
                let after = self.skip_long_string_body()?;
                self.unread(after)?;
                self.expect_lob_close()
            }
            _ => {
                self.unread(c)?;
                self.skip_blob_body()
            }
        }
    }

    fn skip_blob_body(&mut self) -> Result<u8, TokenizerError> {
        loop {
            let c = self.skip_lob_whitespace()?;
            match c {
                EOF => return Err(self.unexpected_eof()),
                b'}' => {
                    let next = self.read_byte()?;
                    if next == b'}' {
                        return self.read_byte();
                    }
                    return Err(self.lob_close_error(next));
                }
                _ => {}
            }
        }
    }

    // after a clob body the only thing left inside the lob is `}}`
    fn expect_lob_close(&mut self) -> Result<u8, TokenizerError> {
        let c = self.skip_lob_whitespace()?;
        if c != b'}' {
            return Err(self.lob_close_error(c));
        }
        let c = self.read_byte()?;
        if c != b'}' {
            return Err(self.lob_close_error(c));
        }
        self.read_byte()
    }

    fn lob_close_error(&self, c: u8) -> TokenizerError {
        if c == EOF {
            self.unexpected_eof()
        } else {
            TokenizerError::UnexpectedChar(c, self.position())
        }
    }

    // === Container skips for readers ===

    /// Skip the remaining contents of a struct, through its closing `}`,
    /// returning the byte after the closer. For readers stepping over a
    /// whole container instead of tokenizing its interior.
    pub fn skip_struct_contents(&mut self) -> Result<u8, TokenizerError> {
        self.skip_container_contents(b'}')
    }

    pub fn skip_list_contents(&mut self) -> Result<u8, TokenizerError> {
        self.skip_container_contents(b']')
    }

    pub fn skip_sexp_contents(&mut self) -> Result<u8, TokenizerError> {
        self.skip_container_contents(b')')
    }

    // nesting-aware scan to `terminator`; quoted forms and lobs inside are
    // hopped over opaquely so a brace in a string cannot end the scan
    fn skip_container_contents(&mut self, terminator: u8) -> Result<u8, TokenizerError> {
        loop {
            let c = self.skip_whitespace()?;
            match c {
                EOF => return Err(self.unexpected_eof()),
                c if c == terminator => return self.read_byte(),
                b'"' => {
                    let after = self.skip_quoted_body(b'"')?;
                    self.unread(after)?;
                }
                b'\'' => {
                    let after = if self.scan_for_triple_quote()? {
                        self.skip_long_string_body()?
                    } else {
                        self.skip_quoted_body(b'\'')?
                    };
                    self.unread(after)?;
                }
                b'{' => {
                    let next = self.read_byte()?;
                    let after = if next == b'{' {
                        self.skip_lob_body()?
                    } else {
                        self.unread(next)?;
                        self.skip_container_contents(b'}')?
                    };
                    self.unread(after)?;
                }
                b'[' => {
                    let after = self.skip_container_contents(b']')?;
                    self.unread(after)?;
                }
                b'(' => {
                    let after = self.skip_container_contents(b')')?;
                    self.unread(after)?;
                }
                _ => {}
            }
        }
    }
}
