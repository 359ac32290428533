use super::token::{Token, TokenKind};
use ferrous_zones_domain::ScanError;
use smallvec::SmallVec;
use std::io::{self, BufRead};
use tracing::trace;

type TokenBuf = SmallVec<[u8; 64]>;

/// `u8::is_ascii_whitespace` leaves out `\x0B`.
const VERTICAL_TAB: u8 = 0x0B;

/// Splits a zone file into tokens.
///
/// Whitespace and `;` comments are discarded, `"..."` groups text containing
/// whitespace or semicolons into one token and `\` takes the next character
/// literally. Newlines are returned as tokens of their own because the zone
/// file grammar is line oriented.
pub struct Scanner<R> {
    input: R,
    pushback: Option<u8>,
    line: usize,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            pushback: None,
            line: 1,
        }
    }

    /// Current line number, 1-based.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Scans input for the next token and returns it.
    /// Always returns an EOF token once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Token, ScanError> {
        let token = self.scan()?;
        trace!(token = %token, line = token.line, "Scanned token");
        Ok(token)
    }

    fn scan(&mut self) -> Result<Token, ScanError> {
        let mut value = TokenBuf::new();
        let start_line = self.line;
        let mut quoted = false; // Token contained a "quoted" section
        let mut in_quote = false;
        let mut in_comment = false;

        loop {
            let Some(byte) = self.read_byte()? else {
                if in_quote {
                    return Err(ScanError::UnterminatedQuote);
                }
                if !value.is_empty() || quoted {
                    return Self::finish(value, quoted, start_line);
                }
                return Ok(Token::eof(self.line));
            };

            if byte == b'\n' {
                if in_quote {
                    return Err(ScanError::LineBreakInQuote);
                }
                if !value.is_empty() || quoted {
                    self.pushback = Some(byte);
                    return Self::finish(value, quoted, start_line);
                }
                let line = self.line;
                self.line += 1;
                return Ok(Token::newline(line));
            }

            if in_comment {
                continue;
            }

            match byte {
                b'\\' => {
                    let escaped = self.read_byte()?.ok_or(ScanError::DanglingEscape)?;
                    if escaped == b'\n' {
                        self.line += 1;
                    }
                    value.push(escaped);
                }
                b'"' => {
                    in_quote = !in_quote;
                    quoted = true;
                }
                _ if in_quote => value.push(byte),
                b';' => in_comment = true,
                _ if byte.is_ascii_whitespace() || byte == VERTICAL_TAB => {
                    if !value.is_empty() || quoted {
                        self.pushback = Some(byte);
                        return Self::finish(value, quoted, start_line);
                    }
                }
                _ => value.push(byte),
            }
        }
    }

    fn finish(value: TokenBuf, quoted: bool, line: usize) -> Result<Token, ScanError> {
        let text = String::from_utf8(value.into_vec())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        // Quoted text is always literal, so "300" or "zone" can be used as data.
        let kind = if quoted {
            TokenKind::Identifier
        } else {
            TokenKind::classify(&text)
        };
        Ok(Token::new(kind, text, line))
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(byte) = self.pushback.take() {
            return Ok(Some(byte));
        }
        loop {
            let byte = match self.input.fill_buf() {
                Ok(buf) => buf.first().copied(),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if byte.is_some() {
                self.input.consume(1);
            }
            return Ok(byte);
        }
    }
}

impl<R: BufRead> Iterator for Scanner<R> {
    type Item = Result<Token, ScanError>;

    /// Yields tokens up to, not including, EOF.
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) if token.kind == TokenKind::Eof => None,
            other => Some(other),
        }
    }
}
