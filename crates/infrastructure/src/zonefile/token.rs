use ferrous_zones_domain::RecordType;
use std::fmt;
use std::net::IpAddr;

pub const KEYWORD_ZONE: &str = "zone";
pub const KEYWORD_TTL: &str = "ttl";
pub const KEYWORDS: [&str; 2] = [KEYWORD_ZONE, KEYWORD_TTL];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    Keyword,
    Ip,
    Integer,
    /// A, AAAA, etc...
    RecordType,
    Newline,
    Eof,
}

impl TokenKind {
    /// Classifies unquoted token text.
    pub fn classify(text: &str) -> Self {
        if text.parse::<i64>().is_ok() {
            TokenKind::Integer
        } else if KEYWORDS.contains(&text) {
            TokenKind::Keyword
        } else if text.parse::<RecordType>().is_ok() {
            TokenKind::RecordType
        } else if text.parse::<IpAddr>().is_ok() {
            TokenKind::Ip
        } else {
            TokenKind::Identifier
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "Identifier",
            TokenKind::Keyword => "Keyword",
            TokenKind::Ip => "IP Address",
            TokenKind::Integer => "Integer",
            TokenKind::RecordType => "Record Type",
            TokenKind::Newline => "Newline",
            TokenKind::Eof => "EOF",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    /// Line the token started on, 1-based.
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            line,
        }
    }

    pub fn newline(line: usize) -> Self {
        Self::new(TokenKind::Newline, "\n", line)
    }

    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, "", line)
    }

    /// Newline and EOF both end a logical line.
    pub fn ends_line(&self) -> bool {
        matches!(self.kind, TokenKind::Newline | TokenKind::Eof)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Newline => write!(f, "{}: \\n", self.kind.as_str()),
            TokenKind::Eof => write!(f, "{}", self.kind.as_str()),
            _ => write!(f, "{}: {}", self.kind.as_str(), self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_order() {
        assert_eq!(TokenKind::classify("300"), TokenKind::Integer);
        assert_eq!(TokenKind::classify("-5"), TokenKind::Integer);
        assert_eq!(TokenKind::classify("zone"), TokenKind::Keyword);
        assert_eq!(TokenKind::classify("ttl"), TokenKind::Keyword);
        assert_eq!(TokenKind::classify("AAAA"), TokenKind::RecordType);
        assert_eq!(TokenKind::classify("192.0.2.1"), TokenKind::Ip);
        assert_eq!(TokenKind::classify("2001:db8::1"), TokenKind::Ip);
        assert_eq!(TokenKind::classify("mx"), TokenKind::Identifier);
        assert_eq!(TokenKind::classify("example.com."), TokenKind::Identifier);
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::new(TokenKind::Ip, "1.2.3.4", 1).to_string(), "IP Address: 1.2.3.4");
        assert_eq!(Token::newline(3).to_string(), "Newline: \\n");
        assert_eq!(Token::eof(3).to_string(), "EOF");
    }
}
