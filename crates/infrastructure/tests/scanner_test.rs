use ferrous_zones_domain::ScanError;
use ferrous_zones_infrastructure::zonefile::{Scanner, Token, TokenKind};

fn scan(input: &str) -> Vec<Token> {
    Scanner::new(input.as_bytes())
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

fn kinds_and_values(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
    tokens
        .iter()
        .map(|t| (t.kind, t.value.as_str()))
        .collect()
}

fn scan_err(input: &str) -> ScanError {
    let mut scanner = Scanner::new(input.as_bytes());
    loop {
        match scanner.next_token() {
            Ok(token) if token.kind == TokenKind::Eof => panic!("expected a scan error"),
            Ok(_) => continue,
            Err(e) => return e,
        }
    }
}

#[test]
fn test_scan_record_line() {
    let tokens = scan("foo A 1.2.3.4 300\n");
    assert_eq!(
        kinds_and_values(&tokens),
        vec![
            (TokenKind::Identifier, "foo"),
            (TokenKind::RecordType, "A"),
            (TokenKind::Ip, "1.2.3.4"),
            (TokenKind::Integer, "300"),
            (TokenKind::Newline, "\n"),
        ]
    );
}

#[test]
fn test_scan_trailing_comment_is_discarded() {
    let with_comment = scan("foo A 1.2.3.4 ; trailing comment\n");
    let without_comment = scan("foo A 1.2.3.4\n");
    assert_eq!(
        kinds_and_values(&with_comment),
        kinds_and_values(&without_comment)
    );
}

#[test]
fn test_scan_comment_directly_after_token() {
    let tokens = scan("foo;comment\nbar");
    assert_eq!(
        kinds_and_values(&tokens),
        vec![
            (TokenKind::Identifier, "foo"),
            (TokenKind::Newline, "\n"),
            (TokenKind::Identifier, "bar"),
        ]
    );
}

#[test]
fn test_scan_quoted_literal_keeps_spaces_and_semicolons() {
    let tokens = scan("\"a ; b\"");
    assert_eq!(kinds_and_values(&tokens), vec![(TokenKind::Identifier, "a ; b")]);
}

#[test]
fn test_scan_quoted_text_is_never_classified() {
    let tokens = scan("\"300\" \"zone\" \"A\" \"\"");
    assert_eq!(
        kinds_and_values(&tokens),
        vec![
            (TokenKind::Identifier, "300"),
            (TokenKind::Identifier, "zone"),
            (TokenKind::Identifier, "A"),
            (TokenKind::Identifier, ""),
        ]
    );
}

#[test]
fn test_scan_partially_quoted_token() {
    let tokens = scan("pre\"fix suf\"fix next");
    assert_eq!(
        kinds_and_values(&tokens),
        vec![
            (TokenKind::Identifier, "prefix suffix"),
            (TokenKind::Identifier, "next"),
        ]
    );
}

#[test]
fn test_scan_escapes() {
    let tokens = scan(r#"a\ b c\;d "q\"uote" back\\slash"#);
    assert_eq!(
        kinds_and_values(&tokens),
        vec![
            (TokenKind::Identifier, "a b"),
            (TokenKind::Identifier, "c;d"),
            (TokenKind::Identifier, "q\"uote"),
            (TokenKind::Identifier, "back\\slash"),
        ]
    );
}

#[test]
fn test_scan_escaped_newline_is_literal() {
    let tokens = scan("a\\\nb\nc");
    assert_eq!(tokens[0].value, "a\nb");
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].kind, TokenKind::Newline);
    assert_eq!(tokens[1].line, 2);
    assert_eq!(tokens[2].line, 3);
}

#[test]
fn test_scan_keywords_and_integers() {
    let tokens = scan("zone example.com.\nttl -5\n");
    assert_eq!(
        kinds_and_values(&tokens),
        vec![
            (TokenKind::Keyword, "zone"),
            (TokenKind::Identifier, "example.com."),
            (TokenKind::Newline, "\n"),
            (TokenKind::Keyword, "ttl"),
            (TokenKind::Integer, "-5"),
            (TokenKind::Newline, "\n"),
        ]
    );
}

#[test]
fn test_scan_ipv6_and_record_types() {
    let tokens = scan("host AAAA 2001:db8::1\n");
    assert_eq!(tokens[1].kind, TokenKind::RecordType);
    assert_eq!(tokens[2].kind, TokenKind::Ip);
}

#[test]
fn test_scan_line_numbers() {
    let tokens = scan("a\n\n  b ; c\nd");
    let lines: Vec<(TokenKind, usize)> = tokens.iter().map(|t| (t.kind, t.line)).collect();
    assert_eq!(
        lines,
        vec![
            (TokenKind::Identifier, 1),
            (TokenKind::Newline, 1),
            (TokenKind::Newline, 2),
            (TokenKind::Identifier, 3),
            (TokenKind::Newline, 3),
            (TokenKind::Identifier, 4),
        ]
    );
}

#[test]
fn test_scan_eof_is_sticky() {
    let mut scanner = Scanner::new("last".as_bytes());
    assert_eq!(scanner.next_token().unwrap().value, "last");
    for _ in 0..3 {
        assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Eof);
    }
}

#[test]
fn test_scan_empty_input() {
    let mut scanner = Scanner::new("".as_bytes());
    assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Eof);
}

#[test]
fn test_scan_crlf_line_endings() {
    let tokens = scan("foo A 1.2.3.4\r\nbar");
    assert_eq!(
        kinds_and_values(&tokens),
        vec![
            (TokenKind::Identifier, "foo"),
            (TokenKind::RecordType, "A"),
            (TokenKind::Ip, "1.2.3.4"),
            (TokenKind::Newline, "\n"),
            (TokenKind::Identifier, "bar"),
        ]
    );
}

#[test]
fn test_scan_vertical_tab_separates_tokens() {
    let tokens = scan("www\x0BA\x0B192.0.2.1\n");
    assert_eq!(
        kinds_and_values(&tokens),
        vec![
            (TokenKind::Identifier, "www"),
            (TokenKind::RecordType, "A"),
            (TokenKind::Ip, "192.0.2.1"),
            (TokenKind::Newline, "\n"),
        ]
    );
}

#[test]
fn test_scan_unterminated_quote() {
    assert!(matches!(
        scan_err("txt TXT \"never closed"),
        ScanError::UnterminatedQuote
    ));
}

#[test]
fn test_scan_line_break_in_quote() {
    assert!(matches!(
        scan_err("txt TXT \"split\nline\""),
        ScanError::LineBreakInQuote
    ));
}

#[test]
fn test_scan_dangling_escape() {
    assert!(matches!(scan_err("abc\\"), ScanError::DanglingEscape));
}

#[test]
fn test_scan_invalid_utf8_is_io_error() {
    let bytes: &[u8] = b"caf\xe9 A 1.2.3.4\n";
    let mut scanner = Scanner::new(bytes);
    match scanner.next_token() {
        Err(ScanError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::InvalidData),
        other => panic!("expected invalid data error, got {:?}", other),
    }
}

#[test]
fn test_scan_utf8_text_passes_through() {
    let tokens = scan("txt TXT \"héllo wörld\"");
    assert_eq!(tokens[2].value, "héllo wörld");
}
