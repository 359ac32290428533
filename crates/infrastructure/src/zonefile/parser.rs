use super::scanner::Scanner;
use super::token::{Token, TokenKind, KEYWORD_TTL, KEYWORD_ZONE};
use ferrous_zones_domain::{
    Domain, ParseError, ParseErrorKind, Record, RecordData, RecordName, RecordType,
    SemanticError, SyntaxError, TxtData, Zone,
};
use std::collections::BTreeMap;
use std::io::{BufRead, BufReader, Read};
use std::net::IpAddr;
use tracing::{debug, warn};

/// Parses one zone file from `input`. `label` prefixes every error message,
/// typically the file's base name.
pub fn parse_zone<R: Read>(input: R, label: &str) -> Result<Zone, ParseError> {
    Parser::new(Scanner::new(BufReader::new(input)), label).parse()
}

/// Zone settings collected while the file is being read. `zone` may appear
/// after records, so the [`Zone`] is only assembled at the end.
#[derive(Default)]
struct PendingZone {
    authority: Option<Domain>,
    default_ttl: Option<u32>,
    records: BTreeMap<RecordName, Vec<Record>>,
}

impl PendingZone {
    /// Rejects a record with the same name, type and data as one already read.
    fn add(&mut self, record: Record) -> Result<(), SemanticError> {
        let existing = self.records.entry(record.name.clone()).or_default();
        if existing.iter().any(|r| r.same_rdata(&record)) {
            return Err(SemanticError::DuplicateRecord {
                name: record.name,
                record_type: record.record_type,
            });
        }
        existing.push(record);
        Ok(())
    }
}

pub struct Parser<R> {
    scanner: Scanner<R>,
    /// Name of the zone file for log/err messages
    label: String,
    line: usize,
}

impl<R: BufRead> Parser<R> {
    pub fn new(scanner: Scanner<R>, label: impl Into<String>) -> Self {
        Self {
            scanner,
            label: label.into(),
            line: 1,
        }
    }

    pub fn parse(mut self) -> Result<Zone, ParseError> {
        let mut pending = PendingZone::default();

        // One iteration per line; the handlers consume the rest of it.
        loop {
            let token = self.next()?;
            match token.kind {
                TokenKind::Identifier => {
                    let line = token.line;
                    let record = self.parse_record(token)?;
                    pending
                        .add(record)
                        .map_err(|e| ParseError::new(self.label.clone(), line, e))?;
                }
                TokenKind::Keyword => self.handle_keyword(&token, &mut pending)?,
                TokenKind::Newline => continue,
                TokenKind::Eof => break,
                _ => return Err(self.error(SyntaxError::UnexpectedToken(token.to_string()))),
            }
        }

        self.finish(pending)
    }

    fn finish(&self, pending: PendingZone) -> Result<Zone, ParseError> {
        let authority = pending
            .authority
            .ok_or_else(|| self.error(SemanticError::MissingAuthority))?;
        let mut zone = Zone::new(authority, pending.default_ttl).map_err(|e| self.error(e))?;

        for record in pending.records.into_values().flatten() {
            zone.insert(record).map_err(|e| self.error(e))?;
        }

        debug!(
            file = %self.label,
            authority = %zone.authority(),
            records = zone.record_count(),
            "Parsed zone"
        );
        Ok(zone)
    }

    /// Parses a record line starting with the name token already read.
    fn parse_record(&mut self, name_token: Token) -> Result<Record, ParseError> {
        let name = RecordName::new(&name_token.value).map_err(|reason| {
            self.error(SyntaxError::InvalidRecordName {
                name: name_token.value.clone(),
                reason,
            })
        })?;

        let type_token = self.next()?;
        let record_type = match type_token.kind {
            TokenKind::RecordType => type_token.value.parse::<RecordType>().ok(),
            _ => None,
        }
        .ok_or_else(|| self.expected("a record type", &type_token))?;

        let data_token = self.next()?;
        if data_token.ends_line() {
            return Err(self.expected("a data field", &data_token));
        }
        let data = self.parse_data(record_type, data_token)?;

        let ttl_token = self.next()?;
        let ttl = match ttl_token.kind {
            TokenKind::Newline | TokenKind::Eof => None,
            TokenKind::Integer => {
                let ttl = self.ttl_value(&ttl_token)?;
                self.expect_line_end()?;
                Some(ttl)
            }
            _ => return Err(self.expected("an integer in TTL field", &ttl_token)),
        };

        Record::new(name, record_type, data, ttl).map_err(|e| self.error(e))
    }

    /// Interprets the data field according to the record type.
    fn parse_data(&self, record_type: RecordType, token: Token) -> Result<RecordData, ParseError> {
        match record_type {
            RecordType::A | RecordType::AAAA => {
                let address = match token.kind {
                    TokenKind::Ip => token.value.parse::<IpAddr>().ok(),
                    _ => None,
                }
                .ok_or_else(|| self.expected("an IP address", &token))?;
                Ok(RecordData::Address(address))
            }
            RecordType::CNAME | RecordType::MX | RecordType::NS => {
                if token.kind != TokenKind::Identifier {
                    return Err(self.expected("a domain", &token));
                }
                let target = Domain::new(&token.value).map_err(|reason| {
                    self.error(SyntaxError::InvalidDomain {
                        name: token.value.clone(),
                        reason,
                    })
                })?;
                Ok(RecordData::Target(target))
            }
            RecordType::TXT => Ok(RecordData::Text(TxtData::new(&token.value))),
        }
    }

    fn handle_keyword(
        &mut self,
        keyword: &Token,
        pending: &mut PendingZone,
    ) -> Result<(), ParseError> {
        match keyword.value.as_str() {
            KEYWORD_ZONE => self.handle_zone(pending),
            KEYWORD_TTL => self.handle_ttl(pending),
            _ => Err(self.error(SyntaxError::UnexpectedToken(keyword.to_string()))),
        }
    }

    fn handle_zone(&mut self, pending: &mut PendingZone) -> Result<(), ParseError> {
        let token = self.next()?;
        if let Some(existing) = &pending.authority {
            return Err(self.error(SemanticError::DuplicateAuthority(existing.clone())));
        }
        if token.kind != TokenKind::Identifier {
            return Err(self.expected("a domain after zone keyword", &token));
        }

        let domain = Domain::new(&token.value).map_err(|reason| {
            self.error(SyntaxError::InvalidDomain {
                name: token.value.clone(),
                reason,
            })
        })?;
        if domain.is_apex() {
            return Err(self.error(SyntaxError::ApexAuthority));
        }
        if !domain.is_fqdn() {
            warn!(
                file = %self.label,
                line = self.line,
                domain = %domain,
                "Zone domain is not an FQDN. Will assume it is."
            );
        }

        self.expect_line_end()?;
        pending.authority = Some(domain.to_fqdn());
        Ok(())
    }

    fn handle_ttl(&mut self, pending: &mut PendingZone) -> Result<(), ParseError> {
        let token = self.next()?;
        if let Some(existing) = pending.default_ttl {
            return Err(self.error(SemanticError::DuplicateDefaultTtl(existing)));
        }
        if token.kind != TokenKind::Integer {
            return Err(self.expected("an integer after ttl keyword", &token));
        }

        let ttl = self.ttl_value(&token)?;
        self.expect_line_end()?;
        pending.default_ttl = Some(ttl);
        Ok(())
    }

    fn ttl_value(&self, token: &Token) -> Result<u32, ParseError> {
        let value: i64 = token
            .value
            .parse()
            .map_err(|_| self.expected("an integer", token))?;
        if value <= 0 {
            return Err(self.error(SyntaxError::NonPositiveTtl(value)));
        }
        u32::try_from(value).map_err(|_| self.error(SyntaxError::TtlOutOfRange(value)))
    }

    fn expect_line_end(&mut self) -> Result<(), ParseError> {
        let token = self.next()?;
        if token.ends_line() {
            Ok(())
        } else {
            Err(self.expected("end of line", &token))
        }
    }

    fn next(&mut self) -> Result<Token, ParseError> {
        match self.scanner.next_token() {
            Ok(token) => {
                self.line = token.line;
                Ok(token)
            }
            Err(e) => Err(ParseError::new(self.label.clone(), self.scanner.line(), e)),
        }
    }

    fn expected(&self, expected: &'static str, found: &Token) -> ParseError {
        self.error(SyntaxError::Expected {
            expected,
            found: found.to_string(),
        })
    }

    fn error(&self, kind: impl Into<ParseErrorKind>) -> ParseError {
        ParseError::new(self.label.clone(), self.line, kind)
    }
}
