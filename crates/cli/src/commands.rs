use crate::di::UseCases;
use ferrous_zones_domain::{Domain, Zone, ZoneRegistry};
use std::io::{self, Write};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// One line per zone: authority, default TTL and record count.
pub fn check(registry: &ZoneRegistry, out: &mut impl Write) -> io::Result<()> {
    for zone in registry.zones() {
        let ttl = zone
            .default_ttl()
            .map_or_else(|| "-".to_string(), |ttl| ttl.to_string());
        writeln!(
            out,
            "{:<40} ttl={:<8} records={}",
            zone.authority(),
            ttl,
            zone.record_count()
        )?;
    }
    writeln!(out, "{} zone(s) loaded", registry.len())
}

pub fn show(
    registry: &ZoneRegistry,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let zones = registry.zones();
    match format {
        OutputFormat::Text => {
            for (i, zone) in zones.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                write!(out, "{}", zone)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &zones)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Prints `query -> authority` per domain, followed by the records the
/// zone holds for that exact name. Returns `false` if any query
/// was invalid or matched no zone.
pub fn lookup(
    use_cases: &UseCases,
    queries: &[String],
    out: &mut impl Write,
) -> io::Result<bool> {
    let mut all_found = true;
    for query in queries {
        match use_cases.find_authority.execute(query) {
            Ok(Some(zone)) => {
                writeln!(out, "{} -> {}", query, zone.authority())?;
                write_owned_records(&zone, query, out)?;
            }
            Ok(None) => {
                all_found = false;
                writeln!(out, "{} -> no authority", query)?;
            }
            Err(e) => {
                all_found = false;
                warn!(query = %query, error = %e, "Invalid lookup");
                writeln!(out, "{} -> invalid: {}", query, e)?;
            }
        }
    }
    Ok(all_found)
}

/// Records of `zone` whose absolute owner name is exactly `query`.
fn write_owned_records(zone: &Zone, query: &str, out: &mut impl Write) -> io::Result<()> {
    let Ok(owner) = Domain::new(query.trim()) else {
        return Ok(());
    };
    let owner = owner.to_fqdn();

    for record in zone
        .records()
        .filter(|r| r.name.qualify(zone.authority()) == owner.as_str())
    {
        let ttl = record
            .ttl_or_default(zone)
            .map_or_else(|| "-".to_string(), |ttl| ttl.to_string());
        writeln!(
            out,
            "    {} {} {} ttl={}",
            owner, record.record_type, record.data, ttl
        )?;
    }
    Ok(())
}
