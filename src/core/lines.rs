use crate::core::source::RangeEntry;

/*-------------------------------------------------------------------------------------------------
  Parse Line-Oriented Ranges
-------------------------------------------------------------------------------------------------*/

/// Parse one CIDR literal per line, assigning every line to `region`.
///
/// Surrounding whitespace (including `\r`) is trimmed and blank lines are skipped. Every other
/// line is kept literally, duplicates included.
pub fn parse(text: &str, region: &str) -> Vec<RangeEntry> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| RangeEntry::new(region, line))
        .collect()
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
