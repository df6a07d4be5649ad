use crate::core::errors::Result;
use crate::core::{json, lines, markup};

/*-------------------------------------------------------------------------------------------------
  Range Entry
-------------------------------------------------------------------------------------------------*/

/// One `(region, CIDR)` pair decoded from a provider dataset. The CIDR is kept as the raw
/// string; it is validated when the region model is built.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RangeEntry {
    pub region: String,
    pub cidr: String,
}

impl RangeEntry {
    pub fn new(region: impl Into<String>, cidr: impl Into<String>) -> Self {
        RangeEntry {
            region: region.into(),
            cidr: cidr.into(),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Range Source
-------------------------------------------------------------------------------------------------*/

/// The dataset formats published by the supported providers.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RangeSource {
    /// Region elements carrying a `Name` attribute with `Subnet`-attributed children.
    Markup,

    /// A JSON list of prefix records, each with a region and an IP prefix.
    ObjectList,

    /// One CIDR per line, all assigned to a single synthetic region.
    Lines { region: String },
}

impl RangeSource {
    /// Decode a raw dataset into `(region, CIDR)` pairs, in file order.
    pub fn parse(&self, raw: &str) -> Result<Vec<RangeEntry>> {
        match self {
            RangeSource::Markup => markup::parse(raw),
            RangeSource::ObjectList => json::parse(raw),
            RangeSource::Lines { region } => Ok(lines::parse(raw, region)),
        }
    }

    pub fn format_name(&self) -> &'static str {
        match self {
            RangeSource::Markup => "markup",
            RangeSource::ObjectList => "object-list",
            RangeSource::Lines { .. } => "lines",
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
