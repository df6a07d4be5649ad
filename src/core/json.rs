use crate::core::errors::{Error, Result};
use crate::core::source::RangeEntry;
use chrono::{DateTime, Utc};
use log::{info, trace, warn};
use serde::Deserialize;
use serde_json::Value;

/*-------------------------------------------------------------------------------------------------
  Parse JSON
-------------------------------------------------------------------------------------------------*/

const FORMAT: &str = "object-list";

/// Parse a JSON prefix-record dataset into `(region, CIDR)` pairs.
///
/// Accepts either the published document (an object with a `prefixes` list) or a bare list of
/// prefix records. Records with a missing or blank region or prefix are skipped; unknown fields
/// are ignored.
pub fn parse(json: &str) -> Result<Vec<RangeEntry>> {
    let prefixes = match parse_document(json)? {
        JsonDocument::Published(ip_ranges) => {
            if let Some(sync_token) = &ip_ranges.sync_token {
                info!("Prefix records sync token: {sync_token}");
            }
            if let Some(create_date) = &ip_ranges.create_date {
                info!("Prefix records created: {create_date}");
            }
            ip_ranges.prefixes
        }
        JsonDocument::Records(prefixes) => prefixes,
    };

    let record_count = prefixes.len();
    let entries: Vec<RangeEntry> = prefixes
        .into_iter()
        .filter_map(JsonIpPrefix::into_entry)
        .collect();

    let skipped = record_count - entries.len();
    if skipped > 0 {
        warn!("Skipped {skipped} prefix record(s) without a region or IP prefix");
    }

    Ok(entries)
}

/// Decode the raw JSON into one of the accepted document shapes.
pub fn parse_document(json: &str) -> Result<JsonDocument> {
    let value: Value = serde_json::from_str(json).map_err(|error| Error::malformed(FORMAT, error))?;

    match value {
        Value::Object(_) => serde_json::from_value(value)
            .map(JsonDocument::Published)
            .map_err(|error| Error::malformed(FORMAT, error)),
        Value::Array(_) => serde_json::from_value(value)
            .map(JsonDocument::Records)
            .map_err(|error| Error::malformed(FORMAT, error)),
        _ => Err(Error::malformed(
            FORMAT,
            "expected an object with a `prefixes` list or a list of prefix records",
        )),
    }
}

/*-------------------------------------------------------------------------------------------------
  JSON Data Structures
-------------------------------------------------------------------------------------------------*/

#[derive(Debug, Eq, PartialEq)]
pub enum JsonDocument {
    Published(JsonIpRanges),
    Records(Vec<JsonIpPrefix>),
}

/*--------------------------------------------------------------------------------------
  JSON IP Ranges
--------------------------------------------------------------------------------------*/

/// The published document. Only `prefixes` is required; the metadata fields are informational
/// and never fail a parse.
#[derive(Debug, Default, Deserialize, Eq, PartialEq)]
pub struct JsonIpRanges {
    #[serde(rename = "syncToken", default)]
    pub sync_token: Option<Value>,

    #[serde(rename = "createDate", default, with = "crate::core::datetime")]
    pub create_date: Option<DateTime<Utc>>,

    pub prefixes: Vec<JsonIpPrefix>,
}

/*--------------------------------------------------------------------------------------
  JSON IP Prefix
--------------------------------------------------------------------------------------*/

#[derive(Debug, Default, Deserialize, Eq, PartialEq)]
pub struct JsonIpPrefix {
    #[serde(default)]
    pub region: Option<String>,

    #[serde(rename = "ip_prefix", alias = "ipPrefix", default)]
    pub ip_prefix: Option<String>,
}

impl JsonIpPrefix {
    fn into_entry(self) -> Option<RangeEntry> {
        let region = self.region.as_deref().unwrap_or_default();
        let ip_prefix = self.ip_prefix.as_deref().map(str::trim).unwrap_or_default();

        if region.trim().is_empty() || ip_prefix.is_empty() {
            trace!("Skipping prefix record: {:?}", self);
            None
        } else {
            Some(RangeEntry::new(region, ip_prefix))
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
