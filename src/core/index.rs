use crate::core::errors::{Error, Result};
use crate::core::region_record::RegionRecord;
use crate::core::subnet::Subnet;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

/*-------------------------------------------------------------------------------------------------
  Index Entry
-------------------------------------------------------------------------------------------------*/

/// A subnet and the name of the region record that owns it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IndexEntry {
    pub subnet: Subnet,
    pub region: Arc<str>,
}

/*-------------------------------------------------------------------------------------------------
  Containment Index
-------------------------------------------------------------------------------------------------*/

/// Flat, insertion-ordered list of every subnet in a set of region records.
///
/// Lookups return the **first** inserted subnet containing the address, not the most specific
/// one. When subnets from different regions overlap, the region inserted first wins.
#[derive(Clone, Debug, Default)]
pub struct ContainmentIndex {
    entries: Vec<IndexEntry>,
}

impl ContainmentIndex {
    /// Flatten region records, in order, into an index.
    pub fn from_regions(regions: &[RegionRecord]) -> Self {
        let entries = regions
            .iter()
            .flat_map(|record| {
                record.subnets().iter().map(|subnet| IndexEntry {
                    subnet: *subnet,
                    region: Arc::clone(record.region()),
                })
            })
            .collect();

        ContainmentIndex { entries }
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Region of the first inserted subnet containing `address`, or `None`.
    ///
    /// IPv6 addresses are rejected with [Error::UnsupportedAddressFamily].
    pub fn find(&self, address: IpAddr) -> Result<Option<&IndexEntry>> {
        let address = ipv4(address)?;
        Ok(self.entries.iter().find(|entry| entry.subnet.contains(address)))
    }

    /// Every subnet containing `address`, in insertion order.
    pub fn find_all(&self, address: IpAddr) -> Result<Vec<&IndexEntry>> {
        let address = ipv4(address)?;
        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.subnet.contains(address))
            .collect())
    }
}

fn ipv4(address: IpAddr) -> Result<Ipv4Addr> {
    match address {
        IpAddr::V4(address) => Ok(address),
        IpAddr::V6(_) => Err(Error::UnsupportedAddressFamily(address)),
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::build_regions;
    use crate::core::provider::Provider;
    use crate::core::source::RangeEntry;

    fn test_index() -> ContainmentIndex {
        let regions = build_regions([
            (Provider::Azure, RangeEntry::new("East US", "13.64.0.0/11")),
            (Provider::Azure, RangeEntry::new("West US", "13.64.1.0/24")),
            (Provider::Azure, RangeEntry::new("East US", "23.96.0.0/14")),
            (Provider::Aws, RangeEntry::new("us-east-1", "3.5.140.0/22")),
        ])
        .unwrap();

        ContainmentIndex::from_regions(&regions)
    }

    fn region(index: &ContainmentIndex, address: &str) -> Option<String> {
        index
            .find(address.parse().unwrap())
            .unwrap()
            .map(|entry| entry.region.to_string())
    }

    #[test]
    fn test_flatten_preserves_record_order() {
        let index = test_index();
        let subnets: Vec<String> = index
            .entries()
            .iter()
            .map(|entry| entry.subnet.to_string())
            .collect();

        assert_eq!(index.len(), 4);
        assert_eq!(
            subnets,
            ["13.64.0.0/11", "23.96.0.0/14", "13.64.1.0/24", "3.5.140.0/22"]
        );
    }

    #[test]
    fn test_find() {
        let index = test_index();

        assert_eq!(region(&index, "13.64.1.1").as_deref(), Some("East US"));
        assert_eq!(region(&index, "23.99.255.255").as_deref(), Some("East US"));
        assert_eq!(region(&index, "3.5.143.1").as_deref(), Some("us-east-1"));
        assert_eq!(region(&index, "192.168.0.1"), None);
    }

    #[test]
    fn test_first_match_wins_over_longest_match() {
        let index = test_index();

        // 13.64.1.0/24 (West US) is more specific, but 13.64.0.0/11 (East US) was inserted first
        assert_eq!(region(&index, "13.64.1.1").as_deref(), Some("East US"));

        let all: Vec<&str> = index
            .find_all("13.64.1.1".parse().unwrap())
            .unwrap()
            .iter()
            .map(|entry| &*entry.region)
            .collect();
        assert_eq!(all, ["East US", "West US"]);
    }

    #[test]
    fn test_ipv6_is_unsupported() {
        let index = test_index();
        let address: IpAddr = "2001:db8::1".parse().unwrap();

        assert!(matches!(
            index.find(address),
            Err(Error::UnsupportedAddressFamily(_))
        ));
        assert!(index.find_all(address).is_err());
    }

    #[test]
    fn test_empty_index() {
        let index = ContainmentIndex::default();
        assert!(index.is_empty());
        assert_eq!(index.find("10.0.0.1".parse().unwrap()).unwrap(), None);
    }
}
