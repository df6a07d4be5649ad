use crate::core::errors::Result;
use crate::core::provider::Provider;
use crate::core::region_record::RegionRecord;
use crate::core::source::RangeEntry;
use crate::core::subnet::Subnet;
use log::{info, trace};
use std::collections::BTreeMap;

/*-------------------------------------------------------------------------------------------------
  Build Region Records
-------------------------------------------------------------------------------------------------*/

/// Aggregate `(provider, region, CIDR)` entries into region records.
///
/// Entries are merged by exact, case-sensitive region name, regardless of provider. Records are
/// returned in first-seen order and each keeps its subnets in entry order. The first CIDR that
/// fails to parse aborts the build.
pub fn build_regions<I>(entries: I) -> Result<Vec<RegionRecord>>
where
    I: IntoIterator<Item = (Provider, RangeEntry)>,
{
    let mut records: Vec<RegionRecord> = Vec::new();
    let mut positions: BTreeMap<String, usize> = BTreeMap::new();
    let mut subnet_count: usize = 0;

    for (provider, entry) in entries {
        let subnet: Subnet = entry.cidr.parse()?;
        subnet_count += 1;

        match positions.get(&entry.region) {
            Some(&position) => records[position].push(provider, subnet),
            None => {
                trace!("New region `{}` from {}", entry.region, provider);
                positions.insert(entry.region.clone(), records.len());
                records.push(RegionRecord::new(entry.region, provider, subnet));
            }
        }
    }

    info!(
        "Built {} region record(s) from {} subnet(s)",
        records.len(),
        subnet_count
    );

    Ok(records)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::Error;

    fn entry(provider: Provider, region: &str, cidr: &str) -> (Provider, RangeEntry) {
        (provider, RangeEntry::new(region, cidr))
    }

    #[test]
    fn test_new_region_from_single_prefix() {
        let records = build_regions([entry(Provider::Aws, "us-east-1", "3.5.140.0/22")]).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(&**records[0].region(), "us-east-1");
        assert_eq!(records[0].total_address_count(), 1024);
    }

    #[test]
    fn test_single_synthetic_region() {
        let records = build_regions([
            entry(Provider::AliCloud, "AliCloud", "1.1.1.0/24"),
            entry(Provider::AliCloud, "AliCloud", "1.1.2.0/24"),
        ])
        .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].total_address_count(), 512);
    }

    #[test]
    fn test_merge_across_providers_in_first_seen_order() {
        let records = build_regions([
            entry(Provider::Azure, "East US", "13.64.0.0/11"),
            entry(Provider::Azure, "West US", "13.88.0.0/16"),
            entry(Provider::Aws, "us-east-1", "3.5.140.0/22"),
            entry(Provider::Aws, "East US", "3.5.144.0/24"),
            entry(Provider::Azure, "East US", "23.96.0.0/14"),
        ])
        .unwrap();

        let regions: Vec<&str> = records.iter().map(|record| &**record.region()).collect();
        assert_eq!(regions, ["East US", "West US", "us-east-1"]);

        let east_us = &records[0];
        assert_eq!(east_us.providers(), [Provider::Azure, Provider::Aws]);
        assert_eq!(
            east_us.subnets(),
            [
                "13.64.0.0/11".parse().unwrap(),
                "3.5.144.0/24".parse().unwrap(),
                "23.96.0.0/14".parse().unwrap(),
            ]
        );
        assert_eq!(east_us.total_address_count(), 2_097_152 + 256 + 262_144);
    }

    #[test]
    fn test_region_names_are_case_sensitive() {
        let records = build_regions([
            entry(Provider::Aws, "us-east-1", "3.5.140.0/22"),
            entry(Provider::Aws, "US-EAST-1", "3.5.144.0/22"),
        ])
        .unwrap();

        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_totals_independent_of_provider_order() {
        let azure = [
            entry(Provider::Azure, "shared", "10.0.0.0/16"),
            entry(Provider::Azure, "azure-only", "10.1.0.0/24"),
        ];
        let aws = [
            entry(Provider::Aws, "shared", "10.0.0.0/24"),
            entry(Provider::Aws, "aws-only", "10.2.0.0/30"),
        ];

        let forward = build_regions(azure.iter().chain(aws.iter()).cloned()).unwrap();
        let reverse = build_regions(aws.iter().chain(azure.iter()).cloned()).unwrap();

        let totals = |records: &[RegionRecord]| -> BTreeMap<String, u64> {
            records
                .iter()
                .map(|record| (record.region().to_string(), record.total_address_count()))
                .collect()
        };
        assert_eq!(totals(&forward), totals(&reverse));
        assert_eq!(totals(&forward)["shared"], 65_536 + 256);
    }

    #[test]
    fn test_invalid_cidr_aborts_build() {
        let result = build_regions([
            entry(Provider::Aws, "us-east-1", "3.5.140.0/22"),
            entry(Provider::Aws, "us-east-1", "3.5.140.0/40"),
        ]);

        assert!(matches!(result, Err(Error::InvalidCidr { cidr, .. }) if cidr == "3.5.140.0/40"));
    }

    #[test]
    fn test_empty_input() {
        assert!(build_regions(Vec::new()).unwrap().is_empty());
    }
}
