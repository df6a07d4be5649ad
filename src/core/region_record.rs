use crate::core::provider::Provider;
use crate::core::subnet::Subnet;
use serde::Serialize;
use std::sync::Arc;

/*-------------------------------------------------------------------------------------------------
  Region Record
-------------------------------------------------------------------------------------------------*/

/// All subnets published for one region name, across every provider that used the name.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionRecord {
    /// Region name, exactly as published.
    region: Arc<str>,

    /// Providers that contributed subnets, in first-seen order.
    providers: Vec<Provider>,

    /// Subnets in dataset order.
    subnets: Vec<Subnet>,

    /// Sum of the subnets' address counts; overlapping subnets are counted twice.
    total_address_count: u64,
}

impl RegionRecord {
    pub fn new(region: impl Into<Arc<str>>, provider: Provider, subnet: Subnet) -> Self {
        RegionRecord {
            region: region.into(),
            providers: vec![provider],
            subnets: vec![subnet],
            total_address_count: subnet.address_count(),
        }
    }

    /// Append a subnet and add its address count to the running total.
    pub fn push(&mut self, provider: Provider, subnet: Subnet) {
        if !self.providers.contains(&provider) {
            self.providers.push(provider);
        }
        self.total_address_count += subnet.address_count();
        self.subnets.push(subnet);
    }

    pub fn region(&self) -> &Arc<str> {
        &self.region
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn subnets(&self) -> &[Subnet] {
        &self.subnets
    }

    pub fn total_address_count(&self) -> u64 {
        self.total_address_count
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
