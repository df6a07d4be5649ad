use crate::core::errors::{Error, Result};
use crate::core::region_record::RegionRecord;
use crate::core::snapshot::SnapshotStore;
use log::{info, trace};
use std::fmt;
use std::net::{IpAddr, ToSocketAddrs};
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::{Host, Url};

/*-------------------------------------------------------------------------------------------------
  Host Resolution
-------------------------------------------------------------------------------------------------*/

/// Resolves a host name to its addresses.
pub trait HostResolver {
    fn resolve_host(&self, host: &str) -> Result<Vec<IpAddr>>;
}

/// Resolves host names with the operating system's resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHostResolver;

impl HostResolver for SystemHostResolver {
    fn resolve_host(&self, host: &str) -> Result<Vec<IpAddr>> {
        (host, 0)
            .to_socket_addrs()
            .map(|addresses| addresses.map(|address| address.ip()).collect())
            .map_err(|error| Error::Resolution {
                host: host.to_string(),
                reason: error.to_string(),
            })
    }
}

/*-------------------------------------------------------------------------------------------------
  Resolution
-------------------------------------------------------------------------------------------------*/

pub const REGION_NOT_FOUND: &str = "Region not found";

/// Outcome of a region lookup. An address outside every known subnet is a normal result.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Resolution {
    Found {
        address: IpAddr,
        region: Arc<str>,
        display_name: String,
        elapsed: Duration,
    },
    NotFound {
        address: IpAddr,
    },
}

impl Resolution {
    pub fn address(&self) -> IpAddr {
        match self {
            Resolution::Found { address, .. } | Resolution::NotFound { address } => *address,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found { .. })
    }

    /// The region's display name, or the "Region not found" sentinel.
    pub fn display_name(&self) -> &str {
        match self {
            Resolution::Found { display_name, .. } => display_name,
            Resolution::NotFound { .. } => REGION_NOT_FOUND,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/*-------------------------------------------------------------------------------------------------
  Region Resolver
-------------------------------------------------------------------------------------------------*/

/// Resolves addresses and host names to regions against the store's current snapshot.
///
/// ```
/// use ipregions::{AliasTable, Provider, RangeEntry, RegionResolver, RegionSnapshot, SnapshotStore};
/// use std::sync::Arc;
///
/// let snapshot = RegionSnapshot::from_entries(
///     [(Provider::Azure, RangeEntry::new("useast", "13.64.0.0/11"))],
///     [("useast", "East US")].into_iter().collect::<AliasTable>(),
/// )?;
/// let resolver = RegionResolver::new(Arc::new(SnapshotStore::new(snapshot)));
///
/// assert_eq!(resolver.resolve("13.64.1.1")?.to_string(), "East US");
/// assert_eq!(resolver.resolve("192.0.2.1")?.to_string(), "Region not found");
/// # Ok::<(), ipregions::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct RegionResolver<H = SystemHostResolver> {
    store: Arc<SnapshotStore>,
    host_resolver: H,
}

impl RegionResolver<SystemHostResolver> {
    pub fn new(store: Arc<SnapshotStore>) -> Self {
        RegionResolver::with_host_resolver(store, SystemHostResolver)
    }
}

impl<H: HostResolver> RegionResolver<H> {
    pub fn with_host_resolver(store: Arc<SnapshotStore>, host_resolver: H) -> Self {
        RegionResolver {
            store,
            host_resolver,
        }
    }

    pub fn store(&self) -> &Arc<SnapshotStore> {
        &self.store
    }

    /// Resolve an IP address, host name or URL to the region owning its address.
    ///
    /// Host names are resolved through the [HostResolver] and the first returned address is
    /// looked up. Resolution failures are not retried.
    pub fn resolve(&self, host_or_address: &str) -> Result<Resolution> {
        let start_time = Instant::now();

        let address = self.address(host_or_address)?;
        let snapshot = self.store.current();

        let Some(entry) = snapshot.index().find(address)? else {
            info!("Address {address} ({host_or_address}): {REGION_NOT_FOUND}");
            return Ok(Resolution::NotFound { address });
        };

        let display_name = snapshot.display_name(&entry.region).to_string();
        let elapsed = start_time.elapsed();
        info!(
            "Address {address} ({host_or_address}) is in {} / {display_name}, subnet {}; time = {} ms",
            entry.region,
            entry.subnet,
            elapsed.as_millis()
        );

        Ok(Resolution::Found {
            address,
            region: Arc::clone(&entry.region),
            display_name,
            elapsed,
        })
    }

    /// Region records of the current snapshot, in first-seen order.
    pub fn list_regions(&self) -> Vec<RegionRecord> {
        self.store.current().regions().to_vec()
    }

    /// The address to look up: the input itself when it is an IP literal, otherwise the first
    /// address its host resolves to.
    fn address(&self, host_or_address: &str) -> Result<IpAddr> {
        let host_or_address = host_or_address.trim();
        if host_or_address.is_empty() {
            return Err(invalid_input());
        }

        if let Ok(address) = host_or_address.parse::<IpAddr>() {
            return Ok(address);
        }

        let host = match extract_host(host_or_address)? {
            Host::Ipv4(address) => return Ok(IpAddr::V4(address)),
            Host::Ipv6(address) => return Ok(IpAddr::V6(address)),
            Host::Domain(host) => host,
        };

        trace!("Resolving host `{host}`");
        self.host_resolver
            .resolve_host(&host)?
            .into_iter()
            .next()
            .ok_or_else(|| Error::Resolution {
                host,
                reason: "no addresses returned".to_string(),
            })
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

fn invalid_input() -> Error {
    Error::InvalidInput("must specify a valid address or host".to_string())
}

/// Extract the host from a URL, prefixing `http://` when no scheme is present.
fn extract_host(value: &str) -> Result<Host<String>> {
    let url = if value.contains("://") {
        Url::parse(value)
    } else {
        Url::parse(&format!("http://{value}"))
    };

    url.ok()
        .and_then(|url| url.host().map(|host| host.to_owned()))
        .ok_or_else(invalid_input)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
