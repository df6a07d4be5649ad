use crate::core::errors::{Error, Result};
use ipnetwork::Ipv4Network;
use serde::Serialize;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

/*-------------------------------------------------------------------------------------------------
  Subnet
-------------------------------------------------------------------------------------------------*/

/// Canonical IPv4 CIDR block: a base address with every host bit cleared and a prefix length.
///
/// Subnets order by base address first and prefix length second, and display in
/// `address/prefix-length` notation.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Subnet {
    network: Ipv4Network,
}

impl Subnet {
    /// Build a subnet from an address and prefix length, clearing any host bits set in the
    /// address.
    ///
    /// ```
    /// use std::net::Ipv4Addr;
    ///
    /// let subnet = ipregions::Subnet::new(Ipv4Addr::new(10, 1, 2, 3), 8)?;
    /// assert_eq!(subnet.to_string(), "10.0.0.0/8");
    /// # Ok::<(), ipregions::Error>(())
    /// ```
    pub fn new(address: Ipv4Addr, prefix: u8) -> Result<Subnet> {
        let invalid = |error: ipnetwork::IpNetworkError| Error::InvalidCidr {
            cidr: format!("{address}/{prefix}"),
            reason: error.to_string(),
        };

        let network = Ipv4Network::new(address, prefix).map_err(invalid)?;
        let network = Ipv4Network::new(network.network(), prefix).map_err(invalid)?;

        Ok(Subnet { network })
    }

    pub fn base(&self) -> Ipv4Addr {
        self.network.network()
    }

    pub fn prefix(&self) -> u8 {
        self.network.prefix()
    }

    pub fn mask(&self) -> Ipv4Addr {
        self.network.mask()
    }

    pub fn network(&self) -> Ipv4Network {
        self.network
    }

    /// Number of addresses in the block, `2^(32 - prefix)`.
    pub fn address_count(&self) -> u64 {
        1u64 << (32 - u32::from(self.prefix()))
    }

    /// An address is contained when masking it with the prefix yields the base address.
    pub fn contains(&self, address: Ipv4Addr) -> bool {
        u32::from(address) & u32::from(self.mask()) == u32::from(self.base())
    }
}

impl FromStr for Subnet {
    type Err = Error;

    fn from_str(value: &str) -> Result<Subnet> {
        let invalid = |reason: &str| Error::InvalidCidr {
            cidr: value.to_string(),
            reason: reason.to_string(),
        };

        let (address, prefix) = value
            .split_once('/')
            .ok_or_else(|| invalid("expected `address/prefix-length` notation"))?;

        let address = match address.parse::<IpAddr>() {
            Ok(IpAddr::V4(address)) => address,
            Ok(IpAddr::V6(_)) => return Err(invalid("IPv6 ranges are not supported")),
            Err(_) => return Err(invalid("invalid IP address")),
        };

        if prefix.is_empty() || !prefix.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(invalid("invalid prefix length"));
        }
        let prefix: u8 = prefix
            .parse()
            .map_err(|_| invalid("invalid prefix length"))?;

        Subnet::new(address, prefix).map_err(|_| invalid("prefix length must be 0-32"))
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base(), self.prefix())
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_subnet() {
        let subnet: Subnet = "13.64.0.0/11".parse().unwrap();

        assert_eq!(subnet.base(), Ipv4Addr::new(13, 64, 0, 0));
        assert_eq!(subnet.prefix(), 11);
        assert_eq!(subnet.mask(), Ipv4Addr::new(255, 224, 0, 0));
        assert_eq!(subnet.address_count(), 2_097_152);
    }

    #[test]
    fn test_parse_clears_host_bits() {
        let subnet: Subnet = "10.1.2.3/8".parse().unwrap();

        assert_eq!(subnet.base(), Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(subnet, "10.0.0.0/8".parse().unwrap());
    }

    #[test]
    fn test_display_reparses_to_same_subnet() {
        for cidr in ["0.0.0.0/0", "3.5.140.0/22", "192.168.7.9/24", "8.8.8.8/32"] {
            let subnet: Subnet = cidr.parse().unwrap();
            let reparsed: Subnet = subnet.to_string().parse().unwrap();
            assert_eq!(reparsed, subnet);
            assert_eq!(reparsed.base(), subnet.base());
            assert_eq!(reparsed.prefix(), subnet.prefix());
        }
    }

    #[test]
    fn test_address_count_bounds() {
        assert_eq!("0.0.0.0/0".parse::<Subnet>().unwrap().address_count(), 1 << 32);
        assert_eq!("1.1.1.1/32".parse::<Subnet>().unwrap().address_count(), 1);
        assert_eq!("3.5.140.0/22".parse::<Subnet>().unwrap().address_count(), 1024);
    }

    #[test]
    fn test_invalid_cidrs() {
        for cidr in [
            "",
            "10.0.0.0",
            "10.0.0.0/",
            "10.0.0.0/33",
            "10.0.0.0/-1",
            "10.0.0.0/+8",
            "10.0.0/8",
            "not-an-address/8",
            " 10.0.0.0/8",
        ] {
            let result = cidr.parse::<Subnet>();
            assert!(
                matches!(result, Err(Error::InvalidCidr { .. })),
                "{cidr:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_ipv6_cidr_is_rejected() {
        let error = "2001:db8::/32".parse::<Subnet>().unwrap_err();
        assert!(error.to_string().contains("IPv6"));
    }

    #[test]
    fn test_contains() {
        let subnet: Subnet = "13.64.0.0/11".parse().unwrap();

        assert!(subnet.contains(Ipv4Addr::new(13, 64, 0, 0)));
        assert!(subnet.contains(Ipv4Addr::new(13, 64, 1, 1)));
        assert!(subnet.contains(Ipv4Addr::new(13, 95, 255, 255)));
        assert!(!subnet.contains(Ipv4Addr::new(13, 96, 0, 0)));
        assert!(!subnet.contains(Ipv4Addr::new(13, 63, 255, 255)));

        let everything: Subnet = "0.0.0.0/0".parse().unwrap();
        assert!(everything.contains(Ipv4Addr::new(255, 255, 255, 255)));
    }

    #[test]
    fn test_subnet_ordering() {
        let subnet1: Subnet = "10.0.0.0/8".parse().unwrap();
        let subnet2: Subnet = "10.0.0.0/16".parse().unwrap();
        let subnet3: Subnet = "10.1.0.0/16".parse().unwrap();

        assert!(subnet1 < subnet2); // Shorter prefix length is less than longer prefix length
        assert!(subnet2 < subnet3); // Lower base address is less than higher base address
    }

    #[test]
    fn test_serialize_as_cidr_string() {
        let subnet: Subnet = "3.5.140.0/22".parse().unwrap();
        assert_eq!(serde_json::to_string(&subnet).unwrap(), r#""3.5.140.0/22""#);
    }
}
