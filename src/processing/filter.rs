//! Removal of container and VM bridge addresses from address lists.

use crate::bridge::{resolve_bridge_addresses, AddressExclusionSet, AddressLookup, BridgeSet};
use crate::config::BridgeSettings;
use crate::error::NetworkError;
use crate::models::Address;

/// Drop every candidate that equals, or lies inside, an excluded bridge
/// address.
///
/// Hostnames are always kept. Survivors keep their order and duplicates.
///
/// # Arguments
/// * `candidates` - Addresses in caller preference order
/// * `exclusions` - Bridge addresses from [`resolve_bridge_addresses`]
pub fn filter_bridge_addresses(
    candidates: &[Address],
    exclusions: &AddressExclusionSet,
) -> Vec<Address> {
    candidates
        .iter()
        .filter(|addr| match addr.ip() {
            Some(ip) if exclusions.contains(&ip) => {
                log::debug!("Removing bridge address {addr} from list");
                false
            }
            _ => true,
        })
        .cloned()
        .collect()
}

/// Bridge filtering against live platform state.
///
/// Each call re-reads the config file and re-queries the lookup; nothing is
/// cached between calls.
#[derive(Debug, Clone)]
pub struct BridgeFilter<L> {
    settings: BridgeSettings,
    lookup: L,
}

impl<L: AddressLookup> BridgeFilter<L> {
    pub fn new(settings: BridgeSettings, lookup: L) -> Self {
        BridgeFilter { settings, lookup }
    }

    pub fn settings(&self) -> &BridgeSettings {
        &self.settings
    }

    /// Resolve the current bridge addresses.
    pub fn exclusions(&self) -> Result<AddressExclusionSet, NetworkError> {
        let bridges = BridgeSet::from_settings(&self.settings)?;
        resolve_bridge_addresses(&bridges, &self.lookup)
    }

    /// Remove addresses held by local bridges from `candidates`.
    ///
    /// Fails when the config file is unreadable or a bridge lookup fails for
    /// a reason other than the bridge not existing.
    pub fn filter_bridge_addresses(
        &self,
        candidates: &[Address],
    ) -> Result<Vec<Address>, NetworkError> {
        let exclusions = self.exclusions()?;
        if exclusions.is_empty() {
            return Ok(candidates.to_vec());
        }
        log::debug!("Bridge addresses to exclude: {exclusions}");
        Ok(filter_bridge_addresses(candidates, &exclusions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::BridgeAddr;
    use crate::error::LookupError;
    use crate::models::new_addresses;
    use std::io::Write;

    fn exclusions(values: &[&str]) -> AddressExclusionSet {
        values
            .iter()
            .map(|v| v.parse::<BridgeAddr>().unwrap())
            .collect()
    }

    #[test]
    fn test_filter_exact_and_cidr() {
        let excl = exclusions(&["10.0.3.1", "10.0.3.4", "10.0.3.5/24"]);
        let input = new_addresses(["10.0.3.1", "10.0.3.3", "10.0.3.5", "10.0.3.4", "10.0.6.10"]);
        assert_eq!(
            filter_bridge_addresses(&input, &excl),
            new_addresses(["10.0.6.10"])
        );
    }

    #[test]
    fn test_filter_keeps_hostnames_order_and_duplicates() {
        let excl = exclusions(&["10.0.3.0/24", "fd42::/64"]);
        let input = new_addresses([
            "localhost",
            "10.0.6.10",
            "fd42::10",
            "2001:db8::1",
            "10.0.6.10",
            "10.0.3.9",
        ]);
        assert_eq!(
            filter_bridge_addresses(&input, &excl),
            new_addresses(["localhost", "10.0.6.10", "2001:db8::1", "10.0.6.10"])
        );
    }

    #[test]
    fn test_filter_ipv4_mapped_candidates() {
        let excl = exclusions(&["10.0.3.5/24"]);
        let input = new_addresses(["::ffff:10.0.3.3", "::ffff:10.0.6.10"]);
        assert_eq!(
            filter_bridge_addresses(&input, &excl),
            new_addresses(["::ffff:10.0.6.10"])
        );
    }

    #[test]
    fn test_filter_empty_exclusions() {
        let input = new_addresses(["127.0.0.1", "10.0.3.1"]);
        assert_eq!(
            filter_bridge_addresses(&input, &AddressExclusionSet::default()),
            input
        );
    }

    #[test]
    fn test_bridge_filter_reads_config() {
        let mut config = tempfile::NamedTempFile::new().unwrap();
        writeln!(config, "LXC_BRIDGE = \"foobar\"").unwrap();
        let settings = BridgeSettings {
            lxc_net_config: config.path().to_path_buf(),
            ..Default::default()
        };
        let lookup = |name: &str| -> Result<Vec<BridgeAddr>, LookupError> {
            match name {
                "foobar" => Ok(vec!["10.0.3.5/24".parse().unwrap()]),
                _ => Err(LookupError::NotFound(name.to_string())),
            }
        };
        let filter = BridgeFilter::new(settings, lookup);
        let input = new_addresses(["10.0.3.3", "10.0.6.10"]);
        assert_eq!(
            filter.filter_bridge_addresses(&input).unwrap(),
            new_addresses(["10.0.6.10"])
        );
    }

    #[test]
    fn test_bridge_filter_propagates_lookup_errors() {
        let dir = tempfile::tempdir().unwrap();
        let settings = BridgeSettings {
            lxc_net_config: dir.path().join("missing"),
            ..Default::default()
        };
        let lookup = |name: &str| -> Result<Vec<BridgeAddr>, LookupError> {
            Err(LookupError::Other {
                name: name.to_string(),
                reason: "netlink socket closed".to_string(),
            })
        };
        let filter = BridgeFilter::new(settings, lookup);
        let result = filter.filter_bridge_addresses(&new_addresses(["10.0.0.1"]));
        assert!(matches!(result, Err(NetworkError::Lookup(_))));
    }
}
