//! Resolution of bridge names to the addresses they currently hold.

use super::config::parse_bridge_config;
use super::lookup::{AddressLookup, BridgeAddr};
use crate::config::BridgeSettings;
use crate::error::{LookupError, NetworkError};
use itertools::Itertools;
use std::fmt;
use std::net::IpAddr;

/// Bridge interfaces whose addresses are local to this machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeSet {
    /// Bridge named in the LXC config file, if any.
    pub configured: Option<String>,
    pub lxd_default: String,
    pub kvm_default: String,
}

impl BridgeSet {
    /// Build the set from `settings`, reading the LXC config file.
    pub fn from_settings(settings: &BridgeSettings) -> Result<BridgeSet, NetworkError> {
        let configured = parse_bridge_config(&settings.lxc_net_config, &settings.lxc_bridge_key)?;
        Ok(BridgeSet {
            configured,
            lxd_default: settings.lxd_bridge.clone(),
            kvm_default: settings.kvm_bridge.clone(),
        })
    }

    /// Distinct, non-empty bridge names: configured first, then LXD, then KVM.
    pub fn names(&self) -> Vec<&str> {
        self.configured
            .iter()
            .chain([&self.lxd_default, &self.kvm_default])
            .map(|name| name.as_str())
            .filter(|name| !name.is_empty())
            .unique()
            .collect()
    }
}

/// Addresses held by bridge interfaces at the time of resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressExclusionSet {
    entries: Vec<BridgeAddr>,
}

impl AddressExclusionSet {
    /// True when `ip` equals an entry or lies inside an entry's network.
    pub fn contains(&self, ip: &IpAddr) -> bool {
        self.entries.iter().any(|entry| entry.matches(ip))
    }

    pub fn entries(&self) -> &[BridgeAddr] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<BridgeAddr> for AddressExclusionSet {
    fn from_iter<T: IntoIterator<Item = BridgeAddr>>(iter: T) -> Self {
        AddressExclusionSet {
            entries: iter.into_iter().unique().collect(),
        }
    }
}

impl fmt::Display for AddressExclusionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entries.iter().join(", "))
    }
}

/// Ask `lookup` for the addresses of every bridge in `bridges`.
///
/// A bridge that does not exist contributes nothing. Any other lookup
/// failure aborts the resolution, since a partial exclusion set would let
/// bridge addresses through the filter.
///
/// # Arguments
/// * `bridges` - Bridge names to resolve
/// * `lookup` - Platform address lookup
///
/// # Returns
/// * `Ok(AddressExclusionSet)` - All addresses found on existing bridges
/// * `Err(NetworkError::Lookup)` - The first lookup failure other than not found
pub fn resolve_bridge_addresses<L>(
    bridges: &BridgeSet,
    lookup: &L,
) -> Result<AddressExclusionSet, NetworkError>
where
    L: AddressLookup + ?Sized,
{
    let mut entries = Vec::new();
    for name in bridges.names() {
        match lookup.interface_addrs(name) {
            Ok(addrs) => {
                log::debug!(
                    "Bridge {name} has addresses [{}]",
                    addrs.iter().join(", ")
                );
                entries.extend(addrs);
            }
            Err(LookupError::NotFound(_)) => {
                log::debug!("Bridge {name} not present, skipping");
            }
            Err(e) => {
                log::warn!("Cannot resolve addresses of bridge {name}: {e}");
                return Err(e.into());
            }
        }
    }
    Ok(entries.into_iter().collect())
}
