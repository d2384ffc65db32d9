//! Platform lookup of the addresses assigned to an interface.

use crate::error::LookupError;
use ipnet::{IpNet, Ipv4Net};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/// An address entry reported for an interface: a bare IP or an IP with its
/// network mask.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum BridgeAddr {
    Ip(IpAddr),
    Net(IpNet),
}

impl BridgeAddr {
    /// True when `ip` is this address, or lies inside this network.
    ///
    /// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) match as their IPv4 form.
    pub fn matches(&self, ip: &IpAddr) -> bool {
        let ip = unmap(*ip);
        match self {
            BridgeAddr::Ip(own) => unmap(*own) == ip,
            BridgeAddr::Net(net) => unmap_net(*net).contains(&ip),
        }
    }
}

fn unmap(ip: IpAddr) -> IpAddr {
    match ip {
        IpAddr::V6(v6) => v6.to_ipv4_mapped().map_or(ip, IpAddr::V4),
        IpAddr::V4(_) => ip,
    }
}

fn unmap_net(net: IpNet) -> IpNet {
    match net {
        IpNet::V6(v6) if v6.prefix_len() >= 96 => match v6.addr().to_ipv4_mapped() {
            Some(v4) => Ipv4Net::new(v4, v6.prefix_len() - 96).map_or(net, IpNet::V4),
            None => net,
        },
        _ => net,
    }
}

impl FromStr for BridgeAddr {
    type Err = String;

    /// Parse `10.0.3.1` or `10.0.3.5/24`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.contains('/') {
            s.parse::<IpNet>()
                .map(BridgeAddr::Net)
                .map_err(|e| format!("invalid CIDR {s}: {e}"))
        } else {
            s.parse::<IpAddr>()
                .map(BridgeAddr::Ip)
                .map_err(|e| format!("invalid IP address {s}: {e}"))
        }
    }
}

impl TryFrom<String> for BridgeAddr {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BridgeAddr> for String {
    fn from(addr: BridgeAddr) -> Self {
        addr.to_string()
    }
}

impl fmt::Display for BridgeAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeAddr::Ip(ip) => write!(f, "{ip}"),
            BridgeAddr::Net(net) => write!(f, "{net}"),
        }
    }
}

/// Source of the addresses currently assigned to a named interface.
///
/// Implementations must return [`LookupError::NotFound`] when the interface
/// does not exist, so callers can tell an absent bridge from a broken
/// platform query. Any `Fn(&str) -> Result<Vec<BridgeAddr>, LookupError>`
/// closure is a lookup.
pub trait AddressLookup {
    fn interface_addrs(&self, name: &str) -> Result<Vec<BridgeAddr>, LookupError>;
}

impl<F> AddressLookup for F
where
    F: Fn(&str) -> Result<Vec<BridgeAddr>, LookupError>,
{
    fn interface_addrs(&self, name: &str) -> Result<Vec<BridgeAddr>, LookupError> {
        self(name)
    }
}

/// Lookup backed by the live interface table of this machine.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemAddressLookup;

impl AddressLookup for SystemAddressLookup {
    fn interface_addrs(&self, name: &str) -> Result<Vec<BridgeAddr>, LookupError> {
        let iface = netdev::get_interfaces()
            .into_iter()
            .find(|iface| iface.name == name)
            .ok_or_else(|| LookupError::NotFound(name.to_string()))?;

        let addrs: Vec<BridgeAddr> = iface
            .ipv4
            .iter()
            .map(|net| BridgeAddr::Net(IpNet::V4(*net)))
            .chain(iface.ipv6.iter().map(|net| BridgeAddr::Net(IpNet::V6(*net))))
            .collect();
        log::trace!("Interface {name} has {} address(es)", addrs.len());
        Ok(addrs)
    }
}
