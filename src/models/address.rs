//! Classified network addresses.
//!
//! Provides [`Address`], a raw address string tagged with its [`AddressKind`]
//! and [`Scope`], plus the [`new_address`] and [`new_addresses`] constructors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// What an address value parsed as.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AddressKind {
    Ipv4,
    Ipv6,
    /// Not an IP literal, usually a hostname.
    Hostname,
}

/// Reachability class of an address.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Scope {
    /// Hostnames and unspecified addresses.
    Unknown,
    /// Routable on the public internet.
    Public,
    /// Private ranges (RFC 1918, fc00::/7).
    CloudLocal,
    /// Loopback.
    MachineLocal,
    /// 169.254.0.0/16 and fe80::/10.
    LinkLocal,
}

/// A network address as reported by a provider or a machine agent.
///
/// Immutable once built; construct with [`new_address`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub struct Address {
    value: String,
    ip: Option<IpAddr>,
    kind: AddressKind,
    scope: Scope,
}

/// Classify `value` as IPv4, IPv6 or hostname.
///
/// Never fails: anything that is not an IP literal is kept as an opaque
/// hostname address.
///
/// # Examples
/// ```
/// use bridge_address_filter::models::{new_address, AddressKind};
/// assert_eq!(new_address("10.0.0.1").kind(), AddressKind::Ipv4);
/// assert_eq!(new_address("localhost").kind(), AddressKind::Hostname);
/// ```
pub fn new_address(value: &str) -> Address {
    let ip = value
        .parse::<Ipv4Addr>()
        .map(IpAddr::V4)
        .or_else(|_| value.parse::<Ipv6Addr>().map(IpAddr::V6))
        .ok();
    let kind = match ip {
        Some(IpAddr::V4(_)) => AddressKind::Ipv4,
        Some(IpAddr::V6(_)) => AddressKind::Ipv6,
        None => AddressKind::Hostname,
    };
    Address {
        value: value.to_string(),
        ip,
        kind,
        scope: ip.map_or(Scope::Unknown, derive_scope),
    }
}

/// Build one [`Address`] per value, keeping the input order.
pub fn new_addresses<I, S>(values: I) -> Vec<Address>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| new_address(v.as_ref()))
        .collect()
}

fn derive_scope(ip: IpAddr) -> Scope {
    if ip.is_unspecified() {
        return Scope::Unknown;
    }
    if ip.is_loopback() {
        return Scope::MachineLocal;
    }
    match ip {
        IpAddr::V4(v4) if v4.is_link_local() => Scope::LinkLocal,
        IpAddr::V4(v4) if v4.is_private() => Scope::CloudLocal,
        IpAddr::V6(v6) if v6.segments()[0] & 0xffc0 == 0xfe80 => Scope::LinkLocal,
        IpAddr::V6(v6) if v6.segments()[0] & 0xfe00 == 0xfc00 => Scope::CloudLocal,
        _ => Scope::Public,
    }
}

impl Address {
    /// The raw value the address was built from.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn kind(&self) -> AddressKind {
        self.kind
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// The parsed IP, or `None` for hostnames.
    pub fn ip(&self) -> Option<IpAddr> {
        self.ip
    }
}

impl From<String> for Address {
    fn from(value: String) -> Self {
        new_address(&value)
    }
}

impl From<Address> for String {
    fn from(addr: Address) -> Self {
        addr.value
    }
}

impl Default for Address {
    fn default() -> Self {
        new_address("")
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_address_kind() {
        assert_eq!(new_address("0.1.2.3").kind(), AddressKind::Ipv4);
        assert_eq!(new_address("2001:db8::1").kind(), AddressKind::Ipv6);
        assert_eq!(new_address("localhost").kind(), AddressKind::Hostname);
        assert_eq!(new_address("").kind(), AddressKind::Hostname);
        assert_eq!(new_address("10.0.3.5/24").kind(), AddressKind::Hostname);
    }

    #[test]
    fn test_new_address_keeps_value() {
        let addr = new_address("4.3.2.1");
        assert_eq!(addr.value(), "4.3.2.1");
        assert_eq!(addr.to_string(), "4.3.2.1");
        assert_eq!(addr.ip(), Some(IpAddr::V4(Ipv4Addr::new(4, 3, 2, 1))));
        assert_eq!(new_address("example.com").ip(), None);
    }

    #[test]
    fn test_scope() {
        assert_eq!(new_address("127.0.0.1").scope(), Scope::MachineLocal);
        assert_eq!(new_address("::1").scope(), Scope::MachineLocal);
        assert_eq!(new_address("169.254.1.1").scope(), Scope::LinkLocal);
        assert_eq!(new_address("fe80::1").scope(), Scope::LinkLocal);
        assert_eq!(new_address("10.0.0.1").scope(), Scope::CloudLocal);
        assert_eq!(new_address("192.168.122.1").scope(), Scope::CloudLocal);
        assert_eq!(new_address("fd00::1").scope(), Scope::CloudLocal);
        assert_eq!(new_address("8.8.8.8").scope(), Scope::Public);
        assert_eq!(new_address("2001:db8::1").scope(), Scope::Public);
        assert_eq!(new_address("0.0.0.0").scope(), Scope::Unknown);
        assert_eq!(new_address("localhost").scope(), Scope::Unknown);
    }

    #[test]
    fn test_new_addresses_order() {
        let addrs = new_addresses(["1.1.1.1", "2.2.2.2", "1.1.1.1"]);
        let values: Vec<&str> = addrs.iter().map(|a| a.value()).collect();
        assert_eq!(values, vec!["1.1.1.1", "2.2.2.2", "1.1.1.1"]);
        assert!(new_addresses(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_serde_as_string() {
        let addr = new_address("10.0.3.1");
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"10.0.3.1\"");
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }
}
