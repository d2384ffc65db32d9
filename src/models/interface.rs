//! Network interface descriptors and their ordering.

use super::Address;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How an interface gets its address.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConfigType {
    #[default]
    #[serde(rename = "")]
    Unknown,
    Dhcp,
    Static,
    Manual,
    Loopback,
}

impl FromStr for ConfigType {
    type Err = std::convert::Infallible;

    /// Unrecognised names map to [`ConfigType::Unknown`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "dhcp" => ConfigType::Dhcp,
            "static" => ConfigType::Static,
            "manual" => ConfigType::Manual,
            "loopback" => ConfigType::Loopback,
            _ => ConfigType::Unknown,
        })
    }
}

impl fmt::Display for ConfigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfigType::Unknown => "",
            ConfigType::Dhcp => "dhcp",
            ConfigType::Static => "static",
            ConfigType::Manual => "manual",
            ConfigType::Loopback => "loopback",
        };
        f.write_str(name)
    }
}

/// One network interface attachment of a machine.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct InterfaceInfo {
    /// Base OS interface name, without any VLAN suffix.
    pub interface_name: String,
    /// Stable ordering key of the interface.
    pub device_index: u32,
    /// VLAN id; 0 means this is not a VLAN sub-interface.
    pub vlan_tag: u16,
    pub config_type: ConfigType,
    pub no_auto_start: bool,
    pub address: Option<Address>,
    pub gateway_address: Option<Address>,
    pub dns_servers: Vec<Address>,
    pub availability_zones: Vec<String>,
}

impl InterfaceInfo {
    /// The name the OS uses: `eth0` or, for VLAN tag 42, `eth0.42`.
    pub fn actual_interface_name(&self) -> String {
        if self.vlan_tag == 0 {
            self.interface_name.clone()
        } else {
            format!("{}.{}", self.interface_name, self.vlan_tag)
        }
    }

    pub fn is_vlan(&self) -> bool {
        self.vlan_tag != 0
    }

    /// Only VLAN sub-interfaces are detected as virtual.
    pub fn is_virtual(&self) -> bool {
        self.is_vlan()
    }
}

/// Sort interfaces in place by device index, then interface name.
///
/// The sort is stable, so sorting an already sorted slice leaves it unchanged.
pub fn sort_interface_info(interfaces: &mut [InterfaceInfo]) {
    interfaces.sort_by(|a, b| {
        a.device_index
            .cmp(&b.device_index)
            .then_with(|| a.interface_name.cmp(&b.interface_name))
    });
}
