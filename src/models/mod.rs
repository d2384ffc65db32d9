//! Domain models for host network data.
//!
//! This module contains the value types consumed by the filtering logic:
//! - [`Address`] - address value classified as IPv4, IPv6 or hostname
//! - [`InterfaceInfo`] - one interface attachment, with VLAN naming rules

mod address;
mod interface;

// Re-export public types
pub use address::{new_address, new_addresses, Address, AddressKind, Scope};
pub use interface::{sort_interface_info, ConfigType, InterfaceInfo};
