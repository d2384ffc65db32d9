//! Container and VM bridge detection.
//!
//! This module finds the addresses that belong to local virtualization
//! bridges:
//! - [`config`] - LXC bridge name from the network defaults file
//! - [`lookup`] - Platform query of interface addresses
//! - [`resolver`] - Bridge names to address exclusion set

mod config;
mod lookup;
mod resolver;

// Re-export public types and functions
pub use config::{parse_bridge_config, parse_bridge_config_str};
pub use lookup::{AddressLookup, BridgeAddr, SystemAddressLookup};
pub use resolver::{resolve_bridge_addresses, AddressExclusionSet, BridgeSet};
