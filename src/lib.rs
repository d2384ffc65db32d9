//! Classification and filtering of host network addresses.
//!
//! Separates addresses that are reachable from the rest of the cluster from
//! addresses that only exist on local container and VM bridges, names
//! interfaces from their VLAN tags, and turns free-form network space names
//! into canonical identifiers.
//!
//! Everything here is synchronous and works on caller supplied snapshots.
//! The only I/O is reading the LXC network config file and the injected
//! [`bridge::AddressLookup`].

pub mod bridge;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use bridge::{AddressLookup, BridgeAddr, SystemAddressLookup};
pub use config::BridgeSettings;
pub use error::{is_no_address_error, no_address_error, LookupError, NetworkError};
pub use models::{new_address, new_addresses, sort_interface_info, Address, InterfaceInfo};
pub use processing::{convert_space_name, filter_bridge_addresses, BridgeFilter};

/// Remove local bridge addresses from `candidates` using the live system
/// interface table and settings from the environment.
///
/// # Returns
/// * `Ok(Vec<Address>)` - Candidates not held by any local bridge, in order
/// * `Err` - The LXC config could not be read or an interface query failed
pub fn filter_system_bridge_addresses(
    candidates: &[Address],
) -> Result<Vec<Address>, NetworkError> {
    BridgeFilter::new(BridgeSettings::from_env(), SystemAddressLookup)
        .filter_bridge_addresses(candidates)
}
