//! Address list processing logic.
//!
//! This module contains the operations applied to address data:
//! - [`filter`] - Removal of local bridge addresses
//! - [`select`] - Picking one address by reachability class
//! - [`space_name`] - Canonical, collision-free space names

mod filter;
mod select;
mod space_name;

// Re-export public functions
pub use filter::{filter_bridge_addresses, BridgeFilter};
pub use select::{select_internal_address, select_public_address};
pub use space_name::convert_space_name;
