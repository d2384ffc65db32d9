//! Picking a single address of a given reachability class.

use crate::error::{no_address_error, NetworkError};
use crate::models::{Address, Scope};

/// First address reachable from outside the cloud.
///
/// # Returns
/// * `Ok(&Address)` - The first address with [`Scope::Public`]
/// * `Err(NetworkError::NoAddress)` - No public address in `addresses`
pub fn select_public_address(addresses: &[Address]) -> Result<&Address, NetworkError> {
    select_by_scope(addresses, "public", |scope| scope == Scope::Public)
}

/// First address usable between machines of the same cloud.
///
/// Cloud-local addresses are preferred; a public address is used when there
/// is none, since it is reachable internally too.
pub fn select_internal_address(addresses: &[Address]) -> Result<&Address, NetworkError> {
    select_by_scope(addresses, "internal", |scope| scope == Scope::CloudLocal)
        .or_else(|_| select_by_scope(addresses, "internal", |scope| scope == Scope::Public))
}

fn select_by_scope<'a, F>(
    addresses: &'a [Address],
    kind: &str,
    wanted: F,
) -> Result<&'a Address, NetworkError>
where
    F: Fn(Scope) -> bool,
{
    addresses
        .iter()
        .find(|addr| wanted(addr.scope()))
        .ok_or_else(|| no_address_error(kind))
}
