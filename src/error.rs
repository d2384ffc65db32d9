//! Error types shared across the crate.

use std::path::PathBuf;
use thiserror::Error;

/// Failure reported by an [`AddressLookup`](crate::bridge::AddressLookup).
#[derive(Debug, Error)]
pub enum LookupError {
    /// The interface does not exist on this machine.
    #[error("interface {0:?} not found")]
    NotFound(String),
    /// Anything else the platform reported.
    #[error("cannot get addresses of interface {name:?}: {reason}")]
    Other { name: String, reason: String },
}

/// Failure reading the bridge configuration file.
///
/// A missing file is not an error, see [`parse_bridge_config`](crate::bridge::parse_bridge_config).
#[derive(Debug, Error)]
#[error("cannot read bridge config {path}: {source}")]
pub struct ConfigError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

#[derive(Debug, Error)]
pub enum NetworkError {
    /// No address of the requested class was available.
    #[error("no {kind} address(es)")]
    NoAddress { kind: String },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Build the error returned when no address of `kind` exists.
///
/// # Examples
/// ```
/// use bridge_address_filter::no_address_error;
/// assert_eq!(no_address_error("fake").to_string(), "no fake address(es)");
/// ```
pub fn no_address_error(kind: &str) -> NetworkError {
    NetworkError::NoAddress {
        kind: kind.to_string(),
    }
}

/// Report whether `err` is the error built by [`no_address_error`].
pub fn is_no_address_error(err: &(dyn std::error::Error + 'static)) -> bool {
    matches!(
        err.downcast_ref::<NetworkError>(),
        Some(NetworkError::NoAddress { .. })
    )
}
