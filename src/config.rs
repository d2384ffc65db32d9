//! Settings for bridge detection.
//!
//! Holds where the LXC network defaults live and which bridge names the
//! container and VM backends create when nothing else is configured.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default location of the LXC network defaults file.
pub const LXC_NET_DEFAULT_CONFIG: &str = "/etc/default/lxc-net";
/// Variable in [`LXC_NET_DEFAULT_CONFIG`] naming the LXC bridge.
pub const LXC_BRIDGE_KEY: &str = "LXC_BRIDGE";
/// Bridge created by LXD.
pub const DEFAULT_LXD_BRIDGE: &str = "lxdbr0";
/// Bridge created by libvirt for KVM guests.
pub const DEFAULT_KVM_BRIDGE: &str = "virbr0";

/// Where to look for bridge names.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BridgeSettings {
    /// Config file holding the LXC bridge assignment.
    pub lxc_net_config: PathBuf,
    /// Variable in `lxc_net_config` naming the bridge.
    pub lxc_bridge_key: String,
    /// Default container backend bridge.
    pub lxd_bridge: String,
    /// Default VM backend bridge.
    pub kvm_bridge: String,
}

impl Default for BridgeSettings {
    fn default() -> Self {
        BridgeSettings {
            lxc_net_config: PathBuf::from(LXC_NET_DEFAULT_CONFIG),
            lxc_bridge_key: LXC_BRIDGE_KEY.to_string(),
            lxd_bridge: DEFAULT_LXD_BRIDGE.to_string(),
            kvm_bridge: DEFAULT_KVM_BRIDGE.to_string(),
        }
    }
}

impl BridgeSettings {
    /// Defaults overridden by `LXC_NET_CONFIG`, `LXD_BRIDGE` and `KVM_BRIDGE`
    /// when those are set and not empty.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut settings = BridgeSettings::default();
        if let Some(path) = get("LXC_NET_CONFIG") {
            settings.lxc_net_config = PathBuf::from(path);
        }
        if let Some(bridge) = get("LXD_BRIDGE") {
            settings.lxd_bridge = bridge;
        }
        if let Some(bridge) = get("KVM_BRIDGE") {
            settings.kvm_bridge = bridge;
        }
        log::debug!("Bridge settings: {:?}", settings);
        settings
    }
}
