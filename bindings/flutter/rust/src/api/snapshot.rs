//! Snapshot FFI wrappers for Flutter.
//!
//! Mirrors of the core snapshot types with FFI-friendly field types
//! (enums flattened to their wire strings), plus the three named operations.
//!
//! `get_device_info` and `get_network_info` run on a worker so a UI-affine
//! caller is never blocked; `get_battery_info` is a synchronous read on the
//! calling thread.

use flutter_rust_bridge::frb;

use devsnap_core::prelude::*;

/// FFI mirror of the device snapshot.
#[derive(Clone, Debug)]
pub struct FfiDeviceSnapshot {
    pub uuid: String,
    pub model: String,
    pub manufacturer: String,
    pub platform: String,
    pub os_version: String,
    pub device_name: String,
    pub is_physical_device: bool,
    pub screen_width: u32,
    pub screen_height: u32,
    pub screen_scale: f64,
    pub total_memory_mb: u64,
    pub processor_count: u32,
}

impl From<DeviceSnapshot> for FfiDeviceSnapshot {
    fn from(snapshot: DeviceSnapshot) -> Self {
        Self {
            uuid: snapshot.uuid,
            model: snapshot.model,
            manufacturer: snapshot.manufacturer,
            platform: snapshot.platform,
            os_version: snapshot.os_version,
            device_name: snapshot.device_name,
            is_physical_device: snapshot.is_physical_device,
            screen_width: snapshot.screen_width,
            screen_height: snapshot.screen_height,
            screen_scale: snapshot.screen_scale,
            total_memory_mb: snapshot.total_memory_mb,
            processor_count: snapshot.processor_count,
        }
    }
}

/// FFI mirror of the battery snapshot.
#[derive(Clone, Copy, Debug)]
pub struct FfiBatterySnapshot {
    /// Charge fraction in `[0, 1]`, or `-1` when monitoring is unavailable.
    pub level: f32,
    pub is_charging: bool,
}

impl From<BatterySnapshot> for FfiBatterySnapshot {
    fn from(snapshot: BatterySnapshot) -> Self {
        Self {
            level: snapshot.level,
            is_charging: snapshot.is_charging,
        }
    }
}

/// FFI mirror of the network snapshot.
#[derive(Clone, Debug)]
pub struct FfiNetworkSnapshot {
    /// One of `"wifi"`, `"cellular"`, `"none"`, `"unknown"`.
    pub connection_type: String,
    pub is_connected: bool,
    pub carrier_name: String,
}

impl From<NetworkSnapshot> for FfiNetworkSnapshot {
    fn from(snapshot: NetworkSnapshot) -> Self {
        Self {
            connection_type: snapshot.connection_type.as_str().to_string(),
            is_connected: snapshot.is_connected,
            carrier_name: snapshot.carrier_name,
        }
    }
}

/// Query device identity and display metrics.
pub fn get_device_info() -> FfiDeviceSnapshot {
    SnapshotService::new().device_info().into()
}

/// Query battery level and charging state.
#[frb(sync)]
pub fn get_battery_info() -> FfiBatterySnapshot {
    SnapshotService::new().battery_info().into()
}

/// Query network connectivity and carrier metadata.
pub fn get_network_info() -> FfiNetworkSnapshot {
    SnapshotService::new().network_info().into()
}
