// Flutter FFI API module
// Thin wrappers with #[frb] attributes that delegate to devsnap-core

pub mod snapshot;

// Re-export all public types for convenient access
pub use snapshot::{
    get_battery_info, get_device_info, get_network_info, FfiBatterySnapshot, FfiDeviceSnapshot,
    FfiNetworkSnapshot,
};
