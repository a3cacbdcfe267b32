//! Snapshot data types and sentinel values.
//!
//! The field names on the wire are the camelCase names of the cross-runtime
//! schema (`osVersion`, `isPhysicalDevice`, `screenWidth`, ...), so consumers
//! on every runtime parse the same JSON.

use serde::{Deserialize, Serialize};

/// Sentinel for string fields the platform cannot supply.
pub const UNKNOWN: &str = "unknown";

/// Sentinel for a battery level that has not been sampled or is unsupported.
///
/// `0.0` is a valid "empty battery" reading and must never be confused with
/// "unknown", so the sentinel sits outside the `[0, 1]` range.
pub const LEVEL_UNKNOWN: f32 = -1.0;

/// Scale reported when no display service is available.
pub const SCALE_FALLBACK: f64 = 1.0;

/// Connectivity class derived from the reachability flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    /// A usable route exists over a Wi-Fi (or other non-cellular) interface.
    Wifi,
    /// A usable route exists over the cellular/WWAN interface.
    Cellular,
    /// No usable route, or a route that requires on-demand setup.
    None,
    /// The reachability service could not be queried at all.
    Unknown,
}

impl ConnectionType {
    /// Convert to string representation for FFI/JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionType::Wifi => "wifi",
            ConnectionType::Cellular => "cellular",
            ConnectionType::None => "none",
            ConnectionType::Unknown => "unknown",
        }
    }

    /// Whether this classification counts as connected.
    ///
    /// Derived, not independently measured: `none` is the only class that
    /// reports disconnected. Consumers must never observe
    /// `isConnected == true` together with `connectionType == "none"`.
    pub fn is_connected(&self) -> bool {
        !matches!(self, ConnectionType::None)
    }
}

/// Device identity and display snapshot.
///
/// Assembled by `getDeviceInfo`. Every field is populated; a platform that
/// cannot supply a value contributes its sentinel instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSnapshot {
    /// Vendor-scoped, stable-per-install identifier. `"unknown"` when the OS
    /// has no identifier service.
    pub uuid: String,
    /// Raw hardware machine-type string (e.g. `"iPhone14,5"`).
    pub model: String,
    /// Static constant for the platform family (e.g. `"Apple"`).
    pub manufacturer: String,
    /// Static platform constant (e.g. `"iOS"`, `"Linux"`).
    pub platform: String,
    /// OS version string.
    pub os_version: String,
    /// User-visible device name (host name on desktop platforms).
    pub device_name: String,
    /// Negation of the simulated/emulated-environment check.
    pub is_physical_device: bool,
    /// Pixel width of the primary display: `trunc(pointWidth * scale)`.
    pub screen_width: u32,
    /// Pixel height of the primary display: `trunc(pointHeight * scale)`.
    pub screen_height: u32,
    /// Raw scale factor of the primary display.
    pub screen_scale: f64,
    /// Total physical memory in MB. `0` when unavailable.
    #[serde(rename = "totalMemoryMB")]
    pub total_memory_mb: u64,
    /// Logical processor count. `0` when unavailable.
    pub processor_count: u32,
}

impl DeviceSnapshot {
    /// A snapshot with every field at its sentinel.
    ///
    /// This is what a caller receives on a platform where no probe can
    /// supply anything - still a complete, well-typed value.
    pub fn unknown() -> Self {
        Self {
            uuid: UNKNOWN.to_string(),
            model: UNKNOWN.to_string(),
            manufacturer: UNKNOWN.to_string(),
            platform: UNKNOWN.to_string(),
            os_version: UNKNOWN.to_string(),
            device_name: UNKNOWN.to_string(),
            is_physical_device: false,
            screen_width: 0,
            screen_height: 0,
            screen_scale: SCALE_FALLBACK,
            total_memory_mb: 0,
            processor_count: 0,
        }
    }

    /// Convert to JSON string for FFI transport.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Create from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Battery charge snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatterySnapshot {
    /// Charge fraction in `[0, 1]`, or [`LEVEL_UNKNOWN`] when monitoring is
    /// unsupported or has not produced a reading yet.
    pub level: f32,
    /// True exactly when the battery is actively charging or full while
    /// connected to power.
    pub is_charging: bool,
}

impl BatterySnapshot {
    /// Snapshot reported when battery monitoring is unavailable.
    pub fn unknown() -> Self {
        Self {
            level: LEVEL_UNKNOWN,
            is_charging: false,
        }
    }

    /// Convert to JSON string for FFI transport.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Create from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Network connectivity snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSnapshot {
    /// Connectivity class from the reachability decision procedure.
    pub connection_type: ConnectionType,
    /// Derived: `connection_type != ConnectionType::None`.
    pub is_connected: bool,
    /// Display name of the active cellular carrier, `"unknown"` when no
    /// subscriber record yields one.
    pub carrier_name: String,
}

impl NetworkSnapshot {
    /// Convert to JSON string for FFI transport.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Create from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_type_as_str() {
        assert_eq!(ConnectionType::Wifi.as_str(), "wifi");
        assert_eq!(ConnectionType::Cellular.as_str(), "cellular");
        assert_eq!(ConnectionType::None.as_str(), "none");
        assert_eq!(ConnectionType::Unknown.as_str(), "unknown");
    }

    #[test]
    fn test_connection_type_is_connected() {
        assert!(ConnectionType::Wifi.is_connected());
        assert!(ConnectionType::Cellular.is_connected());
        assert!(ConnectionType::Unknown.is_connected());
        assert!(!ConnectionType::None.is_connected());
    }

    #[test]
    fn test_device_snapshot_wire_names() {
        let snap = DeviceSnapshot {
            uuid: "abc".into(),
            model: "iPhone14,5".into(),
            manufacturer: "Apple".into(),
            platform: "iOS".into(),
            os_version: "17.2".into(),
            device_name: "test".into(),
            is_physical_device: true,
            screen_width: 1170,
            screen_height: 2532,
            screen_scale: 3.0,
            total_memory_mb: 5933,
            processor_count: 6,
        };

        let json = snap.to_json();
        assert!(json.contains("\"osVersion\":\"17.2\""));
        assert!(json.contains("\"isPhysicalDevice\":true"));
        assert!(json.contains("\"screenWidth\":1170"));
        assert!(json.contains("\"totalMemoryMB\":5933"));
        assert!(json.contains("\"processorCount\":6"));

        let parsed = DeviceSnapshot::from_json(&json).unwrap();
        assert_eq!(parsed, snap);
    }

    #[test]
    fn test_battery_snapshot_wire_names() {
        let snap = BatterySnapshot {
            level: 0.42,
            is_charging: true,
        };
        let json = snap.to_json();
        assert!(json.contains("\"isCharging\":true"));

        let parsed = BatterySnapshot::from_json(&json).unwrap();
        assert_eq!(parsed, snap);
    }

    #[test]
    fn test_network_snapshot_wire_names() {
        let snap = NetworkSnapshot {
            connection_type: ConnectionType::Cellular,
            is_connected: true,
            carrier_name: "Acme Mobile".into(),
        };
        let json = snap.to_json();
        assert!(json.contains("\"connectionType\":\"cellular\""));
        assert!(json.contains("\"carrierName\":\"Acme Mobile\""));

        let parsed = NetworkSnapshot::from_json(&json).unwrap();
        assert_eq!(parsed, snap);
    }

    #[test]
    fn test_unknown_snapshots_are_sentinel_complete() {
        let device = DeviceSnapshot::unknown();
        assert_eq!(device.uuid, UNKNOWN);
        assert_eq!(device.screen_width, 0);
        assert_eq!(device.screen_scale, SCALE_FALLBACK);
        assert!(!device.is_physical_device);

        let battery = BatterySnapshot::unknown();
        assert_eq!(battery.level, LEVEL_UNKNOWN);
        assert!(!battery.is_charging);
    }
}
