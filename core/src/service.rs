//! Snapshot service - Composes the resolvers into the three public
//! operations.
//!
//! The service owns one probe per platform capability. Probes are trait
//! objects so that embeddings can inject platform-native implementations and
//! tests can inject fakes; by default every slot holds a [`HostProbe`].
//!
//! Every entry point is infallible by construction: each resolver degrades
//! to a documented sentinel, so a caller always receives a complete,
//! well-typed snapshot. The transport's error path exists only for faults in
//! the bridge itself, never for anything this service does.
//!
//! # Example
//!
//! ```rust,no_run
//! use devsnap_core::service::SnapshotService;
//!
//! let service = SnapshotService::new();
//! let device = service.device_info();
//! println!("running on {} ({})", device.model, device.platform);
//! ```

use log::debug;

use crate::probe::{
    DisplayProbe, HardwareProbe, HostProbe, PowerProbe, ReachabilityProbe, TelephonyProbe,
};
use crate::resolver::{resolve_battery, resolve_display, resolve_identity, resolve_network};
use crate::snapshot::{BatterySnapshot, DeviceSnapshot, NetworkSnapshot};

/// The device capability snapshot service.
pub struct SnapshotService {
    hardware: Box<dyn HardwareProbe>,
    display: Box<dyn DisplayProbe>,
    power: Box<dyn PowerProbe>,
    reachability: Box<dyn ReachabilityProbe>,
    telephony: Box<dyn TelephonyProbe>,
}

impl SnapshotService {
    /// Create a service backed by native host probes.
    pub fn new() -> Self {
        Self {
            hardware: Box::new(HostProbe::new()),
            display: Box::new(HostProbe::new()),
            power: Box::new(HostProbe::new()),
            reachability: Box::new(HostProbe::new()),
            telephony: Box::new(HostProbe::new()),
        }
    }

    /// Replace the hardware identification probe.
    pub fn with_hardware_probe(mut self, probe: Box<dyn HardwareProbe>) -> Self {
        self.hardware = probe;
        self
    }

    /// Replace the display probe.
    pub fn with_display_probe(mut self, probe: Box<dyn DisplayProbe>) -> Self {
        self.display = probe;
        self
    }

    /// Replace the power probe.
    pub fn with_power_probe(mut self, probe: Box<dyn PowerProbe>) -> Self {
        self.power = probe;
        self
    }

    /// Replace the reachability probe.
    pub fn with_reachability_probe(mut self, probe: Box<dyn ReachabilityProbe>) -> Self {
        self.reachability = probe;
        self
    }

    /// Replace the telephony probe.
    pub fn with_telephony_probe(mut self, probe: Box<dyn TelephonyProbe>) -> Self {
        self.telephony = probe;
        self
    }

    /// Assemble a fresh device snapshot.
    ///
    /// Runs the hardware identity resolver and the display metrics reader;
    /// neither caches, so every call reflects the current readings.
    pub fn device_info(&self) -> DeviceSnapshot {
        let identity = resolve_identity(self.hardware.as_ref());
        let display = resolve_display(self.display.as_ref());
        debug!("assembled device snapshot for model {}", identity.model);

        DeviceSnapshot {
            uuid: identity.uuid,
            model: identity.model,
            manufacturer: identity.manufacturer,
            platform: identity.platform,
            os_version: identity.os_version,
            device_name: identity.device_name,
            is_physical_device: identity.is_physical_device,
            screen_width: display.width_px,
            screen_height: display.height_px,
            screen_scale: display.scale,
            total_memory_mb: identity.total_memory_mb,
            processor_count: identity.processor_count,
        }
    }

    /// Assemble a fresh battery snapshot.
    pub fn battery_info(&self) -> BatterySnapshot {
        resolve_battery(self.power.as_ref())
    }

    /// Assemble a fresh network snapshot.
    pub fn network_info(&self) -> NetworkSnapshot {
        resolve_network(self.reachability.as_ref(), self.telephony.as_ref())
    }
}

impl Default for SnapshotService {
    fn default() -> Self {
        Self::new()
    }
}
