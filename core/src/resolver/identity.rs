//! Hardware identity resolution.

use crate::probe::{HardwareProbe, Platform};
use crate::snapshot::UNKNOWN;

/// Resolved hardware identity, sentinel-complete.
#[derive(Debug, Clone, PartialEq)]
pub struct HardwareIdentity {
    pub uuid: String,
    pub model: String,
    pub manufacturer: String,
    pub platform: String,
    pub os_version: String,
    pub device_name: String,
    pub is_physical_device: bool,
    pub total_memory_mb: u64,
    pub processor_count: u32,
}

/// Derive the stable device identity from the hardware probe.
///
/// Absence of data degrades to the sentinel, not an error: a missing
/// identifier service yields `uuid == "unknown"`, never a failure. The
/// manufacturer and platform fields are static constants for the platform
/// family, matching the probe-independent facts of the build target.
pub fn resolve_identity(probe: &dyn HardwareProbe) -> HardwareIdentity {
    let platform = Platform::current();

    HardwareIdentity {
        uuid: probe.vendor_id().unwrap_or_else(|| UNKNOWN.to_string()),
        model: probe.machine_model().unwrap_or_else(|| UNKNOWN.to_string()),
        manufacturer: platform.manufacturer().to_string(),
        platform: platform.as_str().to_string(),
        os_version: probe.os_version().unwrap_or_else(|| UNKNOWN.to_string()),
        device_name: probe.device_name().unwrap_or_else(|| UNKNOWN.to_string()),
        is_physical_device: !probe.is_emulated(),
        total_memory_mb: probe.total_memory_mb().unwrap_or(0),
        processor_count: probe.processor_count().unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::mocks::MockHardwareProbe;

    #[test]
    fn test_all_fields_degrade_to_sentinels() {
        let probe = MockHardwareProbe::absent();
        let identity = resolve_identity(&probe);

        assert_eq!(identity.uuid, UNKNOWN);
        assert_eq!(identity.model, UNKNOWN);
        assert_eq!(identity.os_version, UNKNOWN);
        assert_eq!(identity.device_name, UNKNOWN);
        assert_eq!(identity.total_memory_mb, 0);
        assert_eq!(identity.processor_count, 0);
        // No probe data still yields the platform-family constants.
        assert_eq!(identity.platform, Platform::current().as_str());
        assert_eq!(identity.manufacturer, Platform::current().manufacturer());
    }

    #[test]
    fn test_real_values_pass_through() {
        let probe = MockHardwareProbe::absent()
            .with_vendor_id("a1b2c3d4-0000-0000-0000-000000000000")
            .with_machine_model("iPhone14,5")
            .with_os_version("17.2")
            .with_device_name("field-unit-7")
            .with_memory(5933, 6);
        let identity = resolve_identity(&probe);

        assert_eq!(identity.uuid, "a1b2c3d4-0000-0000-0000-000000000000");
        assert_eq!(identity.model, "iPhone14,5");
        assert_eq!(identity.os_version, "17.2");
        assert_eq!(identity.device_name, "field-unit-7");
        assert_eq!(identity.total_memory_mb, 5933);
        assert_eq!(identity.processor_count, 6);
    }

    #[test]
    fn test_physical_device_is_negated_emulation_check() {
        let physical = MockHardwareProbe::absent();
        assert!(resolve_identity(&physical).is_physical_device);

        let emulated = MockHardwareProbe::absent().with_emulated(true);
        assert!(!resolve_identity(&emulated).is_physical_device);
    }
}
