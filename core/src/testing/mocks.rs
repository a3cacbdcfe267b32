//! Mock probe implementations for testing.
//!
//! Each mock returns configured readings and can force the failure branches
//! a real platform only hits occasionally (no identifier service, headless
//! host, unconstructible reachability query). The reachability mock also
//! counts query handles it hands out and handles that have been released, so
//! tests can assert the scoped-acquisition contract.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::probe::{
    ChargeState, DisplayBounds, DisplayProbe, HardwareProbe, PowerProbe, ReachabilityFlags,
    ReachabilityProbe, RouteQuery, SubscriberRecord, TelephonyProbe,
};

/// Hardware probe with configurable readings.
#[derive(Debug, Default)]
pub struct MockHardwareProbe {
    vendor_id: Option<String>,
    machine_model: Option<String>,
    os_version: Option<String>,
    device_name: Option<String>,
    emulated: bool,
    total_memory_mb: Option<u64>,
    processor_count: Option<u32>,
}

impl MockHardwareProbe {
    /// A probe on a platform where every capability is absent.
    pub fn absent() -> Self {
        Self::default()
    }

    pub fn with_vendor_id(mut self, id: impl Into<String>) -> Self {
        self.vendor_id = Some(id.into());
        self
    }

    pub fn with_machine_model(mut self, model: impl Into<String>) -> Self {
        self.machine_model = Some(model.into());
        self
    }

    pub fn with_os_version(mut self, version: impl Into<String>) -> Self {
        self.os_version = Some(version.into());
        self
    }

    pub fn with_device_name(mut self, name: impl Into<String>) -> Self {
        self.device_name = Some(name.into());
        self
    }

    pub fn with_emulated(mut self, emulated: bool) -> Self {
        self.emulated = emulated;
        self
    }

    pub fn with_memory(mut self, total_mb: u64, cores: u32) -> Self {
        self.total_memory_mb = Some(total_mb);
        self.processor_count = Some(cores);
        self
    }
}

impl HardwareProbe for MockHardwareProbe {
    fn vendor_id(&self) -> Option<String> {
        self.vendor_id.clone()
    }

    fn machine_model(&self) -> Option<String> {
        self.machine_model.clone()
    }

    fn os_version(&self) -> Option<String> {
        self.os_version.clone()
    }

    fn device_name(&self) -> Option<String> {
        self.device_name.clone()
    }

    fn is_emulated(&self) -> bool {
        self.emulated
    }

    fn total_memory_mb(&self) -> Option<u64> {
        self.total_memory_mb
    }

    fn processor_count(&self) -> Option<u32> {
        self.processor_count
    }
}

/// Display probe with fixed bounds, or none at all.
#[derive(Debug)]
pub struct MockDisplayProbe {
    bounds: Option<DisplayBounds>,
}

impl MockDisplayProbe {
    /// A host with no display service.
    pub fn headless() -> Self {
        Self { bounds: None }
    }

    pub fn with_bounds(point_width: f64, point_height: f64, scale: f64) -> Self {
        Self {
            bounds: Some(DisplayBounds {
                point_width,
                point_height,
                scale,
            }),
        }
    }
}

impl DisplayProbe for MockDisplayProbe {
    fn primary_display(&self) -> Option<DisplayBounds> {
        self.bounds
    }
}

/// Power probe with a fixed level and state, tracking whether monitoring was
/// enabled before the first read.
#[derive(Debug)]
pub struct MockPowerProbe {
    level: Option<f32>,
    state: ChargeState,
    monitoring_enabled: AtomicBool,
}

impl MockPowerProbe {
    /// A platform without battery monitoring.
    pub fn unsupported() -> Self {
        Self {
            level: None,
            state: ChargeState::Unknown,
            monitoring_enabled: AtomicBool::new(false),
        }
    }

    pub fn with_level(level: f32, state: ChargeState) -> Self {
        Self {
            level: Some(level),
            state,
            monitoring_enabled: AtomicBool::new(false),
        }
    }

    /// Whether `enable_monitoring` has been called.
    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring_enabled.load(Ordering::SeqCst)
    }
}

impl PowerProbe for MockPowerProbe {
    fn enable_monitoring(&self) {
        self.monitoring_enabled.store(true, Ordering::SeqCst);
    }

    fn charge_level(&self) -> Option<f32> {
        self.level
    }

    fn charge_state(&self) -> ChargeState {
        self.state
    }
}

/// Reachability probe that can force each branch of the classifier.
pub struct MockReachabilityProbe {
    mode: MockRoute,
    opened: AtomicUsize,
    released: Arc<AtomicUsize>,
}

#[derive(Clone, Copy)]
enum MockRoute {
    /// The query cannot be constructed at all.
    Unconstructible,
    /// The query constructs, but flag retrieval fails.
    FlagsUnavailable,
    /// The query constructs and yields these flags.
    Flags(ReachabilityFlags),
}

impl MockReachabilityProbe {
    pub fn unconstructible() -> Self {
        Self::with_mode(MockRoute::Unconstructible)
    }

    pub fn flags_unavailable() -> Self {
        Self::with_mode(MockRoute::FlagsUnavailable)
    }

    pub fn with_flags(flags: ReachabilityFlags) -> Self {
        Self::with_mode(MockRoute::Flags(flags))
    }

    fn with_mode(mode: MockRoute) -> Self {
        Self {
            mode,
            opened: AtomicUsize::new(0),
            released: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of query handles handed out.
    pub fn opened_count(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    /// Number of query handles that have been dropped.
    pub fn released_count(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

impl ReachabilityProbe for MockReachabilityProbe {
    fn open_query(&self) -> Option<Box<dyn RouteQuery>> {
        let flags = match self.mode {
            MockRoute::Unconstructible => return None,
            MockRoute::FlagsUnavailable => None,
            MockRoute::Flags(flags) => Some(flags),
        };

        self.opened.fetch_add(1, Ordering::SeqCst);
        Some(Box::new(MockRouteQuery {
            flags,
            released: Arc::clone(&self.released),
        }))
    }
}

struct MockRouteQuery {
    flags: Option<ReachabilityFlags>,
    released: Arc<AtomicUsize>,
}

impl RouteQuery for MockRouteQuery {
    fn flags(&self) -> Option<ReachabilityFlags> {
        self.flags
    }
}

impl Drop for MockRouteQuery {
    fn drop(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

/// Telephony probe with a configurable capability tier and record set.
#[derive(Debug)]
pub struct MockTelephonyProbe {
    multi_subscriber: bool,
    records: Vec<SubscriberRecord>,
    legacy: Option<SubscriberRecord>,
}

impl MockTelephonyProbe {
    /// A host with no subscription service at all.
    pub fn no_service() -> Self {
        Self {
            multi_subscriber: false,
            records: Vec::new(),
            legacy: None,
        }
    }

    /// Modern tier: multi-subscriber enumeration with these records.
    pub fn multi(records: Vec<SubscriberRecord>) -> Self {
        Self {
            multi_subscriber: true,
            records,
            legacy: None,
        }
    }

    /// Legacy tier: a single subscriber record with the given name.
    pub fn legacy(name: Option<&str>) -> Self {
        Self {
            multi_subscriber: false,
            records: Vec::new(),
            legacy: Some(SubscriberRecord {
                carrier_name: name.map(Into::into),
            }),
        }
    }
}

impl TelephonyProbe for MockTelephonyProbe {
    fn supports_multi_subscriber(&self) -> bool {
        self.multi_subscriber
    }

    fn subscriber_records(&self) -> Vec<SubscriberRecord> {
        self.records.clone()
    }

    fn legacy_subscriber(&self) -> Option<SubscriberRecord> {
        self.legacy.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reachability_mock_counts_handles() {
        let probe = MockReachabilityProbe::with_flags(ReachabilityFlags::reachable());
        {
            let query = probe.open_query().unwrap();
            assert_eq!(probe.opened_count(), 1);
            assert_eq!(probe.released_count(), 0);
            assert!(query.flags().unwrap().reachable);
        }
        assert_eq!(probe.released_count(), 1);
    }

    #[test]
    fn test_unconstructible_mock_hands_out_nothing() {
        let probe = MockReachabilityProbe::unconstructible();
        assert!(probe.open_query().is_none());
        assert_eq!(probe.opened_count(), 0);
    }

    #[test]
    fn test_power_mock_tracks_monitoring() {
        let probe = MockPowerProbe::unsupported();
        assert!(!probe.monitoring_enabled());
        probe.enable_monitoring();
        assert!(probe.monitoring_enabled());
        assert_eq!(probe.charge_level(), None);
    }
}
