//! Probe module - Injectable platform-service interfaces.
//!
//! Each trait describes exactly one OS capability (hardware identification,
//! display service, power service, reachability service, cellular
//! subscription service). Every probe is best-effort: it reports `None` (or
//! an empty set) where the capability is absent, and it never fails. The
//! resolvers in [`crate::resolver`] contain all decision logic and operate
//! purely on these traits, so they can be unit-tested with the fakes in
//! [`crate::testing`].
//!
//! | Trait | Capability |
//! |-------|------------|
//! | [`HardwareProbe`] | Identifier service, machine type, OS metadata |
//! | [`DisplayProbe`] | Primary display geometry and scale |
//! | [`PowerProbe`] | Battery level and charge state |
//! | [`ReachabilityProbe`] | Route availability flags |
//! | [`TelephonyProbe`] | Subscriber/carrier records |

pub mod host;

pub use host::HostProbe;

/// Platform family identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOS,
    Ios,
    Android,
    Linux,
    Windows,
    Unknown,
}

impl Platform {
    /// Detect the current platform at compile time.
    pub fn current() -> Self {
        #[cfg(target_os = "macos")]
        return Platform::MacOS;
        #[cfg(target_os = "ios")]
        return Platform::Ios;
        #[cfg(target_os = "android")]
        return Platform::Android;
        #[cfg(target_os = "linux")]
        return Platform::Linux;
        #[cfg(target_os = "windows")]
        return Platform::Windows;
        #[cfg(not(any(
            target_os = "macos",
            target_os = "ios",
            target_os = "android",
            target_os = "linux",
            target_os = "windows"
        )))]
        return Platform::Unknown;
    }

    /// Platform name as reported in snapshots.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::MacOS => "macOS",
            Platform::Ios => "iOS",
            Platform::Android => "Android",
            Platform::Linux => "Linux",
            Platform::Windows => "Windows",
            Platform::Unknown => "unknown",
        }
    }

    /// Static manufacturer constant for the platform family.
    pub fn manufacturer(&self) -> &'static str {
        match self {
            Platform::MacOS | Platform::Ios => "Apple",
            Platform::Android => "Android",
            Platform::Linux => "Linux",
            Platform::Windows => "Microsoft",
            Platform::Unknown => "unknown",
        }
    }
}

/// Hardware identification and host metadata.
pub trait HardwareProbe: Send + Sync {
    /// Vendor-scoped, stable-per-install identifier.
    fn vendor_id(&self) -> Option<String>;

    /// Raw hardware machine-type string (e.g. `"iPhone14,5"`, a DMI product
    /// name, or `hw.model`).
    fn machine_model(&self) -> Option<String>;

    /// OS version string.
    fn os_version(&self) -> Option<String>;

    /// User-visible device name.
    fn device_name(&self) -> Option<String>;

    /// Whether the process runs inside a simulated/emulated environment.
    fn is_emulated(&self) -> bool;

    /// Total physical memory in MB.
    fn total_memory_mb(&self) -> Option<u64>;

    /// Logical processor count.
    fn processor_count(&self) -> Option<u32>;
}

/// Geometry of the primary display in points, plus its scale factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayBounds {
    pub point_width: f64,
    pub point_height: f64,
    pub scale: f64,
}

/// Primary display service.
pub trait DisplayProbe: Send + Sync {
    /// Bounds of the main/primary display only. `None` on headless hosts or
    /// where no display service exists.
    fn primary_display(&self) -> Option<DisplayBounds>;
}

/// Battery charge state as reported by the power service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeState {
    /// Actively charging.
    Charging,
    /// Full while connected to power.
    Full,
    /// Full or idle but not connected to power.
    Unplugged,
    /// Running on battery.
    Discharging,
    /// State could not be determined.
    Unknown,
}

/// Battery/power service.
pub trait PowerProbe: Send + Sync {
    /// Enable battery monitoring. Idempotent; the underlying capability is
    /// process-lifetime, so there is no matching release.
    fn enable_monitoring(&self);

    /// Instantaneous charge fraction in `[0, 1]`. `None` when monitoring is
    /// unsupported or has not produced a reading yet.
    fn charge_level(&self) -> Option<f32>;

    /// Current charge state.
    fn charge_state(&self) -> ChargeState;
}

/// Route availability flags for a wildcard-address target.
///
/// A bitset describing whether a route exists and under what conditions; the
/// connectivity class is derived from it, never measured directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReachabilityFlags {
    /// A route to the wildcard target exists.
    pub reachable: bool,
    /// The route exists but requires on-demand setup (VPN-on-demand, gated
    /// captive network) before traffic can flow.
    pub connection_required: bool,
    /// The route goes over the cellular/WWAN interface.
    pub wwan: bool,
}

impl ReachabilityFlags {
    /// Flags for an ordinary usable route.
    pub fn reachable() -> Self {
        Self {
            reachable: true,
            ..Self::default()
        }
    }

    /// Flags for a usable route over the cellular interface.
    pub fn cellular() -> Self {
        Self {
            reachable: true,
            wwan: true,
            ..Self::default()
        }
    }
}

/// A live reachability query handle.
///
/// The handle is a scoped acquisition: dropping it releases whatever the
/// platform allocated for the query. Classification must let it drop on
/// every exit path, including the failure branches.
pub trait RouteQuery {
    /// Fetch the current flags. `None` when flag retrieval fails.
    fn flags(&self) -> Option<ReachabilityFlags>;
}

/// Reachability service.
pub trait ReachabilityProbe: Send + Sync {
    /// Construct a reachability query targeted at a wildcard/any-address
    /// target, so the result reflects general route availability rather than
    /// one endpoint's liveness. `None` when the query cannot be constructed.
    fn open_query(&self) -> Option<Box<dyn RouteQuery>>;
}

/// One subscriber-provider record from the cellular subscription service.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubscriberRecord {
    /// Carrier display name, if the record carries one.
    pub carrier_name: Option<String>,
}

impl SubscriberRecord {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            carrier_name: Some(name.into()),
        }
    }
}

/// Cellular subscription service.
///
/// The two methods mirror the two API shapes found across OS versions; which
/// one applies is a capability tier of the probe, not an inline version check
/// in the resolver.
pub trait TelephonyProbe: Send + Sync {
    /// Whether the modern multi-subscriber enumeration is available.
    fn supports_multi_subscriber(&self) -> bool;

    /// All subscriber-provider records, in the service's order. Supports
    /// multi-SIM. Empty when no SIM is present or the API is absent.
    fn subscriber_records(&self) -> Vec<SubscriberRecord>;

    /// The single legacy subscriber-provider record.
    fn legacy_subscriber(&self) -> Option<SubscriberRecord>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_constants() {
        assert_eq!(Platform::Ios.as_str(), "iOS");
        assert_eq!(Platform::Ios.manufacturer(), "Apple");
        assert_eq!(Platform::MacOS.manufacturer(), "Apple");
        assert_eq!(Platform::Unknown.as_str(), "unknown");
    }

    #[test]
    fn test_platform_current_is_not_surprising() {
        let platform = Platform::current();
        #[cfg(target_os = "linux")]
        assert_eq!(platform, Platform::Linux);
        #[cfg(target_os = "macos")]
        assert_eq!(platform, Platform::MacOS);
        let _ = platform;
    }

    #[test]
    fn test_reachability_flag_constructors() {
        let wifi = ReachabilityFlags::reachable();
        assert!(wifi.reachable && !wifi.wwan && !wifi.connection_required);

        let cell = ReachabilityFlags::cellular();
        assert!(cell.reachable && cell.wwan && !cell.connection_required);
    }
}
