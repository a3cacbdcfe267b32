//! Host probe - Best-effort native probe for desktop hosts.
//!
//! `HostProbe` implements every probe trait against whatever the local OS
//! offers (sysinfo, `/sys`, `/proc`, system commands), with `None` wherever a
//! capability is absent. It carries no decision logic: the resolvers decide
//! what a missing reading means.
//!
//! Mobile embeddings are expected to inject their own probes through the
//! service builder; this implementation covers Linux and macOS hosts so the
//! CLI and tests exercise the full pipeline on real readings.

use super::{
    ChargeState, DisplayBounds, HardwareProbe, DisplayProbe, PowerProbe, ReachabilityFlags,
    ReachabilityProbe, RouteQuery, SubscriberRecord, TelephonyProbe,
};
use sysinfo::System;

#[cfg(target_os = "macos")]
use std::process::Command;

/// Native probe for the local host.
#[derive(Debug, Default)]
pub struct HostProbe;

impl HostProbe {
    pub fn new() -> Self {
        Self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Hardware identification
// ─────────────────────────────────────────────────────────────────────────────

impl HardwareProbe for HostProbe {
    fn vendor_id(&self) -> Option<String> {
        #[cfg(target_os = "linux")]
        {
            // machine-id is stable per install, which is exactly the contract
            // of a vendor-scoped identifier.
            for path in ["/etc/machine-id", "/var/lib/dbus/machine-id"] {
                if let Ok(contents) = std::fs::read_to_string(path) {
                    let id = contents.trim();
                    if id.is_empty() {
                        continue;
                    }
                    // 32 hex chars; present it in hyphenated UUID form where
                    // it parses, raw otherwise.
                    return Some(match uuid::Uuid::parse_str(id) {
                        Ok(parsed) => parsed.hyphenated().to_string(),
                        Err(_) => id.to_string(),
                    });
                }
            }
        }

        #[cfg(target_os = "macos")]
        {
            if let Some(id) = macos_platform_uuid() {
                return Some(id);
            }
        }

        None
    }

    fn machine_model(&self) -> Option<String> {
        #[cfg(target_os = "linux")]
        {
            if let Ok(contents) = std::fs::read_to_string("/sys/class/dmi/id/product_name") {
                let model = contents.trim();
                if !model.is_empty() {
                    return Some(model.to_string());
                }
            }
        }

        #[cfg(target_os = "macos")]
        {
            if let Ok(output) = Command::new("sysctl").args(["-n", "hw.model"]).output() {
                if output.status.success() {
                    let model = String::from_utf8_lossy(&output.stdout).trim().to_string();
                    if !model.is_empty() {
                        return Some(model);
                    }
                }
            }
        }

        None
    }

    fn os_version(&self) -> Option<String> {
        System::os_version()
    }

    fn device_name(&self) -> Option<String> {
        System::host_name()
    }

    fn is_emulated(&self) -> bool {
        // Simulator runtimes export their model identifier into the
        // environment.
        if std::env::var("SIMULATOR_MODEL_IDENTIFIER").is_ok() {
            return true;
        }

        #[cfg(target_os = "linux")]
        {
            // Hypervisors leave their names in the DMI strings.
            for path in ["/sys/class/dmi/id/product_name", "/sys/class/dmi/id/sys_vendor"] {
                if let Ok(contents) = std::fs::read_to_string(path) {
                    let value = contents.to_lowercase();
                    for marker in ["qemu", "kvm", "virtualbox", "vmware", "xen", "bochs", "parallels"] {
                        if value.contains(marker) {
                            return true;
                        }
                    }
                }
            }
        }

        false
    }

    fn total_memory_mb(&self) -> Option<u64> {
        let mut sys = System::new();
        sys.refresh_memory();

        let total_bytes = sys.total_memory();
        if total_bytes > 0 {
            Some(total_bytes / (1024 * 1024))
        } else {
            None
        }
    }

    fn processor_count(&self) -> Option<u32> {
        let mut sys = System::new();
        sys.refresh_cpu_all();

        let cores = sys.cpus().len() as u32;
        if cores > 0 {
            Some(cores)
        } else {
            None
        }
    }
}

#[cfg(target_os = "macos")]
fn macos_platform_uuid() -> Option<String> {
    let output = Command::new("ioreg")
        .args(["-rd1", "-c", "IOPlatformExpertDevice"])
        .output()
        .ok()?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    for line in stdout.lines() {
        if line.contains("IOPlatformUUID") {
            // Lines look like: "IOPlatformUUID" = "XXXXXXXX-..."
            if let Some(value) = line.split('"').nth(3) {
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }
    None
}

// ─────────────────────────────────────────────────────────────────────────────
// Display
// ─────────────────────────────────────────────────────────────────────────────

impl DisplayProbe for HostProbe {
    fn primary_display(&self) -> Option<DisplayBounds> {
        #[cfg(target_os = "linux")]
        {
            // Framebuffer geometry of the primary display; headless hosts
            // simply have no fb0.
            if let Ok(contents) = std::fs::read_to_string("/sys/class/graphics/fb0/virtual_size") {
                let mut parts = contents.trim().split(',');
                let width: f64 = parts.next()?.trim().parse().ok()?;
                let height: f64 = parts.next()?.trim().parse().ok()?;
                return Some(DisplayBounds {
                    point_width: width,
                    point_height: height,
                    scale: 1.0,
                });
            }
        }

        None
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Power
// ─────────────────────────────────────────────────────────────────────────────

impl PowerProbe for HostProbe {
    fn enable_monitoring(&self) {
        // Host power supplies are readable without prior arming; the method
        // exists because the capability it models is process-lifetime on
        // platforms that do require it.
    }

    fn charge_level(&self) -> Option<f32> {
        #[cfg(target_os = "linux")]
        {
            for path in [
                "/sys/class/power_supply/BAT0/capacity",
                "/sys/class/power_supply/BAT1/capacity",
            ] {
                if let Ok(contents) = std::fs::read_to_string(path) {
                    if let Ok(percent) = contents.trim().parse::<u8>() {
                        return Some(percent.min(100) as f32 / 100.0);
                    }
                }
            }
        }

        #[cfg(target_os = "macos")]
        {
            if let Some(percent) = pmset_battery_percent() {
                return Some(percent as f32 / 100.0);
            }
        }

        None
    }

    fn charge_state(&self) -> ChargeState {
        #[cfg(target_os = "linux")]
        {
            for path in [
                "/sys/class/power_supply/BAT0/status",
                "/sys/class/power_supply/BAT1/status",
            ] {
                if let Ok(contents) = std::fs::read_to_string(path) {
                    return match contents.trim() {
                        "Charging" => ChargeState::Charging,
                        "Full" => ChargeState::Full,
                        "Discharging" => ChargeState::Discharging,
                        "Not charging" => ChargeState::Unplugged,
                        _ => ChargeState::Unknown,
                    };
                }
            }
        }

        #[cfg(target_os = "macos")]
        {
            if let Some(state) = pmset_charge_state() {
                return state;
            }
        }

        ChargeState::Unknown
    }
}

#[cfg(target_os = "macos")]
fn pmset_battery_output() -> Option<String> {
    let output = Command::new("pmset").args(["-g", "batt"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).to_string())
}

#[cfg(target_os = "macos")]
fn pmset_battery_percent() -> Option<u8> {
    let stdout = pmset_battery_output()?;
    // Output looks like: " -InternalBattery-0 (id=12345) 75%; charging;"
    let percent_start = stdout.find('%')?;
    let line = &stdout[..percent_start];
    let space_pos = line.rfind(|c: char| c.is_whitespace())?;
    line[space_pos + 1..].parse::<u8>().ok().map(|p| p.min(100))
}

#[cfg(target_os = "macos")]
fn pmset_charge_state() -> Option<ChargeState> {
    let stdout = pmset_battery_output()?;
    // "discharging" contains "charging"; test it first.
    if stdout.contains("discharging") {
        Some(ChargeState::Discharging)
    } else if stdout.contains("charging") {
        Some(ChargeState::Charging)
    } else if stdout.contains("charged") {
        Some(ChargeState::Full)
    } else if stdout.contains("not charging") || stdout.contains("AC attached") {
        Some(ChargeState::Unplugged)
    } else {
        None
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Reachability
// ─────────────────────────────────────────────────────────────────────────────

impl ReachabilityProbe for HostProbe {
    fn open_query(&self) -> Option<Box<dyn RouteQuery>> {
        #[cfg(target_os = "linux")]
        {
            // The kernel routing table is the wildcard-target route source;
            // failing to open it is the cannot-construct branch.
            let raw = std::fs::read_to_string("/proc/net/route").ok()?;
            Some(Box::new(HostRouteQuery { raw }))
        }

        #[cfg(target_os = "macos")]
        {
            let output = Command::new("route")
                .args(["-n", "get", "default"])
                .output()
                .ok()?;
            Some(Box::new(HostRouteQuery { output }))
        }

        #[cfg(not(any(target_os = "linux", target_os = "macos")))]
        {
            None
        }
    }
}

/// Route query over a snapshot of the host routing table.
#[cfg(target_os = "linux")]
struct HostRouteQuery {
    raw: String,
}

#[cfg(target_os = "linux")]
impl RouteQuery for HostRouteQuery {
    fn flags(&self) -> Option<ReachabilityFlags> {
        const RTF_UP: u32 = 0x0001;

        let mut lines = self.raw.lines();
        // A routing table without its header line is malformed.
        lines.next()?;

        let mut flags = ReachabilityFlags::default();
        for line in lines {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 4 {
                continue;
            }
            let route_flags = u32::from_str_radix(fields[3], 16).unwrap_or(0);
            // Destination 00000000 is the default (wildcard) route.
            if fields[1] == "00000000" && route_flags & RTF_UP != 0 {
                flags.reachable = true;
                flags.wwan = is_wwan_interface(fields[0]);
                break;
            }
        }
        // Hosts have no on-demand route concept, so connection_required
        // stays clear here; mobile probes set it from their own flags.
        Some(flags)
    }
}

#[cfg(target_os = "macos")]
struct HostRouteQuery {
    output: std::process::Output,
}

#[cfg(target_os = "macos")]
impl RouteQuery for HostRouteQuery {
    fn flags(&self) -> Option<ReachabilityFlags> {
        // `route -n get default` exits non-zero when no default route
        // exists; that is a successful "not reachable" reading.
        if !self.output.status.success() {
            return Some(ReachabilityFlags::default());
        }
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        let mut flags = ReachabilityFlags::default();
        for line in stdout.lines() {
            if let Some(iface) = line.trim().strip_prefix("interface:") {
                flags.reachable = true;
                flags.wwan = is_wwan_interface(iface.trim());
                break;
            }
        }
        Some(flags)
    }
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
fn is_wwan_interface(name: &str) -> bool {
    // wwan*/ppp*/usb* are modem-backed on Linux; pdp_ip* is the cellular
    // data interface on Apple platforms.
    ["wwan", "ppp", "usb", "pdp_ip"]
        .iter()
        .any(|prefix| name.starts_with(prefix))
}

// ─────────────────────────────────────────────────────────────────────────────
// Telephony
// ─────────────────────────────────────────────────────────────────────────────

impl TelephonyProbe for HostProbe {
    fn supports_multi_subscriber(&self) -> bool {
        false
    }

    fn subscriber_records(&self) -> Vec<SubscriberRecord> {
        Vec::new()
    }

    fn legacy_subscriber(&self) -> Option<SubscriberRecord> {
        // Desktop hosts carry no subscription service; absence of a radio is
        // a normal outcome, not an error.
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_probe_never_panics() {
        let probe = HostProbe::new();
        let _ = probe.vendor_id();
        let _ = probe.machine_model();
        let _ = probe.os_version();
        let _ = probe.device_name();
        let _ = probe.is_emulated();
        let _ = probe.primary_display();
        probe.enable_monitoring();
        let _ = probe.charge_level();
        let _ = probe.charge_state();
        let _ = probe.subscriber_records();
    }

    #[test]
    fn test_charge_level_in_range_when_present() {
        let probe = HostProbe::new();
        if let Some(level) = probe.charge_level() {
            assert!((0.0..=1.0).contains(&level), "level out of range: {level}");
        }
    }

    #[test]
    fn test_memory_and_cores_are_positive_when_present() {
        let probe = HostProbe::new();
        if let Some(mb) = probe.total_memory_mb() {
            assert!(mb > 0);
        }
        if let Some(cores) = probe.processor_count() {
            assert!(cores >= 1);
        }
    }

    #[test]
    fn test_route_query_flags_readable_when_constructed() {
        let probe = HostProbe::new();
        if let Some(query) = probe.open_query() {
            // Whatever the host routing state, a constructed query must
            // yield a readable flag set or a clean retrieval failure.
            let _ = query.flags();
        }
    }

    #[test]
    fn test_wwan_interface_prefixes() {
        #[cfg(any(target_os = "linux", target_os = "macos"))]
        {
            assert!(is_wwan_interface("wwan0"));
            assert!(is_wwan_interface("ppp0"));
            assert!(is_wwan_interface("pdp_ip0"));
            assert!(!is_wwan_interface("eth0"));
            assert!(!is_wwan_interface("wlan0"));
            assert!(!is_wwan_interface("en0"));
        }
    }

    #[test]
    fn test_host_has_no_subscription_service() {
        let probe = HostProbe::new();
        assert!(!probe.supports_multi_subscriber());
        assert!(probe.subscriber_records().is_empty());
        assert!(probe.legacy_subscriber().is_none());
    }
}
