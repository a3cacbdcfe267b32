//! Cellular carrier resolution.

use crate::probe::TelephonyProbe;
use crate::snapshot::UNKNOWN;

/// Best-effort lookup of the active carrier's display name.
///
/// Two API shapes exist across OS versions, surfaced by the probe as a
/// capability tier: the modern multi-subscriber enumeration (multi-SIM) and
/// the single legacy record. Either way, the first non-empty name wins; no
/// SIM, airplane mode, a denied permission, or an absent API all resolve to
/// `"unknown"` - never an empty string, never an error.
pub fn resolve_carrier(probe: &dyn TelephonyProbe) -> String {
    if probe.supports_multi_subscriber() {
        for record in probe.subscriber_records() {
            if let Some(name) = record.carrier_name {
                if !name.is_empty() {
                    return name;
                }
            }
        }
    } else if let Some(record) = probe.legacy_subscriber() {
        if let Some(name) = record.carrier_name {
            if !name.is_empty() {
                return name;
            }
        }
    }

    UNKNOWN.to_string()
}
