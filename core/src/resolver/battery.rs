//! Battery state resolution.

use log::debug;

use crate::probe::{ChargeState, PowerProbe};
use crate::snapshot::{BatterySnapshot, LEVEL_UNKNOWN};

/// Read the instantaneous battery level and charging state.
///
/// Monitoring is enabled first as an idempotent precondition; the underlying
/// capability is process-lifetime, so nothing is released afterwards. An
/// unsupported or not-yet-ready monitor reports the `-1` sentinel rather
/// than `0`, which is a valid empty-battery reading.
pub fn resolve_battery(probe: &dyn PowerProbe) -> BatterySnapshot {
    probe.enable_monitoring();

    let level = match probe.charge_level() {
        Some(level) if (0.0..=1.0).contains(&level) => level,
        Some(level) => {
            debug!("battery level {level} out of range, reporting unknown");
            LEVEL_UNKNOWN
        }
        None => LEVEL_UNKNOWN,
    };

    // "Full while connected to power" counts as charging; "full but
    // unplugged" and "discharging" do not.
    let is_charging = matches!(
        probe.charge_state(),
        ChargeState::Charging | ChargeState::Full
    );

    BatterySnapshot { level, is_charging }
}
