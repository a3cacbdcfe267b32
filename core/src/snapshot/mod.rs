//! Snapshot module - The three public result shapes and their wire schema.
//!
//! Every snapshot is a value object: produced fresh on each request, immutable
//! once assembled, no identity, no persistence. Fields that a platform cannot
//! supply are filled with documented sentinels rather than being absent, so
//! consumers never null-check.
//!
//! | Type | Produced by |
//! |------|-------------|
//! | [`DeviceSnapshot`] | `getDeviceInfo` |
//! | [`BatterySnapshot`] | `getBatteryInfo` |
//! | [`NetworkSnapshot`] | `getNetworkInfo` |

pub mod types;

pub use types::{
    BatterySnapshot, ConnectionType, DeviceSnapshot, NetworkSnapshot, LEVEL_UNKNOWN,
    SCALE_FALLBACK, UNKNOWN,
};
