//! Prelude module for convenient imports.
//!
//! Re-exports the most commonly used types from devsnap-core, allowing users
//! to get started with a single import.
//!
//! # Example
//!
//! ```rust,no_run
//! use devsnap_core::prelude::*;
//!
//! let service = SnapshotService::new();
//! let network = service.network_info();
//! assert_eq!(network.is_connected, network.connection_type.is_connected());
//! ```

// ============================================================================
// Service
// ============================================================================

pub use crate::service::SnapshotService;

// ============================================================================
// Snapshot Types
// ============================================================================

pub use crate::snapshot::{
    BatterySnapshot, ConnectionType, DeviceSnapshot, NetworkSnapshot, LEVEL_UNKNOWN, UNKNOWN,
};

// ============================================================================
// Probe Traits
// ============================================================================

pub use crate::probe::{
    ChargeState, DisplayBounds, DisplayProbe, HardwareProbe, HostProbe, Platform, PowerProbe,
    ReachabilityFlags, ReachabilityProbe, RouteQuery, SubscriberRecord, TelephonyProbe,
};

// ============================================================================
// Error Types
// ============================================================================

pub use crate::error::{SnapshotError, SnapshotResult};
