//! Devsnap Core - The device capability snapshot service.
//!
//! Queries heterogeneous, sometimes-unavailable OS subsystems (hardware
//! identification, display scale, power state, radio reachability, carrier
//! metadata) and reduces them to one stable schema with deterministic
//! fallback values. Every operation is total: a capability the platform
//! cannot supply degrades to a documented sentinel, never to an error.
//!
//! ## Quick Start
//!
//! Use the [`prelude`] module for common imports:
//!
//! ```rust,no_run
//! use devsnap_core::prelude::*;
//!
//! let service = SnapshotService::new();
//! let device = service.device_info();
//! let battery = service.battery_info();
//! let network = service.network_info();
//! println!("{} / {} / {}", device.to_json(), battery.to_json(), network.to_json());
//! ```
//!
//! ## Module Organization
//!
//! The crate is organized into logical groups:
//!
//! ### Service Layer
//! - [`service`] - The snapshot assembler and its three entry points
//!
//! ### Data Types
//! - [`snapshot`] - The three public result shapes and their sentinels
//!
//! ### Platform Access
//! - [`probe`] - Injectable platform-service traits plus the native
//!   [`probe::HostProbe`]
//! - [`resolver`] - One resolver per capability, all decision logic
//!
//! ### Support
//! - [`error`] - Transport-boundary errors (the core itself never fails)
//! - [`testing`] - Mock probes with controlled readings

// ============================================================================
// Prelude - Common imports for convenience
// ============================================================================

/// Common imports for devsnap-core users.
///
/// # Example
///
/// ```rust,ignore
/// use devsnap_core::prelude::*;
/// ```
pub mod prelude;

/// Transport-boundary error types.
///
/// The core is total; this exists for the bridge and CLI layers only.
pub mod error;
pub use error::{SnapshotError, SnapshotResult};

// ============================================================================
// Service Layer
// ============================================================================

/// Snapshot assembly (device, battery, network)
pub mod service;

// ============================================================================
// Data Types
// ============================================================================

/// Snapshot result shapes and sentinel values
pub mod snapshot;

// ============================================================================
// Platform Access
// ============================================================================

/// Injectable platform-service traits and the native host probe
pub mod probe;

/// Capability resolvers (identity, display, battery, network, carrier)
pub mod resolver;

// ============================================================================
// Internal Modules (implementation details, may change without notice)
// ============================================================================

/// Testing utilities (mock probes)
#[doc(hidden)]
pub mod testing;
