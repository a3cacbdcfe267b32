//! Testing utilities - Mock probes with controlled readings.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use devsnap_core::testing::mocks::{MockPowerProbe, MockReachabilityProbe};
//! use devsnap_core::probe::{ChargeState, ReachabilityFlags};
//!
//! let power = MockPowerProbe::with_level(0.75, ChargeState::Charging);
//! let reachability = MockReachabilityProbe::with_flags(ReachabilityFlags::cellular());
//! ```

pub mod mocks;

pub use mocks::*;
