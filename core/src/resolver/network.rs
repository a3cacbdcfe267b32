//! Network reachability classification.

use log::debug;

use crate::probe::{ReachabilityProbe, TelephonyProbe};
use crate::resolver::carrier::resolve_carrier;
use crate::snapshot::{ConnectionType, NetworkSnapshot};

/// Classify current connectivity from the reachability service.
///
/// The decision procedure, evaluated in order:
///
/// 1. Construct a query against a wildcard/any-address target, so the result
///    reflects general route availability rather than one endpoint's
///    liveness. Construction failure classifies as `unknown`.
/// 2. Fetch the current flags; retrieval failure classifies as `unknown`.
/// 3. Not reachable, or reachable only after on-demand setup
///    (`connection_required`), classifies as `none`.
/// 4. A cellular/WWAN route classifies as `cellular`.
/// 5. Anything else classifies as `wifi`.
///
/// The query handle is scoped to this call: it drops - and releases the
/// platform allocation - on every exit path, including both failure
/// branches.
pub fn classify_connection(probe: &dyn ReachabilityProbe) -> ConnectionType {
    let query = match probe.open_query() {
        Some(query) => query,
        None => {
            debug!("reachability query could not be constructed");
            return ConnectionType::Unknown;
        }
    };

    let flags = match query.flags() {
        Some(flags) => flags,
        None => {
            debug!("reachability flag retrieval failed");
            return ConnectionType::Unknown;
        }
    };

    if !flags.reachable || flags.connection_required {
        return ConnectionType::None;
    }

    if flags.wwan {
        return ConnectionType::Cellular;
    }

    ConnectionType::Wifi
}

/// Assemble the network snapshot: connectivity class, the derived
/// `is_connected`, and the carrier name.
pub fn resolve_network(
    reachability: &dyn ReachabilityProbe,
    telephony: &dyn TelephonyProbe,
) -> NetworkSnapshot {
    let connection_type = classify_connection(reachability);

    NetworkSnapshot {
        connection_type,
        is_connected: connection_type.is_connected(),
        carrier_name: resolve_carrier(telephony),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::ReachabilityFlags;
    use crate::testing::mocks::{MockReachabilityProbe, MockTelephonyProbe};

    #[test]
    fn test_construction_failure_is_unknown() {
        let probe = MockReachabilityProbe::unconstructible();
        assert_eq!(classify_connection(&probe), ConnectionType::Unknown);
    }

    #[test]
    fn test_flag_retrieval_failure_is_unknown() {
        let probe = MockReachabilityProbe::flags_unavailable();
        assert_eq!(classify_connection(&probe), ConnectionType::Unknown);
    }

    #[test]
    fn test_unreachable_is_none() {
        let probe = MockReachabilityProbe::with_flags(ReachabilityFlags::default());
        assert_eq!(classify_connection(&probe), ConnectionType::None);
    }

    #[test]
    fn test_connection_required_is_none_even_when_reachable() {
        let probe = MockReachabilityProbe::with_flags(ReachabilityFlags {
            reachable: true,
            connection_required: true,
            wwan: false,
        });
        assert_eq!(classify_connection(&probe), ConnectionType::None);
    }

    #[test]
    fn test_wwan_route_is_cellular() {
        let probe = MockReachabilityProbe::with_flags(ReachabilityFlags::cellular());
        assert_eq!(classify_connection(&probe), ConnectionType::Cellular);
    }

    #[test]
    fn test_plain_route_is_wifi() {
        let probe = MockReachabilityProbe::with_flags(ReachabilityFlags::reachable());
        assert_eq!(classify_connection(&probe), ConnectionType::Wifi);
    }

    #[test]
    fn test_query_released_on_every_exit_path() {
        // Success path.
        let probe = MockReachabilityProbe::with_flags(ReachabilityFlags::reachable());
        classify_connection(&probe);
        assert_eq!(probe.opened_count(), 1);
        assert_eq!(probe.released_count(), 1);

        // Flag retrieval failure still releases the handle.
        let probe = MockReachabilityProbe::flags_unavailable();
        classify_connection(&probe);
        assert_eq!(probe.opened_count(), 1);
        assert_eq!(probe.released_count(), 1);
    }

    #[test]
    fn test_is_connected_is_derived_from_classification() {
        let cases = [
            (MockReachabilityProbe::with_flags(ReachabilityFlags::cellular()), true),
            (MockReachabilityProbe::with_flags(ReachabilityFlags::reachable()), true),
            (MockReachabilityProbe::with_flags(ReachabilityFlags::default()), false),
            (MockReachabilityProbe::unconstructible(), true),
        ];

        for (probe, expected_connected) in cases {
            let snapshot = resolve_network(&probe, &MockTelephonyProbe::no_service());
            assert_eq!(snapshot.is_connected, expected_connected);
            assert_eq!(
                snapshot.is_connected,
                snapshot.connection_type != ConnectionType::None,
                "is_connected must equal (connection_type != none)"
            );
        }
    }

    #[test]
    fn test_cellular_scenario_carries_carrier_name() {
        let reachability = MockReachabilityProbe::with_flags(ReachabilityFlags::cellular());
        let telephony = MockTelephonyProbe::legacy(Some("Acme Mobile"));
        let snapshot = resolve_network(&reachability, &telephony);

        assert_eq!(snapshot.connection_type, ConnectionType::Cellular);
        assert!(snapshot.is_connected);
        assert_eq!(snapshot.carrier_name, "Acme Mobile");
    }
}
