use proptest::prelude::*;
use stratus_types::{OverallStatus, ProviderId, ServiceEntry, ServiceStatus, StatusReport};

fn arb_status() -> impl Strategy<Value = ServiceStatus> {
    prop_oneof![
        Just(ServiceStatus::Operational),
        Just(ServiceStatus::Issue),
        Just(ServiceStatus::Investigating),
        Just(ServiceStatus::Unknown),
    ]
}

fn arb_entry() -> impl Strategy<Value = ServiceEntry> {
    ("[a-zA-Z ]{1,24}", arb_status(), "[a-z0-9-]{1,12}")
        .prop_map(|(name, status, region)| ServiceEntry::new(name, status, region))
}

proptest! {
    /// `overall == Operational` exactly when every entry is operational.
    #[test]
    fn overall_matches_entries(entries in prop::collection::vec(arb_entry(), 1..12)) {
        let all_operational = entries
            .iter()
            .all(|e| e.status == ServiceStatus::Operational);
        let report = StatusReport::from_services(ProviderId::Aws, entries);
        prop_assert_eq!(
            report.overall == OverallStatus::Operational,
            all_operational
        );
        prop_assert!(report.error.is_none());
    }
}

#[test]
fn serde_round_trips_optional_fields() {
    let report = StatusReport::unverified(ProviderId::Oci);
    let json = serde_json::to_string(&report).unwrap();
    // Absent options are omitted entirely rather than serialized as null.
    assert!(!json.contains("\"error\""));
    assert!(json.contains("\"note\""));
    let back: StatusReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}
