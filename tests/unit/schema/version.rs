use super::*;

#[test]
fn known_revisions_classify() {
    for n in 1..=5 {
        let v = SchemaVersion::from_number(n);
        assert!(v.is_known());
        assert_eq!(v.number(), n);
    }
    assert_eq!(SchemaVersion::from_number(3), SchemaVersion::V3);
}

#[test]
fn other_numbers_are_unknown_but_kept() {
    for n in [0, 6, -1, 42] {
        let v = SchemaVersion::from_number(n);
        assert_eq!(v, SchemaVersion::Unknown(n));
        assert!(!v.is_known());
        assert_eq!(v.number(), n);
    }
}
