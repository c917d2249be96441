// crates/shared-kernel/tests/serde_roundtrip.rs
use luminosity_shared_kernel::{FieldValue, Record, Tally};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Wrapper {
    size: Tally,
    row: Record,
}

#[test]
fn json_roundtrip() {
    let original = Wrapper {
        size: Tally::Count(42),
        row: Record::from_pairs([("camera", FieldValue::from("X-T2")), ("count", FieldValue::from(42_i64))]),
    };
    let json = serde_json::to_string(&original).expect("serializes");
    let decoded: Wrapper = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, original);
}

#[test]
fn invalid_tally_survives_roundtrip_as_null() {
    let json = r#"{"size":null,"row":{"count":"abc"}}"#;
    let decoded: Wrapper = serde_json::from_str(json).expect("deserializes");
    assert!(decoded.size.is_invalid());
    assert!(decoded.row.count().is_invalid());
}
