#![cfg(feature = "serde")]

use more_bisect::{Builder, Span};

#[test]
fn serde_roundtrip_span() {
    let span = Span::inclusive(3, 9).unwrap();

    let json = serde_json::to_string(&span).unwrap();
    let de: Span = serde_json::from_str(&json).unwrap();

    assert_eq!(span, de);
    assert_eq!(de.hi(), Some(9));
}

#[test]
fn serde_span_shape() {
    let span = Span::new(2, 5);
    assert_eq!(serde_json::to_string(&span).unwrap(), r#"{"lo":2,"end":5}"#);
}

#[test]
fn serde_restored_span_drives_a_probe() {
    let data: Vec<u64> = (0..100).map(|i| i * 10).collect();
    let probe = Builder::new().lo(10).hi(19).over(&data).unwrap();

    let json = serde_json::to_string(&probe.span()).unwrap();
    let span: Span = serde_json::from_str(&json).unwrap();

    let restored = Builder::new().range(span.lo..=span.end - 1).over(&data).unwrap();
    for x in [0u64, 105, 150, 199, 500] {
        assert_eq!(probe.bisect_left(&x), restored.bisect_left(&x));
        assert_eq!(probe.first_closest_to(&x), restored.first_closest_to(&x));
    }
}
