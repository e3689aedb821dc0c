use rust_data_series::{Element, ElementError, Kind, Scalar};

#[test]
fn int64_from_text_and_float() {
    let e = Element::from_source(Kind::Int64, "42");
    assert_eq!(e.to_int().unwrap(), 42);
    assert!(!e.is_na());
    assert_eq!(e.to_string(), "42");

    assert!(Element::from_source(Kind::Int64, "abc").is_na());
    assert_eq!(Element::from_source(Kind::Int64, 3.9).to_int64().unwrap(), 3);
}

#[test]
fn text_from_bool_and_bool_from_text() {
    assert_eq!(Element::from_source(Kind::Text, true).to_string(), "true");
    assert!(Element::from_source(Kind::Boolean, "T").to_bool().unwrap());
}

#[test]
fn text_round_trip_through_set() {
    let cases: Vec<(Kind, &str)> = vec![
        (Kind::Boolean, "true"),
        (Kind::Boolean, "F"),
        (Kind::Boolean, "0"),
        (Kind::Int64, "-9223372036854775808"),
        (Kind::Int64, "+17"),
        (Kind::Text, "hello world"),
        (Kind::Text, ""),
        (Kind::Timestamp, "1999-12-31 23:59:59"),
    ];
    for (kind, raw) in cases {
        let first = Element::from_source(kind, raw);
        assert!(!first.is_na(), "{kind} {raw:?}");
        let rendered = first.to_string();
        let second = Element::from_source(kind, rendered.as_str());
        assert_eq!(first, second, "{kind} {raw:?}");
        assert!(first.equal(&second));
    }
}

#[test]
fn cross_kind_set_uses_source_accessor() {
    let int_one = Element::from_source(Kind::Int64, 1);
    assert!(Element::from_source(Kind::Boolean, &int_one).to_bool().unwrap());

    let int_two = Element::from_source(Kind::Int64, 2);
    assert!(Element::from_source(Kind::Boolean, &int_two).is_na());

    let text = Element::from_source(Kind::Text, &int_two);
    assert_eq!(text.to_string(), "2");

    let ts_text = Element::from_source(Kind::Text, "2000-01-01 00:00:00");
    let ts = Element::from_source(Kind::Timestamp, &ts_text);
    assert_eq!(ts.to_int64().unwrap(), 946_684_800);

    let generic = Element::from_source(Kind::Generic, &ts_text);
    assert_eq!(generic.value(), Some(Scalar::Text("2000-01-01 00:00:00".to_string())));

    let b = Element::from_source(Kind::Boolean, false);
    assert!(Element::from_source(Kind::Timestamp, &b).is_na());
}

#[test]
fn accessor_errors_describe_source_and_target() {
    let b = Element::from_source(Kind::Boolean, true);
    let err = b.to_timestamp().unwrap_err();
    assert_eq!(err.to_string(), "can't convert boolean to timestamp");

    let na = Element::new(Kind::Text);
    let err = na.to_int64().unwrap_err();
    assert!(matches!(err, ElementError::NotAvailable { kind: Kind::Text, .. }));

    let g = Element::from_source(Kind::Generic, "x");
    assert!(g.to_bool().is_err());
    assert!(g.to_int().is_err());
}

#[test]
fn arbitrary_values_only_fit_generic() {
    let value = serde_json::json!([1, 2, 3]);
    for kind in [Kind::Boolean, Kind::Int64, Kind::Text, Kind::Timestamp] {
        assert!(Element::from_source(kind, &value).is_na(), "{kind}");
    }
    let g = Element::from_source(Kind::Generic, &value);
    assert!(!g.is_na());
    assert_eq!(g.value(), Some(Scalar::Json(value.clone())));
}

#[test]
fn comparisons_coerce_right_operand_to_left_kind() {
    let one = Element::from_source(Kind::Int64, 1);
    let t = Element::from_source(Kind::Text, "1");
    let yes = Element::from_source(Kind::Boolean, true);

    assert!(one.equal(&t));
    assert!(one.equal(&yes));
    assert!(yes.equal(&one));
    assert!(t.equal(&one));
    // Text reads `true` as "true", which is not "1".
    assert!(!t.equal(&yes));
    assert!(t.not_equal(&yes));
}
