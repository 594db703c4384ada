use star_records::catalog;
use star_records::{
    decode, encode, Collection, DecodeError, EncodeError, Record, Shape, ShapeKind,
};

fn assert_mismatch(text: &str, shape: &Shape, needle: &str) {
    match decode(text, shape) {
        Err(err @ DecodeError::Mismatch { .. }) => {
            assert!(err.to_string().contains(needle), "`{needle}` not in: {err}");
            assert!(err.line().is_some());
        }
        other => panic!("expected mismatch for {text}, got {other:?}"),
    }
}

fn assert_syntax(text: &str, shape: &Shape) {
    match decode(text, shape) {
        Err(err) => assert!(err.is_syntax(), "expected syntax error for {text}, got {err}"),
        Ok(collection) => panic!("expected syntax error for {text}, got {collection:?}"),
    }
}

#[test]
fn malformed_text_matrix() {
    let cases = [
        "",
        "[",
        "[{]",
        r#"[{"name":"Sun","distance":1e,"constellation":""}]"#,
        r#"[{"name":"Sun" "distance":1,"constellation":""}]"#,
        r#"[{"name":"Sun","distance":1,"constellation":""},]"#,
        "[] trailing",
        "nul",
    ];
    for text in cases {
        assert_syntax(text, &Shape::Bare);
    }
    assert_syntax(r#"{"stars": [}"#, &Shape::wrapped_default());
    assert_syntax(r#"{"sun": "#, &catalog::shape(ShapeKind::Keyed));
}

#[test]
fn overflowing_number_is_a_syntax_error() {
    let text = r#"[{"name":"a","distance":1e400,"constellation":""}]"#;
    let err = decode(text, &Shape::Bare).unwrap_err();
    assert!(err.is_syntax(), "{err}");
    assert!(err.to_string().contains("number out of range"), "{err}");
    assert_eq!(err.line(), Some(1));
}

#[test]
fn record_field_matrix() {
    let shape = Shape::Bare;
    assert_mismatch(
        r#"[{"distance":8.6,"constellation":"Canis Major"}]"#,
        &shape,
        "missing field `name`",
    );
    assert_mismatch(
        r#"[{"name":"Sirius","constellation":"Canis Major"}]"#,
        &shape,
        "missing field `distance`",
    );
    assert_mismatch(
        r#"[{"name":"Sirius","distance":8.6}]"#,
        &shape,
        "missing field `constellation`",
    );
    assert_mismatch(
        r#"[{"name":"Sirius","name":"Vega","distance":8.6,"constellation":""}]"#,
        &shape,
        "duplicate field `name`",
    );
    assert_mismatch(
        r#"[{"name":"Sirius","distance":"8.6","constellation":""}]"#,
        &shape,
        "invalid type",
    );
    assert_mismatch(
        r#"[{"name":42,"distance":8.6,"constellation":""}]"#,
        &shape,
        "invalid type",
    );
    assert_mismatch(
        r#"[{"name":"Sirius","distance":null,"constellation":""}]"#,
        &shape,
        "invalid type",
    );
    assert_mismatch(
        r#"[{"name":"Sirius","distance":-8.6,"constellation":""}]"#,
        &shape,
        "non-negative",
    );
    assert_mismatch(r#"["Sirius"]"#, &shape, "invalid type");
}

#[test]
fn missing_field_in_later_element_is_rejected_whole() {
    let text = r#"[
        {"name":"Sun","distance":0.000015813,"constellation":""},
        {"distance":8.6,"constellation":"Canis Major"}
    ]"#;
    let err = decode(text, &Shape::Bare).unwrap_err();
    assert_eq!(err.line(), Some(3));
}

#[test]
fn container_shape_matrix() {
    assert_mismatch("{}", &Shape::Bare, "invalid type: map");
    assert_mismatch("[]", &Shape::wrapped_default(), "invalid type: sequence");
    assert_mismatch("[]", &catalog::shape(ShapeKind::Keyed), "invalid type: sequence");
    assert_mismatch(r#"{"stars": {}}"#, &Shape::wrapped_default(), "invalid type: map");
    assert_mismatch("{}", &Shape::wrapped_default(), "missing field `stars`");
    assert_mismatch("{}", &catalog::shape(ShapeKind::Keyed), "missing slot `sun`");
}

#[test]
fn keyed_slot_matrix() {
    let shape = Shape::keyed(["sun", "sirius"]).unwrap();
    let sun = r#"{"name":"Sun","distance":0,"constellation":""}"#;
    let sirius = r#"{"name":"Sirius","distance":8.6,"constellation":"Canis Major"}"#;

    assert_mismatch(&format!(r#"{{"sun":{sun}}}"#), &shape, "missing slot `sirius`");
    assert_mismatch(
        &format!(r#"{{"sun":{sun},"sirius":{sirius},"sirius":{sirius}}}"#),
        &shape,
        "duplicate slot `sirius`",
    );
    assert_mismatch(
        &format!(r#"{{"sun":{sun},"sirius":null}}"#),
        &shape,
        "invalid type: null",
    );

    let ok = decode(&format!(r#"{{"sirius":{sirius},"sun":{sun}}}"#), &shape).unwrap();
    assert_eq!(ok.len(), 2);
}

#[test]
fn invalid_shape_is_reported_before_parsing() {
    let shape = Shape::Wrapped {
        field: String::new(),
    };
    let err = decode("not even json", &shape).unwrap_err();
    assert!(matches!(err, DecodeError::Shape(_)));
    assert_eq!(err.line(), None);
}

#[test]
fn encode_error_matrix() {
    let keyed = catalog::shape(ShapeKind::Keyed);

    let err = encode(&catalog::collection(ShapeKind::Bare), &keyed).unwrap_err();
    assert!(matches!(err, EncodeError::ShapeMismatch { .. }), "{err}");

    let mut partial = catalog::collection(ShapeKind::Keyed);
    if let Collection::Keyed(slots) = &mut partial {
        slots.shift_remove("toliman");
    }
    let err = encode(&partial, &keyed).unwrap_err();
    assert_eq!(err.to_string(), "missing slot `toliman`");

    let far = Collection::Bare(vec![Record::new("Edge", f64::INFINITY, "")]);
    assert!(matches!(
        encode(&far, &Shape::Bare),
        Err(EncodeError::InvalidDistance { .. })
    ));

    let behind = Collection::Bare(vec![Record::new("Behind", -1.0, "")]);
    assert!(matches!(
        encode(&behind, &Shape::Bare),
        Err(EncodeError::InvalidDistance { .. })
    ));
}
