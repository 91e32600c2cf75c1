use formbind::{
    DecodeError, FieldParseError, FormRecord, FormValues, UnexpectedValueError,
    UnexpectedValuesError, decode,
};

#[derive(Debug, Default, FormRecord)]
struct Scalars {
    #[form(rename = "A")]
    text: String,
    #[form(rename = "B")]
    list: Vec<String>,
    #[form(rename = "C")]
    small: i8,
    #[form(rename = "D")]
    unsigned: u64,
    #[form(rename = "E")]
    flag: bool,
    #[form(rename = "F")]
    unsupported: Vec<u32>,
}

fn decode_err(key: &str, values: Vec<&str>) -> FieldParseError {
    let mut scalars = Scalars::default();
    match decode(&FormValues::from([(key, values)]), &mut scalars) {
        Err(DecodeError::FieldParse(err)) => err,
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_text_takes_exactly_one_value() {
    let err = decode_err("A", vec!["x", "y"]);
    assert_eq!(err.field, "A");
    assert_eq!(
        err.downcast_cause::<UnexpectedValuesError>(),
        Some(&UnexpectedValuesError {
            values: vec!["x".into(), "y".into()]
        })
    );
    let err = decode_err("A", vec![]);
    assert!(err.downcast_cause::<UnexpectedValuesError>().is_some());
}

#[test]
fn test_lists_keep_every_value_in_order() {
    let mut scalars = Scalars::default();
    decode(&FormValues::from([("B", vec!["y", "x", "y"])]), &mut scalars).unwrap();
    assert_eq!(scalars.list, ["y", "x", "y"]);
    decode(&FormValues::from([("B", Vec::<&str>::new())]), &mut scalars).unwrap();
    assert!(scalars.list.is_empty());
}

#[test]
fn test_integer_literals() {
    let mut scalars = Scalars::default();
    decode(
        &FormValues::from([("C", vec!["-128"]), ("D", vec!["18446744073709551615"])]),
        &mut scalars,
    )
    .unwrap();
    assert_eq!((scalars.small, scalars.unsigned), (-128, u64::MAX));

    for (key, value) in [("C", "notanint"), ("C", "128"), ("D", "-1")] {
        let err = decode_err(key, vec![value]);
        assert_eq!(
            err.downcast_cause::<UnexpectedValueError>(),
            Some(&UnexpectedValueError {
                value: value.to_string()
            }),
            "{key}={value}"
        );
    }
}

#[test]
fn test_bool_literals() {
    let mut scalars = Scalars::default();
    decode(&FormValues::from([("E", vec!["true"])]), &mut scalars).unwrap();
    assert!(scalars.flag);
    let err = decode_err("E", vec!["on"]);
    assert!(err.downcast_cause::<UnexpectedValueError>().is_some());
}

#[test]
fn test_unsupported_field_types() {
    let mut scalars = Scalars::default();
    let err = decode(&FormValues::from([("F", vec!["1"])]), &mut scalars).unwrap_err();
    assert!(matches!(err, DecodeError::FieldType(ref e) if e.field == "F"));
}
