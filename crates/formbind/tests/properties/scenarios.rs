use formbind::{Decoder, FormRecord, FormValues, KeyScheme, decode};

#[derive(Debug, Default, PartialEq, FormRecord)]
struct Inner {
    #[form(rename = "Value")]
    value: String,
}

#[derive(Debug, Default, PartialEq, FormRecord)]
struct Recursive {
    #[form(rename = "Value")]
    value: String,
    #[form(rename = "Inner")]
    inner: Inner,
}

#[derive(Debug, Default, PartialEq, FormRecord)]
struct Embedded {
    #[form(rename = "InnerValue")]
    inner_value: String,
}

#[derive(Debug, Default, PartialEq, FormRecord)]
struct Anonymous {
    #[form(flatten)]
    embedded: Embedded,
    #[form(rename = "OuterValue")]
    outer_value: String,
}

#[test]
fn test_nested_bracket_keys_reach_the_inner_record() {
    let values = FormValues::from([("Value", vec!["outer"]), ("Inner[Value]", vec!["inner"])]);
    let mut record = Recursive::default();
    Decoder::new()
        .recurse_scheme(KeyScheme::NestedBrackets)
        .decode(&values, &mut record)
        .unwrap();
    assert_eq!(
        record,
        Recursive {
            value: "outer".to_string(),
            inner: Inner {
                value: "inner".to_string()
            },
        }
    );
}

#[test]
fn test_embedded_fields_need_no_nesting_syntax() {
    let values = FormValues::from([("InnerValue", vec!["a"]), ("OuterValue", vec!["b"])]);
    let mut record = Anonymous::default();
    decode(&values, &mut record).unwrap();
    assert_eq!(record.embedded.inner_value, "a");
    assert_eq!(record.outer_value, "b");
}

#[test]
fn test_value_tree_groups_nested_keys() {
    let values = FormValues::from([
        ("Inner[Value]", vec!["1"]),
        ("Value", vec!["2"]),
        ("Inner[Other]", vec!["3"]),
    ]);
    let tree = Decoder::new()
        .recurse_scheme(KeyScheme::NestedBrackets)
        .value_tree(&values);
    assert_eq!(tree.len(), 2);
    let inner = tree.get("Inner").and_then(|node| node.children()).unwrap();
    assert_eq!(
        inner.get("Other").and_then(|node| node.leaf()).map(|leaf| leaf.key()),
        Some("Inner[Other]")
    );
}
