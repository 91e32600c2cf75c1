use formbind::{Decoder, Encoder, FormRecord, FormValues, KeyScheme};

#[derive(Debug, Default, PartialEq, FormRecord)]
struct Filter {
    q: String,
    tag: Vec<String>,
    sort: Option<Sort>,
}

#[derive(Debug, Default, PartialEq, FormRecord)]
struct Sort {
    field: String,
    desc: bool,
}

#[test]
fn test_query_string_to_record_and_back() {
    let query = "q=rust+forms&tag=a&tag=b%26c&sort.field=date&sort.desc=true";
    let values = FormValues::from_urlencoded(query.as_bytes());
    assert_eq!(values.get("tag"), Some(&["a".to_string(), "b&c".to_string()][..]));

    let mut filter = Filter::default();
    Decoder::new()
        .recurse_scheme(KeyScheme::Dotted)
        .decode(&values, &mut filter)
        .unwrap();
    assert_eq!(filter.q, "rust forms");
    assert_eq!(filter.tag, ["a", "b&c"]);
    assert_eq!(
        filter.sort,
        Some(Sort {
            field: "date".to_string(),
            desc: true,
        })
    );

    let encoded = Encoder::new()
        .recurse_scheme(KeyScheme::Dotted)
        .encode_to_string(&filter)
        .unwrap();
    assert_eq!(encoded, query);
}
