use formbind::{
    BoxError, DecodeError, FieldEncoder, FieldParser, FieldSlot, FieldView, FormField, FormRecord,
    FormValues, PositiveInteger, decode, encode,
};

/// Comma separated tags, also accepted as repeated values.
#[derive(Debug, Default, PartialEq)]
struct Tags(Vec<String>);

impl FieldParser for Tags {
    fn parse_field(&mut self, _key: &str, values: &[String]) -> Result<(), BoxError> {
        self.0 = values
            .iter()
            .flat_map(|value| value.split(','))
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();
        Ok(())
    }
}

impl FieldEncoder for Tags {
    fn encode_field(&self) -> Result<Vec<String>, BoxError> {
        Ok(vec![self.0.join(",")])
    }
}

impl FormField for Tags {
    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::Parser(self)
    }

    fn view(&self) -> FieldView<'_> {
        FieldView::Encoder(self)
    }
}

#[derive(Debug, Default, PartialEq, FormRecord)]
struct Search {
    tags: Tags,
    page: PositiveInteger,
    limit: Option<PositiveInteger>,
}

#[test]
fn test_custom_parsers_take_raw_values() {
    let values = FormValues::from([
        ("tags", vec!["a,b", "c"]),
        ("page", vec!["3"]),
        ("limit", vec!["50"]),
    ]);
    let mut search = Search::default();
    decode(&values, &mut search).unwrap();
    assert_eq!(search.tags.0, ["a", "b", "c"]);
    assert_eq!(search.page, PositiveInteger(3));
    assert_eq!(search.limit, Some(PositiveInteger(50)));
}

#[test]
fn test_custom_parser_errors_are_attributed() {
    let values = FormValues::from([("page", vec!["-1"])]);
    let mut search = Search::default();
    let err = decode(&values, &mut search).unwrap_err();
    let DecodeError::FieldParse(err) = err else {
        panic!("unexpected error: {err:?}");
    };
    assert_eq!(err.field, "page");
    assert_eq!(
        err.downcast_cause::<formbind::UnexpectedValueError>()
            .map(|cause| cause.value.as_str()),
        Some("-1")
    );
}

#[test]
fn test_custom_encoders_are_used() {
    let search = Search {
        tags: Tags(vec!["x".into(), "y".into()]),
        page: PositiveInteger(2),
        limit: None,
    };
    let values = encode(&search).unwrap();
    assert_eq!(values.first("tags"), Some("x,y"));
    assert_eq!(values.first("page"), Some("2"));
    assert!(!values.contains_key("limit"));
}
